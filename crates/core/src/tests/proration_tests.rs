// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for subscription proration: eligibility, whole-month counting,
//! and the refund boundaries.

use crate::proration::{calculate_proration, calculate_subscription_refund};
use rust_decimal::Decimal;
use tassbok_domain::{BillingPeriod, Subscription, SubscriptionStatus};
use time::macros::{date, datetime};

const YEARLY: Decimal = Decimal::from_parts(4188, 0, 0, false, 0);
const MONTHLY: Decimal = Decimal::from_parts(399, 0, 0, false, 0);

#[test]
fn test_seven_months_used() {
    let result = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 01),
        date!(2025 - 08 - 15),
    );

    assert!(result.eligible);
    assert_eq!(result.months_used, 7);
    assert_eq!(result.amount_used, Decimal::from(2793));
    assert_eq!(result.refund_amount, Decimal::from(1395));
}

#[test]
fn test_zero_months_refunds_full_yearly_price() {
    let result = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 15),
        date!(2025 - 02 - 01),
    );

    assert_eq!(result.months_used, 0);
    assert_eq!(result.amount_used, Decimal::ZERO);
    assert_eq!(result.refund_amount, YEARLY);
}

#[test]
fn test_full_term_refunds_nothing() {
    let result = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 01),
        date!(2026 - 01 - 01),
    );

    assert_eq!(result.months_used, 12);
    assert_eq!(result.refund_amount, Decimal::ZERO);
}

#[test]
fn test_months_clamped_to_twelve_past_term() {
    let result = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 01),
        date!(2027 - 06 - 01),
    );

    assert_eq!(result.months_used, 12);
    assert_eq!(result.refund_amount, Decimal::ZERO);
}

#[test]
fn test_monthly_billing_never_eligible() {
    let result = calculate_proration(
        BillingPeriod::Monthly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 01),
        date!(2025 - 08 - 15),
    );

    assert!(!result.eligible);
    assert_eq!(result.months_used, 0);
    assert_eq!(result.refund_amount, Decimal::ZERO);
}

#[test]
fn test_partial_month_not_counted_until_anniversary() {
    // One day before the 7th anniversary: 6 months used.
    let before = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 15),
        date!(2025 - 08 - 14),
    );
    assert_eq!(before.months_used, 6);

    // On the anniversary day the 7th month is used.
    let on = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 01 - 15),
        date!(2025 - 08 - 15),
    );
    assert_eq!(on.months_used, 7);
    assert_eq!(
        before.refund_amount - on.refund_amount,
        MONTHLY
    );
}

#[test]
fn test_refund_never_negative() {
    // 10 months at 399 exceeds a discounted yearly price of 3500.
    let result = calculate_proration(
        BillingPeriod::Yearly,
        Decimal::from(3500),
        MONTHLY,
        date!(2025 - 01 - 01),
        date!(2025 - 11 - 01),
    );

    assert_eq!(result.months_used, 10);
    assert_eq!(result.amount_used, Decimal::from(3990));
    assert_eq!(result.refund_amount, Decimal::ZERO);
}

#[test]
fn test_refund_from_subscription_record() {
    let subscription = Subscription {
        subscription_id: Some(5),
        org_id: 1,
        plan: String::from("boarding_only"),
        status: SubscriptionStatus::Active,
        billing_period: BillingPeriod::Yearly,
        created_at: datetime!(2025 - 01 - 01 09:00 UTC),
        start_date: date!(2025 - 01 - 01),
    };

    let result =
        calculate_subscription_refund(&subscription, YEARLY, MONTHLY, date!(2025 - 08 - 15));

    assert_eq!(result.months_used, 7);
    assert_eq!(result.refund_amount, Decimal::from(1395));
}

#[test]
fn test_cancellation_before_start_counts_zero_months() {
    let result = calculate_proration(
        BillingPeriod::Yearly,
        YEARLY,
        MONTHLY,
        date!(2025 - 06 - 01),
        date!(2025 - 05 - 01),
    );

    assert_eq!(result.months_used, 0);
    assert_eq!(result.refund_amount, YEARLY);
}

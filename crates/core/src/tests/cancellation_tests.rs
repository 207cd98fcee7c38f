// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the per-stay cancellation fee tiers.

use crate::cancellation::{CancellationPolicy, calculate_cancellation_fee};
use rust_decimal::Decimal;
use time::macros::date;

const TOTAL: Decimal = Decimal::from_parts(1350, 0, 0, false, 0);

fn outcome_with_days_left(days_left: i64) -> crate::cancellation::CancellationOutcome {
    let start = date!(2026 - 07 - 20);
    let cancellation = start - time::Duration::days(days_left);
    calculate_cancellation_fee(start, TOTAL, &CancellationPolicy::default(), cancellation)
}

#[test]
fn test_seven_plus_days_is_free() {
    let outcome = outcome_with_days_left(10);

    assert!(outcome.can_cancel);
    assert_eq!(outcome.fee_rate, Decimal::ZERO);
    assert_eq!(outcome.cancellation_fee, Decimal::ZERO);
    assert_eq!(outcome.refund_amount, TOTAL);
}

#[test]
fn test_exactly_seven_days_is_free() {
    let outcome = outcome_with_days_left(7);

    assert_eq!(outcome.days_until_start, 7);
    assert_eq!(outcome.cancellation_fee, Decimal::ZERO);
}

#[test]
fn test_three_to_six_days_charges_half() {
    let outcome = outcome_with_days_left(5);

    assert!(outcome.can_cancel);
    assert_eq!(outcome.fee_rate, Decimal::new(5, 1));
    assert_eq!(outcome.cancellation_fee, Decimal::from(675));
    assert_eq!(outcome.refund_amount, Decimal::from(675));
}

#[test]
fn test_exactly_three_days_charges_half() {
    let outcome = outcome_with_days_left(3);

    assert_eq!(outcome.days_until_start, 3);
    assert_eq!(outcome.cancellation_fee, Decimal::from(675));
}

#[test]
fn test_under_three_days_charges_full_price() {
    let outcome = outcome_with_days_left(2);

    assert!(outcome.can_cancel);
    assert_eq!(outcome.fee_rate, Decimal::ONE);
    assert_eq!(outcome.cancellation_fee, TOTAL);
    assert_eq!(outcome.refund_amount, Decimal::ZERO);
}

#[test]
fn test_same_day_cancellation_charges_full_price() {
    let outcome = outcome_with_days_left(0);

    assert!(outcome.can_cancel);
    assert_eq!(outcome.refund_amount, Decimal::ZERO);
}

#[test]
fn test_started_stay_cannot_be_cancelled() {
    let outcome = outcome_with_days_left(-1);

    assert!(!outcome.can_cancel);
    assert_eq!(outcome.cancellation_fee, TOTAL);
    assert_eq!(outcome.refund_amount, Decimal::ZERO);
}

#[test]
fn test_fee_and_refund_sum_to_total() {
    let policy = CancellationPolicy::default();
    let total = Decimal::new(133333, 2);

    let outcome = calculate_cancellation_fee(
        date!(2026 - 07 - 20),
        total,
        &policy,
        date!(2026 - 07 - 16),
    );

    assert_eq!(outcome.cancellation_fee + outcome.refund_amount, total);
}

#[test]
fn test_custom_policy_rates_apply() {
    let policy = CancellationPolicy {
        fee_rate_7_plus_days: Decimal::new(1, 1),
        fee_rate_3_to_7_days: Decimal::new(75, 2),
        fee_rate_under_3_days: Decimal::ONE,
    };

    let outcome = calculate_cancellation_fee(
        date!(2026 - 07 - 20),
        Decimal::from(1000),
        &policy,
        date!(2026 - 07 - 01),
    );

    assert_eq!(outcome.cancellation_fee, Decimal::from(100));
    assert_eq!(outcome.refund_amount, Decimal::from(900));
}

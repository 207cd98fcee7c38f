// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pro-rata refunds for mid-term cancellation of yearly subscriptions.
//!
//! Elapsed time is counted in whole calendar months by anniversary day:
//! a month is used once its day-of-month anniversary is reached. Partial
//! months never generate fractional refunds; the refund is always a whole
//! number of monthly rates subtracted from the yearly price. The result
//! directly determines money returned to a customer, so this counting
//! must be reproduced exactly.

use rust_decimal::Decimal;
use tassbok_domain::{BillingPeriod, Subscription};
use time::Date;

/// The outcome of a proration computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProrationResult {
    /// Whole months elapsed, clamped to `0..=12`.
    pub months_used: u32,
    /// `months_used` at the equivalent monthly rate.
    pub amount_used: Decimal,
    /// Refund owed; never negative, zero once the term is consumed.
    pub refund_amount: Decimal,
    /// Whether the subscription qualifies for a pro-rata refund at all.
    /// Only yearly-billed subscriptions are eligible.
    pub eligible: bool,
}

/// Computes the pro-rata refund for a subscription cancellation.
///
/// Monthly-billed subscriptions are never eligible: service simply runs to
/// the end of the paid month, and the refund is zero.
///
/// # Arguments
///
/// * `billing_period` - How the subscription is billed
/// * `yearly_price` - The prepaid yearly amount
/// * `monthly_price` - The equivalent monthly rate used to value elapsed months
/// * `start_date` - First day of the current term
/// * `cancellation_date` - The day the cancellation takes effect
#[must_use]
pub fn calculate_proration(
    billing_period: BillingPeriod,
    yearly_price: Decimal,
    monthly_price: Decimal,
    start_date: Date,
    cancellation_date: Date,
) -> ProrationResult {
    if billing_period != BillingPeriod::Yearly {
        return ProrationResult {
            months_used: 0,
            amount_used: Decimal::ZERO,
            refund_amount: Decimal::ZERO,
            eligible: false,
        };
    }

    let months_used: u32 = whole_months_between(start_date, cancellation_date).min(12);
    let amount_used: Decimal = Decimal::from(months_used) * monthly_price;
    let refund_amount: Decimal = (yearly_price - amount_used).max(Decimal::ZERO);

    ProrationResult {
        months_used,
        amount_used,
        refund_amount,
        eligible: true,
    }
}

/// Computes the pro-rata refund for cancelling a subscription record.
///
/// Reads the billing period and term start from the record; the yearly and
/// monthly prices come from the organization's plan rate table. The record
/// itself is not mutated; executing the cancellation is the payment
/// provider integration's job.
#[must_use]
pub fn calculate_subscription_refund(
    subscription: &Subscription,
    yearly_price: Decimal,
    monthly_price: Decimal,
    cancellation_date: Date,
) -> ProrationResult {
    calculate_proration(
        subscription.billing_period,
        yearly_price,
        monthly_price,
        subscription.start_date,
        cancellation_date,
    )
}

/// Counts whole calendar months between two dates by anniversary day.
///
/// The month count only advances once the start date's day-of-month is
/// reached in the later month; a cancellation the day before an
/// anniversary does not count that month.
fn whole_months_between(start: Date, end: Date) -> u32 {
    if end < start {
        return 0;
    }

    let month_diff: i32 = (end.year() - start.year()) * 12
        + (i32::from(u8::from(end.month())) - i32::from(u8::from(start.month())));

    let months: i32 = if end.day() >= start.day() {
        month_diff
    } else {
        month_diff - 1
    };

    u32::try_from(months.max(0)).unwrap_or(0)
}

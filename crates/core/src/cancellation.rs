// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-stay cancellation fees.
//!
//! Computes the fee an owner pays when cancelling a booked stay, based on
//! the organization's tiered policy and the days remaining until the
//! stay's start date. This never touches the booking's price fields; the
//! lifecycle state machine records the cancellation, and the refund
//! process consumes this calculation out of band.

use rust_decimal::Decimal;
use tassbok_domain::round_to_minor_unit;
use time::Date;

/// An organization's tiered cancellation policy.
///
/// Each tier is the fee as a fraction of the total price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancellationPolicy {
    /// Fee rate when 7 or more days remain before the start date.
    pub fee_rate_7_plus_days: Decimal,
    /// Fee rate when 3 to 6 days remain.
    pub fee_rate_3_to_7_days: Decimal,
    /// Fee rate when fewer than 3 days remain.
    pub fee_rate_under_3_days: Decimal,
}

impl Default for CancellationPolicy {
    /// The standard policy: free with 7+ days notice, 50% with 3-6 days,
    /// full price under 3 days.
    fn default() -> Self {
        Self {
            fee_rate_7_plus_days: Decimal::ZERO,
            fee_rate_3_to_7_days: Decimal::new(5, 1),
            fee_rate_under_3_days: Decimal::ONE,
        }
    }
}

/// The outcome of a cancellation-fee computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationOutcome {
    /// The fee withheld, rounded to the minor unit.
    pub cancellation_fee: Decimal,
    /// The amount returned to the owner.
    pub refund_amount: Decimal,
    /// Days between the cancellation date and the stay's start date.
    /// Negative once the stay has started.
    pub days_until_start: i64,
    /// The policy tier rate that was applied.
    pub fee_rate: Decimal,
    /// Whether the stay can be cancelled at all. A started stay cannot.
    pub can_cancel: bool,
}

/// Computes the cancellation fee and refund for a booked stay.
///
/// # Arguments
///
/// * `start_date` - The stay's start date
/// * `total_price` - The stay's total (or estimated) price
/// * `policy` - The organization's cancellation policy
/// * `cancellation_date` - The day the cancellation is requested
#[must_use]
pub fn calculate_cancellation_fee(
    start_date: Date,
    total_price: Decimal,
    policy: &CancellationPolicy,
    cancellation_date: Date,
) -> CancellationOutcome {
    let days_until_start: i64 = (start_date - cancellation_date).whole_days();

    if days_until_start < 0 {
        return CancellationOutcome {
            cancellation_fee: round_to_minor_unit(total_price),
            refund_amount: Decimal::ZERO,
            days_until_start,
            fee_rate: Decimal::ONE,
            can_cancel: false,
        };
    }

    let fee_rate: Decimal = if days_until_start >= 7 {
        policy.fee_rate_7_plus_days
    } else if days_until_start >= 3 {
        policy.fee_rate_3_to_7_days
    } else {
        policy.fee_rate_under_3_days
    };

    let cancellation_fee: Decimal = round_to_minor_unit(total_price * fee_rate);
    let refund_amount: Decimal = round_to_minor_unit(total_price - cancellation_fee);

    CancellationOutcome {
        cancellation_fee,
        refund_amount,
        days_until_start,
        fee_rate,
        can_cancel: true,
    }
}

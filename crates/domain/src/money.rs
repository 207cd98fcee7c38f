// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monetary rounding primitives.
//!
//! All prices flow through the engine as unrounded `Decimal` values.
//! Rounding happens exactly once, at the final VAT-inclusive total, to
//! avoid cumulative drift across many line items.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the currency minor unit.
pub const MINOR_UNIT_DP: u32 = 2;

/// Rounds a monetary amount to the currency minor unit, half-up.
///
/// Half-up means midpoints round away from zero: `1.005` becomes `1.01`.
#[must_use]
pub fn round_to_minor_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero)
}

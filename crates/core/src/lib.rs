// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod cancellation;
mod command;
mod error;
mod extras;
mod pricing;
mod proration;
mod state;
mod tariff;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use cancellation::{CancellationOutcome, CancellationPolicy, calculate_cancellation_fee};
pub use command::Command;
pub use error::CoreError;
pub use extras::{ExtraPricing, price_extra_services};
pub use pricing::{PriceBreakdown, PriceLine, PricingContext, calculate_price};
pub use proration::{ProrationResult, calculate_proration, calculate_subscription_refund};
pub use state::TransitionResult;
pub use tariff::resolve_rate;

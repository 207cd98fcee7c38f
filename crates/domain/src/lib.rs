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

mod booking;
mod calendar;
mod error;
mod extras;
mod money;
mod size;
mod subscription;
mod tariff;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingStatus};
pub use calendar::{PricingCalendar, Season, SpecialDate, SpecialDateCategory, is_weekend_night};
pub use error::DomainError;
pub use extras::{ExtraService, ExtraServiceUnit, SelectedExtraService};
pub use money::{MINOR_UNIT_DP, round_to_minor_unit};
pub use size::{
    DogSizeClass, SizeThresholds, additional_dog_area_m2, required_group_area_m2,
    required_indoor_area_m2,
};
pub use subscription::{BillingPeriod, Subscription, SubscriptionStatus};
pub use tariff::{RateUnit, ServiceCategory, TariffRate};
pub use validation::{
    validate_date_range, validate_extra_service, validate_tariff_rates, validate_vat_rate,
};

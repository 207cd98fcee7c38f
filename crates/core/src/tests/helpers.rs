// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::pricing::PricingContext;
use rust_decimal::Decimal;
use tassbok_audit::{Actor, Cause};
use tassbok_domain::{
    Booking, DogSizeClass, ExtraService, ExtraServiceUnit, PricingCalendar, RateUnit,
    ServiceCategory, SizeThresholds, TariffRate,
};
use time::macros::date;

pub const ORG_ID: i64 = 1;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-123"), String::from("staff"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Front desk request"))
}

/// A boarding rate table: 400/night for medium dogs plus a 300/night
/// size-agnostic fallback. VAT 0%, prices exclusive.
pub fn boarding_rates() -> Vec<TariffRate> {
    vec![
        TariffRate::with_id(
            1,
            ORG_ID,
            ServiceCategory::Boarding,
            Some(DogSizeClass::Medium),
            Decimal::from(400),
            RateUnit::PerNight,
            Decimal::ZERO,
            Decimal::ZERO,
            false,
            true,
        ),
        TariffRate::with_id(
            2,
            ORG_ID,
            ServiceCategory::Boarding,
            None,
            Decimal::from(300),
            RateUnit::PerNight,
            Decimal::ZERO,
            Decimal::ZERO,
            false,
            true,
        ),
    ]
}

/// A small extra-service catalog: per-night bed linen, per-use extra
/// walks, and a per-stay arrival bath.
pub fn catalog() -> Vec<ExtraService> {
    vec![
        ExtraService::new(
            1,
            ORG_ID,
            String::from("Bed linen"),
            ExtraServiceUnit::PerNight,
            Decimal::from(50),
        ),
        ExtraService::new(
            2,
            ORG_ID,
            String::from("Extra walk"),
            ExtraServiceUnit::PerUse,
            Decimal::from(80),
        ),
        ExtraService::new(
            3,
            ORG_ID,
            String::from("Arrival bath"),
            ExtraServiceUnit::PerStay,
            Decimal::from(250),
        ),
    ]
}

/// A three-night boarding booking for a medium (40 cm) dog in July 2026.
pub fn make_booking(extra_service_ids: Vec<i64>) -> Booking {
    Booking::new(
        ORG_ID,
        10,
        100,
        ServiceCategory::Boarding,
        date!(2026 - 07 - 06),
        date!(2026 - 07 - 09),
        extra_service_ids,
    )
    .unwrap()
}

/// Builds a pricing context over the given configuration for a 40 cm dog.
pub fn make_context<'a>(
    rates: &'a [TariffRate],
    calendar: &'a PricingCalendar,
    catalog: &'a [ExtraService],
) -> PricingContext<'a> {
    PricingContext {
        rates,
        thresholds: SizeThresholds::default(),
        calendar,
        catalog,
        dog_height_cm: Some(40),
        attendance_days: None,
    }
}

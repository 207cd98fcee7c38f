// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for tariff resolution: size classification, fallback order, and
//! the failure modes that must never default to a guessed price.

use crate::error::CoreError;
use crate::tariff::resolve_rate;
use rust_decimal::Decimal;
use tassbok_domain::{
    DogSizeClass, DomainError, RateUnit, ServiceCategory, SizeThresholds, TariffRate,
};

use super::helpers::{ORG_ID, boarding_rates};

#[test]
fn test_exact_size_class_match_preferred_over_fallback() {
    let rates = boarding_rates();

    // 40 cm = medium; the 400/night medium rate must win over the
    // 300/night size-agnostic rate.
    let rate = resolve_rate(
        &rates,
        ServiceCategory::Boarding,
        &SizeThresholds::default(),
        Some(40),
    )
    .unwrap();

    assert_eq!(rate.size_class, Some(DogSizeClass::Medium));
    assert_eq!(rate.price_per_unit, Decimal::from(400));
}

#[test]
fn test_fallback_to_size_agnostic_rate() {
    let rates = boarding_rates();

    // 70 cm = xlarge; no xlarge rate exists, so the fallback applies.
    let rate = resolve_rate(
        &rates,
        ServiceCategory::Boarding,
        &SizeThresholds::default(),
        Some(70),
    )
    .unwrap();

    assert_eq!(rate.size_class, None);
    assert_eq!(rate.price_per_unit, Decimal::from(300));
}

#[test]
fn test_no_rate_for_category_fails() {
    let rates = boarding_rates();

    let result = resolve_rate(
        &rates,
        ServiceCategory::Grooming,
        &SizeThresholds::default(),
        Some(40),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoApplicableRate {
            service_category: ServiceCategory::Grooming,
            size_class: DogSizeClass::Medium,
        }))
    ));
}

#[test]
fn test_missing_height_fails_instead_of_guessing() {
    let rates = boarding_rates();

    let result = resolve_rate(
        &rates,
        ServiceCategory::Boarding,
        &SizeThresholds::default(),
        None,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::MissingDogAttribute {
                attribute: "height_cm"
            }
        ))
    ));
}

#[test]
fn test_zero_height_fails_instead_of_guessing() {
    let rates = boarding_rates();

    let result = resolve_rate(
        &rates,
        ServiceCategory::Boarding,
        &SizeThresholds::default(),
        Some(0),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::MissingDogAttribute { .. }
        ))
    ));
}

#[test]
fn test_inactive_rates_are_ignored() {
    let mut rates = boarding_rates();
    rates[0].is_active = false;

    let rate = resolve_rate(
        &rates,
        ServiceCategory::Boarding,
        &SizeThresholds::default(),
        Some(40),
    )
    .unwrap();

    // The medium rate is retired; resolution falls back.
    assert_eq!(rate.size_class, None);
}

#[test]
fn test_duplicate_active_rates_are_ambiguous() {
    let mut rates = boarding_rates();
    rates.push(TariffRate::with_id(
        3,
        ORG_ID,
        ServiceCategory::Boarding,
        Some(DogSizeClass::Medium),
        Decimal::from(450),
        RateUnit::PerNight,
        Decimal::ZERO,
        Decimal::ZERO,
        false,
        true,
    ));

    let result = resolve_rate(
        &rates,
        ServiceCategory::Boarding,
        &SizeThresholds::default(),
        Some(40),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::AmbiguousRate {
            service_category: ServiceCategory::Boarding,
            size_class: Some(DogSizeClass::Medium),
        }))
    ));
}

#[test]
fn test_custom_thresholds_shift_classification() {
    let rates = boarding_rates();
    let thresholds = SizeThresholds {
        mini_max_cm: 20,
        small_max_cm: 30,
        medium_max_cm: 45,
        large_max_cm: 60,
    };

    // 50 cm is large under these thresholds; no large rate, so fallback.
    let rate = resolve_rate(&rates, ServiceCategory::Boarding, &thresholds, Some(50)).unwrap();
    assert_eq!(rate.size_class, None);

    // 44 cm is still medium.
    let rate = resolve_rate(&rates, ServiceCategory::Boarding, &thresholds, Some(44)).unwrap();
    assert_eq!(rate.size_class, Some(DogSizeClass::Medium));
}

#[test]
fn test_invalid_thresholds_rejected() {
    let rates = boarding_rates();
    let thresholds = SizeThresholds {
        mini_max_cm: 50,
        small_max_cm: 34,
        medium_max_cm: 54,
        large_max_cm: 65,
    };

    let result = resolve_rate(&rates, ServiceCategory::Boarding, &thresholds, Some(40));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidThresholds { .. }
        ))
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DogSizeClass, DomainError, ExtraService, ExtraServiceUnit, RateUnit, ServiceCategory,
    TariffRate, validate_date_range, validate_extra_service, validate_tariff_rates,
    validate_vat_rate,
};
use rust_decimal::Decimal;
use time::macros::date;

fn boarding_rate(size_class: Option<DogSizeClass>) -> TariffRate {
    TariffRate::new(
        1,
        ServiceCategory::Boarding,
        size_class,
        Decimal::from(400),
        RateUnit::PerNight,
        Decimal::from(25),
        false,
    )
}

#[test]
fn test_date_range_valid() {
    assert!(validate_date_range(date!(2026 - 07 - 01), date!(2026 - 07 - 02)).is_ok());
}

#[test]
fn test_date_range_equal_dates_rejected() {
    let result = validate_date_range(date!(2026 - 07 - 01), date!(2026 - 07 - 01));
    assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
}

#[test]
fn test_tariff_rates_unique_per_size_class_accepted() {
    let rates = vec![
        boarding_rate(None),
        boarding_rate(Some(DogSizeClass::Small)),
        boarding_rate(Some(DogSizeClass::Medium)),
        boarding_rate(Some(DogSizeClass::Large)),
    ];

    assert!(validate_tariff_rates(&rates).is_ok());
}

#[test]
fn test_duplicate_active_size_class_rate_rejected() {
    let rates = vec![
        boarding_rate(Some(DogSizeClass::Medium)),
        boarding_rate(Some(DogSizeClass::Medium)),
    ];

    let result = validate_tariff_rates(&rates);
    assert!(matches!(
        result,
        Err(DomainError::AmbiguousRate {
            service_category: ServiceCategory::Boarding,
            size_class: Some(DogSizeClass::Medium),
        })
    ));
}

#[test]
fn test_duplicate_size_agnostic_rate_rejected() {
    let rates = vec![boarding_rate(None), boarding_rate(None)];

    let result = validate_tariff_rates(&rates);
    assert!(matches!(
        result,
        Err(DomainError::AmbiguousRate {
            size_class: None,
            ..
        })
    ));
}

#[test]
fn test_inactive_duplicate_rate_tolerated() {
    let mut retired = boarding_rate(Some(DogSizeClass::Medium));
    retired.is_active = false;
    let rates = vec![retired, boarding_rate(Some(DogSizeClass::Medium))];

    assert!(validate_tariff_rates(&rates).is_ok());
}

#[test]
fn test_same_size_class_different_categories_tolerated() {
    let mut daycare = boarding_rate(Some(DogSizeClass::Medium));
    daycare.service_category = ServiceCategory::Daycare;
    daycare.unit = RateUnit::PerDay;
    let rates = vec![daycare, boarding_rate(Some(DogSizeClass::Medium))];

    assert!(validate_tariff_rates(&rates).is_ok());
}

#[test]
fn test_same_rates_different_orgs_tolerated() {
    let mut other_org = boarding_rate(None);
    other_org.org_id = 2;
    let rates = vec![other_org, boarding_rate(None)];

    assert!(validate_tariff_rates(&rates).is_ok());
}

#[test]
fn test_extra_service_empty_label_rejected() {
    let service = ExtraService::new(
        1,
        1,
        String::from("  "),
        ExtraServiceUnit::PerStay,
        Decimal::from(50),
    );

    assert!(matches!(
        validate_extra_service(&service),
        Err(DomainError::EmptyLabel)
    ));
}

#[test]
fn test_extra_service_negative_price_rejected() {
    let service = ExtraService::new(
        1,
        1,
        String::from("Bed linen"),
        ExtraServiceUnit::PerNight,
        Decimal::from(-50),
    );

    assert!(matches!(
        validate_extra_service(&service),
        Err(DomainError::NegativePrice { .. })
    ));
}

#[test]
fn test_vat_rate_bounds() {
    assert!(validate_vat_rate(Decimal::ZERO).is_ok());
    assert!(validate_vat_rate(Decimal::from(25)).is_ok());
    assert!(validate_vat_rate(Decimal::from(100)).is_ok());
    assert!(validate_vat_rate(Decimal::from(-1)).is_err());
    assert!(validate_vat_rate(Decimal::from(101)).is_err());
}

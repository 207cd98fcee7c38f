// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::extras::ExtraService;
use crate::size::DogSizeClass;
use crate::tariff::{ServiceCategory, TariffRate};
use rust_decimal::Decimal;
use std::collections::HashSet;
use time::Date;

/// Validates that a booking date range is non-empty.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if `end_date` is not strictly
/// after `start_date`.
pub fn validate_date_range(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if end_date > start_date {
        Ok(())
    } else {
        Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        })
    }
}

/// Validates that a set of tariff rates has no ambiguous active match.
///
/// For a given organization and service category, at most one active
/// size-agnostic rate and at most one active rate per distinct size class
/// may exist.
///
/// # Errors
///
/// Returns `DomainError::AmbiguousRate` naming the first conflicting
/// `(category, size class)` pair.
pub fn validate_tariff_rates(rates: &[TariffRate]) -> Result<(), DomainError> {
    let mut seen: HashSet<(i64, ServiceCategory, Option<DogSizeClass>)> = HashSet::new();

    for rate in rates.iter().filter(|rate| rate.is_active) {
        let key = (rate.org_id, rate.service_category, rate.size_class);
        if !seen.insert(key) {
            return Err(DomainError::AmbiguousRate {
                service_category: rate.service_category,
                size_class: rate.size_class,
            });
        }
    }

    Ok(())
}

/// Validates a catalog extra service entry.
///
/// # Errors
///
/// Returns an error if the label is empty or the price is negative.
pub fn validate_extra_service(service: &ExtraService) -> Result<(), DomainError> {
    if service.label.trim().is_empty() {
        return Err(DomainError::EmptyLabel);
    }
    if service.price_per_unit < Decimal::ZERO {
        return Err(DomainError::NegativePrice {
            label: service.label.clone(),
        });
    }
    Ok(())
}

/// Validates a VAT percentage.
///
/// # Errors
///
/// Returns `DomainError::InvalidVatRate` if the rate is outside `0..=100`.
pub fn validate_vat_rate(vat_rate: Decimal) -> Result<(), DomainError> {
    if vat_rate >= Decimal::ZERO && vat_rate <= Decimal::ONE_HUNDRED {
        Ok(())
    } else {
        Err(DomainError::InvalidVatRate { vat_rate })
    }
}

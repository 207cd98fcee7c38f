// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tariff resolution.
//!
//! Maps a dog's shoulder height to a size class and selects the applicable
//! rate for a service category: an exact size-class rate wins, otherwise
//! the size-agnostic rate for that category, otherwise resolution fails.

use crate::error::CoreError;
use tassbok_domain::{DogSizeClass, DomainError, ServiceCategory, SizeThresholds, TariffRate};

/// Resolves the applicable tariff rate for a dog and service category.
///
/// Only active rates are considered. Resolution never guesses: a missing
/// or zero height fails rather than silently mispricing the stay.
///
/// # Arguments
///
/// * `rates` - The organization's rate table
/// * `service_category` - The category of care being priced
/// * `thresholds` - The organization's size classification thresholds
/// * `dog_height_cm` - The dog's shoulder height in cm
///
/// # Returns
///
/// The matching rate, preferring an exact size-class match over the
/// size-agnostic fallback.
///
/// # Errors
///
/// Returns an error if:
/// - The height is missing or zero (`MissingDogAttribute`)
/// - The thresholds are not strictly increasing (`InvalidThresholds`)
/// - More than one active rate matches (`AmbiguousRate`)
/// - No rate matches and no fallback exists (`NoApplicableRate`)
pub fn resolve_rate<'a>(
    rates: &'a [TariffRate],
    service_category: ServiceCategory,
    thresholds: &SizeThresholds,
    dog_height_cm: Option<u16>,
) -> Result<&'a TariffRate, CoreError> {
    let height_cm: u16 = match dog_height_cm {
        Some(height) if height > 0 => height,
        _ => {
            return Err(DomainError::MissingDogAttribute {
                attribute: "height_cm",
            }
            .into());
        }
    };

    thresholds.validate()?;
    let size_class: DogSizeClass = thresholds.classify(height_cm);

    let candidates = || {
        rates
            .iter()
            .filter(move |rate| rate.is_active && rate.service_category == service_category)
    };

    if let Some(exact) = unique_match(candidates(), Some(size_class), service_category)? {
        return Ok(exact);
    }

    if let Some(fallback) = unique_match(candidates(), None, service_category)? {
        return Ok(fallback);
    }

    Err(DomainError::NoApplicableRate {
        service_category,
        size_class,
    }
    .into())
}

/// Finds the single rate with the given size-class filter, if any.
fn unique_match<'a>(
    candidates: impl Iterator<Item = &'a TariffRate>,
    size_class: Option<DogSizeClass>,
    service_category: ServiceCategory,
) -> Result<Option<&'a TariffRate>, CoreError> {
    let mut found: Option<&TariffRate> = None;

    for rate in candidates.filter(|rate| rate.size_class == size_class) {
        if found.is_some() {
            return Err(DomainError::AmbiguousRate {
                service_category,
                size_class,
            }
            .into());
        }
        found = Some(rate);
    }

    Ok(found)
}

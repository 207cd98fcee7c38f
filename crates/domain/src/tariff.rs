// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::size::DogSizeClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of care a rate or booking applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Boarding,
    Daycare,
    Grooming,
}

impl ServiceCategory {
    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boarding => "boarding",
            Self::Daycare => "daycare",
            Self::Grooming => "grooming",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boarding" => Ok(Self::Boarding),
            "daycare" => Ok(Self::Daycare),
            "grooming" => Ok(Self::Grooming),
            _ => Err(DomainError::InvalidServiceCategory(s.to_string())),
        }
    }
}

/// The billing unit of a tariff rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// Billed per night of boarding; the date range is authoritative.
    PerNight,
    /// Billed per attended day; the attendance count is supplied externally.
    PerDay,
    /// A single flat amount regardless of duration.
    Flat,
}

impl RateUnit {
    /// Returns the string representation of this rate unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerNight => "per_night",
            Self::PerDay => "per_day",
            Self::Flat => "flat",
        }
    }
}

impl std::fmt::Display for RateUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RateUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_night" => Ok(Self::PerNight),
            "per_day" => Ok(Self::PerDay),
            "flat" => Ok(Self::Flat),
            _ => Err(DomainError::InvalidRateUnit(s.to_string())),
        }
    }
}

/// A base rate owned by an organization.
///
/// At most one active size-agnostic rate and at most one active rate per
/// distinct size class may exist for a given category (no ambiguous match);
/// `crate::validate_tariff_rates` enforces this. Rates are created and
/// edited by org staff and are read-only to the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRate {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the rate has not been persisted yet.
    pub rate_id: Option<i64>,
    /// The owning organization.
    pub org_id: i64,
    /// The service category this rate prices.
    pub service_category: ServiceCategory,
    /// Size class filter; `None` applies to all sizes.
    pub size_class: Option<DogSizeClass>,
    /// Price per billing unit, in currency minor-unit precision.
    pub price_per_unit: Decimal,
    /// The billing unit.
    pub unit: RateUnit,
    /// Flat surcharge added to weekend nights (per-night rates only).
    pub weekend_surcharge: Decimal,
    /// VAT percentage (e.g. `25`).
    pub vat_rate: Decimal,
    /// Whether stored prices already include VAT.
    pub vat_included: bool,
    /// Whether this rate is currently in force.
    pub is_active: bool,
}

impl TariffRate {
    /// Creates a new `TariffRate` without a persisted ID.
    #[must_use]
    pub const fn new(
        org_id: i64,
        service_category: ServiceCategory,
        size_class: Option<DogSizeClass>,
        price_per_unit: Decimal,
        unit: RateUnit,
        vat_rate: Decimal,
        vat_included: bool,
    ) -> Self {
        Self {
            rate_id: None,
            org_id,
            service_category,
            size_class,
            price_per_unit,
            unit,
            weekend_surcharge: Decimal::ZERO,
            vat_rate,
            vat_included,
            is_active: true,
        }
    }

    /// Creates a `TariffRate` with an existing persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        rate_id: i64,
        org_id: i64,
        service_category: ServiceCategory,
        size_class: Option<DogSizeClass>,
        price_per_unit: Decimal,
        unit: RateUnit,
        weekend_surcharge: Decimal,
        vat_rate: Decimal,
        vat_included: bool,
        is_active: bool,
    ) -> Self {
        Self {
            rate_id: Some(rate_id),
            org_id,
            service_category,
            size_class,
            price_per_unit,
            unit,
            weekend_surcharge,
            vat_rate,
            vat_included,
            is_active,
        }
    }

    /// Returns a copy of this rate with the given weekend surcharge.
    #[must_use]
    pub const fn with_weekend_surcharge(mut self, weekend_surcharge: Decimal) -> Self {
        self.weekend_surcharge = weekend_surcharge;
        self
    }
}

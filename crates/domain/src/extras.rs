// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::tariff::ServiceCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The billing unit of a priced add-on service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraServiceUnit {
    /// Billed once per stay; any quantity on the selection is ignored.
    PerStay,
    /// Billed once per night; the night count is authoritative.
    PerNight,
    /// Billed per use; the selection must carry a positive quantity.
    PerUse,
}

impl ExtraServiceUnit {
    /// Returns the string representation of this unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerStay => "per_stay",
            Self::PerNight => "per_night",
            Self::PerUse => "per_use",
        }
    }
}

impl std::fmt::Display for ExtraServiceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExtraServiceUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_stay" => Ok(Self::PerStay),
            "per_night" => Ok(Self::PerNight),
            "per_use" => Ok(Self::PerUse),
            _ => Err(DomainError::InvalidExtraServiceUnit(s.to_string())),
        }
    }
}

/// A priced add-on owned by an organization (e.g. bed linen, extra walks).
///
/// Bookings reference services by id, never by value, so later price edits
/// do not retroactively alter invoices that were already finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraService {
    /// The canonical numeric identifier.
    pub service_id: i64,
    /// The owning organization.
    pub org_id: i64,
    /// Display label used on invoices.
    pub label: String,
    /// The billing unit.
    pub unit: ExtraServiceUnit,
    /// Price per billing unit.
    pub price_per_unit: Decimal,
    /// Whether this service can currently be selected and billed.
    pub is_active: bool,
    /// Categories this service may be billed under; empty = all categories.
    pub applicable_categories: Vec<ServiceCategory>,
}

impl ExtraService {
    /// Creates a new active `ExtraService` applicable to all categories.
    #[must_use]
    pub const fn new(
        service_id: i64,
        org_id: i64,
        label: String,
        unit: ExtraServiceUnit,
        price_per_unit: Decimal,
    ) -> Self {
        Self {
            service_id,
            org_id,
            label,
            unit,
            price_per_unit,
            is_active: true,
            applicable_categories: Vec::new(),
        }
    }

    /// Returns whether this service may be billed under the given category.
    #[must_use]
    pub fn applies_to(&self, category: ServiceCategory) -> bool {
        self.applicable_categories.is_empty() || self.applicable_categories.contains(&category)
    }
}

/// A transient selection of an extra service on a booking.
///
/// `quantity` is required for per-use services, implicitly 1 for per-stay
/// services, and implicitly the night count for per-night services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedExtraService {
    /// The id of the selected catalog service.
    pub service_id: i64,
    /// Number of uses, for per-use services.
    pub quantity: Option<i64>,
}

impl SelectedExtraService {
    /// Creates a selection without an explicit quantity.
    #[must_use]
    pub const fn new(service_id: i64) -> Self {
        Self {
            service_id,
            quantity: None,
        }
    }

    /// Creates a selection with an explicit quantity.
    #[must_use]
    pub const fn with_quantity(service_id: i64, quantity: i64) -> Self {
        Self {
            service_id,
            quantity: Some(quantity),
        }
    }
}

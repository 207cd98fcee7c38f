// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Extra-service pricing.
//!
//! Produces one line item per billable selection, ordered by catalog
//! position (not selection order) for a deterministic invoice layout.
//! Selections that reference an inactive, missing, or category-inapplicable
//! service are silently dropped and reported in a side list, so that
//! deactivating a service mid-stay never blocks checkout.

use crate::error::CoreError;
use crate::pricing::PriceLine;
use rust_decimal::Decimal;
use tassbok_domain::{
    DomainError, ExtraService, ExtraServiceUnit, SelectedExtraService, ServiceCategory,
};

/// The result of pricing a set of extra-service selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraPricing {
    /// Line items in catalog order.
    pub lines: Vec<PriceLine>,
    /// Sum of all line amounts, unrounded.
    pub subtotal: Decimal,
    /// Ids of selections that could not be billed, in selection order.
    pub dropped_service_ids: Vec<i64>,
}

/// Prices a set of extra-service selections against a catalog.
///
/// # Arguments
///
/// * `selections` - The services selected for the stay
/// * `catalog` - The organization's extra-service catalog
/// * `service_category` - The category of the booking being priced
/// * `nights` - Night count of the stay (authoritative for per-night units)
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` if a per-use selection carries a
/// missing, zero, or negative quantity. Unbillable selections are not
/// errors; they surface in `dropped_service_ids`.
pub fn price_extra_services(
    selections: &[SelectedExtraService],
    catalog: &[ExtraService],
    service_category: ServiceCategory,
    nights: u32,
) -> Result<ExtraPricing, CoreError> {
    let mut lines: Vec<PriceLine> = Vec::new();
    let mut subtotal: Decimal = Decimal::ZERO;
    let mut dropped_service_ids: Vec<i64> = Vec::new();

    for selection in selections {
        let billable = catalog.iter().find(|service| {
            service.service_id == selection.service_id
                && service.is_active
                && service.applies_to(service_category)
        });

        if billable.is_none() {
            tracing::warn!(
                service_id = selection.service_id,
                "dropping unbillable extra-service selection"
            );
            dropped_service_ids.push(selection.service_id);
        }
    }

    // Catalog order, not selection order, for deterministic invoice layout.
    for service in catalog {
        let Some(selection) = selections
            .iter()
            .find(|selection| selection.service_id == service.service_id)
        else {
            continue;
        };

        if !service.is_active || !service.applies_to(service_category) {
            continue;
        }

        let line: PriceLine = price_line(service, selection, nights)?;
        subtotal += line.amount;
        lines.push(line);
    }

    Ok(ExtraPricing {
        lines,
        subtotal,
        dropped_service_ids,
    })
}

/// Computes the line item for a single billable selection.
fn price_line(
    service: &ExtraService,
    selection: &SelectedExtraService,
    nights: u32,
) -> Result<PriceLine, CoreError> {
    let quantity: Decimal = match service.unit {
        // Billed once per stay; any quantity on the selection is ignored.
        ExtraServiceUnit::PerStay => Decimal::ONE,
        // The night count is authoritative; the quantity field is ignored.
        ExtraServiceUnit::PerNight => Decimal::from(nights),
        ExtraServiceUnit::PerUse => {
            let uses: i64 = selection.quantity.unwrap_or(0);
            if uses <= 0 {
                return Err(DomainError::InvalidQuantity {
                    service_label: service.label.clone(),
                    quantity: uses,
                }
                .into());
            }
            Decimal::from(uses)
        }
    };

    let amount: Decimal = service.price_per_unit * quantity;

    Ok(PriceLine {
        label: service.label.clone(),
        unit_price: service.price_per_unit,
        quantity,
        amount,
    })
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The price calculation engine.
//!
//! Composes tariff resolution and extra-service pricing over a date range
//! into a full price breakdown. The same function serves the booking-time
//! estimate and the check-out settlement; identical inputs always produce
//! identical output, so the two results are independently auditable.
//!
//! All intermediate amounts stay unrounded. Rounding happens exactly once,
//! on the final VAT-inclusive total.

use crate::error::CoreError;
use crate::extras::{ExtraPricing, price_extra_services};
use crate::tariff::resolve_rate;
use rust_decimal::Decimal;
use tassbok_domain::{
    DomainError, ExtraService, PricingCalendar, RateUnit, SelectedExtraService, ServiceCategory,
    SizeThresholds, TariffRate, is_weekend_night, round_to_minor_unit, validate_date_range,
    validate_vat_rate,
};
use time::Date;

/// Everything the engine needs to price a stay, supplied by the caller.
///
/// The engine never queries a store itself; rate tables, catalogs and dog
/// attributes arrive as values (read-only snapshots of org configuration).
#[derive(Debug, Clone, Copy)]
pub struct PricingContext<'a> {
    /// The organization's tariff rate table.
    pub rates: &'a [TariffRate],
    /// The organization's size classification thresholds.
    pub thresholds: SizeThresholds,
    /// The organization's date-dependent pricing configuration.
    pub calendar: &'a PricingCalendar,
    /// The organization's extra-service catalog.
    pub catalog: &'a [ExtraService],
    /// The dog's shoulder height in cm.
    pub dog_height_cm: Option<u16>,
    /// Attended day count for per-day rates, counted externally.
    /// Falls back to the date-range day count when absent.
    pub attendance_days: Option<u32>,
}

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    /// Invoice label.
    pub label: String,
    /// Price per billing unit, unrounded.
    pub unit_price: Decimal,
    /// Number of billed units.
    pub quantity: Decimal,
    /// `unit_price * quantity`, unrounded.
    pub amount: Decimal,
}

/// The output of a price calculation.
///
/// Never persisted directly; either snapshotted into the booking's price
/// fields or discarded (estimate-only calls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Ordered line items: accommodation first, then calendar adjustments,
    /// then extra services in catalog order.
    pub lines: Vec<PriceLine>,
    /// Sum of all lines excluding VAT, unrounded.
    pub subtotal_excl_vat: Decimal,
    /// VAT on the subtotal, unrounded.
    pub vat_amount: Decimal,
    /// Final total including VAT, rounded half-up to the minor unit.
    pub total_incl_vat: Decimal,
    /// Selected extra services that could not be billed (inactive, missing,
    /// or inapplicable), reported so staff can be warned.
    pub dropped_service_ids: Vec<i64>,
}

/// Computes the full price breakdown for a stay.
///
/// # Arguments
///
/// * `ctx` - Org configuration and dog attributes
/// * `service_category` - The category of care being priced
/// * `start_date` - First day of the stay
/// * `end_date` - Day of departure (exclusive of the final night)
/// * `selections` - The extra services to bill
///
/// # Errors
///
/// Propagates `NoApplicableRate`, `MissingDogAttribute` and
/// `InvalidQuantity` from the sub-components, plus date-range and VAT-rate
/// validation failures. All are configuration/data errors; none may be
/// defaulted to a zero price.
pub fn calculate_price(
    ctx: &PricingContext<'_>,
    service_category: ServiceCategory,
    start_date: Date,
    end_date: Date,
    selections: &[SelectedExtraService],
) -> Result<PriceBreakdown, CoreError> {
    validate_date_range(start_date, end_date)?;

    let days: i64 = (end_date - start_date).whole_days().max(1);
    let nights: u32 = u32::try_from(days).unwrap_or(1);

    let rate: &TariffRate = resolve_rate(
        ctx.rates,
        service_category,
        &ctx.thresholds,
        ctx.dog_height_cm,
    )?;
    validate_vat_rate(rate.vat_rate)?;

    let mut lines: Vec<PriceLine> =
        accommodation_lines(rate, service_category, ctx.calendar, start_date, nights, ctx)?;
    let accommodation_total: Decimal = lines.iter().map(|line| line.amount).sum();

    let extras: ExtraPricing =
        price_extra_services(selections, ctx.catalog, service_category, nights)?;
    lines.extend(extras.lines);

    let stored_total: Decimal = accommodation_total + extras.subtotal;

    // Stored prices are either VAT-inclusive (back-compute the net) or
    // net (add VAT on top); `vat_included` on the rate decides.
    let hundred: Decimal = Decimal::ONE_HUNDRED;
    let (subtotal_excl_vat, vat_amount, total_incl_vat) = if rate.vat_included {
        let vat_amount: Decimal = stored_total * rate.vat_rate / (hundred + rate.vat_rate);
        (stored_total - vat_amount, vat_amount, stored_total)
    } else {
        let vat_amount: Decimal = stored_total * rate.vat_rate / hundred;
        (stored_total, vat_amount, stored_total + vat_amount)
    };

    Ok(PriceBreakdown {
        lines,
        subtotal_excl_vat,
        vat_amount,
        total_incl_vat: round_to_minor_unit(total_incl_vat),
        dropped_service_ids: extras.dropped_service_ids,
    })
}

/// Builds the accommodation lines: the base amount plus any calendar
/// adjustments (weekend surcharges, special dates, season multipliers).
fn accommodation_lines(
    rate: &TariffRate,
    service_category: ServiceCategory,
    calendar: &PricingCalendar,
    start_date: Date,
    nights: u32,
    ctx: &PricingContext<'_>,
) -> Result<Vec<PriceLine>, CoreError> {
    match rate.unit {
        RateUnit::PerNight => per_night_lines(rate, service_category, calendar, start_date, nights),
        RateUnit::PerDay => {
            // Attendance is counted externally; date range is the fallback.
            let units: u32 = ctx.attendance_days.unwrap_or(nights);
            let quantity: Decimal = Decimal::from(units);
            Ok(vec![PriceLine {
                label: format!("{} ({})", category_label(service_category), day_count(units)),
                unit_price: rate.price_per_unit,
                quantity,
                amount: rate.price_per_unit * quantity,
            }])
        }
        RateUnit::Flat => Ok(vec![PriceLine {
            label: category_label(service_category).to_string(),
            unit_price: rate.price_per_unit,
            quantity: Decimal::ONE,
            amount: rate.price_per_unit,
        }]),
    }
}

/// Walks the stay night by night, applying calendar adjustments.
///
/// Priority per night: a special date's surcharge wins over the weekend
/// surcharge; a season multiplier applies on top of either, always.
fn per_night_lines(
    rate: &TariffRate,
    service_category: ServiceCategory,
    calendar: &PricingCalendar,
    start_date: Date,
    nights: u32,
) -> Result<Vec<PriceLine>, CoreError> {
    let mut lines: Vec<PriceLine> = vec![PriceLine {
        label: format!(
            "{} ({})",
            category_label(service_category),
            night_count(nights)
        ),
        unit_price: rate.price_per_unit,
        quantity: Decimal::from(nights),
        amount: rate.price_per_unit * Decimal::from(nights),
    }];

    let mut weekend_nights: u32 = 0;
    let mut special_lines: Vec<PriceLine> = Vec::new();
    // (season name, multiplier, accumulated addition), first-occurrence order
    let mut season_additions: Vec<(String, Decimal, Decimal)> = Vec::new();

    let mut night: Date = start_date;
    for _ in 0..nights {
        let mut night_price: Decimal = rate.price_per_unit;

        if let Some(special) = calendar.special_date_for(night) {
            night_price += special.price_surcharge;
            if special.price_surcharge != Decimal::ZERO {
                special_lines.push(PriceLine {
                    label: special.name.clone(),
                    unit_price: special.price_surcharge,
                    quantity: Decimal::ONE,
                    amount: special.price_surcharge,
                });
            }
        } else if is_weekend_night(night) {
            night_price += rate.weekend_surcharge;
            weekend_nights += 1;
        }

        if let Some(season) = calendar.season_for(night) {
            let addition: Decimal = night_price * (season.price_multiplier - Decimal::ONE);
            if addition != Decimal::ZERO {
                match season_additions
                    .iter_mut()
                    .find(|(name, _, _)| *name == season.name)
                {
                    Some((_, _, total)) => *total += addition,
                    None => {
                        season_additions.push((
                            season.name.clone(),
                            season.price_multiplier,
                            addition,
                        ));
                    }
                }
            }
        }

        night = night
            .next_day()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: "advancing to the next night of the stay".to_string(),
            })?;
    }

    if weekend_nights > 0 && rate.weekend_surcharge != Decimal::ZERO {
        lines.push(PriceLine {
            label: format!("Weekend surcharge ({})", night_count(weekend_nights)),
            unit_price: rate.weekend_surcharge,
            quantity: Decimal::from(weekend_nights),
            amount: rate.weekend_surcharge * Decimal::from(weekend_nights),
        });
    }

    lines.extend(special_lines);

    for (name, multiplier, addition) in season_additions {
        lines.push(PriceLine {
            label: format!("{name} season (\u{d7}{multiplier})"),
            unit_price: addition,
            quantity: Decimal::ONE,
            amount: addition,
        });
    }

    Ok(lines)
}

const fn category_label(service_category: ServiceCategory) -> &'static str {
    match service_category {
        ServiceCategory::Boarding => "Boarding",
        ServiceCategory::Daycare => "Daycare",
        ServiceCategory::Grooming => "Grooming",
    }
}

fn night_count(nights: u32) -> String {
    if nights == 1 {
        String::from("1 night")
    } else {
        format!("{nights} nights")
    }
}

fn day_count(days: u32) -> String {
    if days == 1 {
        String::from("1 day")
    } else {
        format!("{days} days")
    }
}

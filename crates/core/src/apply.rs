// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle transitions.
//!
//! `apply` is pure: it takes the current booking and a command and returns
//! the new booking plus an audit event, or an error with no mutation. The
//! caller is responsible for persisting the result as a single
//! read-modify-write unit guarded by the previously observed status.

use crate::command::Command;
use crate::error::CoreError;
use crate::pricing::{PriceBreakdown, PricingContext, calculate_price};
use crate::state::TransitionResult;
use rust_decimal::Decimal;
use tassbok_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use tassbok_domain::{Booking, BookingStatus, SelectedExtraService};
use time::OffsetDateTime;

/// Applies a lifecycle command to a booking.
///
/// Side effects per transition:
/// - `Confirm`: assigns the room and snapshots the accommodation base
///   price from an estimate (extra services excluded, so that services
///   added or dropped during the stay never push the settlement below it).
/// - `CheckIn`: stamps the check-in time; only valid on or after the
///   stay's start date, and only once.
/// - `CheckOut`: recomputes the final price with the services actually
///   consumed and stamps the check-out time.
/// - `Cancel`: terminal; leaves all price fields untouched.
///
/// # Arguments
///
/// * `booking` - The current booking (immutable)
/// * `command` - The transition to apply
/// * `ctx` - Org configuration and dog attributes for price computation
/// * `now` - The caller-supplied wall-clock instant
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new booking and audit event
/// * `Err(CoreError)` if the transition is invalid; the booking is unchanged
///
/// # Errors
///
/// Returns an error if:
/// - The transition is not permitted from the current status
/// - Check-in is attempted before the start date
/// - Price computation fails (propagated from the pricing engine)
/// - The settlement total falls below the confirmed base price
pub fn apply(
    booking: &Booking,
    command: &Command,
    ctx: &PricingContext<'_>,
    now: OffsetDateTime,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = StateSnapshot::of_booking(booking);

    let (new_booking, details) = match command {
        Command::Confirm { room_id } => confirm(booking, *room_id, ctx)?,
        Command::CheckIn => check_in(booking, now)?,
        Command::CheckOut { final_services } => check_out(booking, final_services, ctx, now)?,
        Command::Cancel { reason } => cancel(booking, reason.clone())?,
    };

    let after: StateSnapshot = StateSnapshot::of_booking(&new_booking);
    let action: Action = Action::new(command.action_name().to_string(), details);
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        after,
        booking.org_id,
        booking.booking_id,
    );

    Ok(TransitionResult {
        new_booking,
        audit_event,
    })
}

/// Confirms a pending booking, snapshotting the accommodation base price.
fn confirm(
    booking: &Booking,
    room_id: i64,
    ctx: &PricingContext<'_>,
) -> Result<(Booking, Option<String>), CoreError> {
    booking
        .status
        .validate_transition(BookingStatus::Confirmed)?;

    // Accommodation only: the base must stay comparable across settlements
    // with a different set of extra services.
    let estimate: PriceBreakdown = calculate_price(
        ctx,
        booking.service_category,
        booking.start_date,
        booking.end_date,
        &[],
    )?;

    let mut new_booking: Booking = booking.clone();
    new_booking.status = BookingStatus::Confirmed;
    new_booking.room_id = Some(room_id);
    new_booking.base_price = Some(estimate.total_incl_vat);

    let details: String = format!(
        "Assigned room {room_id}, base price {}",
        estimate.total_incl_vat
    );
    Ok((new_booking, Some(details)))
}

/// Checks the dog in, stamping the check-in time.
fn check_in(
    booking: &Booking,
    now: OffsetDateTime,
) -> Result<(Booking, Option<String>), CoreError> {
    booking
        .status
        .validate_transition(BookingStatus::CheckedIn)?;

    let today: time::Date = now.date();
    if today < booking.start_date {
        return Err(CoreError::CheckInBeforeStartDate {
            start_date: booking.start_date,
            attempted: today,
        });
    }

    let mut new_booking: Booking = booking.clone();
    new_booking.status = BookingStatus::CheckedIn;
    new_booking.checkin_time = Some(now);
    Ok((new_booking, None))
}

/// Checks the dog out, settling the final price.
fn check_out(
    booking: &Booking,
    final_services: &[SelectedExtraService],
    ctx: &PricingContext<'_>,
    now: OffsetDateTime,
) -> Result<(Booking, Option<String>), CoreError> {
    booking
        .status
        .validate_transition(BookingStatus::CheckedOut)?;

    let settlement: PriceBreakdown = calculate_price(
        ctx,
        booking.service_category,
        booking.start_date,
        booking.end_date,
        final_services,
    )?;

    let base_price: Decimal = booking.base_price.unwrap_or(Decimal::ZERO);
    if settlement.total_incl_vat < base_price {
        return Err(CoreError::SettlementBelowBase {
            base_price,
            total_price: settlement.total_incl_vat,
        });
    }

    let details: String = if settlement.dropped_service_ids.is_empty() {
        format!("Settled at {}", settlement.total_incl_vat)
    } else {
        format!(
            "Settled at {} (dropped service ids: {:?})",
            settlement.total_incl_vat, settlement.dropped_service_ids
        )
    };

    let mut new_booking: Booking = booking.clone();
    new_booking.status = BookingStatus::CheckedOut;
    new_booking.total_price = Some(settlement.total_incl_vat);
    new_booking.checkout_time = Some(now);
    Ok((new_booking, Some(details)))
}

/// Cancels the booking. No price fields are touched; any refund is a
/// separate, out-of-band computation.
fn cancel(booking: &Booking, reason: Option<String>) -> Result<(Booking, Option<String>), CoreError> {
    booking
        .status
        .validate_transition(BookingStatus::Cancelled)?;

    let mut new_booking: Booking = booking.clone();
    new_booking.status = BookingStatus::Cancelled;
    Ok((new_booking, reason))
}

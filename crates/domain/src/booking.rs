// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking records and status transition rules.
//!
//! Status transitions are staff-initiated only; the system never advances
//! a stay based on time alone. Transitions are monotonic: a booking never
//! regresses, and cancellation is only reachable before check-in.

use crate::error::DomainError;
use crate::tariff::ServiceCategory;
use crate::validation::validate_date_range;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Lifecycle status of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested by the owner, not yet confirmed by staff.
    Pending,
    /// Confirmed by staff; a room is assigned and a base price snapshotted.
    Confirmed,
    /// The dog has arrived.
    CheckedIn,
    /// The stay is settled and finished.
    CheckedOut,
    /// Cancelled before check-in.
    Cancelled,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Pending` → `Confirmed`
    /// - `Confirmed` → `CheckedIn`
    /// - `CheckedIn` → `CheckedOut`
    /// - `Pending` | `Confirmed` → `Cancelled`
    ///
    /// An active or completed stay cannot be retroactively cancelled,
    /// only refunded through a separate process.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::CheckedIn)
                | (Self::CheckedIn, Self::CheckedOut)
                | (Self::Pending | Self::Confirmed, Self::Cancelled)
        )
    }

    /// Validates a transition from this status to another.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.can_transition_to(new_status) {
            return Ok(());
        }

        let reason = if self.is_terminal() {
            "cannot transition from terminal state"
        } else if matches!(new_status, Self::Cancelled) {
            "an active stay cannot be cancelled, only refunded"
        } else {
            "transition skips a required predecessor status"
        };

        Err(DomainError::InvalidStatusTransition {
            from: self.as_str().to_string(),
            to: new_status.as_str().to_string(),
            reason: reason.to_string(),
        })
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// A stay reservation record.
///
/// `end_date` is exclusive of the final night for boarding, so the night
/// count equals `end_date - start_date` in days. `total_price` is only
/// ever written by the price calculation engine, never hand-edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the booking has not been persisted yet.
    pub booking_id: Option<i64>,
    /// The organization operating the stay.
    pub org_id: i64,
    /// The dog being cared for.
    pub dog_id: i64,
    /// The dog's owner.
    pub owner_id: i64,
    /// The category of care booked.
    pub service_category: ServiceCategory,
    /// First day of the stay.
    pub start_date: Date,
    /// Day of departure (exclusive of the final night).
    pub end_date: Date,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Assigned room, if any.
    pub room_id: Option<i64>,
    /// Accommodation price snapshotted at confirmation time.
    pub base_price: Option<Decimal>,
    /// Final settled price, recomputed at check-out.
    pub total_price: Option<Decimal>,
    /// When the dog was checked in.
    pub checkin_time: Option<OffsetDateTime>,
    /// When the dog was checked out.
    pub checkout_time: Option<OffsetDateTime>,
    /// Extra services selected at booking time. May differ from the list
    /// actually billed at checkout.
    pub extra_service_ids: Vec<i64>,
}

impl Booking {
    /// Creates a new pending `Booking` without a persisted id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end_date` is not after
    /// `start_date`.
    pub fn new(
        org_id: i64,
        dog_id: i64,
        owner_id: i64,
        service_category: ServiceCategory,
        start_date: Date,
        end_date: Date,
        extra_service_ids: Vec<i64>,
    ) -> Result<Self, DomainError> {
        validate_date_range(start_date, end_date)?;

        Ok(Self {
            booking_id: None,
            org_id,
            dog_id,
            owner_id,
            service_category,
            start_date,
            end_date,
            status: BookingStatus::Pending,
            room_id: None,
            base_price: None,
            total_price: None,
            checkin_time: None,
            checkout_time: None,
            extra_service_ids,
        })
    }

    /// Number of nights in the stay (`end_date - start_date`, at least 1).
    #[must_use]
    pub fn nights(&self) -> u32 {
        let days: i64 = (self.end_date - self.start_date).whole_days();
        u32::try_from(days.max(1)).unwrap_or(1)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking records with guarded lifecycle transitions.
//!
//! `transition` is the only way to change a stored booking's status. It
//! re-reads the current record under the write lock and compares it to the
//! status the caller observed before deciding to act; a mismatch means
//! another actor got there first, and nothing is written.

use crate::audit_log::AuditLog;
use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use tassbok::{Command, PricingContext, TransitionResult, apply};
use tassbok_audit::{Actor, Cause};
use tassbok_domain::{Booking, BookingStatus};
use time::OffsetDateTime;

/// In-memory booking store with optimistic-concurrency transitions.
#[derive(Debug)]
pub struct BookingStore {
    bookings: RwLock<HashMap<i64, Booking>>,
    next_id: AtomicI64,
    audit_log: AuditLog,
}

impl BookingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            audit_log: AuditLog::new(),
        }
    }

    /// Inserts a booking, assigning its canonical id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a previous writer panicked.
    pub fn insert(&self, mut booking: Booking) -> Result<i64, StoreError> {
        let booking_id: i64 = self.next_id.fetch_add(1, Ordering::SeqCst);
        booking.booking_id = Some(booking_id);

        let mut bookings = self
            .bookings
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        bookings.insert(booking_id, booking);

        tracing::debug!(booking_id, "inserted booking");
        Ok(booking_id)
    }

    /// Returns a copy of a booking.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BookingNotFound` if the id is unknown, or
    /// `StoreError::LockPoisoned` if a previous writer panicked.
    pub fn get(&self, booking_id: i64) -> Result<Booking, StoreError> {
        let bookings = self
            .bookings
            .read()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        bookings
            .get(&booking_id)
            .cloned()
            .ok_or(StoreError::BookingNotFound(booking_id))
    }

    /// Applies a lifecycle command as a single read-modify-write unit.
    ///
    /// The stored booking's status is compared to `expected_status`
    /// immediately before mutation. On a mismatch the call fails with
    /// `ConcurrentModification` and writes nothing; the caller should
    /// re-read and re-evaluate, or surface the conflict.
    ///
    /// On success the new booking and its audit event are persisted
    /// together, and the new booking is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The booking does not exist
    /// - The status guard fails (retryable)
    /// - The engine rejects the transition (propagated, nothing written)
    #[allow(clippy::too_many_arguments)]
    pub fn transition(
        &self,
        booking_id: i64,
        expected_status: BookingStatus,
        command: &Command,
        ctx: &PricingContext<'_>,
        now: OffsetDateTime,
        actor: Actor,
        cause: Cause,
    ) -> Result<Booking, StoreError> {
        let mut bookings = self
            .bookings
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;

        let current: &Booking = bookings
            .get(&booking_id)
            .ok_or(StoreError::BookingNotFound(booking_id))?;

        if current.status != expected_status {
            tracing::warn!(
                booking_id,
                expected = %expected_status,
                actual = %current.status,
                "rejecting stale transition"
            );
            return Err(StoreError::ConcurrentModification {
                booking_id,
                expected: expected_status,
                actual: current.status,
            });
        }

        let result: TransitionResult = apply(current, command, ctx, now, actor, cause)?;

        tracing::info!(
            booking_id,
            action = result.audit_event.action.name.as_str(),
            status = %result.new_booking.status,
            "applied booking transition"
        );

        bookings.insert(booking_id, result.new_booking.clone());
        self.audit_log.append(result.audit_event)?;

        Ok(result.new_booking)
    }

    /// The audit log recording every applied transition.
    #[must_use]
    pub const fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

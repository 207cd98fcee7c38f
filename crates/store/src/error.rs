// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tassbok::CoreError;
use tassbok_domain::{BookingStatus, DomainError};
use thiserror::Error;

/// Errors that can occur at the store boundary.
///
/// `ConcurrentModification` is the only retryable variant: the caller
/// should re-read the booking, re-evaluate, and either retry or surface
/// the conflict. Everything else is a configuration or data error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The booking changed between read and write; the guard status no
    /// longer matches.
    #[error(
        "Booking {booking_id} was modified concurrently: expected status '{expected}', found '{actual}'"
    )]
    ConcurrentModification {
        booking_id: i64,
        expected: BookingStatus,
        actual: BookingStatus,
    },

    /// The requested booking does not exist.
    #[error("Booking {0} not found")]
    BookingNotFound(i64),

    /// A lifecycle transition was rejected by the engine.
    #[error(transparent)]
    Transition(#[from] CoreError),

    /// A domain rule was violated.
    #[error(transparent)]
    DomainViolation(#[from] DomainError),

    /// Audit log serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A lock was poisoned by a panicking writer.
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use std::sync::Mutex;
use tassbok_audit::AuditEvent;

/// Append-only sink for transition audit events.
///
/// Events are immutable once appended; the log only ever grows.
#[derive(Debug, Default)]
pub struct AuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditLog {
    /// Creates an empty audit log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Appends an event to the log.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a previous writer panicked.
    pub fn append(&self, event: AuditEvent) -> Result<(), StoreError> {
        let mut events = self
            .events
            .lock()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        events.push(event);
        Ok(())
    }

    /// Returns a copy of all events, in append order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a previous writer panicked.
    pub fn events(&self) -> Result<Vec<AuditEvent>, StoreError> {
        let events = self
            .events
            .lock()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        Ok(events.clone())
    }

    /// Returns all events scoped to a booking.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a previous writer panicked.
    pub fn events_for_booking(&self, booking_id: i64) -> Result<Vec<AuditEvent>, StoreError> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|event| event.booking_id == Some(booking_id))
            .collect())
    }

    /// Serializes the full log to JSON for export.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialization` if encoding fails, or
    /// `StoreError::LockPoisoned` if a previous writer panicked.
    pub fn export_json(&self) -> Result<String, StoreError> {
        let events = self.events()?;
        serde_json::to_string_pretty(&events)
            .map_err(|err| StoreError::Serialization(err.to_string()))
    }
}

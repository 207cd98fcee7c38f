// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tassbok_domain::SelectedExtraService;

/// A command represents staff intent as data only.
///
/// Commands are the only way to request booking state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Confirm a pending booking, assigning a room and snapshotting the
    /// accommodation base price from an estimate.
    Confirm {
        /// The room assigned to the stay. Capacity checking happens
        /// outside the engine, before this command is issued.
        room_id: i64,
    },
    /// Check the dog in. Allowed only once, on or after the start date.
    CheckIn,
    /// Check the dog out and settle the final price.
    CheckOut {
        /// The extra services actually consumed during the stay. May
        /// differ from the selection made at booking time.
        final_services: Vec<SelectedExtraService>,
    },
    /// Cancel the booking. Only reachable before check-in; has no effect
    /// on the booking's price fields.
    Cancel {
        /// Optional staff-entered reason.
        reason: Option<String>,
    },
}

impl Command {
    /// Returns the action name recorded in audit events.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Confirm { .. } => "ConfirmBooking",
            Self::CheckIn => "CheckIn",
            Self::CheckOut { .. } => "CheckOut",
            Self::Cancel { .. } => "CancelBooking",
        }
    }
}

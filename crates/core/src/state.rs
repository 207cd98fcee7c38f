// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tassbok_audit::AuditEvent;
use tassbok_domain::Booking;

/// The result of a successful booking transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The caller persists `new_booking` and `audit_event`
/// together, guarded by the previously observed status (optimistic
/// concurrency at the persistence boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The booking after the transition.
    pub new_booking: Booking,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

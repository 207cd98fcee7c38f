// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use tassbok_domain::DomainError;
use time::Date;

/// Errors that can occur during pricing and lifecycle transitions.
///
/// These are non-retryable configuration or data errors; they must surface
/// to the caller and are never converted into a silent default price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Check-in was attempted before the stay's start date.
    CheckInBeforeStartDate {
        /// The booked start date.
        start_date: Date,
        /// The date the check-in was attempted.
        attempted: Date,
    },
    /// The settlement total came out below the confirmed base price.
    ///
    /// Extra services cannot produce a negative adjustment; a settlement
    /// below the base indicates the tariff configuration changed mid-stay.
    SettlementBelowBase {
        /// The base price snapshotted at confirmation.
        base_price: Decimal,
        /// The rejected settlement total.
        total_price: Decimal,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CheckInBeforeStartDate {
                start_date,
                attempted,
            } => {
                write!(
                    f,
                    "Cannot check in on {attempted}: the stay starts {start_date}"
                )
            }
            Self::SettlementBelowBase {
                base_price,
                total_price,
            } => {
                write!(
                    f,
                    "Settlement total {total_price} is below the confirmed base price {base_price}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

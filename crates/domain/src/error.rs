// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::size::DogSizeClass;
use crate::tariff::ServiceCategory;
use rust_decimal::Decimal;

/// Errors that can occur during domain validation and pure calculations.
///
/// All of these are non-retryable configuration or data errors. None of
/// them may ever be converted into a silent zero or default price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A dog attribute required for pricing is missing or zero.
    MissingDogAttribute {
        /// The name of the missing attribute (e.g. `height_cm`).
        attribute: &'static str,
    },
    /// No tariff rate matches the service category and size class,
    /// and no size-agnostic fallback rate exists.
    NoApplicableRate {
        /// The service category that was priced.
        service_category: ServiceCategory,
        /// The size class derived from the dog's height.
        size_class: DogSizeClass,
    },
    /// More than one active rate matches the same category and size class.
    AmbiguousRate {
        /// The service category with conflicting rates.
        service_category: ServiceCategory,
        /// The conflicting size class filter (`None` = size-agnostic).
        size_class: Option<DogSizeClass>,
    },
    /// A per-use extra service was selected with a zero or negative quantity.
    InvalidQuantity {
        /// The label of the offending service.
        service_label: String,
        /// The rejected quantity value.
        quantity: i64,
    },
    /// A booking status string is not recognized.
    InvalidBookingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// A booking date range is empty or inverted.
    InvalidDateRange {
        /// The start date.
        start_date: time::Date,
        /// The end date (exclusive).
        end_date: time::Date,
    },
    /// Size thresholds are not strictly increasing.
    InvalidThresholds {
        /// Description of the validation error.
        reason: String,
    },
    /// A size class string is not recognized.
    InvalidSizeClass(String),
    /// A service category string is not recognized.
    InvalidServiceCategory(String),
    /// A rate unit string is not recognized.
    InvalidRateUnit(String),
    /// An extra service unit string is not recognized.
    InvalidExtraServiceUnit(String),
    /// A special date category string is not recognized.
    InvalidSpecialDateCategory(String),
    /// A billing period string is not recognized.
    InvalidBillingPeriod(String),
    /// A subscription status string is not recognized.
    InvalidSubscriptionStatus(String),
    /// A catalog entry carries a negative price.
    NegativePrice {
        /// The label of the offending catalog entry.
        label: String,
    },
    /// A catalog entry has an empty label.
    EmptyLabel,
    /// A VAT rate is outside the valid percentage range.
    InvalidVatRate {
        /// The rejected VAT rate.
        vat_rate: Decimal,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDogAttribute { attribute } => {
                write!(f, "Dog attribute '{attribute}' is missing or zero")
            }
            Self::NoApplicableRate {
                service_category,
                size_class,
            } => {
                write!(
                    f,
                    "No applicable rate for category '{service_category}' and size class '{size_class}'"
                )
            }
            Self::AmbiguousRate {
                service_category,
                size_class,
            } => match size_class {
                Some(size_class) => write!(
                    f,
                    "Multiple active rates for category '{service_category}' and size class '{size_class}'"
                ),
                None => write!(
                    f,
                    "Multiple active size-agnostic rates for category '{service_category}'"
                ),
            },
            Self::InvalidQuantity {
                service_label,
                quantity,
            } => {
                write!(
                    f,
                    "Invalid quantity {quantity} for per-use service '{service_label}': must be a positive integer"
                )
            }
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition '{from}' -> '{to}': {reason}")
            }
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid date range: end date {end_date} must be after start date {start_date}"
                )
            }
            Self::InvalidThresholds { reason } => {
                write!(f, "Invalid size thresholds: {reason}")
            }
            Self::InvalidSizeClass(value) => write!(f, "Invalid size class: '{value}'"),
            Self::InvalidServiceCategory(value) => {
                write!(f, "Invalid service category: '{value}'")
            }
            Self::InvalidRateUnit(value) => write!(f, "Invalid rate unit: '{value}'"),
            Self::InvalidExtraServiceUnit(value) => {
                write!(f, "Invalid extra service unit: '{value}'")
            }
            Self::InvalidSpecialDateCategory(value) => {
                write!(f, "Invalid special date category: '{value}'")
            }
            Self::InvalidBillingPeriod(value) => {
                write!(f, "Invalid billing period: '{value}'")
            }
            Self::InvalidSubscriptionStatus(value) => {
                write!(f, "Invalid subscription status: '{value}'")
            }
            Self::NegativePrice { label } => {
                write!(f, "Catalog entry '{label}' has a negative price")
            }
            Self::EmptyLabel => write!(f, "Catalog entry label must not be empty"),
            Self::InvalidVatRate { vat_rate } => {
                write!(f, "Invalid VAT rate: {vat_rate}. Must be between 0 and 100")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

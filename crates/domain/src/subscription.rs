// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// How an organization's subscription is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Returns the string representation of this billing period.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(DomainError::InvalidBillingPeriod(s.to_string())),
        }
    }
}

/// Status of an organization's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trialing,
    Active,
    Paused,
    Canceled,
}

impl SubscriptionStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trialing => "trialing",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trialing" => Ok(Self::Trialing),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidSubscriptionStatus(s.to_string())),
        }
    }
}

/// An organization-level billing record.
///
/// The proration engine only reads this; cancellation itself is executed
/// by the payment-provider integration outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// The canonical numeric identifier.
    /// `None` indicates the subscription has not been persisted yet.
    pub subscription_id: Option<i64>,
    /// The subscribing organization.
    pub org_id: i64,
    /// Plan identifier (e.g. "boarding_only", "all_services").
    pub plan: String,
    /// Current subscription status.
    pub status: SubscriptionStatus,
    /// How the subscription is billed.
    pub billing_period: BillingPeriod,
    /// When the record was created.
    pub created_at: OffsetDateTime,
    /// First day of the current term.
    pub start_date: Date,
}

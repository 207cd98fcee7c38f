// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-dependent pricing configuration.
//!
//! Nightly prices are adjusted by, in priority order: special dates
//! (flat surcharge, highest priority), weekend surcharge (only when the
//! night is not a special date), and season multipliers (always applied,
//! also on special dates).

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Weekday};

/// Category of a special date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDateCategory {
    /// Statutory public holiday.
    RedDay,
    Holiday,
    Event,
    Custom,
}

impl SpecialDateCategory {
    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RedDay => "red_day",
            Self::Holiday => "holiday",
            Self::Event => "event",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for SpecialDateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpecialDateCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red_day" => Ok(Self::RedDay),
            "holiday" => Ok(Self::Holiday),
            "event" => Ok(Self::Event),
            "custom" => Ok(Self::Custom),
            _ => Err(DomainError::InvalidSpecialDateCategory(s.to_string())),
        }
    }
}

/// A single date with a price surcharge (red day, event, holiday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDate {
    pub date: Date,
    pub name: String,
    pub category: SpecialDateCategory,
    pub price_surcharge: Decimal,
    pub is_active: bool,
}

/// A date range with a price multiplier (summer, winter, sport holidays).
///
/// Both `start_date` and `end_date` are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub price_multiplier: Decimal,
    pub is_active: bool,
}

impl Season {
    /// Returns whether the given date falls within this season.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// An organization's date-dependent pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCalendar {
    pub special_dates: Vec<SpecialDate>,
    pub seasons: Vec<Season>,
}

impl PricingCalendar {
    /// Creates an empty calendar (no surcharges, no seasons).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            special_dates: Vec::new(),
            seasons: Vec::new(),
        }
    }

    /// Returns the active special date entry for a given date, if any.
    #[must_use]
    pub fn special_date_for(&self, date: Date) -> Option<&SpecialDate> {
        self.special_dates
            .iter()
            .find(|entry| entry.is_active && entry.date == date)
    }

    /// Returns the active season covering a given date, if any.
    ///
    /// When seasons overlap, the first configured match wins.
    #[must_use]
    pub fn season_for(&self, date: Date) -> Option<&Season> {
        self.seasons
            .iter()
            .find(|season| season.is_active && season.contains(date))
    }
}

/// Returns whether a night counts as a weekend night (Friday-Sunday).
#[must_use]
pub fn is_weekend_night(date: Date) -> bool {
    matches!(
        date.weekday(),
        Weekday::Friday | Weekday::Saturday | Weekday::Sunday
    )
}

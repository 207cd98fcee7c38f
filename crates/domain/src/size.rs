// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dog size classification and statutory space requirements.
//!
//! Size classes are a pure function of a dog's shoulder height against
//! organization-configurable thresholds. The indoor area requirements
//! reproduce the Swedish Board of Agriculture norms for boarding kennels.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A dog-size bucket used to select applicable tariff rates.
///
/// Computed from shoulder height; never stored on the dog itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DogSizeClass {
    /// Toy breeds, below the mini threshold.
    Mini,
    Small,
    Medium,
    Large,
    /// Giant breeds, above the large threshold.
    XLarge,
}

impl DogSizeClass {
    /// Returns the string representation of this size class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mini => "mini",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}

impl std::fmt::Display for DogSizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DogSizeClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mini" => Ok(Self::Mini),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "xlarge" => Ok(Self::XLarge),
            _ => Err(DomainError::InvalidSizeClass(s.to_string())),
        }
    }
}

/// Organization-configurable height thresholds (cm, inclusive upper bounds).
///
/// A height at or below `mini_max_cm` is `Mini`, at or below `small_max_cm`
/// is `Small`, and so on; anything above `large_max_cm` is `XLarge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeThresholds {
    pub mini_max_cm: u16,
    pub small_max_cm: u16,
    pub medium_max_cm: u16,
    pub large_max_cm: u16,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            mini_max_cm: 24,
            small_max_cm: 34,
            medium_max_cm: 54,
            large_max_cm: 65,
        }
    }
}

impl SizeThresholds {
    /// Validates that the thresholds are strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidThresholds` if any bound is not strictly
    /// greater than the previous one.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.mini_max_cm < self.small_max_cm
            && self.small_max_cm < self.medium_max_cm
            && self.medium_max_cm < self.large_max_cm
        {
            Ok(())
        } else {
            Err(DomainError::InvalidThresholds {
                reason: format!(
                    "thresholds must be strictly increasing, got {}/{}/{}/{}",
                    self.mini_max_cm, self.small_max_cm, self.medium_max_cm, self.large_max_cm
                ),
            })
        }
    }

    /// Classifies a shoulder height in cm into a size class.
    ///
    /// Callers must reject missing or zero heights before classification;
    /// guessing a class for an unknown height would silently misprice.
    #[must_use]
    pub const fn classify(&self, height_cm: u16) -> DogSizeClass {
        if height_cm <= self.mini_max_cm {
            DogSizeClass::Mini
        } else if height_cm <= self.small_max_cm {
            DogSizeClass::Small
        } else if height_cm <= self.medium_max_cm {
            DogSizeClass::Medium
        } else if height_cm <= self.large_max_cm {
            DogSizeClass::Large
        } else {
            DogSizeClass::XLarge
        }
    }
}

/// Required indoor area in m² for a single dog kept alone.
///
/// Values follow the Board of Agriculture norms for box or room housing.
#[must_use]
pub fn required_indoor_area_m2(height_cm: u16) -> Decimal {
    if height_cm <= 35 {
        Decimal::new(20, 1)
    } else if height_cm <= 45 {
        Decimal::new(25, 1)
    } else if height_cm <= 55 {
        Decimal::new(35, 1)
    } else if height_cm <= 65 {
        Decimal::new(45, 1)
    } else {
        Decimal::new(55, 1)
    }
}

/// Additional area in m² contributed by one more dog in group housing.
#[must_use]
pub fn additional_dog_area_m2(height_cm: u16) -> Decimal {
    if height_cm < 25 {
        Decimal::new(10, 1)
    } else if height_cm <= 45 {
        Decimal::new(15, 1)
    } else if height_cm <= 55 {
        Decimal::new(20, 1)
    } else if height_cm <= 65 {
        Decimal::new(25, 1)
    } else {
        Decimal::new(30, 1)
    }
}

/// Required indoor area in m² for a group of dogs sharing a room.
///
/// The largest dog sets the base area; every other dog adds its own
/// additional-area contribution. An empty group requires no area.
#[must_use]
pub fn required_group_area_m2(heights_cm: &[u16]) -> Decimal {
    let Some(largest) = heights_cm.iter().copied().max() else {
        return Decimal::ZERO;
    };

    let mut area: Decimal = required_indoor_area_m2(largest);
    let mut largest_counted: bool = false;

    for height in heights_cm.iter().copied() {
        // Only one dog counts as "the largest"; ties add like any other dog.
        if height == largest && !largest_counted {
            largest_counted = true;
            continue;
        }
        area += additional_dog_area_m2(height);
    }

    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_classify_boundaries() {
        let thresholds = SizeThresholds::default();

        assert_eq!(thresholds.classify(24), DogSizeClass::Mini);
        assert_eq!(thresholds.classify(25), DogSizeClass::Small);
        assert_eq!(thresholds.classify(34), DogSizeClass::Small);
        assert_eq!(thresholds.classify(35), DogSizeClass::Medium);
        assert_eq!(thresholds.classify(54), DogSizeClass::Medium);
        assert_eq!(thresholds.classify(55), DogSizeClass::Large);
        assert_eq!(thresholds.classify(65), DogSizeClass::Large);
        assert_eq!(thresholds.classify(66), DogSizeClass::XLarge);
    }

    #[test]
    fn test_non_increasing_thresholds_rejected() {
        let thresholds = SizeThresholds {
            mini_max_cm: 30,
            small_max_cm: 30,
            medium_max_cm: 54,
            large_max_cm: 65,
        };

        assert!(matches!(
            thresholds.validate(),
            Err(DomainError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn test_size_class_string_round_trip() {
        let classes = vec![
            DogSizeClass::Mini,
            DogSizeClass::Small,
            DogSizeClass::Medium,
            DogSizeClass::Large,
            DogSizeClass::XLarge,
        ];

        for class in classes {
            let parsed: DogSizeClass = class.as_str().parse().unwrap();
            assert_eq!(class, parsed);
        }
    }

    #[test]
    fn test_single_dog_area_by_height() {
        assert_eq!(required_indoor_area_m2(24), Decimal::new(20, 1));
        assert_eq!(required_indoor_area_m2(35), Decimal::new(20, 1));
        assert_eq!(required_indoor_area_m2(45), Decimal::new(25, 1));
        assert_eq!(required_indoor_area_m2(55), Decimal::new(35, 1));
        assert_eq!(required_indoor_area_m2(65), Decimal::new(45, 1));
        assert_eq!(required_indoor_area_m2(70), Decimal::new(55, 1));
    }

    #[test]
    fn test_group_area_largest_sets_base() {
        // 60 cm base (4.5) + 30 cm additional (1.5) + 50 cm additional (2.0)
        let area = required_group_area_m2(&[30, 60, 50]);
        assert_eq!(area, Decimal::new(80, 1));
    }

    #[test]
    fn test_group_area_tied_largest_counted_once_as_base() {
        // One 60 cm base (4.5) + the other 60 cm additional (2.5)
        let area = required_group_area_m2(&[60, 60]);
        assert_eq!(area, Decimal::new(70, 1));
    }

    #[test]
    fn test_group_area_empty_is_zero() {
        assert_eq!(required_group_area_m2(&[]), Decimal::ZERO);
    }
}

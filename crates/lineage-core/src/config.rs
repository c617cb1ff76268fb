//! Validator configuration
//!
//! Tunables for the timeline rules. Everything has a default, so an empty
//! TOML document is a valid configuration.

use crate::errors::{LineageError, Result};
use serde::{Deserialize, Serialize};

/// Minimum years between a person's birth and a recorded marriage.
///
/// A data-quality floor that catches swapped or mistyped dates, not a legal
/// marriage age.
pub const DEFAULT_MIN_SPOUSE_AGE_YEARS: u32 = 7;

/// Upper bound accepted for `min_spouse_age_years`
pub const MAX_SPOUSE_AGE_YEARS: u32 = 150;

/// How a date compares against the boundary it is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Equal dates are accepted
    Inclusive,
    /// The date must fall strictly after the boundary
    Exclusive,
}

impl Boundary {
    /// Whether `date` satisfies the boundary set by `floor`
    pub fn admits<T: PartialOrd>(self, floor: &T, date: &T) -> bool {
        match self {
            Boundary::Inclusive => date >= floor,
            Boundary::Exclusive => date > floor,
        }
    }
}

/// Residence and occupation starts must fall strictly after birth and
/// strictly after the previous interval's end.
pub const INTERVAL_START_BOUNDARY: Boundary = Boundary::Exclusive;

/// A burial may start on the day of passing.
pub const BURIAL_START_BOUNDARY: Boundary = Boundary::Inclusive;

/// A Parent relationship may be established on the day of birth.
pub const PARENT_RELATIONSHIP_BOUNDARY: Boundary = Boundary::Inclusive;

/// A Spouse relationship may be established exactly on the floor date.
pub const SPOUSE_RELATIONSHIP_BOUNDARY: Boundary = Boundary::Inclusive;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Calendar years added to the birth date to get the earliest marriage date
    pub min_spouse_age_years: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_spouse_age_years: DEFAULT_MIN_SPOUSE_AGE_YEARS,
        }
    }
}

impl ValidatorConfig {
    /// Parse and check a TOML configuration document
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the document does not parse or a value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ValidatorConfig =
            toml::from_str(text).map_err(|e| LineageError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.checked()
    }

    /// Reject values that would make the rules meaningless
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `min_spouse_age_years` is 0 or above
    /// [`MAX_SPOUSE_AGE_YEARS`].
    pub fn checked(self) -> Result<Self> {
        if self.min_spouse_age_years == 0 || self.min_spouse_age_years > MAX_SPOUSE_AGE_YEARS {
            return Err(LineageError::InvalidConfig {
                reason: format!(
                    "min_spouse_age_years must be between 1 and {}, got {}",
                    MAX_SPOUSE_AGE_YEARS, self.min_spouse_age_years
                ),
            });
        }
        Ok(self)
    }
}

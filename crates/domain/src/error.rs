// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// These cover scalar input violations only. Unrecognized categorical
/// inputs (roof, surface, soil, country, currency) are never errors; every
/// lookup table has a documented default.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Catchment area must be a positive, finite number of square feet.
    InvalidCatchmentArea {
        /// The rejected value.
        value: f64,
    },
    /// Available recharge space must be a non-negative, finite number of
    /// square feet.
    InvalidAvailableSpace {
        /// The rejected value.
        value: f64,
    },
    /// Household size must be at least one person.
    InvalidHouseholdSize {
        /// The rejected value.
        value: u32,
    },
    /// Latitude must be within -90..90 degrees.
    InvalidLatitude {
        /// The rejected value.
        value: f64,
    },
    /// Longitude must be within -180..180 degrees.
    InvalidLongitude {
        /// The rejected value.
        value: f64,
    },
    /// A runoff coefficient override must satisfy 0 < c <= 1.
    InvalidRunoffCoefficient {
        /// The rejected value.
        value: f64,
    },
    /// A secondary catchment area must be a non-negative, finite number of
    /// square feet.
    InvalidSecondaryArea {
        /// The name of the offending area field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCatchmentArea { value } => {
                write!(
                    f,
                    "Catchment area must be a positive number of square feet, got {value}"
                )
            }
            Self::InvalidAvailableSpace { value } => {
                write!(
                    f,
                    "Available space must be a non-negative number of square feet, got {value}"
                )
            }
            Self::InvalidHouseholdSize { value } => {
                write!(f, "Household size must be at least 1, got {value}")
            }
            Self::InvalidLatitude { value } => {
                write!(f, "Latitude must be within -90..90 degrees, got {value}")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "Longitude must be within -180..180 degrees, got {value}")
            }
            Self::InvalidRunoffCoefficient { value } => {
                write!(
                    f,
                    "Runoff coefficient override must satisfy 0 < c <= 1, got {value}"
                )
            }
            Self::InvalidSecondaryArea { field, value } => {
                write!(
                    f,
                    "{field} must be a non-negative number of square feet, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

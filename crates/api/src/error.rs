// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use rainharvest_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// Unrecognized categorical inputs never produce an error; every lookup
/// table in the engine has a documented default.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCatchmentArea { value } => ApiError::InvalidInput {
            field: String::from("roof_area_sqft"),
            message: format!("Catchment area must be a positive number of square feet, got {value}"),
        },
        DomainError::InvalidAvailableSpace { value } => ApiError::InvalidInput {
            field: String::from("available_space_sqft"),
            message: format!(
                "Available space must be a non-negative number of square feet, got {value}"
            ),
        },
        DomainError::InvalidHouseholdSize { value } => ApiError::InvalidInput {
            field: String::from("num_people"),
            message: format!("Household size must be at least 1, got {value}"),
        },
        DomainError::InvalidLatitude { value } => ApiError::InvalidInput {
            field: String::from("latitude"),
            message: format!("Latitude must be within -90..90 degrees, got {value}"),
        },
        DomainError::InvalidLongitude { value } => ApiError::InvalidInput {
            field: String::from("longitude"),
            message: format!("Longitude must be within -180..180 degrees, got {value}"),
        },
        DomainError::InvalidRunoffCoefficient { value } => ApiError::InvalidInput {
            field: String::from("runoff_coefficient"),
            message: format!("Runoff coefficient override must satisfy 0 < c <= 1, got {value}"),
        },
        DomainError::InvalidSecondaryArea { field, value } => ApiError::InvalidInput {
            field: String::from(secondary_area_field(field)),
            message: format!("{field} must be a non-negative number of square feet, got {value}"),
        },
    }
}

/// Maps a domain secondary-area description to its request field name.
fn secondary_area_field(field: &str) -> &'static str {
    match field {
        "Parking area" => "parking_area_sqft",
        "Agricultural area" => "agricultural_area_sqft",
        _ => "pond_catchment_area_sqft",
    }
}

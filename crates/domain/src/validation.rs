// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scalar input validation for the estimation pipeline.
//!
//! Validation runs at the API boundary before the engine is invoked; the
//! engine itself is total over validated inputs. Categorical inputs are
//! deliberately not validated here: unknown roof/surface/soil/country
//! values resolve to documented defaults instead of failing.

use crate::error::DomainError;
use crate::types::{SecondaryAreas, SiteInput};

/// Validates the scalar fields of a site input.
///
/// # Errors
///
/// Returns an error if:
/// - The catchment area is not a positive, finite number
/// - The available space is negative or not finite
/// - The household size is zero
pub fn validate_site_input(site: &SiteInput) -> Result<(), DomainError> {
    if !site.roof_area_sqft.is_finite() || site.roof_area_sqft <= 0.0 {
        return Err(DomainError::InvalidCatchmentArea {
            value: site.roof_area_sqft,
        });
    }
    if !site.available_space_sqft.is_finite() || site.available_space_sqft < 0.0 {
        return Err(DomainError::InvalidAvailableSpace {
            value: site.available_space_sqft,
        });
    }
    if site.household_size == 0 {
        return Err(DomainError::InvalidHouseholdSize {
            value: site.household_size,
        });
    }
    Ok(())
}

/// Validates optional secondary catchment areas.
///
/// Absent areas are valid; supplied areas must be non-negative and finite.
///
/// # Errors
///
/// Returns an error naming the offending field if any supplied area is
/// negative or not finite.
pub fn validate_secondary_areas(areas: &SecondaryAreas) -> Result<(), DomainError> {
    let checks: [(&'static str, Option<f64>); 3] = [
        ("Parking area", areas.parking_sqft),
        ("Agricultural area", areas.agricultural_sqft),
        ("Pond catchment area", areas.pond_catchment_sqft),
    ];
    for (field, value) in checks {
        if let Some(value) = value
            && (!value.is_finite() || value < 0.0)
        {
            return Err(DomainError::InvalidSecondaryArea { field, value });
        }
    }
    Ok(())
}

/// Validates resolved geographic coordinates.
///
/// # Errors
///
/// Returns an error if latitude or longitude is outside its valid range
/// or not finite.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(DomainError::InvalidLatitude { value: latitude });
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(DomainError::InvalidLongitude { value: longitude });
    }
    Ok(())
}

/// Validates an explicit runoff coefficient override.
///
/// # Errors
///
/// Returns an error unless 0 < coefficient <= 1.
pub fn validate_coefficient_override(coefficient: f64) -> Result<(), DomainError> {
    if !coefficient.is_finite() || coefficient <= 0.0 || coefficient > 1.0 {
        return Err(DomainError::InvalidRunoffCoefficient { value: coefficient });
    }
    Ok(())
}

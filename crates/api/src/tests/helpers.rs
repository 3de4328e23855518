// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use rainharvest_domain::GeoPoint;
use rainharvest_persistence::SqlitePersistence;

use crate::geocode::{GeocodeError, Geocoder};
use crate::request_response::CalculateRequest;

/// Geocoder stub resolving a fixed table of test locations.
pub struct StubGeocoder;

impl Geocoder for StubGeocoder {
    fn resolve(&self, location: &str) -> Result<GeoPoint, GeocodeError> {
        match location {
            "Testville, India" => Ok(GeoPoint {
                latitude: 15.0,
                longitude: 77.0,
                formatted_address: String::from("Testville, Karnataka, India"),
            }),
            "Berlin, Germany" => Ok(GeoPoint {
                latitude: 52.5,
                longitude: 13.4,
                formatted_address: String::from("Berlin, Germany"),
            }),
            _ => Err(GeocodeError::NotFound(location.to_string())),
        }
    }
}

/// Geocoder stub that always fails at the service level.
pub struct FailingGeocoder;

impl Geocoder for FailingGeocoder {
    fn resolve(&self, _location: &str) -> Result<GeoPoint, GeocodeError> {
        Err(GeocodeError::ServiceFailure(String::from(
            "connection refused",
        )))
    }
}

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().unwrap()
}

/// The reference scenario: a 1000 sqft concrete roof at latitude 15 with
/// 250 sqft of sandy-soil space, four people, Indian pricing.
pub fn reference_request() -> CalculateRequest {
    CalculateRequest {
        location: String::from("Testville, India"),
        roof_area_sqft: 1000.0,
        num_people: 4,
        available_space_sqft: 250.0,
        roof_type: String::from("concrete"),
        soil_type: String::from("sandy"),
        country_code: Some(String::from("IN")),
        harvesting_type: None,
        parking_area_sqft: None,
        agricultural_area_sqft: None,
        pond_catchment_area_sqft: None,
        user_ref: Some(String::from("user-1")),
    }
}

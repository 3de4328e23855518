// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rainharvest_persistence::SqlitePersistence;

use crate::error::ApiError;
use crate::handlers::locate;
use crate::request_response::{LocationRequest, LocationResponse};
use crate::tests::helpers::{StubGeocoder, create_test_persistence};

#[test]
fn test_locate_returns_coordinates_and_pricing_preview() {
    let mut persistence: SqlitePersistence = create_test_persistence();

    let response: LocationResponse = locate(
        &mut persistence,
        &StubGeocoder,
        &LocationRequest {
            location: String::from("Berlin, Germany"),
            country_code: Some(String::from("DE")),
        },
    )
    .unwrap();

    assert!(response.success);
    assert!((response.coordinates.latitude - 52.5).abs() < f64::EPSILON);
    assert_eq!(response.coordinates.formatted_address, "Berlin, Germany");
    assert_eq!(response.regional_pricing.currency, "EUR");
    assert!((response.regional_pricing.base_cost_multiplier - 1.1).abs() < f64::EPSILON);
}

#[test]
fn test_locate_defaults_to_us_pricing() {
    let mut persistence: SqlitePersistence = create_test_persistence();

    let response: LocationResponse = locate(
        &mut persistence,
        &StubGeocoder,
        &LocationRequest {
            location: String::from("Testville, India"),
            country_code: None,
        },
    )
    .unwrap();

    assert_eq!(response.regional_pricing.currency, "USD");
}

#[test]
fn test_locate_unknown_location_is_not_found() {
    let mut persistence: SqlitePersistence = create_test_persistence();

    let err: ApiError = locate(
        &mut persistence,
        &StubGeocoder,
        &LocationRequest {
            location: String::from("Atlantis"),
            country_code: None,
        },
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

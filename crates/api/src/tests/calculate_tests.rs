// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rainharvest_domain::{EngineConfig, PaybackPeriod};
use rainharvest_persistence::SqlitePersistence;

use crate::error::ApiError;
use crate::handlers::calculate;
use crate::request_response::{CalculateRequest, CalculateResponse};
use crate::tests::helpers::{
    FailingGeocoder, StubGeocoder, create_test_persistence, reference_request,
};

#[test]
fn test_reference_calculation_end_to_end() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let response: CalculateResponse = calculate(
        &config,
        &mut persistence,
        &StubGeocoder,
        &reference_request(),
    )
    .unwrap();

    assert!(response.success);
    assert_eq!(
        response.location_data.formatted_address,
        "Testville, Karnataka, India"
    );
    assert!((response.weather_data.annual_rainfall - 900.0).abs() < f64::EPSILON);
    assert_eq!(response.weather_data.temperature, 25);
    assert_eq!(response.weather_data.humidity, 65);

    // Rooftop primary: floor(1000 * 0.092903 * 900 * 0.85) = 71070.
    assert_eq!(response.collection_potential.annual_liters, 71_070);
    assert_eq!(
        response.collection_potential.harvesting_type.as_deref(),
        Some("rooftop")
    );

    assert_eq!(response.feasibility.score, 95);
    assert_eq!(response.feasibility.feasibility, "Highly Recommended");
    assert_eq!(response.feasibility.level, "positive");

    // 250 sqft of space: a trench, sized for 155.7 liters/day.
    assert_eq!(response.system_recommendation.system_type, "Recharge Trench");
    assert_eq!(
        response.system_recommendation.dimensions.width.as_deref(),
        Some("1.5m")
    );
    assert_eq!(response.system_recommendation.dimensions.depth, "2.5m");
    assert_eq!(
        response.system_recommendation.dimensions.volume,
        "0.2 cubic meters"
    );
    assert_eq!(response.system_recommendation.daily_recharge_capacity, 155);

    assert_eq!(response.cost_analysis.currency, "INR");
    assert_eq!(response.cost_analysis.currency_symbol, "₹");
    // 71.07 kiloliters at the INR rate of 20: 1421.4, truncated.
    assert_eq!(response.cost_analysis.annual_water_savings, 1421);
    assert!(matches!(
        response.cost_analysis.payback_period_years,
        PaybackPeriod::Years(_)
    ));

    assert_eq!(response.water_demand.daily_per_person, 150);
    assert_eq!(response.water_demand.household_daily, 600);
    assert_eq!(response.water_demand.household_annual, 219_000);

    // Rooftop, surface runoff, parking (defaults to roof area), and
    // agricultural (defaults to available space); no pond was supplied.
    assert_eq!(response.alternatives.len(), 4);
    let best = response.best_option.as_ref().unwrap();
    assert_eq!(best.harvesting_type, "parking_road");
    assert_eq!(best.annual_liters, response.alternatives[0].annual_liters);
}

#[test]
fn test_alternatives_are_ranked_descending() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let mut request: CalculateRequest = reference_request();
    request.pond_catchment_area_sqft = Some(3000.0);

    let response: CalculateResponse =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap();

    assert_eq!(response.alternatives.len(), 5);
    for pair in response.alternatives.windows(2) {
        assert!(pair[0].annual_liters >= pair[1].annual_liters);
    }
}

#[test]
fn test_zero_roof_area_is_rejected_before_the_engine_runs() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let mut request: CalculateRequest = reference_request();
    request.roof_area_sqft = 0.0;

    let err: ApiError =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap_err();
    match err {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "roof_area_sqft"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert_eq!(persistence.calculation_count().unwrap(), 0);
}

#[test]
fn test_zero_household_is_rejected() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let mut request: CalculateRequest = reference_request();
    request.num_people = 0;

    let err: ApiError =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_negative_secondary_area_is_rejected_with_its_field_name() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let mut request: CalculateRequest = reference_request();
    request.agricultural_area_sqft = Some(-2.0);

    let err: ApiError =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap_err();
    match err {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "agricultural_area_sqft"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_unresolvable_location_is_not_found() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let mut request: CalculateRequest = reference_request();
    request.location = String::from("Nowhere At All");

    let err: ApiError =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap_err();
    match err {
        ApiError::ResourceNotFound { resource_type, .. } => {
            assert_eq!(resource_type, "Location");
        }
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_geocoder_service_failure_is_internal() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let err: ApiError = calculate(
        &config,
        &mut persistence,
        &FailingGeocoder,
        &reference_request(),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_unknown_categorical_inputs_still_produce_a_result() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    let mut request: CalculateRequest = reference_request();
    request.roof_type = String::from("thatch");
    request.soil_type = String::from("peat");
    request.country_code = Some(String::from("ZZ"));
    request.harvesting_type = Some(String::from("greenhouse"));

    let response: CalculateResponse =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap();

    // Unknown roof -> 0.80, unknown soil -> lowest soil bracket, unknown
    // country -> the global USD fallback, unknown strategy -> best option.
    assert!(response.success);
    assert_eq!(response.cost_analysis.currency, "USD");
    let rooftop = response
        .alternatives
        .iter()
        .find(|a| a.harvesting_type == "rooftop")
        .unwrap();
    assert!((rooftop.used_coefficient - 0.80).abs() < f64::EPSILON);
    assert_eq!(
        response.collection_potential.harvesting_type.as_deref(),
        Some("parking_road")
    );
}

#[test]
fn test_calculation_is_recorded_for_history() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();

    calculate(
        &config,
        &mut persistence,
        &StubGeocoder,
        &reference_request(),
    )
    .unwrap();

    assert_eq!(persistence.calculation_count().unwrap(), 1);
}

#[test]
fn test_repeated_requests_yield_identical_bundles() {
    let config: EngineConfig = EngineConfig::default();
    let mut persistence: SqlitePersistence = create_test_persistence();
    let request: CalculateRequest = reference_request();

    let first: CalculateResponse =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap();
    let second: CalculateResponse =
        calculate(&config, &mut persistence, &StubGeocoder, &request).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

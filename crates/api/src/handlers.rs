// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the calculation, location, and history
//! operations.
//!
//! Handlers validate scalar inputs, resolve collaborators, run the
//! estimation pipeline, and translate everything into the API contract.
//! Recording the calculation history is fire-and-forget: a sink failure
//! is logged and the request still succeeds.

use rainharvest::{EstimateOutcome, EstimateParams};
use rainharvest_domain::{
    EngineConfig, GeoPoint, HarvestingAlternative, HarvestingStrategy, RegionalPricing, RoofType,
    SecondaryAreas, SiteInput, SoilType, StructureDimensions, validate_coordinates,
    validate_secondary_areas, validate_site_input,
};
use rainharvest_persistence::{CalculationRecordData, NewCalculationRecord, SqlitePersistence};
use tracing::{info, warn};

use crate::error::{ApiError, translate_domain_error};
use crate::geocode::{GeocodeError, Geocoder};
use crate::request_response::{
    AlternativeInfo, CalculateRequest, CalculateResponse, CollectionPotentialInfo,
    CostAnalysisInfo, CostLineItemInfo, DimensionsInfo, FeasibilityInfo, HistoryEntryInfo,
    HistoryRequest, HistoryResponse, LocationInfo, LocationRequest, LocationResponse,
    RegionalPricingInfo, SystemRecommendationInfo, WaterDemandInfo, WeatherInfo,
};

/// Household water demand per person per day, in liters.
pub const DAILY_DEMAND_PER_PERSON_LITERS: u32 = 150;

/// Country code applied when the request names none.
const DEFAULT_COUNTRY: &str = "US";

/// User key applied when the request names none.
const DEFAULT_USER_REF: &str = "anonymous";

/// History page size applied when the request names none.
const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Runs a full feasibility calculation.
///
/// This function:
/// - Validates the scalar inputs
/// - Resolves the location via the geocoding collaborator
/// - Resolves regional pricing via the persistence collaborator
///   (get-or-create)
/// - Runs the estimation pipeline
/// - Records the calculation for history (fire-and-forget)
///
/// # Errors
///
/// Returns an error if:
/// - A scalar input is invalid
/// - The location does not resolve
/// - A collaborator fails
pub fn calculate(
    config: &EngineConfig,
    persistence: &mut SqlitePersistence,
    geocoder: &dyn Geocoder,
    request: &CalculateRequest,
) -> Result<CalculateResponse, ApiError> {
    let site: SiteInput = SiteInput {
        roof_area_sqft: request.roof_area_sqft,
        available_space_sqft: request.available_space_sqft,
        household_size: request.num_people,
        roof_type: RoofType::parse(&request.roof_type),
        soil_type: SoilType::parse(&request.soil_type),
    };
    validate_site_input(&site).map_err(translate_domain_error)?;

    let secondary: SecondaryAreas = SecondaryAreas {
        parking_sqft: request.parking_area_sqft,
        agricultural_sqft: request.agricultural_area_sqft,
        pond_catchment_sqft: request.pond_catchment_area_sqft,
    };
    validate_secondary_areas(&secondary).map_err(translate_domain_error)?;

    let location: GeoPoint = resolve_location(geocoder, &request.location)?;
    validate_coordinates(location.latitude, location.longitude)
        .map_err(translate_domain_error)?;

    let country_code: &str = request.country_code.as_deref().unwrap_or(DEFAULT_COUNTRY);
    let pricing: RegionalPricing = persistence
        .pricing_for_country(country_code)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to resolve regional pricing: {e}"),
        })?;

    let requested_strategy: Option<HarvestingStrategy> = HarvestingStrategy::parse(
        request.harvesting_type.as_deref().unwrap_or("rooftop"),
    );

    let params: EstimateParams = EstimateParams {
        location: location.clone(),
        site,
        secondary,
        requested_strategy,
    };
    let outcome: EstimateOutcome = rainharvest::run_estimation(config, &params, &pricing);

    info!(
        location = %request.location,
        score = outcome.feasibility.score,
        annual_liters = outcome.collection_potential.annual_liters,
        "Calculation completed"
    );

    let response: CalculateResponse = build_response(request, &location, &outcome, &pricing);

    // History recording is fire-and-forget: the caller still gets a
    // complete result when the sink fails.
    match build_record(request, &location, &outcome, &response) {
        Ok(record) => {
            if let Err(e) = persistence.record_calculation(&record) {
                warn!(error = %e, "Failed to record calculation history");
            }
        }
        Err(e) => warn!(error = %e, "Failed to snapshot calculation for history"),
    }

    Ok(response)
}

/// Resolves a location string and returns coordinates plus the regional
/// pricing preview.
///
/// # Errors
///
/// Returns an error if the location does not resolve or a collaborator
/// fails.
pub fn locate(
    persistence: &mut SqlitePersistence,
    geocoder: &dyn Geocoder,
    request: &LocationRequest,
) -> Result<LocationResponse, ApiError> {
    let coordinates: GeoPoint = resolve_location(geocoder, &request.location)?;

    let country_code: &str = request.country_code.as_deref().unwrap_or(DEFAULT_COUNTRY);
    let pricing: RegionalPricing = persistence
        .pricing_for_country(country_code)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to resolve regional pricing: {e}"),
        })?;

    Ok(LocationResponse {
        success: true,
        coordinates,
        regional_pricing: pricing_info(&pricing),
    })
}

/// Lists a user's stored calculations, newest first.
///
/// # Errors
///
/// Returns an error if the store fails or a stored snapshot does not
/// parse (a defect, since snapshots are written by this layer).
pub fn calculation_history(
    persistence: &mut SqlitePersistence,
    request: &HistoryRequest,
) -> Result<HistoryResponse, ApiError> {
    let user_ref: &str = request.user_ref.as_deref().unwrap_or(DEFAULT_USER_REF);
    let limit: i64 = i64::from(request.limit.unwrap_or(DEFAULT_HISTORY_LIMIT));

    let records: Vec<CalculationRecordData> = persistence
        .calculations_for_user(user_ref, limit)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load calculation history: {e}"),
        })?;

    let calculations: Vec<HistoryEntryInfo> = records
        .into_iter()
        .map(|record| {
            Ok(HistoryEntryInfo {
                id: record.id,
                location: record.location,
                latitude: record.latitude,
                longitude: record.longitude,
                roof_area_sqft: record.roof_area_sqft,
                roof_type: record.roof_type,
                soil_type: record.soil_type,
                available_space_sqft: record.available_space_sqft,
                num_people: record.num_people,
                annual_rainfall_mm: record.annual_rainfall_mm,
                feasibility_score: record.feasibility_score,
                collection_potential: parse_snapshot(&record.collection_potential)?,
                recommended_system: parse_snapshot(&record.recommended_system)?,
                cost_analysis: parse_snapshot(&record.cost_analysis)?,
                regional_pricing: parse_snapshot(&record.regional_pricing)?,
                created_at: record.created_at,
            })
        })
        .collect::<Result<Vec<HistoryEntryInfo>, ApiError>>()?;

    Ok(HistoryResponse {
        user_ref: user_ref.to_string(),
        calculations,
    })
}

/// Resolves a location, translating geocoder errors to the API contract.
fn resolve_location(geocoder: &dyn Geocoder, location: &str) -> Result<GeoPoint, ApiError> {
    geocoder.resolve(location).map_err(|e| match e {
        GeocodeError::NotFound(text) => ApiError::ResourceNotFound {
            resource_type: String::from("Location"),
            message: format!("Could not find coordinates for '{text}'"),
        },
        GeocodeError::ServiceFailure(msg) => ApiError::Internal {
            message: format!("Geocoding failed: {msg}"),
        },
    })
}

/// Parses a stored JSON snapshot.
fn parse_snapshot(snapshot: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(snapshot).map_err(|e| ApiError::Internal {
        message: format!("Stored snapshot is not valid JSON: {e}"),
    })
}

/// Builds the response bundle from the pipeline outcome.
fn build_response(
    request: &CalculateRequest,
    location: &GeoPoint,
    outcome: &EstimateOutcome,
    pricing: &RegionalPricing,
) -> CalculateResponse {
    let alternatives: Vec<AlternativeInfo> = outcome
        .alternatives
        .alternatives
        .iter()
        .map(alternative_info)
        .collect();
    let best_option: Option<AlternativeInfo> =
        outcome.alternatives.best_option.as_ref().map(alternative_info);

    CalculateResponse {
        success: true,
        location_data: LocationInfo {
            coordinates: location.clone(),
            formatted_address: location.formatted_address.clone(),
        },
        weather_data: WeatherInfo {
            annual_rainfall: outcome.weather.rainfall.annual_mm,
            monthly_rainfall: outcome.weather.rainfall.monthly_mm,
            temperature: outcome.weather.temperature_c,
            humidity: outcome.weather.humidity_pct,
            location: outcome.weather.location_label.clone(),
        },
        collection_potential: CollectionPotentialInfo {
            annual_liters: outcome.collection_potential.annual_liters,
            monthly_liters: outcome.collection_potential.monthly_liters,
            daily_liters: outcome.collection_potential.daily_liters,
            used_coefficient: outcome.collection_potential.used_coefficient,
            harvesting_type: outcome
                .collection_potential
                .harvesting_type
                .map(|s| s.as_str().to_string()),
        },
        feasibility: FeasibilityInfo {
            feasibility: outcome.feasibility.rating.as_str().to_string(),
            level: outcome.feasibility.rating.tone().to_string(),
            score: outcome.feasibility.score,
            reasons: outcome.feasibility.reasons.clone(),
        },
        system_recommendation: SystemRecommendationInfo {
            system_type: outcome.recommendation.kind.label().to_string(),
            dimensions: dimensions_info(&outcome.recommendation.dimensions),
            infiltration_rate: outcome.recommendation.infiltration_rate_mm_hr,
            daily_recharge_capacity: outcome.recommendation.daily_recharge_liters,
        },
        cost_analysis: CostAnalysisInfo {
            installation_cost: outcome.cost.installation_cost,
            annual_maintenance: outcome.cost.annual_maintenance,
            annual_water_savings: outcome.cost.annual_water_savings,
            payback_period_years: outcome.cost.payback_period_years,
            currency: outcome.cost.currency.clone(),
            currency_symbol: outcome.cost.currency_symbol.clone(),
            cost_breakdown: outcome
                .cost
                .cost_breakdown
                .iter()
                .map(|line| CostLineItemInfo {
                    item: line.item.clone(),
                    cost: line.cost,
                })
                .collect(),
        },
        regional_pricing: pricing_info(pricing),
        water_demand: water_demand(request.num_people),
        alternatives,
        best_option,
    }
}

/// Builds the history record from the response bundle.
///
/// The snapshot fields hold the response's own JSON so that history
/// returns exactly what the caller saw.
fn build_record(
    request: &CalculateRequest,
    location: &GeoPoint,
    outcome: &EstimateOutcome,
    response: &CalculateResponse,
) -> Result<NewCalculationRecord, serde_json::Error> {
    Ok(NewCalculationRecord {
        user_ref: request
            .user_ref
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_REF.to_string()),
        location: request.location.clone(),
        latitude: location.latitude,
        longitude: location.longitude,
        roof_area_sqft: request.roof_area_sqft,
        roof_type: request.roof_type.clone(),
        soil_type: request.soil_type.clone(),
        available_space_sqft: request.available_space_sqft,
        num_people: i32::try_from(request.num_people).unwrap_or(i32::MAX),
        annual_rainfall_mm: outcome.weather.rainfall.annual_mm,
        collection_potential: serde_json::to_string(&response.collection_potential)?,
        feasibility_score: i32::from(outcome.feasibility.score),
        recommended_system: serde_json::to_string(&response.system_recommendation)?,
        cost_analysis: serde_json::to_string(&response.cost_analysis)?,
        regional_pricing: serde_json::to_string(&response.regional_pricing)?,
    })
}

/// Maps a ranked alternative to its DTO.
fn alternative_info(alternative: &HarvestingAlternative) -> AlternativeInfo {
    AlternativeInfo {
        harvesting_type: alternative.estimate.strategy.as_str().to_string(),
        area_sqft: alternative.estimate.area_sqft,
        area_sqm: alternative.estimate.area_sqm,
        used_coefficient: alternative.estimate.runoff_coefficient,
        annual_liters: alternative.estimate.annual_liters,
        monthly_liters: alternative.estimate.monthly_liters,
        daily_liters: alternative.estimate.daily_liters,
        notes: alternative.rationale.clone(),
    }
}

/// Maps the domain pricing record to its DTO.
fn pricing_info(pricing: &RegionalPricing) -> RegionalPricingInfo {
    RegionalPricingInfo {
        base_cost_multiplier: pricing.base_cost_multiplier,
        labor_cost_multiplier: pricing.labor_cost_multiplier,
        material_cost_multiplier: pricing.material_cost_multiplier,
        currency: pricing.currency.clone(),
        currency_symbol: pricing.currency_symbol.clone(),
    }
}

/// Derives the household water demand figures.
fn water_demand(num_people: u32) -> WaterDemandInfo {
    let household_daily: u64 = u64::from(num_people) * u64::from(DAILY_DEMAND_PER_PERSON_LITERS);
    WaterDemandInfo {
        daily_per_person: DAILY_DEMAND_PER_PERSON_LITERS,
        household_daily,
        household_annual: household_daily * 365,
    }
}

/// Formats the structure dimensions for presentation.
fn dimensions_info(dimensions: &StructureDimensions) -> DimensionsInfo {
    match *dimensions {
        StructureDimensions::Rectangular {
            length_m,
            width_m,
            depth_m,
            volume_m3,
        } => DimensionsInfo {
            length: Some(format_span(length_m)),
            width: Some(format_span(width_m)),
            diameter: None,
            depth: format_depth(depth_m),
            volume: format_volume(volume_m3),
        },
        StructureDimensions::Circular {
            diameter_m,
            depth_m,
            volume_m3,
        } => DimensionsInfo {
            length: None,
            width: None,
            diameter: Some(format_span(diameter_m)),
            depth: format_depth(depth_m),
            volume: format_volume(volume_m3),
        },
    }
}

/// Formats a computed span with one decimal, e.g. "2.0m".
fn format_span(meters: f64) -> String {
    format!("{meters:.1}m")
}

/// Formats a fixed depth without a trailing zero, e.g. "3m" or "2.5m".
fn format_depth(meters: f64) -> String {
    if meters.fract() == 0.0 {
        format!("{meters:.0}m")
    } else {
        format!("{meters}m")
    }
}

/// Formats the sized volume with one decimal, e.g. "0.2 cubic meters".
fn format_volume(volume_m3: f64) -> String {
    format!("{volume_m3:.1} cubic meters")
}

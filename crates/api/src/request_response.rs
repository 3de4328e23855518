// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use rainharvest_domain::{GeoPoint, PaybackPeriod};
use serde::{Deserialize, Serialize};

/// API request for a full feasibility calculation.
///
/// Categorical fields (`roof_type`, `soil_type`, `country_code`,
/// `harvesting_type`) accept any string; unrecognized values resolve to
/// documented defaults rather than rejecting the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Free-text location to resolve.
    pub location: String,
    /// Roof catchment area in square feet.
    pub roof_area_sqft: f64,
    /// Number of people in the household.
    pub num_people: u32,
    /// Open space available for a recharge structure, in square feet.
    pub available_space_sqft: f64,
    /// Roof material descriptor.
    pub roof_type: String,
    /// Soil descriptor.
    pub soil_type: String,
    /// Country code for regional pricing. Defaults to "US".
    #[serde(default)]
    pub country_code: Option<String>,
    /// The harvesting strategy to keep as primary. Defaults to "rooftop".
    #[serde(default)]
    pub harvesting_type: Option<String>,
    /// Parking or road catchment area in square feet.
    #[serde(default)]
    pub parking_area_sqft: Option<f64>,
    /// Agricultural field catchment area in square feet.
    #[serde(default)]
    pub agricultural_area_sqft: Option<f64>,
    /// Pond catchment area in square feet.
    #[serde(default)]
    pub pond_catchment_area_sqft: Option<f64>,
    /// Opaque key the calculation history is recorded under. Defaults to
    /// "anonymous".
    #[serde(default)]
    pub user_ref: Option<String>,
}

/// Resolved location information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// The resolved coordinates and address.
    pub coordinates: GeoPoint,
    /// The resolver's formatted address string.
    pub formatted_address: String,
}

/// Weather summary for the resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// Estimated annual rainfall in millimeters.
    pub annual_rainfall: f64,
    /// Monthly rainfall distribution in millimeters, January first.
    pub monthly_rainfall: [u32; 12],
    /// Ambient temperature in degrees Celsius.
    pub temperature: i32,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Display label for the coordinates.
    pub location: String,
}

/// Collection figures for the selected primary alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPotentialInfo {
    /// Annual collection in liters.
    pub annual_liters: i64,
    /// Monthly collection in liters.
    pub monthly_liters: i64,
    /// Daily collection in liters.
    pub daily_liters: i64,
    /// The runoff coefficient the primary estimate used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_coefficient: Option<f64>,
    /// The strategy tag of the primary alternative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvesting_type: Option<String>,
}

/// Feasibility verdict for the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityInfo {
    /// Qualitative rating label.
    pub feasibility: String,
    /// Tone tag: "positive", "moderate", or "negative".
    pub level: String,
    /// Composite score in [20, 100].
    pub score: u8,
    /// One rationale string per criterion, in evaluation order.
    pub reasons: Vec<String>,
}

/// Formatted structure dimensions.
///
/// Rectangular structures carry length and width; circular ones carry a
/// diameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionsInfo {
    /// Formatted length, e.g. "2.0m".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// Formatted width, e.g. "1.5m".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Formatted diameter, e.g. "1.8m".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,
    /// Formatted depth, e.g. "3m".
    pub depth: String,
    /// Formatted sized volume, e.g. "0.2 cubic meters".
    pub volume: String,
}

/// Recommended recharge structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecommendationInfo {
    /// Display label of the structure type, e.g. "Recharge Trench".
    pub system_type: String,
    /// Formatted dimensions.
    pub dimensions: DimensionsInfo,
    /// Soil infiltration rate used, in mm/hr.
    pub infiltration_rate: u32,
    /// Required daily recharge capacity in liters.
    pub daily_recharge_capacity: i64,
}

/// One itemized cost breakdown line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLineItemInfo {
    /// Line item label.
    pub item: String,
    /// Line item cost (truncated).
    pub cost: i64,
}

/// Region-adjusted cost analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysisInfo {
    /// One-time installation cost.
    pub installation_cost: i64,
    /// Annual maintenance cost.
    pub annual_maintenance: i64,
    /// Annual water-bill savings.
    pub annual_water_savings: i64,
    /// Payback period: a number of years, or the string "infinite".
    pub payback_period_years: PaybackPeriod,
    /// Currency code.
    pub currency: String,
    /// Currency symbol.
    pub currency_symbol: String,
    /// Itemized cost breakdown.
    pub cost_breakdown: Vec<CostLineItemInfo>,
}

/// Regional pricing multipliers applied to the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalPricingInfo {
    /// Multiplier applied to the structure base cost.
    pub base_cost_multiplier: f64,
    /// Multiplier applied to the labor cost.
    pub labor_cost_multiplier: f64,
    /// Multiplier applied to the material cost.
    pub material_cost_multiplier: f64,
    /// Currency code.
    pub currency: String,
    /// Currency symbol.
    pub currency_symbol: String,
}

/// Household water demand, derived alongside the engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterDemandInfo {
    /// Demand per person per day, in liters.
    pub daily_per_person: u32,
    /// Household demand per day, in liters.
    pub household_daily: u64,
    /// Household demand per year, in liters.
    pub household_annual: u64,
}

/// One ranked harvesting alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeInfo {
    /// Strategy tag.
    pub harvesting_type: String,
    /// Catchment area in square feet.
    pub area_sqft: f64,
    /// Catchment area in square meters (two decimals).
    pub area_sqm: f64,
    /// The runoff coefficient applied (three decimals).
    pub used_coefficient: f64,
    /// Annual collection in liters.
    pub annual_liters: i64,
    /// Monthly collection in liters.
    pub monthly_liters: i64,
    /// Daily collection in liters.
    pub daily_liters: i64,
    /// Human-readable rationale for this strategy.
    pub notes: String,
}

/// API response for a full feasibility calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateResponse {
    /// Success indicator.
    pub success: bool,
    /// Resolved location information.
    pub location_data: LocationInfo,
    /// Weather summary.
    pub weather_data: WeatherInfo,
    /// Collection figures for the primary alternative.
    pub collection_potential: CollectionPotentialInfo,
    /// Feasibility verdict.
    pub feasibility: FeasibilityInfo,
    /// Recommended recharge structure.
    pub system_recommendation: SystemRecommendationInfo,
    /// Region-adjusted cost analysis.
    pub cost_analysis: CostAnalysisInfo,
    /// Regional pricing applied.
    pub regional_pricing: RegionalPricingInfo,
    /// Household water demand.
    pub water_demand: WaterDemandInfo,
    /// All applicable alternatives, ranked by annual liters descending.
    pub alternatives: Vec<AlternativeInfo>,
    /// The highest-ranked alternative, absent when nothing qualifies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_option: Option<AlternativeInfo>,
}

/// API request for location resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRequest {
    /// Free-text location to resolve.
    pub location: String,
    /// Country code for the regional pricing preview. Defaults to "US".
    #[serde(default)]
    pub country_code: Option<String>,
}

/// API response for location resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Success indicator.
    pub success: bool,
    /// The resolved coordinates and address.
    pub coordinates: GeoPoint,
    /// Regional pricing for the requested country.
    pub regional_pricing: RegionalPricingInfo,
}

/// API request for a user's calculation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// The user key history was recorded under. Defaults to "anonymous".
    #[serde(default)]
    pub user_ref: Option<String>,
    /// Maximum number of entries to return. Defaults to 50.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// One stored calculation in a history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntryInfo {
    /// Record identifier.
    pub id: i64,
    /// The location string the caller supplied.
    pub location: String,
    /// Resolved latitude.
    pub latitude: f64,
    /// Resolved longitude.
    pub longitude: f64,
    /// Roof catchment area in square feet.
    pub roof_area_sqft: f64,
    /// Roof material descriptor.
    pub roof_type: String,
    /// Soil descriptor.
    pub soil_type: String,
    /// Available recharge space in square feet.
    pub available_space_sqft: f64,
    /// Household size.
    pub num_people: i32,
    /// Estimated annual rainfall in millimeters.
    pub annual_rainfall_mm: f64,
    /// Composite feasibility score.
    pub feasibility_score: i32,
    /// The stored collection potential, as computed.
    pub collection_potential: serde_json::Value,
    /// The stored system recommendation, as computed.
    pub recommended_system: serde_json::Value,
    /// The stored cost analysis, as computed.
    pub cost_analysis: serde_json::Value,
    /// The stored regional pricing, as applied.
    pub regional_pricing: serde_json::Value,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// API response for a calculation history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// The user key the listing is for.
    pub user_ref: String,
    /// Stored calculations, newest first.
    pub calculations: Vec<HistoryEntryInfo>,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Roof surface material for rooftop catchments.
///
/// Parsing is total: unrecognized materials map to `Other`, which resolves
/// to the documented default runoff coefficient rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoofType {
    /// Concrete roof slab.
    Concrete,
    /// Clay or ceramic tile.
    Tile,
    /// Sheet metal roofing.
    Metal,
    /// Asbestos-cement sheet.
    Asbestos,
    /// Any unrecognized roof material.
    Other,
}

impl RoofType {
    /// Parses a roof type from a string.
    ///
    /// Matching is case-insensitive. Unknown values map to `Other` so that
    /// unfamiliar categorical inputs never reject a request.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "concrete" => Self::Concrete,
            "tile" => Self::Tile,
            "metal" => Self::Metal,
            "asbestos" => Self::Asbestos,
            _ => Self::Other,
        }
    }

    /// Returns the string representation of this roof type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Concrete => "concrete",
            Self::Tile => "tile",
            Self::Metal => "metal",
            Self::Asbestos => "asbestos",
            Self::Other => "other",
        }
    }
}

/// Ground surface descriptor for non-rooftop catchments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    /// Paved, effectively impervious surface.
    Paved,
    /// Gravel-covered ground.
    Gravel,
    /// Bare, uncovered soil.
    SoilBare,
    /// Grass or lawn cover.
    Grass,
    /// Cultivated agricultural land.
    Agricultural,
    /// Any unrecognized surface descriptor.
    Other,
}

impl SurfaceType {
    /// Parses a surface type from a string.
    ///
    /// Matching is case-insensitive. Unknown values map to `Other`; the
    /// catchment calculator then applies the strategy-specific default
    /// coefficient.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "paved" => Self::Paved,
            "gravel" => Self::Gravel,
            "soil_bare" => Self::SoilBare,
            "grass" => Self::Grass,
            "agricultural" => Self::Agricultural,
            _ => Self::Other,
        }
    }

    /// Returns the string representation of this surface type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paved => "paved",
            Self::Gravel => "gravel",
            Self::SoilBare => "soil_bare",
            Self::Grass => "grass",
            Self::Agricultural => "agricultural",
            Self::Other => "other",
        }
    }
}

/// Soil classification at the recharge site.
///
/// Governs the infiltration rate used for structure sizing and the soil
/// permeability sub-score in the feasibility assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    /// Sandy soil, fast infiltration.
    Sandy,
    /// Clay soil, very slow infiltration.
    Clay,
    /// Loamy soil, moderate infiltration.
    Loamy,
    /// Rocky ground, negligible infiltration.
    Rocky,
    /// Any unrecognized soil descriptor.
    Other,
}

impl SoilType {
    /// Parses a soil type from a string.
    ///
    /// Matching is case-insensitive. Unknown values map to `Other`, which
    /// scores in the lowest permeability bracket and infiltrates at the
    /// default rate.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sandy" => Self::Sandy,
            "clay" => Self::Clay,
            "loamy" => Self::Loamy,
            "rocky" => Self::Rocky,
            _ => Self::Other,
        }
    }

    /// Returns the string representation of this soil type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sandy => "sandy",
            Self::Clay => "clay",
            Self::Loamy => "loamy",
            Self::Rocky => "rocky",
            Self::Other => "other",
        }
    }

    /// Returns whether this soil drains freely enough for a recharge pit.
    ///
    /// Only sandy and loamy soils qualify.
    #[must_use]
    pub const fn drains_freely(&self) -> bool {
        matches!(self, Self::Sandy | Self::Loamy)
    }
}

/// Harvesting strategy tag.
///
/// The five structurally different catchment strategies the evaluator
/// compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarvestingStrategy {
    /// Collection from the building roof.
    Rooftop,
    /// Surface runoff from open yard or grounds.
    SurfaceRunoff,
    /// Runoff from parking lots and road surfaces.
    ParkingRoad,
    /// Runoff from agricultural fields.
    Agricultural,
    /// Collection into a pond from its surrounding catchment.
    PondCatchment,
}

impl HarvestingStrategy {
    /// Parses a strategy tag from a string.
    ///
    /// Returns `None` for unrecognized tags. Callers treat an unrecognized
    /// requested strategy as "not rooftop", which falls through to the
    /// ranked best option.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rooftop" => Some(Self::Rooftop),
            "surface_runoff" => Some(Self::SurfaceRunoff),
            "parking_road" => Some(Self::ParkingRoad),
            "agricultural" => Some(Self::Agricultural),
            "pond_catchment" => Some(Self::PondCatchment),
            _ => None,
        }
    }

    /// Returns the string representation of this strategy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rooftop => "rooftop",
            Self::SurfaceRunoff => "surface_runoff",
            Self::ParkingRoad => "parking_road",
            Self::Agricultural => "agricultural",
            Self::PondCatchment => "pond_catchment",
        }
    }
}

/// Catchment surface descriptor passed to the catchment calculator.
///
/// Rooftop strategies carry a roof material; ground strategies carry a
/// surface descriptor. `Unspecified` triggers the strategy default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchmentSurface {
    /// A roof material descriptor.
    Roof(RoofType),
    /// A ground surface descriptor.
    Ground(SurfaceType),
    /// No descriptor supplied.
    Unspecified,
}

/// A resolved geographic location.
///
/// Produced once per request by the geocoding collaborator; immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90..90).
    pub latitude: f64,
    /// Longitude in degrees (-180..180).
    pub longitude: f64,
    /// The resolver's formatted address string.
    pub formatted_address: String,
}

/// Site parameters supplied by the caller for a feasibility estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInput {
    /// Primary (roof) catchment area in square feet.
    pub roof_area_sqft: f64,
    /// Open space available for a recharge structure, in square feet.
    pub available_space_sqft: f64,
    /// Number of people in the household.
    pub household_size: u32,
    /// Roof surface material.
    pub roof_type: RoofType,
    /// Soil classification at the site.
    pub soil_type: SoilType,
}

/// Optional secondary catchment areas for the alternatives evaluation.
///
/// Absent values fall back to the site's primary area or available space,
/// per strategy (the pond catchment has no fallback and is evaluated only
/// when supplied).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAreas {
    /// Parking or road catchment area in square feet.
    pub parking_sqft: Option<f64>,
    /// Agricultural field catchment area in square feet.
    pub agricultural_sqft: Option<f64>,
    /// Pond catchment area in square feet.
    pub pond_catchment_sqft: Option<f64>,
}

/// Collected-water volume estimate for one strategy and catchment area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchmentEstimate {
    /// The harvesting strategy this estimate is for.
    pub strategy: HarvestingStrategy,
    /// Catchment area in square feet, as supplied.
    pub area_sqft: f64,
    /// Catchment area in square meters, rounded to two decimals.
    pub area_sqm: f64,
    /// The runoff coefficient that was applied, rounded to three decimals.
    pub runoff_coefficient: f64,
    /// Annual collection in liters (truncated).
    pub annual_liters: i64,
    /// Monthly collection in liters (annual / 12, truncated).
    pub monthly_liters: i64,
    /// Daily collection in liters (annual / 365, truncated).
    pub daily_liters: i64,
}

/// A ranked harvesting alternative: a catchment estimate with rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestingAlternative {
    /// The volume estimate for this strategy.
    pub estimate: CatchmentEstimate,
    /// Human-readable rationale for this strategy.
    pub rationale: String,
}

/// Estimated rainfall for a location.
///
/// Derived solely from latitude; always produces a usable estimate even
/// absent live weather data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallProfile {
    /// Estimated annual rainfall in millimeters.
    pub annual_mm: f64,
    /// Monthly rainfall distribution in millimeters, January first.
    pub monthly_mm: [u32; 12],
}

/// Qualitative feasibility rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeasibilityRating {
    /// Score at or above 80.
    HighlyRecommended,
    /// Score at or above 60.
    Recommended,
    /// Score at or above 40.
    ModeratelyFeasible,
    /// Score below 40.
    NotRecommended,
}

impl FeasibilityRating {
    /// Returns the display label for this rating.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Recommended => "Recommended",
            Self::ModeratelyFeasible => "Moderately Feasible",
            Self::NotRecommended => "Not Recommended",
        }
    }

    /// Returns the tone tag for this rating ("positive", "moderate",
    /// "negative").
    #[must_use]
    pub const fn tone(&self) -> &'static str {
        match self {
            Self::HighlyRecommended | Self::Recommended => "positive",
            Self::ModeratelyFeasible => "moderate",
            Self::NotRecommended => "negative",
        }
    }
}

/// Composite feasibility verdict.
///
/// The score is the sum of four independent sub-scores (area, space, soil,
/// rainfall); reasons are appended in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityVerdict {
    /// Composite score in [20, 100].
    pub score: u8,
    /// Qualitative rating derived from the score.
    pub rating: FeasibilityRating,
    /// One rationale string per sub-score, in evaluation order.
    pub reasons: Vec<String>,
}

/// Recharge structure type.
///
/// Shared between the recharge designer and the cost analyzer so the cost
/// table lookup is typed rather than parsed out of a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Square recharge pit.
    Pit,
    /// Long narrow recharge trench.
    Trench,
    /// Deep circular recharge shaft.
    Shaft,
}

impl StructureKind {
    /// Returns the display label for this structure.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pit => "Recharge Pit",
            Self::Trench => "Recharge Trench",
            Self::Shaft => "Recharge Shaft",
        }
    }
}

/// Physical dimensions of a recharge structure.
///
/// Carries numeric meters throughout; presentation formatting happens at
/// the API boundary. `volume_m3` is the required daily recharge volume the
/// structure was sized for, not the as-built excavation volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StructureDimensions {
    /// Rectangular footprint (pit, trench).
    Rectangular {
        /// Length in meters.
        length_m: f64,
        /// Width in meters.
        width_m: f64,
        /// Depth in meters.
        depth_m: f64,
        /// Required daily recharge volume in cubic meters.
        volume_m3: f64,
    },
    /// Circular footprint (shaft).
    Circular {
        /// Diameter in meters.
        diameter_m: f64,
        /// Depth in meters.
        depth_m: f64,
        /// Required daily recharge volume in cubic meters.
        volume_m3: f64,
    },
}

impl StructureDimensions {
    /// Returns the required daily recharge volume in cubic meters.
    #[must_use]
    pub const fn volume_m3(&self) -> f64 {
        match self {
            Self::Rectangular { volume_m3, .. } | Self::Circular { volume_m3, .. } => *volume_m3,
        }
    }
}

/// A recommended recharge structure design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargeDesign {
    /// The selected structure type.
    pub kind: StructureKind,
    /// Computed physical dimensions.
    pub dimensions: StructureDimensions,
    /// The soil infiltration rate used, in mm/hr.
    pub infiltration_rate_mm_hr: u32,
    /// Required daily recharge capacity in liters (truncated).
    pub daily_recharge_liters: i64,
}

/// Regional cost multipliers and currency for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalPricing {
    /// ISO-style country code (e.g. "US", "IN").
    pub country: String,
    /// Multiplier applied to the structure base cost.
    pub base_cost_multiplier: f64,
    /// Multiplier applied to the labor cost.
    pub labor_cost_multiplier: f64,
    /// Multiplier applied to the material (volume) cost.
    pub material_cost_multiplier: f64,
    /// Currency code (e.g. "USD").
    pub currency: String,
    /// Currency symbol (e.g. "$").
    pub currency_symbol: String,
}

impl RegionalPricing {
    /// Returns the built-in default pricing for a country code.
    ///
    /// Unknown codes fall back to the US row (all multipliers 1.0, USD).
    /// A missing country is a fallback, never an error.
    #[must_use]
    pub fn default_for_country(country_code: &str) -> Self {
        let (base, labor, material, currency, symbol): (f64, f64, f64, &str, &str) =
            match country_code {
                "IN" => (0.3, 0.2, 0.4, "INR", "₹"),
                "GB" => (1.2, 1.3, 1.1, "GBP", "£"),
                "EU" | "DE" => (1.1, 1.2, 1.0, "EUR", "€"),
                "AU" => (1.3, 1.4, 1.2, "AUD", "A$"),
                "CA" => (1.1, 1.2, 1.1, "CAD", "C$"),
                _ => (1.0, 1.0, 1.0, "USD", "$"),
            };
        Self {
            country: country_code.to_string(),
            base_cost_multiplier: base,
            labor_cost_multiplier: labor,
            material_cost_multiplier: material,
            currency: currency.to_string(),
            currency_symbol: symbol.to_string(),
        }
    }
}

/// Payback period for a cost analysis.
///
/// Savings at or below zero yield `Infinite`, a distinct non-numeric
/// marker; the analyzer never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaybackPeriod {
    /// Finite payback, in years (rounded to one decimal).
    Years(f64),
    /// Savings never recover the installation cost.
    Infinite,
}

impl Serialize for PaybackPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Years(years) => serializer.serialize_f64(*years),
            Self::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

/// One itemized line in a cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLineItem {
    /// Line item label.
    pub item: String,
    /// Line item cost in the analysis currency (truncated).
    pub cost: i64,
}

/// Region-adjusted cost and payback analysis for a recharge structure.
///
/// Breakdown line items are fixed fractions of the base cost and are
/// intentionally not reconciled to the installation total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysis {
    /// One-time installation cost (truncated).
    pub installation_cost: i64,
    /// Annual maintenance cost, 5% of installation (truncated).
    pub annual_maintenance: i64,
    /// Annual water-bill savings (truncated).
    pub annual_water_savings: i64,
    /// Years for savings to equal installation cost.
    pub payback_period_years: PaybackPeriod,
    /// Currency code of all monetary values.
    pub currency: String,
    /// Currency symbol of all monetary values.
    pub currency_symbol: String,
    /// Itemized cost breakdown (five line items).
    pub cost_breakdown: Vec<CostLineItem>,
}

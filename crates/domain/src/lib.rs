// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod alternatives;
mod catchment;
mod config;
mod cost;
mod error;
mod feasibility;
mod rainfall;
mod recharge;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use alternatives::{AlternativesOutcome, evaluate_alternatives};
pub use catchment::calculate_for_strategy;
pub use cost::analyze_cost;
pub use feasibility::assess_feasibility;
pub use rainfall::{WeatherReport, annual_rainfall_for_latitude, estimate_rainfall, weather_report};
pub use recharge::design_recharge_structure;

// Re-export public types
pub use config::{
    EngineConfig, InfiltrationTable, RoofRunoffTable, SQFT_TO_SQM, StructureCost,
    StructureCostTable, SurfaceRunoffTable, WaterRateTable,
};
pub use error::DomainError;
pub use types::{
    CatchmentEstimate, CatchmentSurface, CostAnalysis, CostLineItem, FeasibilityRating,
    FeasibilityVerdict, GeoPoint, HarvestingAlternative, HarvestingStrategy, PaybackPeriod,
    RainfallProfile, RechargeDesign, RegionalPricing, RoofType, SecondaryAreas, SiteInput,
    SoilType, StructureDimensions, StructureKind, SurfaceType,
};
pub use validation::{
    validate_coefficient_override, validate_coordinates, validate_secondary_areas,
    validate_site_input,
};

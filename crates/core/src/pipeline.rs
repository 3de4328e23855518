// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The estimation pipeline.
//!
//! Composes the estimation components into one synchronous, deterministic
//! call: rainfall feeds the alternatives evaluation and the feasibility
//! score, the selected primary alternative feeds the recharge designer,
//! and the design feeds the cost analyzer. The pipeline performs no I/O
//! and holds no state across invocations.

use rainharvest_domain::{
    AlternativesOutcome, CostAnalysis, EngineConfig, FeasibilityVerdict, HarvestingAlternative,
    HarvestingStrategy, RechargeDesign, RegionalPricing, WeatherReport, analyze_cost,
    assess_feasibility, design_recharge_structure, evaluate_alternatives, weather_report,
};

use crate::outcome::{CollectionPotential, EstimateOutcome};
use crate::params::EstimateParams;
use crate::selection::select_primary;

/// Runs the full estimation pipeline for one request.
///
/// The pipeline is total over validated params: every branch of every
/// component is covered, unknown categorical inputs resolve to documented
/// defaults, and a site where no strategy qualifies still yields a
/// complete outcome with zero collection and infinite payback.
#[must_use]
pub fn run_estimation(
    config: &EngineConfig,
    params: &EstimateParams,
    pricing: &RegionalPricing,
) -> EstimateOutcome {
    let weather: WeatherReport =
        weather_report(params.location.latitude, params.location.longitude);
    let annual_rainfall_mm: f64 = weather.rainfall.annual_mm;

    let alternatives: AlternativesOutcome = evaluate_alternatives(
        config,
        &params.site,
        &params.secondary,
        annual_rainfall_mm,
    );

    let primary: Option<&HarvestingAlternative> =
        select_primary(params.requested_strategy, &alternatives);
    let collection_potential: CollectionPotential = CollectionPotential::from_primary(primary);

    // The feasibility area is the primary's catchment area, except that a
    // rooftop primary keeps the site's roof area figure.
    let feasibility_area_sqft: f64 = primary.map_or(params.site.roof_area_sqft, |alternative| {
        if alternative.estimate.strategy == HarvestingStrategy::Rooftop {
            params.site.roof_area_sqft
        } else {
            alternative.estimate.area_sqft
        }
    });

    let feasibility: FeasibilityVerdict = assess_feasibility(
        feasibility_area_sqft,
        params.site.available_space_sqft,
        params.site.household_size,
        params.site.soil_type,
        annual_rainfall_mm,
    );

    let recommendation: RechargeDesign = design_recharge_structure(
        config,
        params.site.available_space_sqft,
        params.site.soil_type,
        collection_potential.annual_liters,
    );

    let cost: CostAnalysis = analyze_cost(
        config,
        recommendation.kind,
        &recommendation.dimensions,
        collection_potential.annual_liters,
        pricing,
    );

    EstimateOutcome {
        weather,
        alternatives,
        collection_potential,
        feasibility,
        recommendation,
        cost,
    }
}

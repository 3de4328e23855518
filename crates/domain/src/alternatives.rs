// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation and ranking of every applicable harvesting strategy.
//!
//! A strategy is evaluated only when its governing area is positive;
//! strategies without an area are omitted entirely rather than reported
//! with zero values. Results are ranked by annual liters, descending, with
//! a stable sort so equal-volume strategies keep evaluation order.

use serde::{Deserialize, Serialize};

use crate::catchment::calculate_for_strategy;
use crate::config::EngineConfig;
use crate::types::{
    CatchmentEstimate, CatchmentSurface, HarvestingAlternative, HarvestingStrategy,
    SecondaryAreas, SiteInput, SurfaceType,
};

/// The ranked alternatives for a site, with the best option pulled out.
///
/// Recomputation is cheap and side-effect-free, so the outcome is built
/// fresh per request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativesOutcome {
    /// All applicable alternatives, ranked by annual liters descending.
    pub alternatives: Vec<HarvestingAlternative>,
    /// The highest-ranked alternative, absent when nothing qualifies.
    pub best_option: Option<HarvestingAlternative>,
}

/// Evaluates every applicable harvesting strategy for a site.
///
/// Governing areas per strategy:
/// - rooftop: the site's roof area
/// - surface runoff: the available recharge space
/// - parking/road: the parking area, defaulting to the roof area
/// - agricultural: the agricultural area, defaulting to the available
///   space
/// - pond catchment: only when a pond catchment area is supplied
#[must_use]
pub fn evaluate_alternatives(
    config: &EngineConfig,
    site: &SiteInput,
    secondary: &SecondaryAreas,
    annual_rainfall_mm: f64,
) -> AlternativesOutcome {
    let mut alternatives: Vec<HarvestingAlternative> = Vec::new();

    if site.roof_area_sqft > 0.0 {
        alternatives.push(evaluate(
            config,
            HarvestingStrategy::Rooftop,
            site.roof_area_sqft,
            CatchmentSurface::Roof(site.roof_type),
            annual_rainfall_mm,
            "Rooftop collection using roof area and roof runoff coefficient.",
        ));
    }

    if site.available_space_sqft > 0.0 {
        alternatives.push(evaluate(
            config,
            HarvestingStrategy::SurfaceRunoff,
            site.available_space_sqft,
            CatchmentSurface::Ground(SurfaceType::SoilBare),
            annual_rainfall_mm,
            "Surface runoff from open yard/grounds; coefficient depends on surface (gravel/grass/paved).",
        ));
    }

    let parking_sqft: f64 = secondary.parking_sqft.unwrap_or(site.roof_area_sqft);
    if parking_sqft > 0.0 {
        alternatives.push(evaluate(
            config,
            HarvestingStrategy::ParkingRoad,
            parking_sqft,
            CatchmentSurface::Ground(SurfaceType::Paved),
            annual_rainfall_mm,
            "Parking/road (impervious) areas, high runoff coefficient.",
        ));
    }

    let agricultural_sqft: f64 = secondary
        .agricultural_sqft
        .unwrap_or(site.available_space_sqft);
    if agricultural_sqft > 0.0 {
        alternatives.push(evaluate(
            config,
            HarvestingStrategy::Agricultural,
            agricultural_sqft,
            CatchmentSurface::Ground(SurfaceType::Agricultural),
            annual_rainfall_mm,
            "Agricultural catchments have moderate runoff depending on crop and tillage.",
        ));
    }

    if let Some(pond_sqft) = secondary.pond_catchment_sqft
        && pond_sqft > 0.0
    {
        alternatives.push(evaluate(
            config,
            HarvestingStrategy::PondCatchment,
            pond_sqft,
            CatchmentSurface::Ground(SurfaceType::Gravel),
            annual_rainfall_mm,
            "Pond catchment area; useful to store and slowly recharge.",
        ));
    }

    // Stable sort: equal annual volumes keep evaluation order.
    alternatives.sort_by(|a, b| b.estimate.annual_liters.cmp(&a.estimate.annual_liters));

    let best_option: Option<HarvestingAlternative> = alternatives.first().cloned();

    AlternativesOutcome {
        alternatives,
        best_option,
    }
}

fn evaluate(
    config: &EngineConfig,
    strategy: HarvestingStrategy,
    area_sqft: f64,
    surface: CatchmentSurface,
    annual_rainfall_mm: f64,
    rationale: &str,
) -> HarvestingAlternative {
    let estimate: CatchmentEstimate =
        calculate_for_strategy(config, strategy, area_sqft, surface, annual_rainfall_mm, None);
    HarvestingAlternative {
        estimate,
        rationale: rationale.to_string(),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collected-water volume calculation for a single catchment.
//!
//! One millimeter of rain over one square meter is one liter, so
//! `area_m2 x rainfall_mm x coefficient` yields liters per year directly.
//! All liter outputs are truncated, not rounded: the estimate is
//! deliberately conservative.

use crate::config::{EngineConfig, SQFT_TO_SQM};
use crate::types::{CatchmentEstimate, CatchmentSurface, HarvestingStrategy, SurfaceType};

/// Calculates the collection estimate for one strategy and catchment area.
///
/// A zero area yields zero collection, not an error; negative areas are a
/// caller error and are not validated here.
///
/// Coefficient resolution, when no override is supplied:
/// - rooftop: roof material table, or the unknown-roof default
/// - surface runoff / pond catchment: surface table, or the generic
///   surface default
/// - parking/road: surface table, or the parking default (parking is
///   assumed more impervious than the generic default)
/// - agricultural: the surface table's agricultural entry takes
///   precedence over the agricultural fallback
#[must_use]
pub fn calculate_for_strategy(
    config: &EngineConfig,
    strategy: HarvestingStrategy,
    area_sqft: f64,
    surface: CatchmentSurface,
    annual_rainfall_mm: f64,
    coefficient_override: Option<f64>,
) -> CatchmentEstimate {
    let coefficient: f64 = coefficient_override
        .unwrap_or_else(|| resolve_coefficient(config, strategy, surface));

    let area_sqm: f64 = area_sqft * SQFT_TO_SQM;
    let annual_collection: f64 = area_sqm * annual_rainfall_mm * coefficient;
    let annual_liters: i64 = truncate_liters(annual_collection);

    CatchmentEstimate {
        strategy,
        area_sqft,
        area_sqm: round_to(area_sqm, 2),
        runoff_coefficient: round_to(coefficient, 3),
        annual_liters,
        monthly_liters: annual_liters / 12,
        daily_liters: annual_liters / 365,
    }
}

/// Resolves the runoff coefficient for a strategy and surface descriptor.
fn resolve_coefficient(
    config: &EngineConfig,
    strategy: HarvestingStrategy,
    surface: CatchmentSurface,
) -> f64 {
    match strategy {
        HarvestingStrategy::Rooftop => match surface {
            CatchmentSurface::Roof(roof) => config.roof_coefficient(roof),
            CatchmentSurface::Ground(_) | CatchmentSurface::Unspecified => {
                config.roof_runoff.unknown
            }
        },
        HarvestingStrategy::SurfaceRunoff | HarvestingStrategy::PondCatchment => match surface {
            CatchmentSurface::Ground(ground) => config
                .surface_coefficient(ground)
                .unwrap_or(config.surface_default),
            CatchmentSurface::Roof(_) | CatchmentSurface::Unspecified => config.surface_default,
        },
        HarvestingStrategy::ParkingRoad => match surface {
            CatchmentSurface::Ground(ground) => config
                .surface_coefficient(ground)
                .unwrap_or(config.parking_default),
            CatchmentSurface::Roof(_) | CatchmentSurface::Unspecified => config.parking_default,
        },
        // The surface table's agricultural entry takes precedence over the
        // fallback, independent of the supplied descriptor.
        HarvestingStrategy::Agricultural => config
            .surface_coefficient(SurfaceType::Agricultural)
            .unwrap_or(config.agricultural_fallback),
    }
}

/// Truncates a liter volume toward zero.
#[allow(clippy::cast_possible_truncation)]
fn truncate_liters(value: f64) -> i64 {
    value.trunc() as i64
}

/// Rounds a value to the given number of decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor: f64 = 10_f64.powi(i32::try_from(decimals).unwrap_or(0));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RoofType, SurfaceType};

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_zero_area_collects_nothing_for_every_roof_type() {
        for roof in [
            RoofType::Concrete,
            RoofType::Tile,
            RoofType::Metal,
            RoofType::Asbestos,
            RoofType::Other,
        ] {
            let estimate: CatchmentEstimate = calculate_for_strategy(
                &config(),
                HarvestingStrategy::Rooftop,
                0.0,
                CatchmentSurface::Roof(roof),
                900.0,
                None,
            );
            assert_eq!(estimate.annual_liters, 0);
            assert_eq!(estimate.monthly_liters, 0);
            assert_eq!(estimate.daily_liters, 0);
        }
    }

    #[test]
    fn test_rooftop_concrete_reference_volume() {
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::Rooftop,
            1000.0,
            CatchmentSurface::Roof(RoofType::Concrete),
            900.0,
            None,
        );
        // 1000 sqft -> 92.903 m2; 92.903 * 900 * 0.85 = 71070.795
        assert_eq!(estimate.annual_liters, 71_070);
        assert_eq!(estimate.monthly_liters, 71_070 / 12);
        assert_eq!(estimate.daily_liters, 71_070 / 365);
        assert!((estimate.area_sqm - 92.9).abs() < 0.01);
        assert!((estimate.runoff_coefficient - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 100 sqft of metal roof at 1500 mm: 9.2903 * 1500 * 0.9 = 12541.905
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::Rooftop,
            100.0,
            CatchmentSurface::Roof(RoofType::Metal),
            1500.0,
            None,
        );
        assert_eq!(estimate.annual_liters, 12_541);
        assert_eq!(estimate.monthly_liters, 1_045);
        assert_eq!(estimate.daily_liters, 34);
    }

    #[test]
    fn test_unknown_roof_material_uses_default() {
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::Rooftop,
            500.0,
            CatchmentSurface::Roof(RoofType::Other),
            800.0,
            None,
        );
        assert!((estimate.runoff_coefficient - 0.80).abs() < f64::EPSILON);
    }

    #[test]
    fn test_surface_runoff_known_and_unknown_surfaces() {
        let paved: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::SurfaceRunoff,
            200.0,
            CatchmentSurface::Ground(SurfaceType::Paved),
            800.0,
            None,
        );
        assert!((paved.runoff_coefficient - 0.95).abs() < f64::EPSILON);

        let unknown: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::SurfaceRunoff,
            200.0,
            CatchmentSurface::Ground(SurfaceType::Other),
            800.0,
            None,
        );
        assert!((unknown.runoff_coefficient - 0.50).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parking_default_is_more_impervious_than_generic() {
        let parking: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::ParkingRoad,
            200.0,
            CatchmentSurface::Ground(SurfaceType::Other),
            800.0,
            None,
        );
        assert!((parking.runoff_coefficient - 0.70).abs() < f64::EPSILON);

        let parking_gravel: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::ParkingRoad,
            200.0,
            CatchmentSurface::Ground(SurfaceType::Gravel),
            800.0,
            None,
        );
        assert!((parking_gravel.runoff_coefficient - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn test_agricultural_surface_table_takes_precedence() {
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::Agricultural,
            300.0,
            CatchmentSurface::Ground(SurfaceType::Agricultural),
            800.0,
            None,
        );
        assert!((estimate.runoff_coefficient - 0.50).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pond_catchment_uses_surface_table() {
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::PondCatchment,
            400.0,
            CatchmentSurface::Ground(SurfaceType::Gravel),
            800.0,
            None,
        );
        assert!((estimate.runoff_coefficient - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coefficient_override_wins() {
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::Rooftop,
            1000.0,
            CatchmentSurface::Roof(RoofType::Concrete),
            900.0,
            Some(0.5),
        );
        assert!((estimate.runoff_coefficient - 0.5).abs() < f64::EPSILON);
        // 92.903 * 900 * 0.5 = 41806.35
        assert_eq!(estimate.annual_liters, 41_806);
    }

    #[test]
    fn test_monthly_and_daily_are_integer_divisions_of_annual() {
        let estimate: CatchmentEstimate = calculate_for_strategy(
            &config(),
            HarvestingStrategy::SurfaceRunoff,
            777.0,
            CatchmentSurface::Ground(SurfaceType::Grass),
            1234.0,
            None,
        );
        assert_eq!(estimate.monthly_liters, estimate.annual_liters / 12);
        assert_eq!(estimate.daily_liters, estimate.annual_liters / 365);
    }
}

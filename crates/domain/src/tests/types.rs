// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{
    FeasibilityRating, HarvestingStrategy, RegionalPricing, RoofType, SoilType, StructureDimensions,
    StructureKind, SurfaceType,
};

#[test]
fn test_roof_type_parse_is_total() {
    assert_eq!(RoofType::parse("concrete"), RoofType::Concrete);
    assert_eq!(RoofType::parse("TILE"), RoofType::Tile);
    assert_eq!(RoofType::parse("Metal"), RoofType::Metal);
    assert_eq!(RoofType::parse("asbestos"), RoofType::Asbestos);
    assert_eq!(RoofType::parse("thatch"), RoofType::Other);
    assert_eq!(RoofType::parse(""), RoofType::Other);
}

#[test]
fn test_surface_type_parse_is_total() {
    assert_eq!(SurfaceType::parse("paved"), SurfaceType::Paved);
    assert_eq!(SurfaceType::parse("soil_bare"), SurfaceType::SoilBare);
    assert_eq!(SurfaceType::parse("cobblestone"), SurfaceType::Other);
}

#[test]
fn test_soil_type_parse_is_total() {
    assert_eq!(SoilType::parse("sandy"), SoilType::Sandy);
    assert_eq!(SoilType::parse("CLAY"), SoilType::Clay);
    assert_eq!(SoilType::parse("peat"), SoilType::Other);
}

#[test]
fn test_soil_drainage_classification() {
    assert!(SoilType::Sandy.drains_freely());
    assert!(SoilType::Loamy.drains_freely());
    assert!(!SoilType::Clay.drains_freely());
    assert!(!SoilType::Rocky.drains_freely());
    assert!(!SoilType::Other.drains_freely());
}

#[test]
fn test_harvesting_strategy_parse_rejects_unknown() {
    assert_eq!(
        HarvestingStrategy::parse("rooftop"),
        Some(HarvestingStrategy::Rooftop)
    );
    assert_eq!(
        HarvestingStrategy::parse("pond_catchment"),
        Some(HarvestingStrategy::PondCatchment)
    );
    assert_eq!(HarvestingStrategy::parse("greenhouse"), None);
}

#[test]
fn test_strategy_round_trips_through_as_str() {
    for strategy in [
        HarvestingStrategy::Rooftop,
        HarvestingStrategy::SurfaceRunoff,
        HarvestingStrategy::ParkingRoad,
        HarvestingStrategy::Agricultural,
        HarvestingStrategy::PondCatchment,
    ] {
        assert_eq!(HarvestingStrategy::parse(strategy.as_str()), Some(strategy));
    }
}

#[test]
fn test_structure_kind_labels() {
    assert_eq!(StructureKind::Pit.label(), "Recharge Pit");
    assert_eq!(StructureKind::Trench.label(), "Recharge Trench");
    assert_eq!(StructureKind::Shaft.label(), "Recharge Shaft");
}

#[test]
fn test_structure_dimensions_volume_accessor() {
    let rectangular: StructureDimensions = StructureDimensions::Rectangular {
        length_m: 2.0,
        width_m: 2.0,
        depth_m: 3.0,
        volume_m3: 1.5,
    };
    assert!((rectangular.volume_m3() - 1.5).abs() < f64::EPSILON);

    let circular: StructureDimensions = StructureDimensions::Circular {
        diameter_m: 1.2,
        depth_m: 4.0,
        volume_m3: 0.7,
    };
    assert!((circular.volume_m3() - 0.7).abs() < f64::EPSILON);
}

#[test]
fn test_feasibility_rating_tones() {
    assert_eq!(FeasibilityRating::HighlyRecommended.tone(), "positive");
    assert_eq!(FeasibilityRating::Recommended.tone(), "positive");
    assert_eq!(FeasibilityRating::ModeratelyFeasible.tone(), "moderate");
    assert_eq!(FeasibilityRating::NotRecommended.tone(), "negative");
}

#[test]
fn test_default_pricing_known_countries() {
    let india: RegionalPricing = RegionalPricing::default_for_country("IN");
    assert!((india.base_cost_multiplier - 0.3).abs() < f64::EPSILON);
    assert!((india.labor_cost_multiplier - 0.2).abs() < f64::EPSILON);
    assert!((india.material_cost_multiplier - 0.4).abs() < f64::EPSILON);
    assert_eq!(india.currency, "INR");
    assert_eq!(india.currency_symbol, "₹");

    let germany: RegionalPricing = RegionalPricing::default_for_country("DE");
    let europe: RegionalPricing = RegionalPricing::default_for_country("EU");
    assert_eq!(germany.currency, europe.currency);
    assert!((germany.base_cost_multiplier - europe.base_cost_multiplier).abs() < f64::EPSILON);
}

#[test]
fn test_default_pricing_unknown_country_falls_back_to_us_row() {
    let unknown: RegionalPricing = RegionalPricing::default_for_country("ZZ");
    assert_eq!(unknown.country, "ZZ");
    assert!((unknown.base_cost_multiplier - 1.0).abs() < f64::EPSILON);
    assert_eq!(unknown.currency, "USD");
    assert_eq!(unknown.currency_symbol, "$");
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures for the pipeline tests.

use rainharvest_domain::{
    GeoPoint, HarvestingStrategy, RegionalPricing, RoofType, SecondaryAreas, SiteInput, SoilType,
};

use crate::params::EstimateParams;

/// The reference scenario: latitude 15 (900 mm band), a 1000 sqft
/// concrete roof, 250 sqft of space, sandy soil, four people.
pub fn reference_params() -> EstimateParams {
    EstimateParams {
        location: GeoPoint {
            latitude: 15.0,
            longitude: 77.0,
            formatted_address: String::from("Reference Site, IN"),
        },
        site: SiteInput {
            roof_area_sqft: 1000.0,
            available_space_sqft: 250.0,
            household_size: 4,
            roof_type: RoofType::Concrete,
            soil_type: SoilType::Sandy,
        },
        secondary: SecondaryAreas::default(),
        requested_strategy: Some(HarvestingStrategy::Rooftop),
    }
}

pub fn india_pricing() -> RegionalPricing {
    RegionalPricing::default_for_country("IN")
}

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
    clippy::all
)]

mod error;
mod geocode;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use geocode::{GeocodeError, Geocoder};
pub use handlers::{DAILY_DEMAND_PER_PERSON_LITERS, calculate, calculation_history, locate};
pub use request_response::{
    AlternativeInfo, CalculateRequest, CalculateResponse, CollectionPotentialInfo,
    CostAnalysisInfo, CostLineItemInfo, DimensionsInfo, FeasibilityInfo, HistoryEntryInfo,
    HistoryRequest, HistoryResponse, LocationInfo, LocationRequest, LocationResponse,
    RegionalPricingInfo, SystemRecommendationInfo, WaterDemandInfo, WeatherInfo,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs mapping between Diesel and the domain types.

use diesel::prelude::*;
use rainharvest_domain::RegionalPricing;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::{calculations, regional_pricing};

/// A regional pricing row as stored.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct PricingRow {
    /// Row identifier.
    pub id: i64,
    /// Country code.
    pub country: String,
    /// Base cost multiplier.
    pub base_cost_multiplier: f64,
    /// Labor cost multiplier.
    pub labor_cost_multiplier: f64,
    /// Material cost multiplier.
    pub material_cost_multiplier: f64,
    /// Currency code.
    pub currency: String,
    /// Currency symbol.
    pub currency_symbol: String,
    /// Last update timestamp (RFC 3339).
    pub updated_at: String,
}

impl PricingRow {
    /// Converts this row into the domain pricing record.
    #[must_use]
    pub fn into_domain(self) -> RegionalPricing {
        RegionalPricing {
            country: self.country,
            base_cost_multiplier: self.base_cost_multiplier,
            labor_cost_multiplier: self.labor_cost_multiplier,
            material_cost_multiplier: self.material_cost_multiplier,
            currency: self.currency,
            currency_symbol: self.currency_symbol,
        }
    }
}

/// Insertable pricing row.
#[derive(Debug, Insertable)]
#[diesel(table_name = regional_pricing)]
pub struct NewPricingRow<'a> {
    /// Country code.
    pub country: &'a str,
    /// Base cost multiplier.
    pub base_cost_multiplier: f64,
    /// Labor cost multiplier.
    pub labor_cost_multiplier: f64,
    /// Material cost multiplier.
    pub material_cost_multiplier: f64,
    /// Currency code.
    pub currency: &'a str,
    /// Currency symbol.
    pub currency_symbol: &'a str,
    /// Last update timestamp (RFC 3339).
    pub updated_at: &'a str,
}

/// A new calculation record, as handed over by the API boundary.
///
/// The JSON snapshot fields hold the engine's output verbatim; the
/// creation timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCalculationRecord {
    /// Opaque caller-supplied user key.
    pub user_ref: String,
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
    /// JSON snapshot of the collection potential.
    pub collection_potential: String,
    /// Composite feasibility score.
    pub feasibility_score: i32,
    /// JSON snapshot of the recommended recharge system.
    pub recommended_system: String,
    /// JSON snapshot of the cost analysis.
    pub cost_analysis: String,
    /// JSON snapshot of the regional pricing used.
    pub regional_pricing: String,
}

/// Insertable calculation row, timestamp included.
#[derive(Debug, Insertable)]
#[diesel(table_name = calculations)]
pub(crate) struct InsertCalculationRow<'a> {
    pub user_ref: &'a str,
    pub location: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub roof_area_sqft: f64,
    pub roof_type: &'a str,
    pub soil_type: &'a str,
    pub available_space_sqft: f64,
    pub num_people: i32,
    pub annual_rainfall_mm: f64,
    pub collection_potential: &'a str,
    pub feasibility_score: i32,
    pub recommended_system: &'a str,
    pub cost_analysis: &'a str,
    pub regional_pricing: &'a str,
    pub created_at: &'a str,
}

/// A stored calculation record, as read back for history listings.
#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct CalculationRecordData {
    /// Row identifier.
    pub id: i64,
    /// Opaque caller-supplied user key.
    pub user_ref: String,
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
    /// JSON snapshot of the collection potential.
    pub collection_potential: String,
    /// Composite feasibility score.
    pub feasibility_score: i32,
    /// JSON snapshot of the recommended recharge system.
    pub recommended_system: String,
    /// JSON snapshot of the cost analysis.
    pub cost_analysis: String,
    /// JSON snapshot of the regional pricing used.
    pub regional_pricing: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

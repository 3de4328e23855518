// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rainharvest_domain::{
    AlternativesOutcome, CostAnalysis, FeasibilityVerdict, HarvestingAlternative,
    HarvestingStrategy, RechargeDesign, WeatherReport,
};
use serde::{Deserialize, Serialize};

/// The collection figures for the selected primary alternative.
///
/// All-zero with no strategy when no alternative qualifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPotential {
    /// Annual collection in liters.
    pub annual_liters: i64,
    /// Monthly collection in liters.
    pub monthly_liters: i64,
    /// Daily collection in liters.
    pub daily_liters: i64,
    /// The runoff coefficient the primary estimate used.
    pub used_coefficient: Option<f64>,
    /// The strategy of the primary alternative.
    pub harvesting_type: Option<HarvestingStrategy>,
}

impl CollectionPotential {
    /// Builds the collection potential from the selected primary
    /// alternative, or an empty record when none qualifies.
    #[must_use]
    pub fn from_primary(primary: Option<&HarvestingAlternative>) -> Self {
        primary.map_or(
            Self {
                annual_liters: 0,
                monthly_liters: 0,
                daily_liters: 0,
                used_coefficient: None,
                harvesting_type: None,
            },
            |alternative| Self {
                annual_liters: alternative.estimate.annual_liters,
                monthly_liters: alternative.estimate.monthly_liters,
                daily_liters: alternative.estimate.daily_liters,
                used_coefficient: Some(alternative.estimate.runoff_coefficient),
                harvesting_type: Some(alternative.estimate.strategy),
            },
        )
    }
}

/// The full result of one estimation run.
///
/// Every field is freshly constructed per invocation; nothing is shared or
/// mutated after construction, so identical params always produce an equal
/// outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateOutcome {
    /// Weather summary, including the rainfall estimate.
    pub weather: WeatherReport,
    /// All applicable alternatives, ranked, with the best option.
    pub alternatives: AlternativesOutcome,
    /// Collection figures for the selected primary alternative.
    pub collection_potential: CollectionPotential,
    /// Composite feasibility verdict.
    pub feasibility: FeasibilityVerdict,
    /// Recommended recharge structure design.
    pub recommendation: RechargeDesign,
    /// Region-adjusted cost and payback analysis.
    pub cost: CostAnalysis,
}

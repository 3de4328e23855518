// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Region-adjusted cost and payback analysis for a recharge structure.
//!
//! All monetary outputs are truncated to whole currency units. The
//! breakdown line items are fixed fractions of the adjusted base cost and
//! do not reconcile to the installation total; they are illustrative.

use crate::config::{EngineConfig, StructureCost};
use crate::types::{
    CostAnalysis, CostLineItem, PaybackPeriod, RegionalPricing, StructureDimensions, StructureKind,
};

/// Labor cost as a fraction of the adjusted base cost.
const LABOR_FRACTION: f64 = 0.4;
/// Annual maintenance as a fraction of the installation cost.
const MAINTENANCE_FRACTION: f64 = 0.05;

/// Analyzes installation cost, savings, and payback for a structure.
///
/// The structure kind selects the base cost row directly; the dimension
/// record supplies the sized recharge volume numerically. Regional
/// multipliers scale base, material, and labor costs independently, and
/// the water tariff is resolved from the pricing currency (unknown
/// currencies use the default rate).
///
/// Payback is the infinite sentinel when annual savings are not positive;
/// the analyzer never divides by zero.
#[must_use]
pub fn analyze_cost(
    config: &EngineConfig,
    kind: StructureKind,
    dimensions: &StructureDimensions,
    annual_collection_liters: i64,
    pricing: &RegionalPricing,
) -> CostAnalysis {
    let costs: StructureCost = config.structure_cost(kind);
    let volume_m3: f64 = dimensions.volume_m3();

    let base_cost: f64 = costs.base_cost * pricing.base_cost_multiplier;
    let volume_cost: f64 = costs.per_cubic_meter * volume_m3 * pricing.material_cost_multiplier;
    let labor_cost: f64 = base_cost * LABOR_FRACTION * pricing.labor_cost_multiplier;

    let installation_cost: f64 = base_cost + volume_cost + labor_cost;
    let maintenance_annual: f64 = installation_cost * MAINTENANCE_FRACTION;

    let water_rate: f64 = config.water_rate(&pricing.currency);
    #[allow(clippy::cast_precision_loss)]
    let annual_savings: f64 = (annual_collection_liters as f64 / 1000.0) * water_rate;

    let payback_period_years: PaybackPeriod = if annual_savings > 0.0 {
        PaybackPeriod::Years(round_to_tenth(installation_cost / annual_savings))
    } else {
        PaybackPeriod::Infinite
    };

    CostAnalysis {
        installation_cost: truncate_currency(installation_cost),
        annual_maintenance: truncate_currency(maintenance_annual),
        annual_water_savings: truncate_currency(annual_savings),
        payback_period_years,
        currency: pricing.currency.clone(),
        currency_symbol: pricing.currency_symbol.clone(),
        cost_breakdown: vec![
            CostLineItem {
                item: String::from("Excavation & Labor"),
                cost: truncate_currency(labor_cost),
            },
            CostLineItem {
                item: String::from("Materials (Gravel, Sand)"),
                cost: truncate_currency(base_cost * 0.3),
            },
            CostLineItem {
                item: String::from("Piping & Fittings"),
                cost: truncate_currency(base_cost * 0.2),
            },
            CostLineItem {
                item: String::from("Miscellaneous"),
                cost: truncate_currency(base_cost * 0.1),
            },
            CostLineItem {
                item: String::from("Additional Volume Cost"),
                cost: truncate_currency(volume_cost),
            },
        ],
    }
}

/// Truncates a monetary value toward zero.
#[allow(clippy::cast_possible_truncation)]
fn truncate_currency(value: f64) -> i64 {
    value.trunc() as i64
}

/// Rounds a value to one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn dimensions(volume_m3: f64) -> StructureDimensions {
        StructureDimensions::Rectangular {
            length_m: 3.0,
            width_m: 1.5,
            depth_m: 2.5,
            volume_m3,
        }
    }

    fn us_pricing() -> RegionalPricing {
        RegionalPricing::default_for_country("US")
    }

    #[test]
    fn test_us_pit_costs() {
        let analysis: CostAnalysis = analyze_cost(
            &config(),
            StructureKind::Pit,
            &dimensions(10.0),
            100_000,
            &us_pricing(),
        );
        // base 200, volume 35*10 = 350, labor 200*0.4 = 80
        assert_eq!(analysis.installation_cost, 630);
        // 630 * 0.05 = 31.5 -> 31
        assert_eq!(analysis.annual_maintenance, 31);
        // 100 * 2.5 = 250
        assert_eq!(analysis.annual_water_savings, 250);
        // 630 / 250 = 2.52 -> 2.5
        assert_eq!(analysis.payback_period_years, PaybackPeriod::Years(2.5));
        assert_eq!(analysis.currency, "USD");
    }

    #[test]
    fn test_regional_multipliers_scale_components() {
        let pricing: RegionalPricing = RegionalPricing::default_for_country("IN");
        let analysis: CostAnalysis = analyze_cost(
            &config(),
            StructureKind::Trench,
            &dimensions(10.0),
            100_000,
            &pricing,
        );
        // base 150*0.3 = 45, volume 30*10*0.4 = 120, labor 45*0.4*0.2 = 3.6
        assert_eq!(analysis.installation_cost, 168);
        // INR water rate 20: 100 * 20 = 2000
        assert_eq!(analysis.annual_water_savings, 2000);
        assert_eq!(analysis.currency, "INR");
        assert_eq!(analysis.currency_symbol, "₹");
        // 168.6 / 2000 = 0.0843 -> 0.1
        assert_eq!(analysis.payback_period_years, PaybackPeriod::Years(0.1));
    }

    #[test]
    fn test_zero_collection_yields_infinite_payback() {
        let analysis: CostAnalysis = analyze_cost(
            &config(),
            StructureKind::Shaft,
            &dimensions(0.0),
            0,
            &us_pricing(),
        );
        assert_eq!(analysis.payback_period_years, PaybackPeriod::Infinite);
        assert_eq!(analysis.annual_water_savings, 0);
        // base 300 + labor 120 survive even with no volume.
        assert_eq!(analysis.installation_cost, 420);
    }

    #[test]
    fn test_unknown_currency_uses_default_water_rate() {
        let pricing: RegionalPricing = RegionalPricing {
            country: String::from("XX"),
            base_cost_multiplier: 1.0,
            labor_cost_multiplier: 1.0,
            material_cost_multiplier: 1.0,
            currency: String::from("XXX"),
            currency_symbol: String::from("?"),
        };
        let analysis: CostAnalysis = analyze_cost(
            &config(),
            StructureKind::Pit,
            &dimensions(1.0),
            100_000,
            &pricing,
        );
        // Default rate 2.5: 100 * 2.5 = 250
        assert_eq!(analysis.annual_water_savings, 250);
    }

    #[test]
    fn test_breakdown_has_five_items_and_is_not_reconciled() {
        let analysis: CostAnalysis = analyze_cost(
            &config(),
            StructureKind::Pit,
            &dimensions(10.0),
            100_000,
            &us_pricing(),
        );
        assert_eq!(analysis.cost_breakdown.len(), 5);
        assert_eq!(analysis.cost_breakdown[0].item, "Excavation & Labor");
        assert_eq!(analysis.cost_breakdown[0].cost, 80);
        assert_eq!(analysis.cost_breakdown[1].cost, 60); // 200 * 0.3
        assert_eq!(analysis.cost_breakdown[2].cost, 40); // 200 * 0.2
        assert_eq!(analysis.cost_breakdown[3].cost, 20); // 200 * 0.1
        assert_eq!(analysis.cost_breakdown[4].cost, 350);
        let breakdown_total: i64 = analysis.cost_breakdown.iter().map(|i| i.cost).sum();
        assert_ne!(breakdown_total, analysis.installation_cost);
    }

    #[test]
    fn test_payback_serializes_infinite_as_string() {
        let json: String = serde_json::to_string(&PaybackPeriod::Infinite).unwrap();
        assert_eq!(json, "\"infinite\"");
        let json: String = serde_json::to_string(&PaybackPeriod::Years(2.5)).unwrap();
        assert_eq!(json, "2.5");
    }
}

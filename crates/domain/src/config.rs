// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Immutable coefficient and rate tables for the estimation engine.
//!
//! The tables are constructed once at process start and passed by
//! reference into every component call. They are plain data: no component
//! mutates them, and two configs with equal fields produce byte-identical
//! estimates.

use crate::types::{RoofType, SoilType, StructureKind, SurfaceType};

/// Square feet to square meters conversion factor.
pub const SQFT_TO_SQM: f64 = 0.092_903;

/// Runoff coefficients per roof material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofRunoffTable {
    /// Coefficient for concrete roofs.
    pub concrete: f64,
    /// Coefficient for tile roofs.
    pub tile: f64,
    /// Coefficient for metal roofs.
    pub metal: f64,
    /// Coefficient for asbestos roofs.
    pub asbestos: f64,
    /// Coefficient applied to unrecognized roof materials.
    pub unknown: f64,
}

/// Runoff coefficients per ground surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRunoffTable {
    /// Coefficient for paved surfaces.
    pub paved: f64,
    /// Coefficient for gravel surfaces.
    pub gravel: f64,
    /// Coefficient for bare soil.
    pub soil_bare: f64,
    /// Coefficient for grass cover.
    pub grass: f64,
    /// Coefficient for agricultural land.
    pub agricultural: f64,
}

/// Soil infiltration rates in mm/hr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiltrationTable {
    /// Rate for sandy soil.
    pub sandy: u32,
    /// Rate for clay soil.
    pub clay: u32,
    /// Rate for loamy soil.
    pub loamy: u32,
    /// Rate for rocky ground.
    pub rocky: u32,
    /// Rate applied to unrecognized soil types.
    pub unknown: u32,
}

/// Base cost figures for one structure type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureCost {
    /// Fixed base cost in USD before regional adjustment.
    pub base_cost: f64,
    /// Cost per cubic meter of required recharge volume.
    pub per_cubic_meter: f64,
}

/// Base cost figures per structure type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureCostTable {
    /// Costs for a recharge pit.
    pub pit: StructureCost,
    /// Costs for a recharge trench.
    pub trench: StructureCost,
    /// Costs for a recharge shaft.
    pub shaft: StructureCost,
}

/// Water tariff per 1000 liters, by currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterRateTable {
    /// Rate in USD.
    pub usd: f64,
    /// Rate in INR.
    pub inr: f64,
    /// Rate in GBP.
    pub gbp: f64,
    /// Rate in EUR.
    pub eur: f64,
    /// Rate in AUD.
    pub aud: f64,
    /// Rate in CAD.
    pub cad: f64,
    /// Rate applied to unrecognized currencies.
    pub unknown: f64,
}

/// The full set of coefficient tables the estimation engine reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Runoff coefficients per roof material.
    pub roof_runoff: RoofRunoffTable,
    /// Runoff coefficients per ground surface.
    pub surface_runoff: SurfaceRunoffTable,
    /// Default coefficient for parking/road catchments with an
    /// unrecognized surface (more impervious than the generic default).
    pub parking_default: f64,
    /// Default coefficient for other ground catchments with an
    /// unrecognized surface.
    pub surface_default: f64,
    /// Fallback coefficient for agricultural catchments, applied only when
    /// the surface table carries no agricultural entry.
    pub agricultural_fallback: f64,
    /// Soil infiltration rates in mm/hr.
    pub infiltration: InfiltrationTable,
    /// Base cost figures per structure type.
    pub structure_costs: StructureCostTable,
    /// Water tariff per 1000 liters, by currency.
    pub water_rates: WaterRateTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roof_runoff: RoofRunoffTable {
                concrete: 0.85,
                tile: 0.75,
                metal: 0.90,
                asbestos: 0.80,
                unknown: 0.80,
            },
            surface_runoff: SurfaceRunoffTable {
                paved: 0.95,
                gravel: 0.60,
                soil_bare: 0.40,
                grass: 0.30,
                agricultural: 0.50,
            },
            parking_default: 0.70,
            surface_default: 0.50,
            agricultural_fallback: 0.45,
            infiltration: InfiltrationTable {
                sandy: 25,
                clay: 2,
                loamy: 10,
                rocky: 1,
                unknown: 5,
            },
            structure_costs: StructureCostTable {
                pit: StructureCost {
                    base_cost: 200.0,
                    per_cubic_meter: 35.0,
                },
                trench: StructureCost {
                    base_cost: 150.0,
                    per_cubic_meter: 30.0,
                },
                shaft: StructureCost {
                    base_cost: 300.0,
                    per_cubic_meter: 45.0,
                },
            },
            water_rates: WaterRateTable {
                usd: 2.5,
                inr: 20.0,
                gbp: 2.0,
                eur: 2.2,
                aud: 3.0,
                cad: 2.8,
                unknown: 2.5,
            },
        }
    }
}

impl EngineConfig {
    /// Returns the runoff coefficient for a roof material.
    #[must_use]
    pub const fn roof_coefficient(&self, roof: RoofType) -> f64 {
        match roof {
            RoofType::Concrete => self.roof_runoff.concrete,
            RoofType::Tile => self.roof_runoff.tile,
            RoofType::Metal => self.roof_runoff.metal,
            RoofType::Asbestos => self.roof_runoff.asbestos,
            RoofType::Other => self.roof_runoff.unknown,
        }
    }

    /// Returns the runoff coefficient for a known ground surface.
    ///
    /// `None` for an unrecognized surface; the caller applies the
    /// strategy-specific default.
    #[must_use]
    pub const fn surface_coefficient(&self, surface: SurfaceType) -> Option<f64> {
        match surface {
            SurfaceType::Paved => Some(self.surface_runoff.paved),
            SurfaceType::Gravel => Some(self.surface_runoff.gravel),
            SurfaceType::SoilBare => Some(self.surface_runoff.soil_bare),
            SurfaceType::Grass => Some(self.surface_runoff.grass),
            SurfaceType::Agricultural => Some(self.surface_runoff.agricultural),
            SurfaceType::Other => None,
        }
    }

    /// Returns the infiltration rate for a soil type in mm/hr.
    #[must_use]
    pub const fn infiltration_rate(&self, soil: SoilType) -> u32 {
        match soil {
            SoilType::Sandy => self.infiltration.sandy,
            SoilType::Clay => self.infiltration.clay,
            SoilType::Loamy => self.infiltration.loamy,
            SoilType::Rocky => self.infiltration.rocky,
            SoilType::Other => self.infiltration.unknown,
        }
    }

    /// Returns the base cost figures for a structure type.
    #[must_use]
    pub const fn structure_cost(&self, kind: StructureKind) -> StructureCost {
        match kind {
            StructureKind::Pit => self.structure_costs.pit,
            StructureKind::Trench => self.structure_costs.trench,
            StructureKind::Shaft => self.structure_costs.shaft,
        }
    }

    /// Returns the water tariff per 1000 liters for a currency code.
    ///
    /// Unrecognized currencies use the default rate.
    #[must_use]
    pub fn water_rate(&self, currency: &str) -> f64 {
        match currency {
            "USD" => self.water_rates.usd,
            "INR" => self.water_rates.inr,
            "GBP" => self.water_rates.gbp,
            "EUR" => self.water_rates.eur,
            "AUD" => self.water_rates.aud,
            "CAD" => self.water_rates.cad,
            _ => self.water_rates.unknown,
        }
    }
}

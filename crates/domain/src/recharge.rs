// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recharge structure selection and sizing.
//!
//! Structure selection is a deterministic decision table over available
//! space and soil, not a search; sizing is closed-form from the required
//! daily recharge volume. 80% of the annual collection is assumed to need
//! active recharge.

use crate::config::EngineConfig;
use crate::types::{RechargeDesign, SoilType, StructureDimensions, StructureKind};

/// Fraction of the annual collection that requires active recharge.
const RECHARGE_FRACTION: f64 = 0.8;

/// Fixed pit depth in meters.
const PIT_DEPTH_M: f64 = 3.0;
/// Minimum pit footprint in square meters (a 2m x 2m floor).
const PIT_MIN_AREA_M2: f64 = 4.0;

/// Fixed trench width in meters.
const TRENCH_WIDTH_M: f64 = 1.5;
/// Fixed trench depth in meters.
const TRENCH_DEPTH_M: f64 = 2.5;
/// Minimum trench length in meters.
const TRENCH_MIN_LENGTH_M: f64 = 3.0;

/// Fixed shaft depth in meters.
const SHAFT_DEPTH_M: f64 = 4.0;

/// Selects and sizes a recharge structure for a site.
///
/// Selection, first match wins:
/// 1. At least 300 sqft of space and freely draining soil: a square pit
/// 2. At least 150 sqft of space: a trench
/// 3. Otherwise: a shaft (deep, for a small footprint)
///
/// The reported volume is the required daily recharge volume in cubic
/// meters; minimum-dimension floors mean the as-built structure may hold
/// more.
#[must_use]
pub fn design_recharge_structure(
    config: &EngineConfig,
    available_space_sqft: f64,
    soil_type: SoilType,
    annual_collection_liters: i64,
) -> RechargeDesign {
    let infiltration_rate_mm_hr: u32 = config.infiltration_rate(soil_type);

    // Daily recharge requirement in liters, then cubic meters.
    #[allow(clippy::cast_precision_loss)]
    let recharge_liters_per_day: f64 =
        annual_collection_liters as f64 * RECHARGE_FRACTION / 365.0;
    let volume_m3: f64 = recharge_liters_per_day / 1000.0;

    let (kind, dimensions): (StructureKind, StructureDimensions) =
        if available_space_sqft >= 300.0 && soil_type.drains_freely() {
            (StructureKind::Pit, pit_dimensions(volume_m3))
        } else if available_space_sqft >= 150.0 {
            (StructureKind::Trench, trench_dimensions(volume_m3))
        } else {
            (StructureKind::Shaft, shaft_dimensions(volume_m3))
        };

    #[allow(clippy::cast_possible_truncation)]
    let daily_recharge_liters: i64 = recharge_liters_per_day.trunc() as i64;

    RechargeDesign {
        kind,
        dimensions,
        infiltration_rate_mm_hr,
        daily_recharge_liters,
    }
}

/// Sizes a square pit: fixed depth, footprint from volume with a 2m x 2m
/// floor.
fn pit_dimensions(volume_m3: f64) -> StructureDimensions {
    let area_m2: f64 = (volume_m3 / PIT_DEPTH_M).max(PIT_MIN_AREA_M2);
    let side_m: f64 = area_m2.sqrt();
    StructureDimensions::Rectangular {
        length_m: side_m,
        width_m: side_m,
        depth_m: PIT_DEPTH_M,
        volume_m3,
    }
}

/// Sizes a long narrow trench: fixed cross-section, length from volume
/// with a 3m floor.
fn trench_dimensions(volume_m3: f64) -> StructureDimensions {
    let length_m: f64 = (volume_m3 / (TRENCH_WIDTH_M * TRENCH_DEPTH_M)).max(TRENCH_MIN_LENGTH_M);
    StructureDimensions::Rectangular {
        length_m,
        width_m: TRENCH_WIDTH_M,
        depth_m: TRENCH_DEPTH_M,
        volume_m3,
    }
}

/// Sizes a circular shaft: fixed depth, diameter from volume.
fn shaft_dimensions(volume_m3: f64) -> StructureDimensions {
    let radius_m: f64 = (volume_m3 / (std::f64::consts::PI * SHAFT_DEPTH_M)).sqrt();
    StructureDimensions::Circular {
        diameter_m: radius_m * 2.0,
        depth_m: SHAFT_DEPTH_M,
        volume_m3,
    }
}

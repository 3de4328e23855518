// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-criteria feasibility scoring.
//!
//! Four independent sub-scores (catchment area, available space, soil
//! permeability, rainfall) are summed into a 0-100 composite. Every
//! bracket appends its rationale to the reasons list in evaluation order.

use crate::types::{FeasibilityRating, FeasibilityVerdict, SoilType};

/// Assesses the feasibility of rainwater harvesting at a site.
///
/// The household size is accepted alongside the other site parameters but
/// does not contribute to the score; it drives only the separate water
/// demand figure.
///
/// Every input combination lands in exactly one bracket per criterion, so
/// the score is always in [20, 100] and the verdict is total.
#[must_use]
pub fn assess_feasibility(
    catchment_area_sqft: f64,
    available_space_sqft: f64,
    _household_size: u32,
    soil_type: SoilType,
    annual_rainfall_mm: f64,
) -> FeasibilityVerdict {
    let mut score: u8 = 0;
    let mut reasons: Vec<String> = Vec::new();

    if catchment_area_sqft >= 1000.0 {
        score += 30;
        reasons.push(String::from("Excellent roof area for collection"));
    } else if catchment_area_sqft >= 500.0 {
        score += 20;
        reasons.push(String::from("Good roof area for collection"));
    } else {
        score += 5;
        reasons.push(String::from(
            "Small roof area - limited collection potential",
        ));
    }

    if available_space_sqft >= 200.0 {
        score += 25;
        reasons.push(String::from("Sufficient space for recharge structures"));
    } else if available_space_sqft >= 100.0 {
        score += 15;
        reasons.push(String::from(
            "Adequate space for basic recharge structure",
        ));
    } else {
        score += 5;
        reasons.push(String::from("Limited space - may need compact solutions"));
    }

    if soil_type.drains_freely() {
        score += 25;
        reasons.push(String::from("Excellent soil permeability for recharge"));
    } else if soil_type == SoilType::Clay {
        score += 10;
        reasons.push(String::from("Moderate soil permeability"));
    } else {
        score += 5;
        reasons.push(String::from(
            "Poor soil permeability - may need special techniques",
        ));
    }

    if annual_rainfall_mm >= 1000.0 {
        score += 20;
        reasons.push(String::from("Excellent rainfall for harvesting"));
    } else if annual_rainfall_mm >= 600.0 {
        score += 15;
        reasons.push(String::from("Good rainfall for harvesting"));
    } else {
        score += 5;
        reasons.push(String::from("Low rainfall - limited harvesting potential"));
    }

    FeasibilityVerdict {
        score,
        rating: rating_for_score(score),
        reasons,
    }
}

/// Maps a composite score to its qualitative rating.
const fn rating_for_score(score: u8) -> FeasibilityRating {
    if score >= 80 {
        FeasibilityRating::HighlyRecommended
    } else if score >= 60 {
        FeasibilityRating::Recommended
    } else if score >= 40 {
        FeasibilityRating::ModeratelyFeasible
    } else {
        FeasibilityRating::NotRecommended
    }
}

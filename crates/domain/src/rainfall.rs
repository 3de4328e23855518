// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rainfall estimation from geographic coordinates.
//!
//! Annual rainfall is chosen by latitude band and the monthly profile is a
//! fixed seasonal shape scaled to the annual total. The bands are a
//! regional approximation, not physically derived; they exist so the
//! engine always produces a usable estimate with no network dependency.

use serde::{Deserialize, Serialize};

use crate::types::RainfallProfile;

/// Fixed monsoon-shaped monthly rainfall template in millimeters.
///
/// The template sums to 1180; it is scaled by `annual / 1180` and each
/// month truncated to an integer.
const MONSOON_PATTERN: [u32; 12] = [20, 15, 25, 45, 120, 200, 250, 220, 150, 80, 30, 25];

/// Static ambient conditions reported alongside the rainfall estimate.
///
/// These are the offline-safe fallback values the weather report carries
/// when no live observation source is configured.
const FALLBACK_TEMPERATURE_C: i32 = 25;
const FALLBACK_HUMIDITY_PCT: u32 = 65;

/// Weather summary for a location: the rainfall estimate plus static
/// ambient conditions and a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// The rainfall estimate.
    pub rainfall: RainfallProfile,
    /// Ambient temperature in degrees Celsius.
    pub temperature_c: i32,
    /// Relative humidity in percent.
    pub humidity_pct: u32,
    /// Display label for the coordinates.
    pub location_label: String,
}

/// Estimates annual rainfall in millimeters from latitude.
///
/// Bands are evaluated in order and the first match wins, so latitude
/// 12.0 falls in the 8-12 band and 20.0 in the 12-20 band.
#[must_use]
pub fn annual_rainfall_for_latitude(latitude: f64) -> f64 {
    if (8.0..=12.0).contains(&latitude) {
        1200.0
    } else if (12.0..=20.0).contains(&latitude) {
        900.0
    } else if (20.0..=28.0).contains(&latitude) {
        700.0
    } else if (28.0..=35.0).contains(&latitude) {
        1500.0
    } else {
        800.0
    }
}

/// Derives a rainfall profile from geographic coordinates.
///
/// The longitude does not influence the estimate; it is accepted to match
/// the coordinate pair the geocoder produces.
///
/// The result is never empty: every latitude maps to a band and every
/// month to a truncated share of the seasonal template.
#[must_use]
pub fn estimate_rainfall(latitude: f64, _longitude: f64) -> RainfallProfile {
    let annual_mm: f64 = annual_rainfall_for_latitude(latitude);
    let template_sum: f64 = f64::from(MONSOON_PATTERN.iter().sum::<u32>());
    let scale: f64 = annual_mm / template_sum;

    let mut monthly_mm: [u32; 12] = [0; 12];
    for (month, template) in monthly_mm.iter_mut().zip(MONSOON_PATTERN) {
        *month = truncate_to_u32(f64::from(template) * scale);
    }

    RainfallProfile {
        annual_mm,
        monthly_mm,
    }
}

/// Builds a weather report for a location.
///
/// Wraps the rainfall estimate with the static ambient conditions and a
/// "Lat: x, Lon: y" display label.
#[must_use]
pub fn weather_report(latitude: f64, longitude: f64) -> WeatherReport {
    WeatherReport {
        rainfall: estimate_rainfall(latitude, longitude),
        temperature_c: FALLBACK_TEMPERATURE_C,
        humidity_pct: FALLBACK_HUMIDITY_PCT,
        location_label: format!("Lat: {latitude:.2}, Lon: {longitude:.2}"),
    }
}

/// Truncates a non-negative value to a u32.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u32(value: f64) -> u32 {
    value.max(0.0).trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_rainfall_bands() {
        assert!((annual_rainfall_for_latitude(10.0) - 1200.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(15.0) - 900.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(25.0) - 700.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(30.0) - 1500.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(50.0) - 800.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(-20.0) - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_band_boundaries_first_match_wins() {
        assert!((annual_rainfall_for_latitude(12.0) - 1200.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(20.0) - 900.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(28.0) - 700.0).abs() < f64::EPSILON);
        assert!((annual_rainfall_for_latitude(35.0) - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monthly_profile_at_900mm() {
        let profile: RainfallProfile = estimate_rainfall(15.0, 77.0);
        assert!((profile.annual_mm - 900.0).abs() < f64::EPSILON);
        assert_eq!(
            profile.monthly_mm,
            [15, 11, 19, 34, 91, 152, 190, 167, 114, 61, 22, 19]
        );
    }

    #[test]
    fn test_monthly_profile_sums_close_to_annual() {
        for latitude in [10.0, 15.0, 25.0, 30.0, 50.0] {
            let profile: RainfallProfile = estimate_rainfall(latitude, 0.0);
            let total: u32 = profile.monthly_mm.iter().sum();
            // Truncation loses at most one millimeter per month.
            let annual: u32 = truncate_to_u32(profile.annual_mm);
            assert!(total <= annual);
            assert!(total + 12 >= annual);
        }
    }

    #[test]
    fn test_template_scale_is_identity_at_template_sum() {
        // 1180 mm annual would reproduce the template exactly, so a band
        // close to it stays proportional.
        let profile: RainfallProfile = estimate_rainfall(10.0, 0.0);
        // 1200/1180 scale: first month 20 * 1.0169... = 20.33 -> 20
        assert_eq!(profile.monthly_mm[0], 20);
        // peak month 250 * 1.0169... = 254.2 -> 254
        assert_eq!(profile.monthly_mm[6], 254);
    }

    #[test]
    fn test_weather_report_static_fields() {
        let report: WeatherReport = weather_report(15.0, 77.0);
        assert_eq!(report.temperature_c, 25);
        assert_eq!(report.humidity_pct, 65);
        assert_eq!(report.location_label, "Lat: 15.00, Lon: 77.00");
        assert!((report.rainfall.annual_mm - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let first: RainfallProfile = estimate_rainfall(23.5, 80.0);
        let second: RainfallProfile = estimate_rainfall(23.5, 80.0);
        assert_eq!(first, second);
    }
}

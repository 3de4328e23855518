// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nominatim-backed geocoder.
//!
//! Uses the blocking reqwest client; all calls run inside
//! `tokio::task::spawn_blocking` from the HTTP handlers.

use std::time::Duration;

use rainharvest_api::{GeocodeError, Geocoder};
use rainharvest_domain::GeoPoint;
use serde::Deserialize;
use tracing::error;

/// Request timeout for the geocoding service.
const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

/// One place in a Nominatim search reply.
///
/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocoder backed by a Nominatim search endpoint.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl NominatimGeocoder {
    /// Creates a geocoder against the given search endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: String) -> Result<Self, reqwest::Error> {
        let client: reqwest::blocking::Client = reqwest::blocking::Client::builder()
            .user_agent(concat!("rainharvest-server/", env!("CARGO_PKG_VERSION")))
            .timeout(GEOCODE_TIMEOUT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, location: &str) -> Result<GeoPoint, GeocodeError> {
        let response: reqwest::blocking::Response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", location), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| {
                error!(error = %e, "Geocoding request failed");
                GeocodeError::ServiceFailure(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(GeocodeError::ServiceFailure(format!(
                "geocoding service returned status {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .map_err(|e| GeocodeError::ServiceFailure(format!("malformed reply: {e}")))?;

        let place: NominatimPlace = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(location.to_string()))?;

        let latitude: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::ServiceFailure(format!("bad latitude '{}'", place.lat)))?;
        let longitude: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::ServiceFailure(format!("bad longitude '{}'", place.lon)))?;

        Ok(GeoPoint {
            latitude,
            longitude,
            formatted_address: place.display_name,
        })
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The geocoding collaborator contract.
//!
//! The engine consumes only the resolved coordinates and address. A
//! resolver failure fails the request; the engine never estimates a
//! location from its text.

use rainharvest_domain::GeoPoint;
use thiserror::Error;

/// Errors a geocoding collaborator can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The location text did not resolve to coordinates.
    #[error("location '{0}' could not be resolved")]
    NotFound(String),
    /// The resolver itself failed (network, quota, malformed reply).
    #[error("geocoding service failure: {0}")]
    ServiceFailure(String),
}

/// Resolves free-text locations to coordinates.
///
/// Implementations live outside the API layer (the server binary provides
/// one backed by Nominatim); tests use a fixed-table stub.
pub trait Geocoder {
    /// Resolves a location string to a geographic point.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the text does not resolve and
    /// `ServiceFailure` when the resolver itself fails.
    fn resolve(&self, location: &str) -> Result<GeoPoint, GeocodeError>;
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rainharvest_domain::{GeoPoint, HarvestingStrategy, SecondaryAreas, SiteInput};
use serde::{Deserialize, Serialize};

/// The validated inputs for one estimation run.
///
/// Construction happens at the API boundary after scalar validation; the
/// pipeline trusts these values and is total over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateParams {
    /// The resolved location.
    pub location: GeoPoint,
    /// The site parameters.
    pub site: SiteInput,
    /// Optional secondary catchment areas.
    pub secondary: SecondaryAreas,
    /// The harvesting strategy the caller asked for.
    ///
    /// `None` means the caller named an unrecognized strategy; both `None`
    /// and any non-rooftop strategy fall through to the ranked best
    /// option.
    pub requested_strategy: Option<HarvestingStrategy>,
}

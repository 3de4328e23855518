// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Primary alternative selection.
//!
//! A rooftop request keeps rooftop as primary whenever a rooftop
//! alternative exists, even when it ranks below another strategy. Every
//! other request falls through to the ranked best option. This is a
//! deliberate selection policy, not a ranking shortcut.

use rainharvest_domain::{AlternativesOutcome, HarvestingAlternative, HarvestingStrategy};

/// Selects the primary alternative for a request.
///
/// `requested` of `None` covers a caller that named an unrecognized
/// strategy; it behaves like any non-rooftop request.
#[must_use]
pub fn select_primary<'a>(
    requested: Option<HarvestingStrategy>,
    outcome: &'a AlternativesOutcome,
) -> Option<&'a HarvestingAlternative> {
    if requested == Some(HarvestingStrategy::Rooftop) {
        let rooftop: Option<&HarvestingAlternative> = outcome
            .alternatives
            .iter()
            .find(|a| a.estimate.strategy == HarvestingStrategy::Rooftop);
        if rooftop.is_some() {
            return rooftop;
        }
    }
    outcome.best_option.as_ref()
}

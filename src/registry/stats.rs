//! # Registration Statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::voter::Voter;

/// Aggregate counts over the whole registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStats {
    pub total: usize,
    pub registered: usize,
    pub unregistered: usize,
    /// Count per city, keyed by the value as stored
    pub by_city: BTreeMap<String, usize>,
    /// Count per state, keyed by the value as stored
    pub by_state: BTreeMap<String, usize>,
}

impl RegistrationStats {
    pub fn from_voters<'a, I>(voters: I) -> Self
    where
        I: IntoIterator<Item = &'a Voter>,
    {
        let mut stats = Self::default();

        for voter in voters {
            stats.total += 1;
            if voter.is_registered {
                stats.registered += 1;
            }
            *stats.by_city.entry(voter.city.clone()).or_insert(0) += 1;
            *stats.by_state.entry(voter.state.clone()).or_insert(0) += 1;
        }

        stats.unregistered = stats.total - stats.registered;
        stats
    }
}

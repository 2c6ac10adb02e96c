//! # Voter Queries
//!
//! Filter predicates and offset/limit pagination for listing voters.
//! All supplied predicates are ANDed; pagination slices the filtered
//! sequence, not raw storage.

use super::voter::{PoliticalAffiliation, Voter, VotingPreference};

/// Case-insensitive substring match used for city and state filters
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A set of optional predicates plus pagination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub is_registered: Option<bool>,
    pub voting_preference: Option<VotingPreference>,
    pub political_affiliation: Option<PoliticalAffiliation>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl VoterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    pub fn registered(mut self, is_registered: bool) -> Self {
        self.is_registered = Some(is_registered);
        self
    }

    pub fn voting_preference(mut self, preference: VotingPreference) -> Self {
        self.voting_preference = Some(preference);
        self
    }

    pub fn political_affiliation(mut self, affiliation: PoliticalAffiliation) -> Self {
        self.political_affiliation = Some(affiliation);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check whether a record satisfies every supplied predicate.
    ///
    /// Empty strings count as absent predicates.
    pub fn matches(&self, voter: &Voter) -> bool {
        if let Some(city) = non_empty(&self.city) {
            if !contains_ignore_case(&voter.city, city) {
                return false;
            }
        }

        if let Some(state) = non_empty(&self.state) {
            if !contains_ignore_case(&voter.state, state) {
                return false;
            }
        }

        if let Some(zip) = non_empty(&self.zip_code) {
            if voter.zip_code != zip {
                return false;
            }
        }

        if let Some(registered) = self.is_registered {
            if voter.is_registered != registered {
                return false;
            }
        }

        if let Some(preference) = self.voting_preference {
            if voter.voting_preference != preference {
                return false;
            }
        }

        if let Some(affiliation) = self.political_affiliation {
            if voter.political_affiliation != affiliation {
                return false;
            }
        }

        true
    }

    /// Apply offset/limit to an already filtered sequence.
    ///
    /// A limit of zero means "no limit". Windows past the end are empty.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0);
        let iter = items.into_iter().skip(offset);

        match self.limit {
            Some(limit) if limit > 0 => iter.take(limit).collect(),
            _ => iter.collect(),
        }
    }

    /// Filter then paginate, cloning matches out of `voters`.
    pub fn apply<'a, I>(&self, voters: I) -> Vec<Voter>
    where
        I: IntoIterator<Item = &'a Voter>,
    {
        let filtered: Vec<Voter> = voters
            .into_iter()
            .filter(|v| self.matches(v))
            .cloned()
            .collect();

        self.paginate(filtered)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

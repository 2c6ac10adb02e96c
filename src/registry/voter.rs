//! # Voter Records
//!
//! The voter record model, its closed enumerations, and the create / patch
//! inputs accepted by the registry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a voter intends to cast their ballot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VotingPreference {
    InPerson,
    MailIn,
    Early,
    #[default]
    NotSpecified,
}

impl VotingPreference {
    pub const ALL: [VotingPreference; 4] = [
        VotingPreference::InPerson,
        VotingPreference::MailIn,
        VotingPreference::Early,
        VotingPreference::NotSpecified,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VotingPreference::InPerson => "in-person",
            VotingPreference::MailIn => "mail-in",
            VotingPreference::Early => "early",
            VotingPreference::NotSpecified => "not-specified",
        }
    }
}

impl fmt::Display for VotingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VotingPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown voting preference '{}'", s))
    }
}

/// Declared party affiliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoliticalAffiliation {
    Democrat,
    Republican,
    Independent,
    Other,
    #[default]
    NotSpecified,
}

impl PoliticalAffiliation {
    pub const ALL: [PoliticalAffiliation; 5] = [
        PoliticalAffiliation::Democrat,
        PoliticalAffiliation::Republican,
        PoliticalAffiliation::Independent,
        PoliticalAffiliation::Other,
        PoliticalAffiliation::NotSpecified,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PoliticalAffiliation::Democrat => "democrat",
            PoliticalAffiliation::Republican => "republican",
            PoliticalAffiliation::Independent => "independent",
            PoliticalAffiliation::Other => "other",
            PoliticalAffiliation::NotSpecified => "not-specified",
        }
    }
}

impl fmt::Display for PoliticalAffiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoliticalAffiliation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown political affiliation '{}'", s))
    }
}

/// A single voter registration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub date_of_birth: String,

    /// When the record was created
    pub registration_date: DateTime<Utc>,

    pub is_registered: bool,
    pub voting_preference: VotingPreference,
    pub political_affiliation: PoliticalAffiliation,
}

impl Voter {
    /// Build a fresh record from create input.
    ///
    /// Assigns a new id and registration timestamp, marks the voter as
    /// registered, and defaults both enums to `not-specified`.
    pub fn register(new: NewVoter) -> Self {
        let NewVoter {
            first_name,
            last_name,
            email,
            city,
            state,
            zip_code,
            date_of_birth,
            voting_preference,
            political_affiliation,
        } = new;

        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            city,
            state,
            zip_code,
            date_of_birth,
            registration_date: Utc::now(),
            is_registered: true,
            voting_preference: voting_preference.unwrap_or_default(),
            political_affiliation: political_affiliation.unwrap_or_default(),
        }
    }

    /// Merge the supplied fields of `patch` into this record.
    ///
    /// `id` and `registration_date` are not part of a patch and never change.
    pub fn apply(&mut self, patch: VoterPatch) {
        let VoterPatch {
            first_name,
            last_name,
            email,
            city,
            state,
            zip_code,
            date_of_birth,
            is_registered,
            voting_preference,
            political_affiliation,
        } = patch;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = city {
            self.city = v;
        }
        if let Some(v) = state {
            self.state = v;
        }
        if let Some(v) = zip_code {
            self.zip_code = v;
        }
        if let Some(v) = date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = is_registered {
            self.is_registered = v;
        }
        if let Some(v) = voting_preference {
            self.voting_preference = v;
        }
        if let Some(v) = political_affiliation {
            self.political_affiliation = v;
        }
    }
}

/// Input for creating a voter record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewVoter {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub date_of_birth: String,
    pub voting_preference: Option<VotingPreference>,
    pub political_affiliation: Option<PoliticalAffiliation>,
}

/// Partial update of a voter record
///
/// Unknown JSON fields (including `id` and `registrationDate`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_registered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voting_preference: Option<VotingPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political_affiliation: Option<PoliticalAffiliation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewVoter {
        NewVoter {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            date_of_birth: "1990-04-12".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_applies_defaults() {
        let voter = Voter::register(sample());

        assert!(voter.is_registered);
        assert_eq!(voter.voting_preference, VotingPreference::NotSpecified);
        assert_eq!(voter.political_affiliation, PoliticalAffiliation::NotSpecified);
        assert!(!voter.id.is_nil());
    }

    #[test]
    fn test_register_keeps_supplied_enums() {
        let voter = Voter::register(NewVoter {
            voting_preference: Some(VotingPreference::MailIn),
            political_affiliation: Some(PoliticalAffiliation::Independent),
            ..sample()
        });

        assert_eq!(voter.voting_preference, VotingPreference::MailIn);
        assert_eq!(voter.political_affiliation, PoliticalAffiliation::Independent);
    }

    #[test]
    fn test_register_assigns_distinct_ids() {
        let a = Voter::register(sample());
        let b = Voter::register(sample());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let original = Voter::register(sample());
        let mut updated = original.clone();

        updated.apply(VoterPatch {
            city: Some("Albany".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.city, "Albany");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.registration_date, original.registration_date);
        assert_eq!(updated.first_name, original.first_name);
        assert_eq!(updated.state, original.state);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let original = Voter::register(sample());
        let mut updated = original.clone();
        updated.apply(VoterPatch::default());
        assert_eq!(updated, original);
    }

    #[test]
    fn test_patch_ignores_identity_fields() {
        let patch: VoterPatch = serde_json::from_value(serde_json::json!({
            "id": "not-a-real-id",
            "registrationDate": "2001-01-01T00:00:00Z",
            "isRegistered": false
        }))
        .unwrap();

        assert_eq!(patch.is_registered, Some(false));
        assert_eq!(
            patch,
            VoterPatch {
                is_registered: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&VotingPreference::InPerson).unwrap();
        assert_eq!(json, "\"in-person\"");

        let parsed: PoliticalAffiliation = serde_json::from_str("\"not-specified\"").unwrap();
        assert_eq!(parsed, PoliticalAffiliation::NotSpecified);

        assert!(serde_json::from_str::<VotingPreference>("\"by-pigeon\"").is_err());
    }

    #[test]
    fn test_enum_from_str_matches_serde() {
        for p in VotingPreference::ALL {
            assert_eq!(p.as_str().parse::<VotingPreference>().unwrap(), p);
        }
        for a in PoliticalAffiliation::ALL {
            assert_eq!(a.as_str().parse::<PoliticalAffiliation>().unwrap(), a);
        }
        assert!("Democrat".parse::<PoliticalAffiliation>().is_err());
    }

    #[test]
    fn test_voter_serializes_camel_case() {
        let voter = Voter::register(sample());
        let value = serde_json::to_value(&voter).unwrap();

        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["zipCode"], "10001");
        assert_eq!(value["isRegistered"], true);
        assert_eq!(value["votingPreference"], "not-specified");
        assert!(value["registrationDate"].is_string());
    }
}

//! # Voter Store
//!
//! The repository trait and its in-memory implementation. The in-memory
//! store keeps records in insertion order behind a `RwLock`, so each
//! operation is atomic with respect to concurrent requests.

use std::sync::RwLock;

use uuid::Uuid;

use super::errors::{RegistryError, RegistryResult};
use super::query::{contains_ignore_case, VoterQuery};
use super::stats::RegistrationStats;
use super::voter::{NewVoter, Voter, VoterPatch};

/// Voter repository trait
///
/// Abstracts storage operations for voter records. Every method returns
/// owned snapshots; callers never alias into storage.
pub trait VoterRepository: Send + Sync {
    /// Create and store a new record
    fn create(&self, new: NewVoter) -> RegistryResult<Voter>;

    /// List records matching a query, in insertion order
    fn list(&self, query: &VoterQuery) -> RegistryResult<Vec<Voter>>;

    /// Find a record by its ID
    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Voter>>;

    /// Merge a patch into an existing record
    fn update(&self, id: Uuid, patch: VoterPatch) -> RegistryResult<Option<Voter>>;

    /// Remove a record; `false` if it did not exist
    fn delete(&self, id: Uuid) -> RegistryResult<bool>;

    /// Records whose city contains `city`, ignoring case
    fn list_by_city(&self, city: &str) -> RegistryResult<Vec<Voter>>;

    /// Records whose state contains `state`, ignoring case
    fn list_by_state(&self, state: &str) -> RegistryResult<Vec<Voter>>;

    /// Records with exactly this zip code
    fn list_by_zip_code(&self, zip_code: &str) -> RegistryResult<Vec<Voter>>;

    /// Aggregate statistics over every record
    fn stats(&self) -> RegistryResult<RegistrationStats>;
}

/// In-memory voter repository
#[derive(Debug, Default)]
pub struct InMemoryVoterRepository {
    voters: RwLock<Vec<Voter>>,
}

impl InMemoryVoterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn select<F>(&self, predicate: F) -> RegistryResult<Vec<Voter>>
    where
        F: Fn(&Voter) -> bool,
    {
        let voters = self
            .voters
            .read()
            .map_err(|_| RegistryError::lock_poisoned())?;
        Ok(voters.iter().filter(|&v| predicate(v)).cloned().collect())
    }
}

impl VoterRepository for InMemoryVoterRepository {
    fn create(&self, new: NewVoter) -> RegistryResult<Voter> {
        let voter = Voter::register(new);

        let mut voters = self
            .voters
            .write()
            .map_err(|_| RegistryError::lock_poisoned())?;
        voters.push(voter.clone());

        tracing::debug!(id = %voter.id, "voter created");
        Ok(voter)
    }

    fn list(&self, query: &VoterQuery) -> RegistryResult<Vec<Voter>> {
        let voters = self
            .voters
            .read()
            .map_err(|_| RegistryError::lock_poisoned())?;
        Ok(query.apply(voters.iter()))
    }

    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Voter>> {
        let voters = self
            .voters
            .read()
            .map_err(|_| RegistryError::lock_poisoned())?;
        Ok(voters.iter().find(|v| v.id == id).cloned())
    }

    fn update(&self, id: Uuid, patch: VoterPatch) -> RegistryResult<Option<Voter>> {
        let mut voters = self
            .voters
            .write()
            .map_err(|_| RegistryError::lock_poisoned())?;

        let Some(existing) = voters.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };

        existing.apply(patch);
        tracing::debug!(%id, "voter updated");
        Ok(Some(existing.clone()))
    }

    fn delete(&self, id: Uuid) -> RegistryResult<bool> {
        let mut voters = self
            .voters
            .write()
            .map_err(|_| RegistryError::lock_poisoned())?;

        match voters.iter().position(|v| v.id == id) {
            Some(index) => {
                voters.remove(index);
                tracing::debug!(%id, "voter deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list_by_city(&self, city: &str) -> RegistryResult<Vec<Voter>> {
        self.select(|v| contains_ignore_case(&v.city, city))
    }

    fn list_by_state(&self, state: &str) -> RegistryResult<Vec<Voter>> {
        self.select(|v| contains_ignore_case(&v.state, state))
    }

    fn list_by_zip_code(&self, zip_code: &str) -> RegistryResult<Vec<Voter>> {
        self.select(|v| v.zip_code == zip_code)
    }

    fn stats(&self) -> RegistryResult<RegistrationStats> {
        let voters = self
            .voters
            .read()
            .map_err(|_| RegistryError::lock_poisoned())?;
        Ok(RegistrationStats::from_voters(voters.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::voter::{PoliticalAffiliation, VotingPreference};

    fn new_voter(first: &str, city: &str, state: &str, zip: &str) -> NewVoter {
        NewVoter {
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip.to_string(),
            date_of_birth: "1975-06-30".to_string(),
            ..Default::default()
        }
    }

    fn seeded() -> (InMemoryVoterRepository, Vec<Voter>) {
        let repo = InMemoryVoterRepository::new();
        let voters = vec![
            repo.create(new_voter("Ann", "New York", "NY", "10001")).unwrap(),
            repo.create(new_voter("Ben", "Newark", "NJ", "07101")).unwrap(),
            repo.create(new_voter("Cal", "Boston", "MA", "02101")).unwrap(),
        ];
        (repo, voters)
    }

    #[test]
    fn test_create_with_required_fields_only() {
        let repo = InMemoryVoterRepository::new();
        let voter = repo.create(new_voter("Ann", "Austin", "TX", "73301")).unwrap();

        assert!(voter.is_registered);
        assert_eq!(voter.voting_preference, VotingPreference::NotSpecified);
        assert_eq!(voter.political_affiliation, PoliticalAffiliation::NotSpecified);
        assert!(!voter.id.is_nil());
    }

    #[test]
    fn test_find_after_create_returns_same_record() {
        let (repo, voters) = seeded();
        for voter in &voters {
            assert_eq!(repo.find_by_id(voter.id).unwrap().as_ref(), Some(voter));
        }
    }

    #[test]
    fn test_find_unknown_id() {
        let (repo, _) = seeded();
        assert!(repo.find_by_id(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_allowed() {
        let repo = InMemoryVoterRepository::new();
        let a = repo.create(new_voter("Ann", "Austin", "TX", "73301")).unwrap();
        let b = repo.create(new_voter("Ann", "Austin", "TX", "73301")).unwrap();

        assert_eq!(a.email, b.email);
        assert_ne!(a.id, b.id);
        assert_eq!(repo.list(&VoterQuery::new()).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_then_find() {
        let (repo, voters) = seeded();

        assert!(repo.delete(voters[1].id).unwrap());
        assert!(repo.find_by_id(voters[1].id).unwrap().is_none());
        assert!(!repo.delete(voters[1].id).unwrap());
    }

    #[test]
    fn test_delete_preserves_order() {
        let (repo, voters) = seeded();
        repo.delete(voters[0].id).unwrap();

        let remaining: Vec<Uuid> = repo
            .list(&VoterQuery::new())
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(remaining, vec![voters[1].id, voters[2].id]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (repo, _) = seeded();
        assert!(!repo.delete(Uuid::new_v4()).unwrap());
        assert_eq!(repo.list(&VoterQuery::new()).unwrap().len(), 3);
    }

    #[test]
    fn test_update_single_field() {
        let (repo, voters) = seeded();
        let before = voters[0].clone();

        let after = repo
            .update(
                before.id,
                VoterPatch {
                    city: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(after.city, "X");
        let mut expected = before;
        expected.city = "X".to_string();
        assert_eq!(after, expected);
        assert_eq!(repo.find_by_id(after.id).unwrap(), Some(after));
    }

    #[test]
    fn test_update_empty_patch_round_trip() {
        let (repo, voters) = seeded();
        let updated = repo
            .update(voters[2].id, VoterPatch::default())
            .unwrap()
            .unwrap();
        assert_eq!(updated, voters[2]);
    }

    #[test]
    fn test_update_can_unregister() {
        let (repo, voters) = seeded();
        let updated = repo
            .update(
                voters[0].id,
                VoterPatch {
                    is_registered: Some(false),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert!(!updated.is_registered);
    }

    #[test]
    fn test_update_unknown_id() {
        let (repo, _) = seeded();
        assert!(repo
            .update(Uuid::new_v4(), VoterPatch::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_filters_by_city_in_insertion_order() {
        let (repo, voters) = seeded();
        let found = repo.list(&VoterQuery::new().city("new")).unwrap();
        assert_eq!(found, vec![voters[0].clone(), voters[1].clone()]);
    }

    #[test]
    fn test_list_paginates_filtered_result() {
        let repo = InMemoryVoterRepository::new();
        repo.create(new_voter("Zed", "Miami", "FL", "33101")).unwrap();
        let matching: Vec<Voter> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|n| repo.create(new_voter(n, "Austin", "TX", "73301")).unwrap())
            .collect();

        let page = repo
            .list(&VoterQuery::new().state("tx").offset(2).limit(2))
            .unwrap();

        assert_eq!(page, vec![matching[2].clone(), matching[3].clone()]);
    }

    #[test]
    fn test_list_offset_past_end() {
        let (repo, _) = seeded();
        assert!(repo.list(&VoterQuery::new().offset(3)).unwrap().is_empty());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let (repo, voters) = seeded();
        let query = VoterQuery::new().state("n");

        assert_eq!(repo.list(&query).unwrap(), repo.list(&query).unwrap());
        assert_eq!(
            repo.find_by_id(voters[0].id).unwrap(),
            repo.find_by_id(voters[0].id).unwrap()
        );
    }

    #[test]
    fn test_list_by_city_and_state() {
        let (repo, voters) = seeded();

        assert_eq!(repo.list_by_city("NEW").unwrap().len(), 2);
        assert_eq!(repo.list_by_state("ma").unwrap(), vec![voters[2].clone()]);
    }

    #[test]
    fn test_list_by_zip_is_exact() {
        let (repo, voters) = seeded();

        assert_eq!(repo.list_by_zip_code("07101").unwrap(), vec![voters[1].clone()]);
        assert!(repo.list_by_zip_code("0710").unwrap().is_empty());
    }

    #[test]
    fn test_stats_over_store() {
        let repo = InMemoryVoterRepository::new();
        let a = repo.create(new_voter("Ann", "Albany", "NY", "12201")).unwrap();
        repo.create(new_voter("Ben", "Buffalo", "NY", "14201")).unwrap();
        repo.create(new_voter("Cal", "Fresno", "CA", "93650")).unwrap();
        repo.update(
            a.id,
            VoterPatch {
                is_registered: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

        let stats = repo.stats().unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.registered, 2);
        assert_eq!(stats.unregistered, 1);
        assert_eq!(stats.by_state.get("NY"), Some(&2));
        assert_eq!(stats.by_state.get("CA"), Some(&1));
    }
}

//! # Voter Registry
//!
//! The in-process record store for voter registrations.
//!
//! - `voter` - record model, closed enums, create and patch inputs
//! - `query` - filter predicates and offset/limit pagination
//! - `stats` - registration statistics
//! - `store` - repository trait and in-memory implementation
//!
//! The store is constructed explicitly and shared with the HTTP layer at
//! startup; nothing here is global.

pub mod errors;
pub mod query;
pub mod stats;
pub mod store;
pub mod voter;

pub use errors::{RegistryError, RegistryResult};
pub use query::VoterQuery;
pub use stats::RegistrationStats;
pub use store::{InMemoryVoterRepository, VoterRepository};
pub use voter::{NewVoter, PoliticalAffiliation, Voter, VoterPatch, VotingPreference};

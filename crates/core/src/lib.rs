//! Pure domain logic for the riyaz vocal-practice backend.
//!
//! Everything here is independent of the database: the pitch sample type
//! and its ingestion boundary, the accuracy scorer, the daily streak state
//! machine, the achievement catalog, the suggestion generator, and the
//! [`scoring::ScoringEngine`] that runs one scoring request end to end
//! against the store contracts in [`stores`]. `riyaz-db` provides the
//! PostgreSQL implementation of those contracts.

pub mod accuracy;
pub mod achievement;
pub mod error;
pub mod pitch;
pub mod scoring;
pub mod stores;
pub mod streak;
pub mod suggestion;
pub mod types;

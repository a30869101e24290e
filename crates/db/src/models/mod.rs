//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the create/update DTOs its repository accepts.

pub mod achievement;
pub mod progress_record;
pub mod recording;
pub mod segment;
pub mod streak;

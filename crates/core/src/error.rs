use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Zero overlapping samples between the submitted and reference
    /// sequences; a percentage over zero pairs is undefined.
    #[error("No pitch samples to compare")]
    EmptyComparison,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),
}

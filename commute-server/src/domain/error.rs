//! Domain error types.
//!
//! These errors represent validation failures on input records. They are
//! distinct from graph and ranking errors.

/// Domain-level errors for record validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station id is empty or whitespace
    #[error("invalid station id: must be non-empty")]
    InvalidStationId,

    /// Safety score outside 1..=5
    #[error("invalid safety score {0}: must be between 1 and 5")]
    InvalidSafetyScore(u8),
}

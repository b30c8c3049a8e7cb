//! Domain types for the commute finder.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod station;

pub use error::DomainError;
pub use station::{Minutes, SafetyScore, Station, StationId};

//! Station identity and attributes.

use std::fmt;

use super::DomainError;

/// Commute duration in whole minutes.
pub type Minutes = u32;

/// A non-empty station identifier.
///
/// Identity of a station within a graph is its id. Ids are compared
/// byte-for-byte, so `"a"` and `"A"` are different stations.
///
/// # Examples
///
/// ```
/// use commute_server::domain::StationId;
///
/// let id = StationId::parse("shibuya").unwrap();
/// assert_eq!(id.as_str(), "shibuya");
///
/// // Empty and whitespace-only ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.trim().is_empty() {
            return Err(DomainError::InvalidStationId);
        }
        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Neighbourhood safety rating, 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SafetyScore(u8);

impl SafetyScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a safety score, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidSafetyScore(value));
        }
        Ok(SafetyScore(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SafetyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A residential station on the transit network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique identity within a graph.
    pub id: StationId,

    /// Human-readable name.
    pub name: String,

    /// Monthly rent in whole currency units.
    pub rent: u32,

    /// Safety rating of the surrounding area.
    pub safety: SafetyScore,
}

impl Station {
    /// Create a new station.
    pub fn new(id: StationId, name: impl Into<String>, rent: u32, safety: SafetyScore) -> Self {
        Self {
            id,
            name: name.into(),
            rent,
            safety,
        }
    }

    /// Returns true if the rent exceeds `budget`.
    pub fn is_over_budget(&self, budget: u32) -> bool {
        self.rent > budget
    }
}

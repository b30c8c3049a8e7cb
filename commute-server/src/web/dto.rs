//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::ranking::{Explanation, ScoredStation};

/// Request to rank stations for two workplaces.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Station id of the first workplace
    pub workplace_a: String,

    /// Station id of the second workplace
    pub workplace_b: String,

    /// 0-100 dial; below 50 favours the first workplace
    pub ratio: f64,

    /// 0-1 dial; 0 minimises total time, 1 the worse commute
    pub lambda: f64,

    /// Monthly rent budget
    pub budget: u32,
}

/// A ranked station.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    /// Station id
    pub id: String,

    /// Station name
    pub name: String,

    /// Monthly rent
    pub rent: u32,

    /// Safety rating, 1-5
    pub safety_score: u8,

    /// Minutes from the first workplace
    pub time_a: u32,

    /// Minutes from the second workplace
    pub time_b: u32,

    /// Score in [0, 100]
    pub score: f64,

    /// Which commuter the station favours
    pub explanation: Explanation,

    /// Human-readable explanation
    pub description: String,
}

/// Response for a ranking request.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// Ranked stations, best first
    pub results: Vec<RecommendationResult>,
}

/// Query parameters for listing stations.
#[derive(Debug, Deserialize)]
pub struct StationListRequest {
    /// Case-insensitive substring to match against id or name
    pub q: Option<String>,

    /// Maximum stations to return
    pub limit: Option<usize>,
}

/// A station in a listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub rent: u32,
    pub safety_score: u8,
}

/// Response for a station listing.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Matching stations in network order
    pub stations: Vec<StationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RecommendationResult {
    /// Create from a scored station.
    pub fn from_scored(scored: &ScoredStation) -> Self {
        Self {
            id: scored.station.id.to_string(),
            name: scored.station.name.clone(),
            rent: scored.station.rent,
            safety_score: scored.station.safety.value(),
            time_a: scored.time_a,
            time_b: scored.time_b,
            score: scored.score,
            explanation: scored.explanation,
            description: scored.explanation.description().to_string(),
        }
    }
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            rent: station.rent,
            safety_score: station.safety.value(),
        }
    }
}

impl StationListRequest {
    /// Returns true if `station` matches the search term, if any.
    pub fn matches(&self, station: &Station) -> bool {
        let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
            return true;
        };
        let q = q.to_lowercase();
        station.id.as_str().to_lowercase().contains(&q) || station.name.to_lowercase().contains(&q)
    }
}

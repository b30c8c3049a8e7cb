//! Web layer for the commute finder.
//!
//! Provides JSON endpoints for listing stations and ranking them for a
//! pair of workplaces.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use futures::future::try_join;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::StationId;
use crate::paths::PathError;
use crate::ranking::{RankError, RankParams, require_workplace};

use super::dto::*;
use super::state::AppState;

/// Default and maximum page sizes for the station listing.
const DEFAULT_STATION_LIMIT: usize = 50;
const MAX_STATION_LIMIT: usize = 500;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/recommend", post(recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations in network order, optionally filtered.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationListRequest>,
) -> Json<StationListResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_STATION_LIMIT)
        .min(MAX_STATION_LIMIT);

    let stations = state
        .graph
        .list_stations()
        .iter()
        .filter(|s| req.matches(s))
        .take(limit)
        .map(StationResult::from_station)
        .collect();

    Json(StationListResponse { stations })
}

/// Rank stations for two workplaces.
///
/// Both distance maps are computed on blocking worker threads in parallel.
/// If the query outlives the configured timeout the traversals are
/// cancelled and the request fails with 503. They are also cancelled when
/// the handler is dropped, e.g. because the client went away.
async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendResponse>, AppError> {
    recommend_with_cancel(state, body, CancellationToken::new()).await
}

async fn recommend_with_cancel(
    state: AppState,
    body: Bytes,
    cancel: CancellationToken,
) -> Result<Json<RecommendResponse>, AppError> {
    let _cancel_on_drop = cancel.clone().drop_guard();

    // Parse JSON manually so we can log the body on failure
    let req: RecommendRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "rejected recommend body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let workplace_a = parse_workplace(&req.workplace_a)?;
    let workplace_b = parse_workplace(&req.workplace_b)?;
    let params = RankParams::new(req.ratio, req.lambda, req.budget).map_err(RankError::from)?;

    require_workplace(&state.graph, &workplace_a)?;
    require_workplace(&state.graph, &workplace_b)?;

    let engine = Arc::new(state.ranking_engine(cancel.clone()));

    let distances_from = |source: StationId| {
        let graph = state.graph.clone();
        let engine = engine.clone();
        tokio::task::spawn_blocking(move || engine.paths().distances(&graph, &source))
    };

    let both = try_join(distances_from(workplace_a), distances_from(workplace_b));
    let (dist_a, dist_b) = match tokio::time::timeout(state.query_timeout, both).await {
        Ok(Ok((a, b))) => (a?, b?),
        Ok(Err(join_error)) => {
            return Err(AppError::Internal {
                message: format!("distance task failed: {join_error}"),
            });
        }
        Err(_) => {
            cancel.cancel();
            return Err(RankError::Cancelled.into());
        }
    };

    let results = engine.rank(&state.graph, &dist_a, &dist_b, &params);
    Ok(Json(RecommendResponse {
        results: results
            .iter()
            .map(RecommendationResult::from_scored)
            .collect(),
    }))
}

fn parse_workplace(raw: &str) -> Result<StationId, AppError> {
    StationId::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid workplace {raw:?}: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<RankError> for AppError {
    fn from(e: RankError) -> Self {
        match &e {
            RankError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RankError::InvalidParams(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RankError::Cancelled => AppError::Unavailable {
                message: "query timed out".to_string(),
            },
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        RankError::from(e).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

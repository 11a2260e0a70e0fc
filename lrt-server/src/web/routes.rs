//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::aggregate::{AggregateError, RouteView, assemble_route_view};
use crate::catalog;
use crate::domain::{RouteNumber, Station, StationId};
use crate::lrt::LrtError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:id/schedule", get(station_schedule))
        .route("/api/routes", get(list_routes))
        .route("/api/routes/:route/board", get(route_board))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every Light Rail station, localized, with empty boards.
async fn list_stations(Query(query): Query<LangQuery>) -> Json<StationListResponse> {
    Json(StationListResponse {
        stations: catalog::all_stations(query.lang),
    })
}

/// List every Light Rail route with its endpoints and station sequence.
async fn list_routes(Query(query): Query<LangQuery>) -> Json<RouteListResponse> {
    let routes = catalog::all_routes()
        .iter()
        .map(|r| RouteSummary::from_route(r, query.lang))
        .collect();
    Json(RouteListResponse { routes })
}

/// Live board for one station.
async fn station_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Station>, AppError> {
    let id = StationId::parse(&id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let station = state.client.station(&id, query.lang).await?;
    Ok(Json((*station).clone()))
}

/// Route-mode board: every station on a route, with direction platform
/// filtering applied.
async fn route_board(
    State(state): State<AppState>,
    Path(route): Path<String>,
    Query(query): Query<RouteBoardQuery>,
) -> Result<Json<RouteView>, AppError> {
    let route_number = RouteNumber::parse(&route).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let view = assemble_route_view(
        &state.client,
        &state.policies,
        &route_number,
        query.reversed,
        query.lang,
    )
    .await?;

    Ok(Json(view))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<LrtError> for AppError {
    fn from(e: LrtError) -> Self {
        match e {
            LrtError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<AggregateError> for AppError {
    fn from(e: AggregateError) -> Self {
        match e {
            AggregateError::UnknownRoute(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod geocode;

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use rainharvest_api::{
    ApiError, CalculateRequest, CalculateResponse, Geocoder, HistoryRequest, HistoryResponse,
    LocationRequest, LocationResponse, calculate, calculation_history, locate,
};
use rainharvest_domain::EngineConfig;
use rainharvest_persistence::SqlitePersistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::geocode::NominatimGeocoder;

/// Rainharvest Server - HTTP server for the rainwater harvesting
/// feasibility engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory
    /// database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Nominatim search endpoint used for geocoding
    #[arg(
        long,
        default_value = "https://nominatim.openstreetmap.org/search"
    )]
    geocoder_url: String,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex for safe concurrent
/// access; the engine config and geocoder are read-only.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for pricing and calculation history.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// The immutable engine coefficient tables.
    config: Arc<EngineConfig>,
    /// The geocoding collaborator.
    geocoder: Arc<dyn Geocoder + Send + Sync>,
}

/// Query parameters for the calculation history endpoint.
#[derive(Debug, Deserialize)]
struct HistoryQuery {
    /// The user key history was recorded under.
    user_ref: Option<String>,
    /// Maximum number of entries to return.
    limit: Option<u32>,
}

/// Response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Runs a blocking API operation on the blocking thread pool.
///
/// The geocoder and the Diesel connection both block, so handler work is
/// moved off the async runtime.
async fn run_blocking<T, F>(task: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    let result: Result<T, ApiError> = tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| HttpError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Task join error: {e}"),
        })?;
    result.map_err(HttpError::from)
}

/// Handler for POST `/api/calculate` endpoint.
///
/// Runs the full feasibility calculation and records it for history.
async fn handle_calculate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, HttpError> {
    info!(location = %req.location, "Handling calculate request");

    let response: CalculateResponse = run_blocking(move || {
        let mut persistence = app_state.persistence.blocking_lock();
        calculate(
            &app_state.config,
            &mut persistence,
            app_state.geocoder.as_ref(),
            &req,
        )
    })
    .await?;

    Ok(Json(response))
}

/// Handler for POST `/api/location` endpoint.
///
/// Resolves a location and returns the regional pricing preview.
async fn handle_location(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LocationRequest>,
) -> Result<Json<LocationResponse>, HttpError> {
    info!(location = %req.location, "Handling location request");

    let response: LocationResponse = run_blocking(move || {
        let mut persistence = app_state.persistence.blocking_lock();
        locate(&mut persistence, app_state.geocoder.as_ref(), &req)
    })
    .await?;

    Ok(Json(response))
}

/// Handler for GET `/api/calculations` endpoint.
///
/// Lists a user's stored calculations, newest first.
async fn handle_history(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, HttpError> {
    let request: HistoryRequest = HistoryRequest {
        user_ref: query.user_ref,
        limit: query.limit,
    };

    let response: HistoryResponse = run_blocking(move || {
        let mut persistence = app_state.persistence.blocking_lock();
        calculation_history(&mut persistence, &request)
    })
    .await?;

    Ok(Json(response))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/calculate", post(handle_calculate))
        .route("/api/location", post(handle_location))
        .route("/api/calculations", get(handle_history))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Rainharvest Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let geocoder: NominatimGeocoder = NominatimGeocoder::new(args.geocoder_url.clone())?;
    info!("Geocoding against {}", args.geocoder_url);

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: Arc::new(EngineConfig::default()),
        geocoder: Arc::new(geocoder),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

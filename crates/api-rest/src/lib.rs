//! # API REST
//!
//! REST API implementation for Verve.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (status codes, CORS)
//!
//! Uses `api-shared` for request/response types. The knowledge table is loaded by the caller
//! and shared read-only between requests.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    FindMatchesReq, FindMatchesRes, HealthRes, HealthService, LifeStageTipRes, ListLifeStagesRes,
    ListSymptomsRes, NutrientMatch,
};
use verve_core::{KnowledgeStore, LifeStage, VerveError};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<KnowledgeStore>,
}

impl AppState {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_symptoms, find_matches, list_life_stages, life_stage_tip),
    components(schemas(
        HealthRes,
        ListSymptomsRes,
        FindMatchesReq,
        FindMatchesRes,
        NutrientMatch,
        ListLifeStagesRes,
        LifeStageTipRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router, including Swagger UI at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/symptoms", get(list_symptoms))
        .route("/matches", post(find_matches))
        .route("/life-stages", get(list_life_stages))
        .route("/life-stages/:stage/tip", get(life_stage_tip))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Sorted list of every known symptom", body = ListSymptomsRes)
    )
)]
/// List the symptom vocabulary
///
/// Returns every distinct symptom phrase in the knowledge table, sorted, for the caller to
/// offer as choices.
#[axum::debug_handler]
async fn list_symptoms(State(state): State<AppState>) -> Json<ListSymptomsRes> {
    Json(ListSymptomsRes::from_tokens(
        state.store.list_symptom_vocabulary(),
    ))
}

#[utoipa::path(
    post,
    path = "/matches",
    request_body = FindMatchesReq,
    responses(
        (status = 200, description = "Nutrients whose symptoms contain a selected symptom", body = FindMatchesRes),
        (status = 400, description = "No symptom selected")
    )
)]
/// Find nutrients matching the selected symptoms
///
/// A nutrient matches when any selected symptom occurs within its symptom text. Results keep
/// knowledge table order; an empty list means no known deficiency pattern was found.
///
/// # Errors
/// Returns `400 Bad Request` if `selected` is empty.
#[axum::debug_handler]
async fn find_matches(
    State(state): State<AppState>,
    Json(req): Json<FindMatchesReq>,
) -> Result<Json<FindMatchesRes>, (StatusCode, &'static str)> {
    match state.store.find_matches(req.selected.as_slice()) {
        Ok(records) => Ok(Json(FindMatchesRes::from_records(&records))),
        Err(VerveError::InsufficientInput) => {
            tracing::warn!("Find matches rejected: no symptom selected");
            Err((
                StatusCode::BAD_REQUEST,
                "At least one symptom must be selected",
            ))
        }
        Err(e) => {
            tracing::error!("Find matches error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/life-stages",
    responses(
        (status = 200, description = "Life stages with a wellness tip", body = ListLifeStagesRes)
    )
)]
#[axum::debug_handler]
async fn list_life_stages(State(_state): State<AppState>) -> Json<ListLifeStagesRes> {
    Json(ListLifeStagesRes::all())
}

#[utoipa::path(
    get,
    path = "/life-stages/{stage}/tip",
    params(
        ("stage" = String, Path, description = "Life stage name, e.g. `Reproductive Age`")
    ),
    responses(
        (status = 200, description = "Wellness tip for the life stage", body = LifeStageTipRes),
        (status = 404, description = "Unknown life stage")
    )
)]
/// Wellness tip for a life stage
///
/// # Errors
/// Returns `404 Not Found` if `stage` is not one of the recognised life stages.
#[axum::debug_handler]
async fn life_stage_tip(
    State(_state): State<AppState>,
    AxumPath(stage): AxumPath<String>,
) -> Result<Json<LifeStageTipRes>, (StatusCode, &'static str)> {
    match stage.parse::<LifeStage>() {
        Ok(stage) => Ok(Json(LifeStageTipRes::from(stage))),
        Err(e) => {
            tracing::warn!("Life stage tip error: {}", e);
            Err((StatusCode::NOT_FOUND, "Unknown life stage"))
        }
    }
}

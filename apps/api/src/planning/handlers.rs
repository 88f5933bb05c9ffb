//! Axum route handlers for the Planning API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::graph::{render::write_graph_asset, CareerGraph};
use crate::models::plan::GrowthPlan;
use crate::models::profile::UserProfile;
use crate::planning::planner::{generate_growth_plans, SkippedCareer, DEFAULT_PLAN_YEARS};
use crate::planning::recommender::recommend_careers;
use crate::state::AppState;
use crate::store;

/// Upper bound accepted for the `horizon` request field.
const MAX_PLAN_YEARS: u32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub careers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub user_id: String,
    pub horizon: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    pub plan: GrowthPlan,
    pub skipped: Vec<SkippedCareer>,
}

#[derive(Debug, Deserialize)]
pub struct GraphRequest {
    pub user_id: String,
    pub career: String,
}

#[derive(Debug, Serialize)]
pub struct GraphResponse {
    pub nodes: usize,
    pub edges: usize,
    pub asset_path: String,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub status: String,
    pub saved_at: chrono::DateTime<chrono::Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = store::load_profile(&state.db, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {user_id} not found")))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profiles/:id
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SavedResponse>, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("user id cannot be empty".to_string()));
    }

    let saved_at = store::save_profile(&state.db, &user_id, &profile).await?;
    Ok(Json(SavedResponse {
        status: "saved".to_string(),
        saved_at,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Planning handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plans/recommend
///
/// Recommends candidate careers for the stored profile. An empty list is a
/// valid outcome, not an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let profile = load_required_profile(&state, &request.user_id).await?;
    let careers = recommend_careers(&state.llm, &profile).await?;
    Ok(Json(RecommendResponse { careers }))
}

/// POST /api/v1/plans/generate
///
/// Full pipeline: recommend careers → per-career growth plan → persist.
/// Careers whose generation calls fail are reported in `skipped`; the rest
/// of the batch still succeeds.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>, AppError> {
    let horizon = request.horizon.unwrap_or(DEFAULT_PLAN_YEARS);
    if horizon == 0 || horizon > MAX_PLAN_YEARS {
        return Err(AppError::Validation(format!(
            "horizon must be between 1 and {MAX_PLAN_YEARS}"
        )));
    }

    let profile = load_required_profile(&state, &request.user_id).await?;

    info!("Generating growth plan for user {}", request.user_id);
    let careers = recommend_careers(&state.llm, &profile).await?;
    let outcome = generate_growth_plans(
        &state.llm,
        state.catalog.as_ref(),
        &profile,
        &careers,
        horizon,
    )
    .await;

    store::save_plan(&state.db, &request.user_id, &outcome.plan).await?;

    Ok(Json(GeneratePlanResponse {
        plan: outcome.plan,
        skipped: outcome.skipped,
    }))
}

/// GET /api/v1/plans/:user_id
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<GrowthPlan>, AppError> {
    let plan = store::load_plan(&state.db, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No plan stored for user {user_id}")))?;
    Ok(Json(plan))
}

/// POST /api/v1/plans/graph
///
/// Builds the layered graph for one career of the stored plan and writes
/// the rendered DOT to the well-known asset path.
pub async fn handle_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<Json<GraphResponse>, AppError> {
    let plan = store::load_plan(&state.db, &request.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No plan stored for user {}", request.user_id))
        })?;

    let career_plan = plan.careers.get(&request.career).ok_or_else(|| {
        AppError::NotFound(format!(
            "Career '{}' not present in the stored plan",
            request.career
        ))
    })?;

    let graph = CareerGraph::from_plan(career_plan)?;
    let asset_path = write_graph_asset(&graph, &state.config.assets_dir)?;

    Ok(Json(GraphResponse {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        asset_path: asset_path.display().to_string(),
    }))
}

async fn load_required_profile(state: &AppState, user_id: &str) -> Result<UserProfile, AppError> {
    store::load_profile(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Profile {user_id} not found. Complete your profile before planning."
            ))
        })
}

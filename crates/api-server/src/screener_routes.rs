use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use radar_core::format_basis_points;
use screener::{run_screen, ControlBounds, ScreenSummary, ScreenerControls};
use serde::Serialize;

use crate::cards::{AnalysisCard, SummaryDisplay};
use crate::request_id::RequestId;
use crate::{bad_query, ApiResponse, AppError, AppState};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ScreenResponse {
    pub results: Vec<AnalysisCard>,
    pub summary: ScreenSummary,
    pub summary_display: SummaryDisplay,
    pub controls: ScreenerControls,
    /// Controls set outside the dashboard slider ranges. Informational only.
    pub warnings: Vec<String>,
    pub total_scanned: usize,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ControlsResponse {
    pub defaults: ScreenerControls,
    pub bounds: ControlBounds,
}

pub fn screener_routes() -> Router<AppState> {
    Router::new()
        .route("/api/screen", get(run_screener))
        .route("/api/controls", get(get_controls))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/screen",
    params(ScreenerControls),
    responses(
        (status = 200, description = "Candidates that clear every threshold, best score first", body = ScreenResponse),
        (status = 400, description = "Invalid control state")
    ),
    tag = "Screener"
)]
pub(crate) async fn run_screener(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    controls: Result<Query<ScreenerControls>, QueryRejection>,
) -> Result<Json<ApiResponse<ScreenResponse>>, AppError> {
    let Query(controls) = controls.map_err(bad_query)?;
    controls.validate()?;

    let analyses = state
        .cache
        .get_or_compute(&state.universe, &controls.overrides(), state.base_year())?;
    let screened = run_screen(&analyses, &controls);

    tracing::info!(
        "[{}] Screen matched {}/{} stocks (min score {}, horizon {}y, discount {}, growth {})",
        request_id.0,
        screened.summary.count,
        analyses.len(),
        controls.min_score,
        controls.horizon_years,
        format_basis_points(controls.discount_rate_delta),
        format_basis_points(controls.growth_rate_delta)
    );

    let warnings = ControlBounds::default()
        .out_of_range(&controls)
        .into_iter()
        .map(|name| format!("{} is outside the dashboard slider range", name))
        .collect();

    let results = screened
        .results
        .iter()
        .map(|a| AnalysisCard::build(a, &state.format))
        .collect();

    Ok(Json(ApiResponse::success(ScreenResponse {
        results,
        summary_display: SummaryDisplay::build(&screened.summary, &state.format),
        summary: screened.summary,
        controls,
        warnings,
        total_scanned: analyses.len(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/controls",
    responses((status = 200, description = "Default control state and slider ranges", body = ControlsResponse)),
    tag = "Screener"
)]
pub(crate) async fn get_controls() -> Json<ApiResponse<ControlsResponse>> {
    Json(ApiResponse::success(ControlsResponse {
        defaults: ScreenerControls::default(),
        bounds: ControlBounds::default(),
    }))
}

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    info(title = "Multibagger Radar API", description = "DCF valuation and multibagger screening"),
    paths(
        crate::stock_routes::list_stocks,
        crate::stock_routes::get_stock_analysis,
        crate::screener_routes::run_screener,
        crate::screener_routes::get_controls,
    ),
    components(schemas(
        radar_core::Stock,
        radar_core::IntrinsicValueResult,
        radar_core::FutureProjectionPoint,
        radar_core::Tag,
        radar_core::TagSet,
        screener::ScreenerControls,
        screener::ScreenSummary,
        screener::ControlBounds,
        screener::SliderBounds,
        crate::cards::AnalysisCard,
        crate::cards::CardDisplay,
        crate::cards::FactorScores,
        crate::cards::SummaryDisplay,
        crate::stock_routes::UniverseListing,
        crate::screener_routes::ScreenResponse,
        crate::screener_routes::ControlsResponse,
    )),
    tags(
        (name = "Stocks", description = "Screening universe and per-stock analysis"),
        (name = "Screener", description = "Threshold screening and control state")
    )
)]
pub struct ApiDoc;

pub fn openapi_routes() -> Router<AppState> {
    Router::new().route("/api/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

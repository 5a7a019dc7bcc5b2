//! Stock API Routes
//!
//! The raw universe and single-stock analysis cards.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use radar_core::{RadarError, Stock, ValuationOverrides, DEFAULT_HORIZON_YEARS};
use serde::{Deserialize, Serialize};

use crate::cards::AnalysisCard;
use crate::{bad_query, ApiResponse, AppError, AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverridesQuery {
    #[serde(default, alias = "horizonYears")]
    pub horizon_years: Option<u32>,
    #[serde(default, alias = "discountRateDelta")]
    pub discount_rate_delta: Option<f64>,
    #[serde(default, alias = "growthRateDelta")]
    pub growth_rate_delta: Option<f64>,
}

impl OverridesQuery {
    fn into_overrides(self) -> Result<ValuationOverrides, RadarError> {
        ValuationOverrides::new(
            self.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS),
            self.discount_rate_delta.unwrap_or(0.0),
            self.growth_rate_delta.unwrap_or(0.0),
        )
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct UniverseListing {
    pub count: usize,
    pub sectors: Vec<String>,
    pub stocks: Vec<Stock>,
}

pub fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/api/stocks", get(list_stocks))
        .route("/api/stocks/:ticker/analysis", get(get_stock_analysis))
}

#[utoipa::path(
    get,
    path = "/api/stocks",
    responses((status = 200, description = "Every stock in the screening universe")),
    tag = "Stocks"
)]
pub(crate) async fn list_stocks(State(state): State<AppState>) -> Json<ApiResponse<UniverseListing>> {
    let universe = &state.universe;
    Json(ApiResponse::success(UniverseListing {
        count: universe.len(),
        sectors: universe.sectors().into_iter().map(String::from).collect(),
        stocks: universe.stocks().to_vec(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/stocks/{ticker}/analysis",
    params(
        ("ticker" = String, Path, description = "Stock ticker, case-insensitive"),
        OverridesQuery
    ),
    responses(
        (status = 200, description = "Analysis card for one stock", body = AnalysisCard),
        (status = 400, description = "Invalid overrides"),
        (status = 404, description = "Ticker not in the universe")
    ),
    tag = "Stocks"
)]
pub(crate) async fn get_stock_analysis(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    query: Result<Query<OverridesQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<AnalysisCard>>, AppError> {
    let Query(query) = query.map_err(bad_query)?;
    let overrides = query.into_overrides()?;
    let stock = state
        .universe
        .find(&ticker)
        .ok_or_else(|| RadarError::NotFound(format!("Ticker {} is not in the universe", ticker.to_uppercase())))?;

    let analyses = state
        .cache
        .get_or_compute(&state.universe, &overrides, state.base_year())?;
    let analysis = analyses
        .iter()
        .find(|a| a.stock.ticker == stock.ticker)
        .ok_or_else(|| RadarError::NotFound(format!("No analysis for {}", stock.ticker)))?;

    Ok(Json(ApiResponse::success(AnalysisCard::build(analysis, &state.format))))
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! dashboard context for the actual derivation.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use super::dto::{
    HealthResponse, OutcomeChartData, OutcomesQuery, PayloadSlider, ScatterChartData,
    ScatterQuery, SiteCatalogData,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(inner)| inner)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the size and fingerprint of the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.context.dataset().len(),
        dataset_checksum: state.context.checksum().map(str::to_string),
    }))
}

// =============================================================================
// Widget configuration
// =============================================================================

/// GET /v1/sites
///
/// Site dropdown options, ALL first, then every site in ascending order.
pub async fn list_sites(State(state): State<AppState>) -> HandlerResult<SiteCatalogData> {
    Ok(Json(state.context.catalog_data()))
}

/// GET /v1/payload-range
///
/// Payload slider bounds, step and marks.
pub async fn get_payload_range(State(state): State<AppState>) -> HandlerResult<PayloadSlider> {
    Ok(Json(state.context.slider().clone()))
}

// =============================================================================
// Chart endpoints
// =============================================================================

/// GET /v1/outcomes?site=S
///
/// Outcome pie chart data. A missing `site` selects every site; an unknown
/// site yields an empty chart.
pub async fn get_outcomes(
    State(state): State<AppState>,
    query: Result<Query<OutcomesQuery>, QueryRejection>,
) -> HandlerResult<OutcomeChartData> {
    let selector = parse_query(query)?.selector();
    debug!(%selector, "computing outcome chart");

    Ok(Json(state.context.outcome_chart(&selector)))
}

/// GET /v1/scatter?site=S&low=L&high=H
///
/// Payload vs. outcome scatter data. Missing bounds default to the dataset's
/// payload span; `low > high` is rejected with 400.
pub async fn get_scatter(
    State(state): State<AppState>,
    query: Result<Query<ScatterQuery>, QueryRejection>,
) -> HandlerResult<ScatterChartData> {
    let query = parse_query(query)?;
    let selector = query.selector();
    let range = state.context.range_or_full(query.low, query.high)?;
    debug!(%selector, %range, "computing scatter chart");

    Ok(Json(state.context.scatter_chart(&selector, &range)))
}

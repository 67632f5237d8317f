//! Report handlers
//!
//! Render the persisted forecast report. The page embeds the JSON document
//! verbatim; `/report.json` serves it raw.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use domain::entities::ForecastReport;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// HTML page embedding the report document
#[instrument(skip(state))]
pub async fn report_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let report = state.store.load().await?;
    let report_json = report
        .to_json_pretty()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut context = tera::Context::new();
    context.insert("report_json", &report_json);
    context.insert("latitude", &report.location.latitude());
    context.insert("longitude", &report.location.longitude());

    let html = state.templates.render("report.html", &context)?;
    Ok(Html(html))
}

/// The raw report document
#[instrument(skip(state))]
pub async fn report_json(State(state): State<AppState>) -> Result<Json<ForecastReport>, ApiError> {
    Ok(Json(state.store.load().await?))
}

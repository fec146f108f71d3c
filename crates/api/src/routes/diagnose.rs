//! Diagnosis Routes

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use inference_engine::DiagnosticReport;
use report_render::{render, RenderFormat};
use serde::Deserialize;
use std::sync::Arc;
use symptom_intake::SymptomForm;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for the rendered endpoint
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// `text` (default) or `markdown`
    #[serde(default)]
    pub format: Option<String>,
}

/// Validate a form and run the engine on it
fn run(state: &AppState, form: SymptomForm) -> Result<DiagnosticReport, ApiError> {
    let record = state.validator.accept(form).map_err(|errors| {
        metrics::counter!("diagnosis_rejected_total").increment(1);
        info!("Symptom form rejected: {} error(s)", errors.len());
        ApiError::Validation(errors)
    })?;

    let report = state.engine.diagnose(&record);

    metrics::counter!("diagnoses_total").increment(1);
    if report.is_fallback() {
        metrics::counter!("diagnosis_fallback_total").increment(1);
    }
    debug!("Fired rules: {:?}", report.fired);

    Ok(report)
}

/// Diagnose a symptom form and return the structured report
pub async fn post_diagnose(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SymptomForm>,
) -> Result<Json<DiagnosticReport>, ApiError> {
    run(&state, form).map(Json)
}

/// Diagnose a symptom form and return the rendered report
pub async fn post_diagnose_text(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderQuery>,
    Json(form): Json<SymptomForm>,
) -> Result<impl IntoResponse, ApiError> {
    let report = run(&state, form)?;
    let format = params
        .format
        .as_deref()
        .map(RenderFormat::from_name)
        .unwrap_or_default();

    let content_type = match format {
        RenderFormat::PlainText => "text/plain; charset=utf-8",
        RenderFormat::Markdown => "text/markdown; charset=utf-8",
    };

    Ok(([(header::CONTENT_TYPE, content_type)], render(&report, format)))
}

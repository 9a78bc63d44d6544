//! Axum route handlers for the form page and the JSON API.

use axum::{extract::State, response::Html, Form, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::advisor::profile::ProfileInput;
use crate::advisor::service::AdvisorReport;
use crate::errors::AppError;
use crate::render::render_page;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub report: AdvisorReport,
    pub generated_at: DateTime<Utc>,
}

async fn run_pipeline(
    state: &AppState,
    input: &ProfileInput,
) -> Result<(Uuid, AdvisorReport), AppError> {
    let profile = input.clone().into_profile()?;
    let request_id = Uuid::new_v4();
    info!(
        "Recommendation requested: request_id={request_id}, pathway={}",
        profile.pathway.map_or_else(|| "none".to_string(), |p| p.to_string())
    );
    let report = state.advisor.advise(&profile).await;
    Ok((request_id, report))
}

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(render_page(&ProfileInput::default(), None))
}

/// POST /
///
/// Runs the full pipeline and re-renders the form with both result panels.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(input): Form<ProfileInput>,
) -> Result<Html<String>, AppError> {
    let (_, report) = run_pipeline(&state, &input).await?;
    Ok(Html(render_page(&input, Some(&report))))
}

/// POST /api/v1/recommendations
///
/// Same pipeline as the form. Presence-check failures answer 200 with
/// `status: "invalid"` and the message in `recommendation`.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let (request_id, report) = run_pipeline(&state, &input).await?;
    Ok(Json(RecommendationResponse {
        request_id,
        report,
        generated_at: Utc::now(),
    }))
}

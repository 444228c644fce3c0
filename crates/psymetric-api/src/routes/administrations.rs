use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use psymetric_core::models::administration::{Administration, Respondent};
use psymetric_core::models::response::ItemResponse;
use psymetric_core::models::result::SubscaleResult;
use psymetric_scoring::assemble::{assemble, complete_and_assemble, summarize};
use psymetric_scoring::error::ScoringError;
use psymetric_scoring::store::ScoringStore;
use psymetric_storage::memory::BatchOutcome;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateAdministration {
    scale_id: String,
    #[serde(default)]
    respondent: Respondent,
}

#[derive(Serialize)]
pub struct AdministrationDetail {
    #[serde(flatten)]
    administration: Administration,
    responses: Vec<ItemResponse>,
}

#[derive(Deserialize)]
pub struct AnswerBody {
    answer: String,
}

#[derive(Deserialize)]
pub struct BatchAnswer {
    item_sequence: u32,
    answer: String,
}

#[derive(Deserialize)]
pub struct BatchBody {
    answers: Vec<BatchAnswer>,
}

#[derive(Serialize)]
pub struct ResultsBody {
    administration_id: Uuid,
    scale_id: String,
    results: Vec<SubscaleResult>,
    /// Markdown block for a clinical report.
    summary: String,
}

pub async fn create_administration(
    State(state): State<AppState>,
    Json(body): Json<CreateAdministration>,
) -> Result<(StatusCode, Json<Administration>), ApiError> {
    let administration =
        state
            .store
            .create_administration(&body.scale_id, body.respondent, jiff::Timestamp::now())?;
    Ok((StatusCode::CREATED, Json(administration)))
}

pub async fn get_administration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdministrationDetail>, ApiError> {
    let administration = state.store.administration(id)?;
    let mut responses = state.store.administration_responses(id)?;
    responses.sort_by_key(|r| r.item_sequence);
    Ok(Json(AdministrationDetail {
        administration,
        responses,
    }))
}

pub async fn record_response(
    State(state): State<AppState>,
    Path((id, sequence)): Path<(Uuid, u32)>,
    Json(body): Json<AnswerBody>,
) -> Result<Json<ItemResponse>, ApiError> {
    let response = state
        .store
        .record_response(id, sequence, &body.answer, jiff::Timestamp::now())?;
    Ok(Json(response))
}

pub async fn record_responses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<BatchBody>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let answers: Vec<(u32, String)> = body
        .answers
        .into_iter()
        .map(|a| (a.item_sequence, a.answer))
        .collect();

    match state
        .store
        .record_responses(id, &answers, jiff::Timestamp::now())?
    {
        BatchOutcome::Recorded(responses) => Ok(Json(responses)),
        BatchOutcome::Rejected(errors) => Err(ApiError::InvalidAnswers(errors)),
    }
}

pub async fn complete_administration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsBody>, ApiError> {
    let results = complete_and_assemble(state.store.as_ref(), id, jiff::Timestamp::now())?;
    Ok(Json(results_body(&state, id, results)?))
}

pub async fn recompute_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsBody>, ApiError> {
    let administration = state.store.administration(id)?;
    let results = assemble(state.store.as_ref(), id, &administration.scale_id)?;
    Ok(Json(results_body(&state, id, results)?))
}

pub async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsBody>, ApiError> {
    let administration = state.store.administration(id)?;
    if !administration.is_completed() {
        return Err(ApiError::Conflict(format!(
            "administration {id} has not been completed"
        )));
    }
    let results = state.store.results(id)?;
    Ok(Json(results_body(&state, id, results)?))
}

fn results_body(
    state: &AppState,
    administration_id: Uuid,
    results: Vec<SubscaleResult>,
) -> Result<ResultsBody, ScoringError> {
    let administration = state.store.administration(administration_id)?;
    let scale = state.store.scale(&administration.scale_id)?;
    Ok(ResultsBody {
        administration_id,
        summary: summarize(&scale, &results),
        scale_id: scale.id,
        results,
    })
}

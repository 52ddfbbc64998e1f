//! Handlers for prompt generation, history and randomization.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use duet_core::error::CoreError;
use duet_core::randomizer::{self, HeldFields};
use duet_core::types::DbId;
use duet_db::models::generated_prompt::{GeneratePrompt, GeneratedPrompt, NewGeneratedPrompt};
use duet_db::repositories::{clamp_limit, clamp_offset, GeneratedPromptRepo};
use duet_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::templates::ensure_template_exists;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Append a rendered prompt to the history.
pub(crate) async fn persist_generated(
    pool: &DbPool,
    input: &NewGeneratedPrompt,
) -> AppResult<GeneratedPrompt> {
    let created = GeneratedPromptRepo::create(pool, input).await?;
    tracing::info!(
        id = created.id,
        template_id = ?created.template_id,
        "Prompt generated",
    );
    Ok(created)
}

// ---------------------------------------------------------------------------
// POST /prompts
// ---------------------------------------------------------------------------

/// Render a prompt from the submitted attributes and record it.
pub async fn generate_prompt(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePrompt>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let new = input.validate()?;

    if let Some(template_id) = new.template_id {
        ensure_template_exists(&state.pool, template_id).await?;
    }

    let created = persist_generated(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /prompts
// ---------------------------------------------------------------------------

/// List generated prompts, newest first.
pub async fn list_generated_prompts(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let items = GeneratedPromptRepo::list(
        &state.pool,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    tracing::debug!(count = items.len(), "Listed generated prompts");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /prompts/{id}
// ---------------------------------------------------------------------------

pub async fn get_generated_prompt(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let prompt = GeneratedPromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GeneratedPrompt",
            id,
        }))?;
    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// POST /prompts/randomize
// ---------------------------------------------------------------------------

/// Draw a random attribute set. Nothing is stored.
///
/// A request without a JSON body holds nothing.
pub async fn randomize_prompt(
    payload: Result<Json<HeldFields>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let held = match payload {
        Ok(Json(held)) => held,
        Err(JsonRejection::MissingJsonContentType(_)) => HeldFields::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let attributes = randomizer::randomize(&mut rand::rng(), &held);
    tracing::debug!(
        preserve_attire = held.preserve_attire,
        preserve_hijab = held.preserve_hijab,
        "Randomized attributes",
    );
    Ok(Json(DataResponse { data: attributes }))
}

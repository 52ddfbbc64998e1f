//! Handlers for prompt templates and presets.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use duet_core::error::CoreError;
use duet_core::types::DbId;
use duet_db::models::generated_prompt::NewGeneratedPrompt;
use duet_db::models::template::{CreatePromptTemplate, PromptTemplate};
use duet_db::repositories::PromptTemplateRepo;
use duet_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::prompts::persist_generated;
use crate::query::TemplateListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a template exists, returning the full row.
pub(crate) async fn ensure_template_exists(pool: &DbPool, id: DbId) -> AppResult<PromptTemplate> {
    PromptTemplateRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "PromptTemplate",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /templates
// ---------------------------------------------------------------------------

/// List templates, newest first, optionally only presets or only user ones.
pub async fn list_templates(
    State(state): State<AppState>,
    params: Result<Query<TemplateListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let items = PromptTemplateRepo::list(&state.pool, params.is_preset).await?;
    tracing::debug!(count = items.len(), "Listed templates");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /templates
// ---------------------------------------------------------------------------

/// Create a new template.
pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<CreatePromptTemplate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let new = input.validate()?;

    let created = PromptTemplateRepo::create(&state.pool, &new).await?;
    tracing::info!(
        id = created.id,
        name = %created.name,
        is_preset = created.is_preset,
        "Template created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /templates/{id}
// ---------------------------------------------------------------------------

pub async fn get_template(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let t = ensure_template_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: t }))
}

// ---------------------------------------------------------------------------
// POST /templates/{id}/generate
// ---------------------------------------------------------------------------

/// Render a prompt straight from a stored template and record it.
///
/// The stored attributes are re-checked against the current catalog, so a
/// template whose values have since left the catalog is rejected.
pub async fn generate_from_template(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let template = ensure_template_exists(&state.pool, id).await?;
    let attributes = template.attribute_input().into_attribute_set()?;

    let new = NewGeneratedPrompt::render(attributes, Some(template.id));
    let created = persist_generated(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

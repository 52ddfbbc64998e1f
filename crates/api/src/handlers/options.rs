use axum::response::IntoResponse;
use axum::Json;
use duet_core::catalog;

use crate::response::DataResponse;

/// GET /api/v1/prompt-options
///
/// Every selectable value per attribute, for populating the form.
pub async fn get_prompt_options() -> impl IntoResponse {
    Json(DataResponse {
        data: catalog::list_options(),
    })
}

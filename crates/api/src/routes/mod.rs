pub mod health;
pub mod prompts;
pub mod templates;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompt-options                      option catalog (GET)
///
/// /templates                           list, create
/// /templates/{id}                      get
/// /templates/{id}/generate             generate from template (POST)
///
/// /prompts                             history (GET), generate (POST)
/// /prompts/randomize                   random attribute set (POST)
/// /prompts/{id}                        get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/prompt-options", get(handlers::options::get_prompt_options))
        .nest("/templates", templates::router())
        .nest("/prompts", prompts::router())
}

//! Route definitions for prompt templates, mounted at `/templates`.
//!
//! ```text
//! GET    /                 list_templates
//! POST   /                 create_template
//! GET    /{id}             get_template
//! POST   /{id}/generate    generate_from_template
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/{id}", get(templates::get_template))
        .route("/{id}/generate", post(templates::generate_from_template))
}

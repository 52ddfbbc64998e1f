//! Route definitions for prompt generation, mounted at `/prompts`.
//!
//! ```text
//! GET    /             list_generated_prompts
//! POST   /             generate_prompt
//! POST   /randomize    randomize_prompt
//! GET    /{id}         get_generated_prompt
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(prompts::list_generated_prompts).post(prompts::generate_prompt),
        )
        .route("/randomize", post(prompts::randomize_prompt))
        .route("/{id}", get(prompts::get_generated_prompt))
}

//! HTTP route handlers.
//!
//! Each submodule defines routes for a feature area:
//! - `gist`: The gist page (GET /) and its JSON view (GET /api/v1/gist)
//! - `assets`: Highlighter stylesheet and embedded static files

pub mod assets;
pub mod gist;

use axum::Router;

use crate::state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(gist::routes(state.clone()))
        .merge(assets::routes(state))
        .fallback(assets::serve_static)
}

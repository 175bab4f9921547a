//! Stylesheets and embedded static files.
//!
//! - GET /css/syntax.css
//!   Highlighter theme, generated at startup.
//!
//! - Anything else is looked up in the embedded `assets/` directory.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use rust_embed::Embed;

use crate::state::SharedState;

/// Embedded static files (stylesheets)
#[derive(Embed)]
#[folder = "assets"]
struct Assets;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/css/syntax.css", get(get_syntax_css))
        .with_state(state)
}

async fn get_syntax_css(State(state): State<SharedState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        state.syntax_css.clone(),
    )
        .into_response()
}

/// Serve embedded static files
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

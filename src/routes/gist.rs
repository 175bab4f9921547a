//! Gist endpoints.
//!
//! - GET /?source=<blob url>&raw=<raw url>
//!   Renders the gist page. Both parameters fall back to the configured URLs;
//!   overrides must stay on the configured scheme, host and port.
//!
//! - GET /api/v1/gist?source=&raw=
//!   Same composition, returned as JSON.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::gist::source::ensure_same_origin;
use crate::models::GistView;
use crate::render::{Renderer, GIST_TEMPLATE};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(get_gist_page))
        .route("/api/v1/gist", get(get_gist))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct GistQuery {
    source: Option<String>,
    raw: Option<String>,
}

fn resolve(requested: Option<String>, configured: &str) -> Result<String> {
    match requested {
        Some(url) => {
            ensure_same_origin(&url, configured)?;
            Ok(url)
        }
        None => Ok(configured.to_string()),
    }
}

async fn compose(state: &SharedState, query: GistQuery) -> Result<GistView> {
    let source = resolve(query.source, &state.source_url)?;
    let raw = resolve(query.raw, &state.raw_url)?;
    state.composer.compose_gist(&source, &raw).await
}

async fn get_gist_page(
    State(state): State<SharedState>,
    Query(query): Query<GistQuery>,
) -> Result<Html<String>> {
    let view = compose(&state, query).await?;
    let page = state.renderer.render(GIST_TEMPLATE, &view)?;
    Ok(Html(page.into_string()))
}

async fn get_gist(
    State(state): State<SharedState>,
    Query(query): Query<GistQuery>,
) -> Result<Json<GistView>> {
    let view = compose(&state, query).await?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const SOURCE: &str = "https://github.com/owner/repo/blob/main/main.go";
    const RAW: &str = "https://raw.githubusercontent.com/owner/repo/main/main.go";

    #[test]
    fn missing_override_uses_configured_url() {
        assert_eq!(resolve(None, SOURCE).unwrap(), SOURCE);
    }

    #[test]
    fn override_on_configured_host_is_used() {
        let other = "https://raw.githubusercontent.com/owner/repo/main/lib.go";
        assert_eq!(resolve(Some(other.to_string()), RAW).unwrap(), other);
    }

    #[test]
    fn override_on_other_host_is_rejected() {
        let err = resolve(Some("http://127.0.0.1:6379/".to_string()), RAW).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        // raw URLs may not point at the source host either
        assert!(resolve(Some(SOURCE.to_string()), RAW).is_err());
    }
}

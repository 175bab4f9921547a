//! Shared, read-only server state.

use std::sync::Arc;

use crate::gist::GistComposer;
use crate::highlight::SyntectHighlighter;
use crate::remote::HttpFetcher;
use crate::render::MaudRenderer;

pub type HttpComposer = GistComposer<HttpFetcher, HttpFetcher, SyntectHighlighter>;

pub struct AppState {
    pub composer: HttpComposer,
    pub renderer: MaudRenderer,
    /// Page shown when `GET /` has no `source` parameter
    pub source_url: String,
    pub raw_url: String,
    /// Theme stylesheet, generated once at startup
    pub syntax_css: String,
}

pub type SharedState = Arc<AppState>;

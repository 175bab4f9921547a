//! Remote collaborators: page and raw source fetching.
//!
//! - `DocumentFetcher`: loads an HTML page into a queryable `Document`
//! - `RawFetcher`: loads the raw bytes of a source file
//! - `HttpFetcher`: both, over a shared `reqwest::Client`

pub mod document;
pub mod http;

use std::future::Future;

use crate::error::Result;

pub use document::Document;
pub use http::HttpFetcher;

pub trait DocumentFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Document>> + Send;
}

pub trait RawFetcher {
    fn fetch_bytes(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

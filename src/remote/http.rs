use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::remote::{Document, DocumentFetcher, RawFetcher};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Largest page or raw file body read into memory.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body: usize,
}

fn too_large(url: &str, limit: usize) -> AppError {
    AppError::Fetch(format!("{}: response body exceeds {} bytes", url, limit))
}

/// Rejects a response whose declared length is already over `limit`.
fn check_declared_length(url: &str, declared: Option<u64>, limit: usize) -> Result<()> {
    match declared {
        Some(len) if len > limit as u64 => Err(too_large(url, limit)),
        _ => Ok(()),
    }
}

/// Appends `chunk` unless that would grow `body` past `limit`.
fn append_limited(url: &str, body: &mut Vec<u8>, chunk: &[u8], limit: usize) -> Result<()> {
    if body.len() + chunk.len() > limit {
        return Err(too_large(url, limit));
    }
    body.extend_from_slice(chunk);
    Ok(())
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            max_body: MAX_BODY_BYTES,
        })
    }

    /// GETs `url` and reads at most `max_body` bytes of its body.
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "fetching");
        let mut response = self.client.get(url).send().await?.error_for_status()?;
        check_declared_length(url, response.content_length(), self.max_body)?;

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            append_limited(url, &mut body, &chunk, self.max_body)?;
        }
        debug!(url, status = %response.status(), bytes = body.len(), "fetched");
        Ok(body)
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Document> {
        let body = self.get(url).await?;
        Ok(Document::parse(&String::from_utf8_lossy(&body)))
    }
}

impl RawFetcher for HttpFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://raw.githubusercontent.com/o/r/main/big.go";

    #[test]
    fn declared_length_over_limit_is_rejected() {
        assert!(check_declared_length(URL, None, 10).is_ok());
        assert!(check_declared_length(URL, Some(10), 10).is_ok());
        let err = check_declared_length(URL, Some(11), 10).unwrap_err();
        assert!(matches!(err, AppError::Fetch(ref msg) if msg.contains("exceeds 10 bytes")));
    }

    #[test]
    fn chunks_stop_at_limit() {
        let mut body = Vec::new();
        append_limited(URL, &mut body, b"12345", 8).unwrap();
        append_limited(URL, &mut body, b"678", 8).unwrap();
        assert_eq!(body, b"12345678");

        let err = append_limited(URL, &mut body, b"9", 8).unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
        assert_eq!(body.len(), 8);
    }
}

//! Source location helpers.
//!
//! Derives the file name, the parent directory page and the shell walkthrough
//! from a blob URL such as
//! `https://github.com/<owner>/<repo>/blob/<ref>/<dirs>/<file>`.

use reqwest::Url;

use crate::error::{AppError, Result};
use crate::models::RunTutorial;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_name: String,
    pub parent_url: String,
    host: String,
    /// Path segments up to the file, with the `blob/<ref>` pair removed
    import_path: Vec<String>,
}

impl SourceLocation {
    pub fn parse(source_url: &str) -> Result<Self> {
        let url = Url::parse(source_url)
            .map_err(|e| AppError::Parse(format!("{}: {}", source_url, e)))?;

        let host = url
            .host_str()
            .ok_or_else(|| AppError::Parse(format!("{}: missing host", source_url)))?
            .to_string();

        let mut segments: Vec<String> = url
            .path_segments()
            .map(|s| s.map(str::to_string).collect())
            .unwrap_or_default();

        let file_name = match segments.pop() {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(AppError::Parse(format!(
                    "{}: no file name in path",
                    source_url
                )))
            }
        };

        let mut parent = url.clone();
        parent.set_query(None);
        parent.set_fragment(None);
        parent
            .path_segments_mut()
            .map_err(|_| AppError::Parse(format!("{}: not a hierarchical URL", source_url)))?
            .pop()
            .push("");

        let mut import_path = segments;
        if matches!(import_path.get(2).map(String::as_str), Some("blob" | "tree")) {
            let end = import_path.len().min(4);
            import_path.drain(2..end);
        }

        Ok(Self {
            file_name,
            parent_url: parent.to_string(),
            host,
            import_path,
        })
    }

    /// `$ cd` line pointing at the file's directory inside a GOPATH checkout.
    pub fn cd_line(&self) -> String {
        let mut dir = format!("$GOPATH/src/{}/", self.host);
        for segment in &self.import_path {
            dir.push_str(segment);
            dir.push('/');
        }
        format!("$ cd {}", dir)
    }

    pub fn run_line(&self) -> Option<String> {
        self.file_name
            .ends_with(".go")
            .then(|| format!("$ go run {}", self.file_name))
    }

    pub fn run_tutorial(&self, listing: String) -> RunTutorial {
        RunTutorial {
            cd_line: self.cd_line(),
            listing,
            run_line: self.run_line(),
        }
    }
}

fn origin(url: &str) -> Result<(String, String, Option<u16>)> {
    let parsed = Url::parse(url).map_err(|e| AppError::Parse(format!("{}: {}", url, e)))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| AppError::Parse(format!("{}: missing host", url)))?
        .to_ascii_lowercase();
    Ok((parsed.scheme().to_string(), host, parsed.port_or_known_default()))
}

/// Accepts `candidate` only when it has the same scheme, host and port as
/// `configured`.
pub fn ensure_same_origin(candidate: &str, configured: &str) -> Result<()> {
    let (scheme, host, port) = origin(configured)?;
    let (candidate_scheme, candidate_host, candidate_port) = origin(candidate)?;
    if candidate_scheme != scheme || candidate_host != host || candidate_port != port {
        return Err(AppError::Parse(format!(
            "{}: only {}://{} URLs are allowed",
            candidate, scheme, host
        )));
    }
    Ok(())
}

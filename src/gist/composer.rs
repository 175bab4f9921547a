//! Gist composition pipeline.
//!
//! Steps, in order, each aborting the whole request on failure:
//! 1. Resolve the file name and parent directory from the source URL
//! 2. Fetch the source page; read the last-commit timestamp and author avatar
//! 3. Fetch the raw file
//! 4. Fetch the parent directory page and rebuild its listing
//! 5. Annotate the raw file and highlight it
//!
//! The selectors match GitHub's blob and tree page markup.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::gist::age::{compute_age, parse_timestamp};
use crate::gist::snippet::assemble;
use crate::gist::source::SourceLocation;
use crate::gist::tree::{build_tree, render_listing};
use crate::highlight::Highlighter;
use crate::models::{Author, GistView};
use crate::remote::{DocumentFetcher, RawFetcher};

pub const LAST_UPDATE_SELECTOR: &str = "div.commit-tease .float-right relative-time";
pub const LAST_UPDATE_ATTR: &str = "datetime";
pub const AVATAR_SELECTOR: &str = "img.avatar";
pub const LISTING_ROW_SELECTOR: &str = "table.js-navigation-container tr.js-navigation-item";
pub const LISTING_NAME_SELECTOR: &str = ".content a";

pub struct GistComposer<D, R, H> {
    documents: D,
    raw: R,
    highlighter: H,
    description: String,
    notes: String,
    clock: fn() -> DateTime<Utc>,
}

impl<D, R, H> GistComposer<D, R, H>
where
    D: DocumentFetcher + Sync,
    R: RawFetcher + Sync,
    H: Highlighter + Sync,
{
    pub fn new(documents: D, raw: R, highlighter: H) -> Self {
        Self {
            documents,
            raw,
            highlighter,
            description: String::new(),
            notes: String::new(),
            clock: Utc::now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn compose_gist(&self, source_url: &str, raw_url: &str) -> Result<GistView> {
        let location = SourceLocation::parse(source_url)?;

        // The parsed page must be dropped before the next await.
        let (last_update_date, author) = {
            let page = self.documents.fetch(source_url).await?;
            let last_update_date = page
                .find_attribute(LAST_UPDATE_SELECTOR, LAST_UPDATE_ATTR)?
                .map(|value| parse_timestamp(&value))
                .transpose()?;
            let author = Author {
                username: page.find_attribute(AVATAR_SELECTOR, "alt")?.unwrap_or_default(),
                avatar_uri: page.find_attribute(AVATAR_SELECTOR, "src")?.unwrap_or_default(),
            };
            (last_update_date, author)
        };

        let last_update = last_update_date
            .map(|date| compute_age(date, (self.clock)()).for_display())
            .unwrap_or_default();
        debug!(?last_update, username = %author.username, "source page read");

        let raw = self.raw.fetch_bytes(raw_url).await?;

        let names = {
            let parent = self.documents.fetch(&location.parent_url).await?;
            parent.select_texts(LISTING_ROW_SELECTOR, LISTING_NAME_SELECTOR)?
        };
        let names: Vec<String> = names.into_iter().filter(|name| !name.is_empty()).collect();
        let rows = build_tree(&names);
        let tree = render_listing(&rows);

        let snippet = assemble(&raw, &location.file_name, &author.username, last_update.days);
        let content = self.highlighter.highlight(&snippet, &location.file_name)?;

        info!(
            file = %location.file_name,
            entries = rows.len(),
            bytes = raw.len(),
            "gist composed"
        );

        Ok(GistView {
            last_update,
            last_update_date,
            author,
            file_name: location.file_name.clone(),
            content,
            run_tutorial: location.run_tutorial(tree.clone()),
            description: self.description.clone(),
            notes: self.notes.clone(),
            tree,
        })
    }
}

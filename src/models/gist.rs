//! Gist page view model.
//!
//! - `GistView`: everything the page template needs, built once per request
//! - `TimeSpan`: calendar age of the last edit
//! - `Author`: avatar and username of the last committer
//! - `RunTutorial`: the shell walkthrough shown next to the source

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Normalized calendar age (years, months, days).
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TimeSpan {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl TimeSpan {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self { years, months, days }
    }

    /// Presentation rule: a day count above one is shown one lower.
    pub fn for_display(self) -> Self {
        let days = if self.days > 1 { self.days - 1 } else { self.days };
        Self { days, ..self }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Author {
    pub username: String,
    pub avatar_uri: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RunTutorial {
    /// `$ cd $GOPATH/src/...` line
    pub cd_line: String,
    /// `$ ls` output of the parent directory
    pub listing: String,
    /// `$ go run <file>`, only for Go sources
    pub run_line: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GistView {
    pub last_update: TimeSpan,
    pub last_update_date: Option<DateTime<Utc>>,
    pub author: Author,
    pub file_name: String,
    /// Highlighted HTML, already escaped by the highlighter
    pub content: String,
    pub run_tutorial: RunTutorial,
    pub description: String,
    pub notes: String,
    pub tree: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rule_only_touches_days_above_one() {
        assert_eq!(TimeSpan::new(0, 0, 0).for_display(), TimeSpan::new(0, 0, 0));
        assert_eq!(TimeSpan::new(0, 0, 1).for_display(), TimeSpan::new(0, 0, 1));
        assert_eq!(TimeSpan::new(1, 2, 2).for_display(), TimeSpan::new(1, 2, 1));
        assert_eq!(TimeSpan::new(0, 3, 17).for_display(), TimeSpan::new(0, 3, 16));
    }

    #[test]
    fn view_pieces_serialize_for_the_api() {
        let age = serde_json::to_value(TimeSpan::new(1, 2, 3)).unwrap();
        assert_eq!(age, serde_json::json!({ "years": 1, "months": 2, "days": 3 }));

        let tutorial = serde_json::to_value(RunTutorial::default()).unwrap();
        assert_eq!(
            tutorial,
            serde_json::json!({ "cd_line": "", "listing": "", "run_line": null })
        );
    }
}

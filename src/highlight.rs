//! Syntax highlighting of the annotated source.
//!
//! `SyntectHighlighter` emits class-based HTML (`<span class="source go">`),
//! so the colors live in a separate stylesheet generated from the configured
//! theme and served at `/css/syntax.css`.

use std::path::Path;

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::{AppError, Result};

pub const DEFAULT_THEME: &str = "InspiredGitHub";

pub trait Highlighter {
    /// Highlights `source` as HTML; `file_name` picks the grammar.
    fn highlight(&self, source: &[u8], file_name: &str) -> Result<String>;
}

pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(theme_name).ok_or_else(|| {
            let known: Vec<_> = themes.themes.keys().cloned().collect();
            AppError::Highlight(format!(
                "unknown theme `{}` (available: {})",
                theme_name,
                known.join(", ")
            ))
        })?;

        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    pub fn stylesheet(&self) -> Result<String> {
        css_for_theme_with_class_style(&self.theme, ClassStyle::Spaced)
            .map_err(|e| AppError::Highlight(e.to_string()))
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, source: &[u8], file_name: &str) -> Result<String> {
        let text = std::str::from_utf8(source)
            .map_err(|e| AppError::Highlight(format!("{} is not valid UTF-8: {}", file_name, e)))?;

        let syntax = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.syntaxes.find_syntax_by_extension(ext))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);
        for line in LinesWithEndings::from(text) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| AppError::Highlight(e.to_string()))?;
        }

        Ok(generator.finalize())
    }
}

//! Parsed HTML page with the two queries the composer needs.
//!
//! The underlying tree is not `Send`; extract what you need before the next
//! `.await`.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

pub struct Document {
    html: Html,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AppError::Parse(format!("invalid selector `{}`: {}", css, e)))
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Value of `attr` on the first element matching `css`.
    pub fn find_attribute(&self, css: &str, attr: &str) -> Result<Option<String>> {
        let selector = selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string))
    }

    /// Trimmed text of the `cell_css` matches inside each `row_css` match,
    /// one entry per row.
    pub fn select_texts(&self, row_css: &str, cell_css: &str) -> Result<Vec<String>> {
        let rows = selector(row_css)?;
        let cells = selector(cell_css)?;
        Ok(self
            .html
            .select(&rows)
            .map(|row| {
                row.select(&cells)
                    .flat_map(|cell| cell.text())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <html><body>
          <div class="commit-tease">
            <span class="float-right">
              <relative-time datetime="2017-03-01T10:00:00Z">Mar 1, 2017</relative-time>
            </span>
          </div>
          <img class="avatar" alt="@kataras" src="https://avatars.example/kataras.png">
          <img class="avatar" alt="@someone-else" src="https://avatars.example/other.png">
          <table class="js-navigation-container">
            <tr class="js-navigation-item"><td class="content"><span><a href="#"> main.go </a></span></td></tr>
            <tr class="js-navigation-item"><td class="content"><span><a href="#">static/favicon.ico</a></span></td></tr>
            <tr class="js-navigation-item"><td class="content"><span></span></td></tr>
          </table>
        </body></html>
    "##;

    #[test]
    fn finds_nested_attribute() {
        let doc = Document::parse(PAGE);
        let value = doc
            .find_attribute("div.commit-tease .float-right relative-time", "datetime")
            .unwrap();
        assert_eq!(value.as_deref(), Some("2017-03-01T10:00:00Z"));
    }

    #[test]
    fn attribute_comes_from_first_match() {
        let doc = Document::parse(PAGE);
        assert_eq!(
            doc.find_attribute("img.avatar", "alt").unwrap().as_deref(),
            Some("@kataras")
        );
    }

    #[test]
    fn missing_element_or_attribute_is_none() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.find_attribute("img.logo", "src").unwrap(), None);
        assert_eq!(doc.find_attribute("img.avatar", "title").unwrap(), None);
    }

    #[test]
    fn row_texts_are_trimmed_and_kept_per_row() {
        let doc = Document::parse(PAGE);
        let names = doc
            .select_texts("table.js-navigation-container tr.js-navigation-item", ".content a")
            .unwrap();
        assert_eq!(names, vec!["main.go", "static/favicon.ico", ""]);
    }

    #[test]
    fn bad_selector_is_parse_error() {
        let doc = Document::parse(PAGE);
        assert!(matches!(doc.find_attribute("img[", "src"), Err(AppError::Parse(_))));
    }
}

//! Gist page template.
//!
//! Uses maud for compile-time HTML. Interpolated values are escaped; only the
//! highlighter output goes in as `PreEscaped`.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::error::{AppError, Result};
use crate::models::{GistView, TimeSpan};

pub const GIST_TEMPLATE: &str = "gist";

pub trait Renderer {
    fn render(&self, template: &str, view: &GistView) -> Result<Markup>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MaudRenderer;

impl Renderer for MaudRenderer {
    fn render(&self, template: &str, view: &GistView) -> Result<Markup> {
        match template {
            GIST_TEMPLATE => Ok(gist_page(view)),
            other => Err(AppError::Render(format!("unknown template: {}", other))),
        }
    }
}

fn plural(n: u32, unit: &str) -> String {
    format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" })
}

/// "1 year, 2 months, 3 days ago", skipping zero units.
pub fn age_phrase(age: &TimeSpan) -> String {
    let parts: Vec<String> = [(age.years, "year"), (age.months, "month"), (age.days, "day")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| plural(n, unit))
        .collect();

    if parts.is_empty() {
        "today".to_string()
    } else {
        format!("{} ago", parts.join(", "))
    }
}

fn gist_page(view: &GistView) -> Markup {
    let tutorial = &view.run_tutorial;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (view.file_name) }
                link rel="stylesheet" href="/css/gist.css";
                link rel="stylesheet" href="/css/syntax.css";
            }
            body {
                header.description { (view.description) }
                main.gist {
                    div.last-update {
                        "last update: "
                        time datetime=[view.last_update_date.map(|d| d.to_rfc3339())] {
                            (age_phrase(&view.last_update))
                        }
                    }
                    pre.code { (PreEscaped(view.content.as_str())) }
                    pre.tutorial {
                        (tutorial.cd_line) "\n"
                        (tutorial.listing)
                        @if let Some(run) = &tutorial.run_line {
                            "\n" (run)
                        }
                    }
                }
                footer.notes { (view.notes) }
                div.author {
                    @if !view.author.avatar_uri.is_empty() {
                        img.avatar src=(view.author.avatar_uri) alt=(view.author.username);
                    }
                    span.username { (view.author.username) }
                }
            }
        }
    }
}

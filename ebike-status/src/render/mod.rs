//! Output formats for the status page.
//!
//! Browsers get an HTML table, terminals get fixed-width text, and API
//! clients that ask for JSON get the report as JSON.

mod templates;
mod text;

use crate::availability::Report;

pub use templates::{StatusTemplate, render_html};
pub use text::render_text;

/// Product tokens of user agents that get plain text unless they ask
/// otherwise.
const CLI_AGENTS: &[&str] = &["curl", "wget", "httpie", "xh"];

/// Errors producing a page body.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How to render a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

impl OutputFormat {
    /// Pick a format from the request's `Accept` and `User-Agent` headers.
    ///
    /// An explicit `Accept` wins (HTML, then JSON, then plain text).
    /// Otherwise command-line clients get text and everything else HTML.
    pub fn negotiate(accept: Option<&str>, user_agent: Option<&str>) -> Self {
        if let Some(accept) = accept {
            let accept = accept.to_ascii_lowercase();
            if accept.contains("text/html") {
                return OutputFormat::Html;
            }
            if accept.contains("application/json") {
                return OutputFormat::Json;
            }
            if accept.contains("text/plain") {
                return OutputFormat::Text;
            }
        }

        let is_cli = user_agent.is_some_and(|ua| {
            let product = ua.trim_start().split(['/', ' ']).next().unwrap_or("");
            CLI_AGENTS
                .iter()
                .any(|agent| product.eq_ignore_ascii_case(agent))
        });

        if is_cli {
            OutputFormat::Text
        } else {
            OutputFormat::Html
        }
    }

    /// `Content-Type` for a body in this format.
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html; charset=utf-8",
            OutputFormat::Text => "text/plain; charset=utf-8",
            OutputFormat::Json => "application/json",
        }
    }

    /// Render a report in this format.
    pub fn render(self, report: &Report) -> Result<String, RenderError> {
        match self {
            OutputFormat::Html => render_html(report),
            OutputFormat::Text => Ok(render_text(report)),
            OutputFormat::Json => render_json(report),
        }
    }
}

/// Render a report as JSON.
pub fn render_json(report: &Report) -> Result<String, RenderError> {
    Ok(serde_json::to_string(report)?)
}

/// A response, independent of how it will be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Page {
    /// A 200 response in the given format.
    pub fn ok(format: OutputFormat, body: String) -> Self {
        Self {
            status: 200,
            content_type: format.content_type(),
            body,
        }
    }

    /// A plain-text error response.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            content_type: OutputFormat::Text.content_type(),
            body: message.into(),
        }
    }
}

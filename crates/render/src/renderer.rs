//! Renderer abstraction.

use serde::{Deserialize, Serialize};

use crate::html::HtmlRenderer;
use crate::json::JsonRenderer;
use crate::page::Page;
use crate::text::TextRenderer;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatting error
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Turns a page into output text.
pub trait Renderer {
    /// Render the page.
    fn render(&self, page: &Page) -> Result<String, RenderError>;
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Standalone HTML document
    Html,
}

impl OutputFormat {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    /// Renderer for this format.
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::default()),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Html] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}

//! JSON output.

use crate::page::Page;
use crate::renderer::{RenderError, Renderer};

/// Renders the page as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(page)?)
    }
}

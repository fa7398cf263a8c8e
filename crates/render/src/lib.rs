//! Page rendering.
//!
//! Turns a computed progress state into an ordered page of sections, and
//! renders that page as a terminal report, JSON or a standalone HTML document.

#![warn(missing_docs)]

pub mod config;
pub mod page;
pub mod renderer;
pub mod text;
pub mod json;
pub mod html;

pub use config::{DisplayConfig, ConfigError, MIN_CHART_HEIGHT};
pub use page::{build_page, Page, Section, SummaryItem, DonutSlice, TimelineChart, BarSeries};
pub use renderer::{Renderer, RenderError, OutputFormat};
pub use text::TextRenderer;
pub use json::JsonRenderer;
pub use html::HtmlRenderer;

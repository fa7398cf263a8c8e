//! Terminal report.

use std::fmt::Write;

use crate::page::{DonutSlice, Page, Section, SummaryItem, TimelineChart};
use crate::renderer::{RenderError, Renderer};

/// Renders the page as plain text for a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width of the progress bar in characters
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, page: &Page) -> Result<String, RenderError> {
        let mut out = String::new();

        let title = format!("{} {}", page.icon, page.title);
        writeln!(out, "{}", title.trim())?;
        writeln!(out, "{}", "=".repeat(title.trim().chars().count()))?;

        for section in &page.sections {
            writeln!(out)?;
            match section {
                Section::Headline { text } => writeln!(out, "{text}")?,
                Section::Donut { slices, .. } => self.write_donut(&mut out, slices)?,
                Section::Summary { heading, items } => write_summary(&mut out, heading, items)?,
                Section::Timeline(chart) => write_timeline(&mut out, chart)?,
                Section::Footer { text } => {
                    writeln!(out, "---")?;
                    writeln!(out, "{text}")?;
                }
            }
        }

        Ok(out)
    }
}

impl TextRenderer {
    fn write_donut(&self, out: &mut String, slices: &[DonutSlice]) -> Result<(), RenderError> {
        let completed = slices.first().map(|s| s.value).unwrap_or(0.0);
        let filled = ((completed / 100.0) * self.bar_width as f64).round() as usize;
        let filled = filled.min(self.bar_width);

        writeln!(
            out,
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(self.bar_width - filled)
        )?;
        let legend: Vec<String> = slices
            .iter()
            .map(|s| format!("{} {:.1}%", s.label, s.value))
            .collect();
        writeln!(out, "{}", legend.join(" | "))?;
        Ok(())
    }
}

fn write_summary(out: &mut String, heading: &str, items: &[SummaryItem]) -> Result<(), RenderError> {
    writeln!(out, "{heading}")?;
    let width = items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
    for item in items {
        writeln!(out, "  {:<width$}  {}", format!("{}:", item.label), item.value, width = width + 1)?;
    }
    Ok(())
}

fn write_timeline(out: &mut String, chart: &TimelineChart) -> Result<(), RenderError> {
    writeln!(out, "{}", chart.heading)?;
    writeln!(out, "{} ({} / {})", chart.title, chart.x_title, chart.y_title)?;
    for category in &chart.categories {
        let Some((series, bar)) = chart.bar(category) else {
            continue;
        };
        let mark = if bar.is_completed() { '#' } else { '.' };
        writeln!(
            out,
            "  {:<8}  {}  {:>5.2}  {}",
            category,
            mark.to_string().repeat(4),
            bar.weight,
            series.name
        )?;
    }
    Ok(())
}

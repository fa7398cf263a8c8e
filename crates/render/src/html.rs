//! Standalone HTML output with inline SVG charts.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::page::{DonutSlice, Page, Section, SummaryItem, TimelineChart};
use crate::renderer::{RenderError, Renderer};

const DONUT_RADIUS: f64 = 100.0;
const BAR_WIDTH: f64 = 24.0;
const BAR_GAP: f64 = 8.0;
const AXIS_MARGIN: f64 = 48.0;
const LABEL_MARGIN: f64 = 64.0;

/// Renders the page as a self-contained HTML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String, RenderError> {
        let mut out = String::new();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape(&page.title))?;
        writeln!(
            out,
            "<style>body{{font-family:sans-serif;max-width:960px;margin:2em auto}}\
             .row{{display:flex;gap:2em}}.main{{flex:2}}.side{{flex:1}}\
             footer{{text-align:center;color:gray}}</style>"
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{} {}</h1>", escape(&page.icon), escape(&page.title))?;

        // Headline and donut share the main column, the summary sits beside them.
        writeln!(out, "<div class=\"row\">")?;
        writeln!(out, "<div class=\"main\">")?;
        for section in &page.sections {
            match section {
                Section::Headline { text } => writeln!(out, "<h3>{}</h3>", escape(text))?,
                Section::Donut { slices, hole, height } => write_donut(&mut out, slices, *hole, *height)?,
                _ => {}
            }
        }
        writeln!(out, "</div>")?;
        writeln!(out, "<div class=\"side\">")?;
        for section in &page.sections {
            if let Section::Summary { heading, items } = section {
                write_summary(&mut out, heading, items)?;
            }
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        for section in &page.sections {
            match section {
                Section::Timeline(chart) => write_timeline(&mut out, chart)?,
                Section::Footer { text } => {
                    writeln!(out, "<hr>")?;
                    writeln!(out, "<footer><p>{}</p></footer>", escape(text))?;
                }
                _ => {}
            }
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}

fn write_donut(out: &mut String, slices: &[DonutSlice], hole: f64, height: u32) -> Result<(), RenderError> {
    let inner = DONUT_RADIUS * hole;
    let ring = DONUT_RADIUS - inner;
    let mid = inner + ring / 2.0;
    let circumference = 2.0 * PI * mid;
    let size = DONUT_RADIUS * 2.0;

    writeln!(
        out,
        "<svg class=\"donut\" height=\"{height}\" viewBox=\"0 0 {size} {size}\" role=\"img\">"
    )?;

    // Slices are drawn as dashed strokes, each offset by the ones before it.
    let mut offset = 0.0;
    for slice in slices {
        let length = circumference * slice.value.clamp(0.0, 100.0) / 100.0;
        writeln!(
            out,
            "<circle cx=\"{r}\" cy=\"{r}\" r=\"{mid:.3}\" fill=\"none\" stroke=\"{color}\" \
             stroke-width=\"{ring:.3}\" stroke-dasharray=\"{length:.3} {rest:.3}\" \
             stroke-dashoffset=\"{dash_offset:.3}\" transform=\"rotate(-90 {r} {r})\">\
             <title>{label}: {value:.1}%</title></circle>",
            r = DONUT_RADIUS,
            color = escape(&slice.color),
            rest = circumference - length,
            dash_offset = -offset,
            label = escape(&slice.label),
            value = slice.value,
        )?;
        offset += length;
    }

    writeln!(out, "</svg>")?;
    Ok(())
}

fn write_summary(out: &mut String, heading: &str, items: &[SummaryItem]) -> Result<(), RenderError> {
    writeln!(out, "<h4>{}</h4>", escape(heading))?;
    writeln!(out, "<ul>")?;
    for item in items {
        writeln!(
            out,
            "<li><strong>{}:</strong> {}</li>",
            escape(&item.label),
            escape(&item.value)
        )?;
    }
    writeln!(out, "</ul>")?;
    Ok(())
}

fn write_timeline(out: &mut String, chart: &TimelineChart) -> Result<(), RenderError> {
    writeln!(out, "<h3>{}</h3>", escape(&chart.heading))?;

    // Pages built without a validated config may be shorter than the labels.
    let plot_height = (f64::from(chart.height) - LABEL_MARGIN).max(0.0);
    let bar_area = (plot_height - 16.0).max(0.0);
    let width = AXIS_MARGIN + chart.categories.len() as f64 * (BAR_WIDTH + BAR_GAP);
    let max_value = chart
        .series
        .iter()
        .flat_map(|s| s.bars.iter().map(|b| b.weight))
        .fold(0.0_f64, f64::max);

    writeln!(
        out,
        "<svg class=\"timeline\" width=\"{width}\" height=\"{height}\" role=\"img\">",
        height = chart.height
    )?;
    writeln!(out, "<title>{}</title>", escape(&chart.title))?;
    writeln!(
        out,
        "<text x=\"0\" y=\"12\" font-size=\"11\">{} ({:.2})</text>",
        escape(&chart.y_title),
        max_value
    )?;

    for (index, category) in chart.categories.iter().enumerate() {
        let Some((series, bar)) = chart.bar(category) else {
            continue;
        };
        let bar_height = if max_value > 0.0 {
            bar.weight / max_value * bar_area
        } else {
            0.0
        };
        let x = AXIS_MARGIN + index as f64 * (BAR_WIDTH + BAR_GAP);
        let y = plot_height - bar_height;
        writeln!(
            out,
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{BAR_WIDTH}\" height=\"{bar_height:.1}\" \
             fill=\"{color}\" data-status=\"{status}\"><title>{label}: {weight:.2}</title></rect>",
            color = escape(&series.color),
            status = series.status.as_str(),
            label = escape(category),
            weight = bar.weight,
        )?;
        writeln!(
            out,
            "<text x=\"{tx:.1}\" y=\"{ty:.1}\" font-size=\"10\" transform=\"rotate(-45 {tx:.1} {ty:.1})\" \
             text-anchor=\"end\">{label}</text>",
            tx = x + BAR_WIDTH / 2.0,
            ty = plot_height + 12.0,
            label = escape(category),
        )?;
    }

    writeln!(
        out,
        "<text x=\"{x:.1}\" y=\"{y}\" font-size=\"11\" text-anchor=\"middle\">{}</text>",
        escape(&chart.x_title),
        x = width / 2.0,
        y = chart.height.saturating_sub(4),
    )?;
    writeln!(out, "</svg>")?;

    writeln!(out, "<p class=\"legend\">")?;
    for series in &chart.series {
        writeln!(
            out,
            "<span style=\"color:{}\">&#9632;</span> {}",
            escape(&series.color),
            escape(&series.name)
        )?;
    }
    writeln!(out, "</p>")?;
    Ok(())
}

/// Escape text for use in HTML content and quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

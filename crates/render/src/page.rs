//! Page model - the ordered sections shown for one evaluation.

use serde::{Deserialize, Serialize};
use tenure_core::{MonthEntry, MonthStatus, ProgressState};

use crate::config::DisplayConfig;

/// Date format used in the summary panel.
const SUMMARY_DATE_FORMAT: &str = "%d/%m/%Y";

/// A fully built page, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page title
    pub title: String,

    /// Icon shown next to the title
    pub icon: String,

    /// State the page was built from
    pub state: ProgressState,

    /// Sections in display order
    pub sections: Vec<Section>,
}

/// One block of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Large progress line
    Headline {
        /// Text shown
        text: String,
    },

    /// Completed vs pending donut chart
    Donut {
        /// Completed then pending
        slices: Vec<DonutSlice>,
        /// Inner radius fraction
        hole: f64,
        /// Height in pixels
        height: u32,
    },

    /// Labelled facts about the program
    Summary {
        /// Panel heading
        heading: String,
        /// Facts in display order
        items: Vec<SummaryItem>,
    },

    /// Stacked monthly bar chart
    Timeline(TimelineChart),

    /// Closing line
    Footer {
        /// Text shown
        text: String,
    },
}

/// A donut chart slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    /// Legend label
    pub label: String,
    /// Share in percent
    pub value: f64,
    /// Fill colour
    pub color: String,
}

/// A labelled value of the summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// Label
    pub label: String,
    /// Formatted value
    pub value: String,
}

/// Stacked bar chart of the program months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineChart {
    /// Heading above the chart
    pub heading: String,
    /// Chart title
    pub title: String,
    /// X axis title
    pub x_title: String,
    /// Y axis title
    pub y_title: String,
    /// Height in pixels
    pub height: u32,
    /// Month labels in axis order
    pub categories: Vec<String>,
    /// Completed series then pending series
    pub series: Vec<BarSeries>,
}

/// One named bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Legend name
    pub name: String,
    /// Status shared by every bar
    pub status: MonthStatus,
    /// Fill colour
    pub color: String,
    /// Bars of this series
    pub bars: Vec<MonthEntry>,
}

impl Page {
    /// The timeline chart, if the page has one.
    pub fn timeline(&self) -> Option<&TimelineChart> {
        self.sections.iter().find_map(|section| match section {
            Section::Timeline(chart) => Some(chart),
            _ => None,
        })
    }
}

impl TimelineChart {
    /// Bar for the month labelled `category`, from whichever series holds it.
    pub fn bar(&self, category: &str) -> Option<(&BarSeries, &MonthEntry)> {
        self.series.iter().find_map(|series| {
            series
                .bars
                .iter()
                .find(|bar| bar.label == category)
                .map(|bar| (series, bar))
        })
    }
}

/// Build the page for `state` and its month timeline.
///
/// Sections come out as: headline, donut, summary panel, timeline, footer.
pub fn build_page(state: &ProgressState, months: &[MonthEntry], config: &DisplayConfig) -> Page {
    let sections = vec![
        Section::Headline {
            text: format!("Progress: {:.1}%", state.percent_complete),
        },
        Section::Donut {
            slices: vec![
                DonutSlice {
                    label: MonthStatus::Completed.as_str().to_string(),
                    value: state.percent_complete,
                    color: config.completed_color.clone(),
                },
                DonutSlice {
                    label: MonthStatus::Pending.as_str().to_string(),
                    value: state.percent_pending(),
                    color: config.pending_color.clone(),
                },
            ],
            hole: config.donut_hole,
            height: config.chart_height,
        },
        Section::Summary {
            heading: "Key dates".to_string(),
            items: summary_items(state),
        },
        Section::Timeline(timeline_chart(months, config)),
        Section::Footer {
            text: config.footer.clone(),
        },
    ];

    Page {
        title: config.title.clone(),
        icon: config.icon.clone(),
        state: state.clone(),
        sections,
    }
}

fn summary_items(state: &ProgressState) -> Vec<SummaryItem> {
    let item = |label: &str, value: String| SummaryItem {
        label: label.to_string(),
        value,
    };

    vec![
        item("Started", state.start_date.format(SUMMARY_DATE_FORMAT).to_string()),
        item("Finishes", state.end_date.format(SUMMARY_DATE_FORMAT).to_string()),
        item("Total duration", format!("{} months", state.duration_months)),
        item("Time elapsed", format!("{} days", state.elapsed_days)),
        item("Time remaining", format!("{} days", state.remaining_days)),
    ]
}

fn timeline_chart(months: &[MonthEntry], config: &DisplayConfig) -> TimelineChart {
    let series_for = |status: MonthStatus, color: &str| BarSeries {
        name: status.as_str().to_string(),
        status,
        color: color.to_string(),
        bars: months.iter().filter(|m| m.status == status).cloned().collect(),
    };

    TimelineChart {
        heading: "Program timeline".to_string(),
        title: "Monthly progress".to_string(),
        x_title: "Month".to_string(),
        y_title: "Percent".to_string(),
        height: config.chart_height,
        categories: months.iter().map(|m| m.label.clone()).collect(),
        series: vec![
            series_for(MonthStatus::Completed, &config.completed_color),
            series_for(MonthStatus::Pending, &config.pending_color),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenure_core::{Date, ProgramSchedule};
    use tenure_progress::{month_sequence, ProgressCalculator};

    fn page_at(y: i32, m: u32, d: u32) -> Page {
        let now = Date::from_ymd_opt(y, m, d).unwrap();
        let schedule = ProgramSchedule::fixed();
        let state = ProgressCalculator::new(schedule).evaluate(now);
        let months = month_sequence(&schedule, now);
        build_page(&state, &months, &DisplayConfig::default())
    }

    #[test]
    fn test_section_order() {
        let page = page_at(2025, 8, 1);
        let kinds: Vec<_> = page
            .sections
            .iter()
            .map(|s| match s {
                Section::Headline { .. } => "headline",
                Section::Donut { .. } => "donut",
                Section::Summary { .. } => "summary",
                Section::Timeline(_) => "timeline",
                Section::Footer { .. } => "footer",
            })
            .collect();
        assert_eq!(kinds, ["headline", "donut", "summary", "timeline", "footer"]);
    }

    #[test]
    fn test_headline_one_decimal() {
        let page = page_at(2025, 8, 1);
        assert_eq!(
            page.sections[0],
            Section::Headline {
                text: "Progress: 50.7%".to_string()
            }
        );
    }

    #[test]
    fn test_donut_slices_sum_to_100() {
        let page = page_at(2025, 3, 10);
        let Section::Donut { slices, hole, .. } = &page.sections[1] else {
            panic!("expected donut");
        };
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Completed");
        assert_eq!(slices[0].color, "royalblue");
        assert!((slices[0].value + slices[1].value - 100.0).abs() < 1e-9);
        assert_eq!(*hole, 0.3);
    }

    #[test]
    fn test_summary_items() {
        let page = page_at(2025, 8, 1);
        let Section::Summary { items, .. } = &page.sections[2] else {
            panic!("expected summary");
        };
        let pairs: Vec<_> = items.iter().map(|i| (i.label.as_str(), i.value.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("Started", "01/08/2024"),
                ("Finishes", "31/07/2026"),
                ("Total duration", "24 months"),
                ("Time elapsed", "365 days"),
                ("Time remaining", "364 days"),
            ]
        );
    }

    #[test]
    fn test_timeline_series_split() {
        let page = page_at(2025, 8, 1);
        let chart = page.timeline().unwrap();
        assert_eq!(chart.categories.len(), 24);
        assert_eq!(chart.series[0].name, "Completed");
        assert_eq!(chart.series[0].bars.len(), 13);
        assert_eq!(chart.series[1].name, "Pending");
        assert_eq!(chart.series[1].bars.len(), 11);

        let (series, bar) = chart.bar("Sep 2025").unwrap();
        assert_eq!(series.status, MonthStatus::Pending);
        assert!((bar.weight - 100.0 / 24.0).abs() < 1e-12);
        assert!(chart.bar("Sep 2027").is_none());
    }

    #[test]
    fn test_footer_from_config() {
        let now = Date::from_ymd_opt(2025, 1, 1).unwrap();
        let state = ProgressCalculator::default().evaluate(now);
        let config = DisplayConfig {
            footer: "Nearly done".to_string(),
            ..Default::default()
        };
        let page = build_page(&state, &[], &config);
        assert_eq!(
            page.sections.last(),
            Some(&Section::Footer {
                text: "Nearly done".to_string()
            })
        );
    }
}

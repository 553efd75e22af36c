//! System metrics chart

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Chart, Dataset, GraphType},
};

use crate::api::MetricSample;
use crate::state::DashboardState;

use super::widgets::section_block;

pub const TITLE: &str = "System Metrics (Last 24 Hours)";

pub const CPU_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);
pub const MEMORY_COLOR: Color = Color::Rgb(0x82, 0xca, 0x9d);
pub const DISK_COLOR: Color = Color::Rgb(0xff, 0x73, 0x00);

/// One line of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: Color,
    /// (x position, value) pairs; x is the sample's index
    pub points: Vec<(f64, f64)>,
}

/// CPU, memory and disk series, plotted against sample position
pub fn series(samples: &[MetricSample]) -> [Series; 3] {
    let extract = |value: fn(&MetricSample) -> f64| -> Vec<(f64, f64)> {
        samples
            .iter()
            .enumerate()
            .map(|(i, sample)| (i as f64, value(sample)))
            .collect()
    };

    [
        Series {
            name: "CPU Usage",
            color: CPU_COLOR,
            points: extract(|s: &MetricSample| s.cpu),
        },
        Series {
            name: "Memory Usage",
            color: MEMORY_COLOR,
            points: extract(|s: &MetricSample| s.memory),
        },
        Series {
            name: "Disk Usage",
            color: DISK_COLOR,
            points: extract(|s: &MetricSample| s.disk),
        },
    ]
}

/// Timestamps shown under the x-axis
///
/// Labels are spread evenly over the axis, so a middle label sits at x = (n - 1) / 2.
/// It is only shown when a sample lies exactly there (odd sample count).
pub fn x_labels(samples: &[MetricSample]) -> Vec<String> {
    match samples.len() {
        0 => Vec::new(),
        1 => vec![samples[0].timestamp.clone()],
        n if (n - 1) % 2 == 0 => vec![
            samples[0].timestamp.clone(),
            samples[(n - 1) / 2].timestamp.clone(),
            samples[n - 1].timestamp.clone(),
        ],
        n => vec![samples[0].timestamp.clone(), samples[n - 1].timestamp.clone()],
    }
}

/// Upper bound of the y-axis: 100 (percent) unless a value exceeds it
pub fn y_max(samples: &[MetricSample]) -> f64 {
    samples
        .iter()
        .flat_map(|s| [s.cpu, s.memory, s.disk])
        .fold(100.0, f64::max)
}

/// Render the metrics chart
///
/// An empty sample list still draws the framed, empty chart.
pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let samples = state.metrics();
    let lines = series(samples);

    // A single point has no segment to draw, plot it as a dot
    let graph_type = if samples.len() > 1 {
        GraphType::Line
    } else {
        GraphType::Scatter
    };

    let datasets: Vec<Dataset> = lines
        .iter()
        .map(|line| {
            Dataset::default()
                .name(line.name)
                .marker(symbols::Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(line.color))
                .data(&line.points)
        })
        .collect();

    let x_max = (samples.len().saturating_sub(1)).max(1) as f64;
    let y_bound = y_max(samples);

    let chart = Chart::new(datasets)
        .block(section_block(TITLE))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels(samples))
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", y_bound / 2.0),
                    format!("{:.0}", y_bound),
                ])
                .bounds([0.0, y_bound]),
        );

    frame.render_widget(chart, area);
}

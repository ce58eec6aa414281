//! Renderer-neutral chart specification.

use serde::{Deserialize, Serialize};

use super::palette::Color;

/// Which edge of the plot an axis sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Left,
    Right,
}

impl AxisSide {
    /// Zig-zag placement: even indexes left, odd indexes right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            AxisSide::Left
        } else {
            AxisSide::Right
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AxisSide::Left => "left",
            AxisSide::Right => "right",
        }
    }
}

/// One time series: `(epoch millis, value)` points, `None` marking a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Display name (underscores shown as spaces)
    pub name: String,
    /// Source field
    pub field: String,
    pub points: Vec<(i64, Option<f64>)>,
    pub axis_index: usize,
}

/// Value axis for the series with the same index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub field: String,
    pub name: String,
    pub side: AxisSide,
    /// Distance from the plot edge, so stacked axes on a side do not overlap
    pub offset: f64,
    pub color: Color,
    pub show_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub series: Vec<Series>,
    /// Index-aligned with `series`
    pub axes: Vec<Axis>,
    pub palette: Vec<Color>,
    /// Set only when there were no records at all
    pub placeholder: bool,
    /// "No data" text shown by placeholder charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChartSpec {
    pub fn placeholder(palette: Vec<Color>, message: impl Into<String>) -> Self {
        Self {
            series: Vec::new(),
            axes: Vec::new(),
            palette,
            placeholder: true,
            message: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.name.clone()).collect()
    }

    /// Time range covered by all points, in epoch millis.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        let mut times = self.series.iter().flat_map(|s| s.points.iter().map(|(t, _)| *t));
        let first = times.next()?;
        Some(times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

//! ECharts option documents derived from a [`ChartSpec`].
//!
//! Everything here is presentation: tooltip, legend, zoom widgets and
//! per-axis styling are expanded from the normalized spec, never stored in it.

use serde_json::{json, Value};

use crate::chart::spec::{Axis, ChartSpec, Series};
use crate::state::field_catalog::EMPTY_SELECTION_TEXT;

const PLACEHOLDER_TEXT_COLOR: &str = "#666";

/// Full option object for `spec`.
pub fn to_echarts_option(spec: &ChartSpec) -> Value {
    if spec.placeholder || spec.is_empty() {
        return placeholder_option(spec);
    }

    let palette: Vec<String> = spec.palette.iter().map(|c| c.to_hex()).collect();
    let y_axes: Vec<Value> = spec.axes.iter().map(y_axis).collect();
    let series: Vec<Value> = spec.series.iter().map(line_series).collect();

    json!({
        "color": palette,
        "tooltip": { "trigger": "axis", "axisPointer": { "type": "cross" } },
        "legend": { "data": spec.series_names(), "top": 10 },
        "grid": { "left": "10%", "right": "10%", "bottom": "10%" },
        "xAxis": { "type": "time" },
        "yAxis": y_axes,
        "series": series,
        "dataZoom": [
            { "type": "inside", "start": 0, "end": 100 },
            { "type": "slider", "start": 0, "end": 100 }
        ]
    })
}

/// Data but nothing selected reads as "No fields selected".
fn placeholder_option(spec: &ChartSpec) -> Value {
    let text = spec
        .message
        .clone()
        .unwrap_or_else(|| EMPTY_SELECTION_TEXT.to_string());
    json!({
        "title": {
            "text": text,
            "left": "center",
            "top": "center",
            "textStyle": { "color": PLACEHOLDER_TEXT_COLOR, "fontSize": 16 }
        },
        "series": []
    })
}

fn y_axis(axis: &Axis) -> Value {
    let color = axis.color.to_hex();
    json!({
        "type": "value",
        "name": axis.name,
        "nameTextStyle": { "color": color },
        "position": axis.side.label(),
        "offset": axis.offset,
        "axisLine": { "show": true, "lineStyle": { "color": color } },
        "axisLabel": { "color": color },
        "splitLine": { "show": axis.show_grid }
    })
}

fn line_series(series: &Series) -> Value {
    let data: Vec<Value> = series
        .points
        .iter()
        .map(|(t, v)| json!([t, v]))
        .collect();
    json!({
        "name": series.name,
        "type": "line",
        "yAxisIndex": series.axis_index,
        "showSymbol": false,
        "data": data
    })
}

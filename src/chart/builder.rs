//! Chart specification synthesis.
//!
//! Every selected field becomes one line series with its own value axis.
//! Layout depends only on the selection order: axis `i` sits left when `i`
//! is even and right when odd, is pushed out by one offset step per
//! left/right pair already placed, and takes colour `i` of the palette
//! (wrapping). Only the first axis draws grid lines.

use tracing::debug;

use super::palette::color_for_index;
use super::spec::{Axis, AxisSide, ChartSpec, Series};
use crate::config::ChartConfig;
use crate::data::record::Record;
use crate::data::value::Value;
use crate::state::field_catalog::FieldCatalog;

#[derive(Debug, Clone, Default)]
pub struct ChartSpecBuilder {
    config: ChartConfig,
}

impl ChartSpecBuilder {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Build for the catalog's effective selection.
    pub fn build_with_catalog(&self, records: &[Record], catalog: &FieldCatalog) -> ChartSpec {
        self.build(records, &catalog.resolve(records))
    }

    /// Build a fresh specification for `fields`, in the given order.
    ///
    /// No records yields the placeholder regardless of `fields`. Unknown
    /// fields and non-numeric values become `None` points, never errors.
    pub fn build(&self, records: &[Record], fields: &[String]) -> ChartSpec {
        let palette = self.config.palette.clone();
        if records.is_empty() {
            return ChartSpec::placeholder(palette, self.config.placeholder_message.clone());
        }

        let times: Vec<i64> = records.iter().map(Record::timestamp_millis).collect();
        let mut series = Vec::with_capacity(fields.len());
        let mut axes = Vec::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            let name = display_name(field);
            let points = field_points(records, &times, field);

            series.push(Series {
                name: name.clone(),
                field: field.clone(),
                points,
                axis_index: index,
            });
            axes.push(Axis {
                field: field.clone(),
                name,
                side: AxisSide::for_index(index),
                offset: self.axis_offset(index),
                color: color_for_index(&palette, index).unwrap_or_default(),
                show_grid: index == 0,
            });
        }

        debug!(
            "Built chart with {} series over {} records",
            series.len(),
            records.len()
        );

        ChartSpec {
            series,
            axes,
            palette,
            placeholder: false,
            message: None,
        }
    }

    /// Axes 0 and 1 sit on the plot edges; each later pair steps outwards.
    fn axis_offset(&self, index: usize) -> f64 {
        self.config.axis_offset * (index / 2) as f64
    }
}

/// `(time, value)` for every record, looking the field's slot up once per
/// distinct header rather than once per record.
fn field_points(records: &[Record], times: &[i64], field: &str) -> Vec<(i64, Option<f64>)> {
    let mut slot: Option<(&Record, Option<usize>)> = None;
    records
        .iter()
        .zip(times)
        .map(|(record, &t)| {
            let index = match slot {
                Some((seen, index)) if seen.shares_columns(record) => index,
                _ => {
                    let index = record.column_index(field);
                    slot = Some((record, index));
                    index
                }
            };
            let value = index
                .and_then(|i| record.value_at(i))
                .and_then(Value::as_f64);
            (t, value)
        })
        .collect()
}

/// Series and axis label for a field.
pub fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::{Color, COLOR_PALETTE};
    use crate::data::parser::RecordParser;

    const HEADER: &str = "Year_UTC,Month_UTC,Day_UTC,Hour_UTC,Minute_UTC,Second_UTC,Pad,Well,Stage on Well,Treating Pressure,Slurry_Rate,Comment";

    fn records() -> Vec<Record> {
        RecordParser::new().parse(&format!(
            "{HEADER}\n2024,1,15,10,30,0,PadA,Well1,2,1500,80,ok\n2024,1,15,10,30,1,PadA,Well1,2,n/a,81,ok\n2024,1,15,10,30,2,PadA,Well1,2,1520,null,ok"
        ))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_records_give_placeholder() {
        let builder = ChartSpecBuilder::default();
        let spec = builder.build(&[], &names(&["Treating Pressure"]));
        assert!(spec.placeholder);
        assert!(spec.series.is_empty());
        assert_eq!(spec.message.as_deref(), Some(builder.config().placeholder_message.as_str()));
    }

    #[test]
    fn empty_selection_is_not_placeholder() {
        let spec = ChartSpecBuilder::default().build(&records(), &[]);
        assert!(!spec.placeholder);
        assert!(spec.series.is_empty());
        assert!(spec.axes.is_empty());
    }

    #[test]
    fn non_numeric_values_are_gaps() {
        let spec = ChartSpecBuilder::default().build(&records(), &names(&["Treating Pressure", "Comment"]));
        let pressure: Vec<Option<f64>> = spec.series[0].points.iter().map(|p| p.1).collect();
        assert_eq!(pressure, vec![Some(1500.0), None, Some(1520.0)]);
        assert!(spec.series[1].points.iter().all(|p| p.1.is_none()));
        assert_eq!(spec.series[1].points.len(), 3);
    }

    #[test]
    fn unknown_fields_yield_null_points() {
        let spec = ChartSpecBuilder::default().build(&records(), &names(&["Nope"]));
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].points.len(), 3);
        assert!(spec.series[0].points.iter().all(|p| p.1.is_none()));
    }

    #[test]
    fn names_replace_underscores() {
        let spec = ChartSpecBuilder::default().build(&records(), &names(&["Slurry_Rate"]));
        assert_eq!(spec.series[0].name, "Slurry Rate");
        assert_eq!(spec.series[0].field, "Slurry_Rate");
        assert_eq!(spec.axes[0].name, "Slurry Rate");
    }

    #[test]
    fn points_use_record_timestamps() {
        let spec = ChartSpecBuilder::default().build(&records(), &names(&["Slurry_Rate"]));
        let times: Vec<i64> = spec.series[0].points.iter().map(|p| p.0).collect();
        assert_eq!(times, vec![1_705_314_600_000, 1_705_314_601_000, 1_705_314_602_000]);
    }

    #[test]
    fn axes_zig_zag_and_stack() {
        let fields: Vec<String> = (0..6).map(|i| format!("F{i}")).collect();
        let spec = ChartSpecBuilder::default().build(&records(), &fields);
        let layout: Vec<(AxisSide, f64, bool)> = spec
            .axes
            .iter()
            .map(|a| (a.side, a.offset, a.show_grid))
            .collect();
        assert_eq!(
            layout,
            vec![
                (AxisSide::Left, 0.0, true),
                (AxisSide::Right, 0.0, false),
                (AxisSide::Left, 60.0, false),
                (AxisSide::Right, 60.0, false),
                (AxisSide::Left, 120.0, false),
                (AxisSide::Right, 120.0, false),
            ]
        );
        for (i, s) in spec.series.iter().enumerate() {
            assert_eq!(s.axis_index, i);
            assert_eq!(spec.axes[i].field, s.field);
        }
    }

    #[test]
    fn colours_wrap_around_palette() {
        let fields: Vec<String> = (0..13).map(|i| format!("F{i}")).collect();
        let spec = ChartSpecBuilder::default().build(&records(), &fields);
        assert_eq!(spec.axes.len(), 13);
        assert_eq!(spec.axes[12].color, spec.axes[0].color);
        assert_eq!(spec.axes[11].color, COLOR_PALETTE[11]);
    }

    #[test]
    fn reordering_changes_layout() {
        let builder = ChartSpecBuilder::default();
        let a = builder.build(&records(), &names(&["Treating Pressure", "Slurry_Rate"]));
        let b = builder.build(&records(), &names(&["Slurry_Rate", "Treating Pressure"]));
        assert_eq!(a.axes[0].field, "Treating Pressure");
        assert_eq!(b.axes[0].field, "Slurry_Rate");
        assert_eq!(b.axes[0].side, AxisSide::Left);
    }

    #[test]
    fn records_from_different_headers_resolve_their_own_columns() {
        let mut all = records();
        all.extend(RecordParser::new().parse(
            "Year_UTC,Month_UTC,Day_UTC,Hour_UTC,Minute_UTC,Second_UTC,Pad,Well,Stage on Well,Comment,Treating Pressure\n\
             2024,1,15,10,31,0,PadA,Well1,2,ok,1600",
        ));
        let spec = ChartSpecBuilder::default().build(&all, &names(&["Treating Pressure", "Slurry_Rate"]));
        let pressure: Vec<Option<f64>> = spec.series[0].points.iter().map(|p| p.1).collect();
        assert_eq!(pressure, vec![Some(1500.0), None, Some(1520.0), Some(1600.0)]);
        let rate: Vec<Option<f64>> = spec.series[1].points.iter().map(|p| p.1).collect();
        assert_eq!(rate, vec![Some(80.0), Some(81.0), None, None]);
    }

    #[test]
    fn custom_config_is_honoured() {
        let config = ChartConfig {
            palette: vec![Color::rgb(1, 2, 3)],
            axis_offset: 40.0,
            ..ChartConfig::default()
        };
        let spec = ChartSpecBuilder::new(config).build(&records(), &names(&["A", "B", "C"]));
        assert!(spec.axes.iter().all(|a| a.color == Color::rgb(1, 2, 3)));
        assert_eq!(spec.axes[2].offset, 40.0);
    }

    #[test]
    fn catalog_default_selection_skips_absent_fields() {
        let records = records();
        let spec = ChartSpecBuilder::default().build_with_catalog(&records, &FieldCatalog::default());
        assert_eq!(spec.series_names(), vec!["Treating Pressure".to_string()]);
    }
}

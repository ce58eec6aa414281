//! wellplot
//!
//! Turns frac stage sensor logs (CSV with split UTC date/time columns) into
//! validated, timestamped records and lays any subset of their fields out as a
//! multi-series, multi-axis chart specification.
//!
//! - [`data`] - CSV ingestion, row validation and timestamp reconstruction
//! - [`state`] - plottable field discovery and selection bookkeeping
//! - [`chart`] - chart specification synthesis (series, axes, colours)
//! - [`render`] - concrete option documents derived from a chart specification

pub mod chart;
pub mod config;
pub mod data;
pub mod render;
pub mod state;

pub use chart::builder::ChartSpecBuilder;
pub use chart::spec::{Axis, AxisSide, ChartSpec, Series};
pub use config::ChartConfig;
pub use data::parser::{ParseOutcome, ParseStats, RecordParser};
pub use data::record::Record;
pub use data::value::Value;
pub use state::field_catalog::FieldCatalog;

use std::path::PathBuf;

/// Result type alias for wellplot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the I/O and configuration edges.
///
/// Parsing and chart building never fail on bad data; they degrade to fewer
/// records or a placeholder chart instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading a file failed
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration was rejected
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

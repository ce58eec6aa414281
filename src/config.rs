//! Chart configuration.
//!
//! The column contract of the logs is fixed; what a deployment may tune is
//! presentation: palette, default field selection, axis spacing and the
//! placeholder text.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::chart::palette::{Color, COLOR_PALETTE};
use crate::data::loader::load_text;
use crate::{Error, Result};

/// Fields charted when the caller has not chosen any
pub const DEFAULT_FIELDS: &[&str] = &["Treating Pressure", "Slurry Rate", "Prop Conc", "Btm Prop Conc"];

pub const DEFAULT_AXIS_OFFSET: f64 = 60.0;

pub const DEFAULT_PLACEHOLDER_MESSAGE: &str = "Please upload a CSV file to see the chart.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Series colours, assigned by position and wrapped when exhausted
    pub palette: Vec<Color>,

    /// Default field selection
    pub default_fields: Vec<String>,

    /// Offset added per stacked axis on the same side
    pub axis_offset: f64,

    /// Text carried by the placeholder chart
    pub placeholder_message: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: COLOR_PALETTE.to_vec(),
            default_fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            axis_offset: DEFAULT_AXIS_OFFSET,
            placeholder_message: DEFAULT_PLACEHOLDER_MESSAGE.to_string(),
        }
    }
}

impl ChartConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = load_text(path)?;
        let config = Self::from_json(&text)?;
        debug!("Loaded chart config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::config("palette must contain at least one colour"));
        }
        if !self.axis_offset.is_finite() || self.axis_offset < 0.0 {
            return Err(Error::config(format!(
                "axis_offset must be a non-negative number, got {}",
                self.axis_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 12);
        assert_eq!(config.default_fields.len(), 4);
        assert_eq!(config.axis_offset, 60.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ChartConfig::from_json(r##"{"palette": ["#000000", "#ffffff"]}"##).unwrap();
        assert_eq!(config.palette, vec![Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)]);
        assert_eq!(config.default_fields, ChartConfig::default().default_fields);
        assert_eq!(config.placeholder_message, DEFAULT_PLACEHOLDER_MESSAGE);
    }

    #[test]
    fn rejects_empty_palette() {
        let err = ChartConfig::from_json(r#"{"palette": []}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn rejects_negative_offset() {
        let err = ChartConfig::from_json(r#"{"axis_offset": -5}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn rejects_bad_colour() {
        let err = ChartConfig::from_json(r#"{"palette": ["blue"]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_fields": ["Annulus Pressure"], "axis_offset": 45}}"#).unwrap();
        let config = ChartConfig::load(file.path()).unwrap();
        assert_eq!(config.default_fields, vec!["Annulus Pressure".to_string()]);
        assert_eq!(config.axis_offset, 45.0);
    }
}

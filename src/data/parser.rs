//! CSV text to validated, timestamped records.
//!
//! Parsing is best-effort: a file missing a required column yields no
//! records, and individual rows are dropped for three distinct reasons
//! (wrong cell count, invalid Pad/Well/Stage, invalid date/time). None of
//! these surface as errors; the counts are reported through `tracing` and
//! [`ParseStats`].

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::datetime::utc_from_components;
use super::record::Record;
use super::schema::{is_blank_column, ColumnIndex, TIMESTAMP_KEY};
use super::value::{parse_leading_int, Value};

/// Parse counters for one input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines after the header
    pub data_rows: usize,

    /// Records emitted
    pub records_emitted: usize,

    /// Rows whose cell count differs from the header
    pub malformed_rows: usize,

    /// Rows with empty Pad/Well or a non-positive Stage on Well
    pub invalid_identity_rows: usize,

    /// Rows whose date/time components do not form a valid instant
    pub invalid_timestamp_rows: usize,

    /// Required columns absent from the header; non-empty means the file was skipped
    pub missing_columns: Vec<String>,
}

impl ParseStats {
    /// True when the header lacked a required column.
    pub fn is_aborted(&self) -> bool {
        !self.missing_columns.is_empty()
    }

    pub fn rows_skipped(&self) -> usize {
        self.malformed_rows + self.invalid_identity_rows + self.invalid_timestamp_rows
    }
}

/// Records plus the counters explaining what was dropped
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub stats: ParseStats,
}

/// Why a single data row was not emitted
enum RowRejection {
    InvalidIdentity,
    InvalidTimestamp,
}

/// Which cells are kept and under which column slot.
///
/// Built once from the header; rows never re-derive structure.
struct ColumnPlan {
    columns: Arc<[String]>,
    /// (cell position, slot in `columns`)
    slots: Vec<(usize, usize)>,
}

impl ColumnPlan {
    fn from_header(header: &[String]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut slots = Vec::new();
        for (position, name) in header.iter().enumerate() {
            if name.is_empty() || is_blank_column(name) || name == TIMESTAMP_KEY {
                continue;
            }
            // Duplicate names keep their first position; the last cell wins.
            let slot = match columns.iter().position(|c| c == name) {
                Some(slot) => slot,
                None => {
                    columns.push(name.clone());
                    columns.len() - 1
                }
            };
            slots.push((position, slot));
        }
        Self {
            columns: columns.into(),
            slots,
        }
    }

    fn values(&self, row: &StringRecord) -> Vec<Value> {
        let mut values = vec![Value::Text(String::new()); self.columns.len()];
        for &(position, slot) in &self.slots {
            values[slot] = Value::parse(&row[position]);
        }
        values
    }
}

/// Converts raw log text into records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw` and return the accepted records in input order.
    pub fn parse(&self, raw: &str) -> Vec<Record> {
        self.parse_with_stats(raw).records
    }

    /// Parse `raw`, returning records together with drop counters.
    pub fn parse_with_stats(&self, raw: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        // Plain comma splitting: quotes carry no meaning in these logs.
        let mut reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(raw.as_bytes());

        let mut lines: Vec<StringRecord> = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) => lines.push(record),
                Err(e) => debug!("Unreadable line skipped: {e}"),
            }
        }
        if lines.len() < 2 {
            return outcome;
        }

        let header: Vec<String> = lines[0].iter().map(str::to_string).collect();
        let index = match ColumnIndex::from_header(&header) {
            Ok(index) => index,
            Err(missing) => {
                warn!("Missing required columns: {}", missing.join(", "));
                outcome.stats.missing_columns = missing.into_iter().map(String::from).collect();
                return outcome;
            }
        };
        let plan = ColumnPlan::from_header(&header);

        let stats = &mut outcome.stats;
        for (line_no, row) in lines.iter().enumerate().skip(1) {
            stats.data_rows += 1;

            if row.len() != header.len() {
                debug!(
                    "Line {} has {} cells, header has {}; skipped",
                    line_no + 1,
                    row.len(),
                    header.len()
                );
                stats.malformed_rows += 1;
                continue;
            }

            match Self::parse_row(row, &index, &plan) {
                Ok(record) => outcome.records.push(record),
                Err(RowRejection::InvalidIdentity) => stats.invalid_identity_rows += 1,
                Err(RowRejection::InvalidTimestamp) => {
                    debug!("Line {} has an invalid date/time; skipped", line_no + 1);
                    stats.invalid_timestamp_rows += 1;
                }
            }
        }
        stats.records_emitted = outcome.records.len();

        if stats.invalid_identity_rows > 0 {
            warn!(
                "Skipped {} rows with empty Pad/Well or non-positive Stage on Well",
                stats.invalid_identity_rows
            );
        }

        outcome
    }

    fn parse_row(
        row: &StringRecord,
        index: &ColumnIndex,
        plan: &ColumnPlan,
    ) -> Result<Record, RowRejection> {
        let stage_ok = parse_leading_int(&row[index.stage]).is_some_and(|stage| stage > 0);
        if row[index.pad].is_empty() || row[index.well].is_empty() || !stage_ok {
            return Err(RowRejection::InvalidIdentity);
        }

        let mut parts = [0i64; 6];
        for (part, position) in parts.iter_mut().zip(index.time_positions()) {
            *part = parse_leading_int(&row[position]).ok_or(RowRejection::InvalidTimestamp)?;
        }
        let [year, month, day, hour, minute, second] = parts;
        let timestamp = utc_from_components(year, month, day, hour, minute, second)
            .ok_or(RowRejection::InvalidTimestamp)?;

        Ok(Record::new(plan.columns.clone(), plan.values(row), timestamp))
    }
}

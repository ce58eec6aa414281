use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

use super::datetime::format_iso_millis;
use super::schema::TIMESTAMP_KEY;
use super::value::Value;

/// One validated, timestamped row.
///
/// Column names are shared between all records of a parse; values are
/// index-aligned with them. Records are never mutated after the parser
/// emits them.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<Value>,
    timestamp: DateTime<Utc>,
}

impl Record {
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<Value>, timestamp: DateTime<Utc>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self {
            columns,
            values,
            timestamp,
        }
    }

    /// Value stored under `name`, if the column was retained.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.column_index(name).and_then(|i| self.value_at(i))
    }

    /// Slot of `name` in this record's column list.
    ///
    /// Valid for every record that [`shares_columns`](Self::shares_columns)
    /// with this one.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// True when both records came from the same header.
    pub fn shares_columns(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
    }

    /// Numeric value of `name`; text and absent columns are `None`.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Retained column names in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keys().zip(self.values.iter())
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// The `timestamp` key as exposed to consumers: ISO-8601 UTC.
    pub fn timestamp_iso(&self) -> String {
        format_iso_millis(&self.timestamp)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        for (key, value) in self.fields() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(TIMESTAMP_KEY, &self.timestamp_iso())?;
        map.end()
    }
}

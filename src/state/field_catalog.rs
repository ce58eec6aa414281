use crate::config::ChartConfig;
use crate::data::record::Record;
use crate::data::schema::is_reserved_column;

pub const EMPTY_SELECTION_TEXT: &str = "No fields selected";

/// Plottable field discovery plus the caller's selection.
///
/// The selection is an ordered set: insertion order drives legend and axis
/// order, duplicates are ignored. `None` means nothing was chosen explicitly
/// and the default selection applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    default_selection: Vec<String>,
    selection: Option<Vec<String>>,
}

impl FieldCatalog {
    pub fn new(default_selection: Vec<String>) -> Self {
        Self {
            default_selection: dedup(default_selection),
            selection: None,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.default_fields.clone())
    }

    /// Fields offered for plotting, in header order of the first record.
    ///
    /// Keys first seen in later records are appended. Time components and
    /// identifying columns are never offered.
    pub fn available_fields(records: &[Record]) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        let mut seen: Vec<&Record> = Vec::new();
        for record in records {
            if seen.iter().any(|r| r.shares_columns(record)) {
                continue;
            }
            seen.push(record);
            for key in record.keys() {
                if !is_reserved_column(key) && !fields.iter().any(|f| f == key) {
                    fields.push(key.to_string());
                }
            }
        }
        fields
    }

    pub fn default_selection(&self) -> &[String] {
        &self.default_selection
    }

    pub fn set_default_selection(&mut self, fields: Vec<String>) {
        self.default_selection = dedup(fields);
    }

    /// Explicit selection, if any.
    pub fn selection(&self) -> Option<&[String]> {
        self.selection.as_deref()
    }

    /// Explicit selection, or the default when none was made.
    pub fn current_selection(&self) -> &[String] {
        self.selection.as_deref().unwrap_or(&self.default_selection)
    }

    pub fn set_selection(&mut self, fields: Vec<String>) {
        self.selection = Some(dedup(fields));
    }

    /// Add (`checked`) or remove `field`; additions go to the end.
    pub fn toggle(&mut self, field: &str, checked: bool) {
        let mut selection = self.current_selection().to_vec();
        let present = selection.iter().any(|f| f == field);
        if checked && !present {
            selection.push(field.to_string());
        } else if !checked {
            selection.retain(|f| f != field);
        }
        self.selection = Some(selection);
    }

    /// Fields whose name contains `term`, ignoring case. An empty term matches all.
    pub fn filter_fields(available: &[String], term: &str) -> Vec<String> {
        let term = term.to_lowercase();
        available
            .iter()
            .filter(|field| term.is_empty() || field.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Add every field matching `term` to the selection.
    pub fn select_matching(&mut self, available: &[String], term: &str) {
        let mut selection = self.current_selection().to_vec();
        for field in Self::filter_fields(available, term) {
            if !selection.contains(&field) {
                selection.push(field);
            }
        }
        self.selection = Some(selection);
    }

    /// Explicitly select nothing.
    pub fn clear_selection(&mut self) {
        self.selection = Some(Vec::new());
    }

    /// Drop the explicit selection so the default applies again.
    pub fn reset_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection_summary(&self) -> String {
        let selection = self.current_selection();
        if selection.is_empty() {
            EMPTY_SELECTION_TEXT.to_string()
        } else {
            selection.join(", ")
        }
    }

    /// The field list to chart for `records`.
    ///
    /// An explicit selection is returned as is, unknown names included. The
    /// default selection is narrowed to fields the records actually carry.
    pub fn resolve(&self, records: &[Record]) -> Vec<String> {
        match &self.selection {
            Some(selection) => selection.clone(),
            None => {
                let available = Self::available_fields(records);
                self.default_selection
                    .iter()
                    .filter(|f| available.contains(*f))
                    .cloned()
                    .collect()
            }
        }
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

fn dedup(fields: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        if !unique.contains(&field) {
            unique.push(field);
        }
    }
    unique
}

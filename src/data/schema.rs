//! Fixed column contract for stage sensor logs.

/// The six split UTC components that combine into one timestamp.
pub const TIME_COLUMNS: [&str; 6] = [
    YEAR_COLUMN,
    MONTH_COLUMN,
    DAY_COLUMN,
    HOUR_COLUMN,
    MINUTE_COLUMN,
    SECOND_COLUMN,
];

pub const YEAR_COLUMN: &str = "Year_UTC";
pub const MONTH_COLUMN: &str = "Month_UTC";
pub const DAY_COLUMN: &str = "Day_UTC";
pub const HOUR_COLUMN: &str = "Hour_UTC";
pub const MINUTE_COLUMN: &str = "Minute_UTC";
pub const SECOND_COLUMN: &str = "Second_UTC";

/// Columns used only for row admission, never plotted.
pub const IDENTITY_COLUMNS: [&str; 3] = [PAD_COLUMN, WELL_COLUMN, STAGE_COLUMN];

pub const PAD_COLUMN: &str = "Pad";
pub const WELL_COLUMN: &str = "Well";
pub const STAGE_COLUMN: &str = "Stage on Well";

/// Key under which the reconstructed instant is exposed.
pub const TIMESTAMP_KEY: &str = "timestamp";

const BLANK_PREFIX: &str = "blank";

/// Padding columns: any header starting with "blank", ignoring case.
pub fn is_blank_column(name: &str) -> bool {
    name.get(..BLANK_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BLANK_PREFIX))
}

/// Time-component or identifying column.
pub fn is_reserved_column(name: &str) -> bool {
    TIME_COLUMNS.contains(&name) || IDENTITY_COLUMNS.contains(&name)
}

/// Header positions of every required column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub year: usize,
    pub month: usize,
    pub day: usize,
    pub hour: usize,
    pub minute: usize,
    pub second: usize,
    pub pad: usize,
    pub well: usize,
    pub stage: usize,
}

impl ColumnIndex {
    /// Locate the required columns in `header`.
    ///
    /// Returns the names of all missing columns, time components first, when
    /// any is absent. The first occurrence wins for duplicated names.
    pub fn from_header(header: &[String]) -> Result<Self, Vec<&'static str>> {
        let position = |name: &str| header.iter().position(|h| h == name);

        let missing: Vec<&'static str> = TIME_COLUMNS
            .iter()
            .chain(IDENTITY_COLUMNS.iter())
            .copied()
            .filter(|name| position(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let find = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            year: find(YEAR_COLUMN),
            month: find(MONTH_COLUMN),
            day: find(DAY_COLUMN),
            hour: find(HOUR_COLUMN),
            minute: find(MINUTE_COLUMN),
            second: find(SECOND_COLUMN),
            pad: find(PAD_COLUMN),
            well: find(WELL_COLUMN),
            stage: find(STAGE_COLUMN),
        })
    }

    /// Positions of the time components in year..second order.
    pub fn time_positions(&self) -> [usize; 6] {
        [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
    }
}

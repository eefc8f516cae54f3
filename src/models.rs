//! Core data structures for range filtering.
//!
//! Defines the parsed record, the resolved header, per-record outcomes and
//! the run summary counters.

use crate::constants::DELIMITER;
use crate::record_parser::{parse_fields, trim_field};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed input line: trimmed field values in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Parse a raw line into a record
    pub fn parse(line: &str) -> Self {
        Self {
            fields: parse_fields(line),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the first field equal to `name` after trimming
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| trim_field(field) == name)
    }

    /// Rejoin the fields with the delimiter (no terminator)
    pub fn to_line(&self) -> String {
        let mut delimiter = [0u8; 4];
        self.fields.join(DELIMITER.encode_utf8(&mut delimiter))
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

/// Header record together with the resolved target column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    pub record: Record,
    pub column_index: usize,
}

/// Why a record was counted as invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Record has no field at the target column index
    ShortRecord { field_count: usize },
    /// Target field is empty after trimming
    EmptyValue,
    /// Target field is not a base-10 integer
    NotAnInteger { value: String },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::ShortRecord { field_count } => {
                write!(f, "record has only {} fields", field_count)
            }
            InvalidReason::EmptyValue => write!(f, "empty value"),
            InvalidReason::NotAnInteger { value } => write!(f, "'{}' is not an integer", value),
        }
    }
}

/// Fate of a single data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Value above threshold; record was written
    Eligible { value: i32 },
    /// Valid value at or below threshold; record dropped
    BelowThreshold { value: i32 },
    /// Record skipped and counted invalid
    Invalid(InvalidReason),
}

impl RecordOutcome {
    pub fn is_eligible(&self) -> bool {
        matches!(self, RecordOutcome::Eligible { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, RecordOutcome::Invalid(_))
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Data lines read (header excluded)
    pub processed: u64,

    /// Records written to the output
    pub eligible: u64,

    /// Records skipped as malformed
    pub invalid: u64,
}

impl FilterSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome. `processed` is counted separately when the line is read.
    pub fn record(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Eligible { .. } => self.eligible += 1,
            RecordOutcome::Invalid(_) => self.invalid += 1,
            RecordOutcome::BelowThreshold { .. } => {}
        }
    }

    /// Valid records that did not pass the threshold
    pub fn below_threshold(&self) -> u64 {
        self.processed - self.eligible - self.invalid
    }

    /// Eligible records as a percentage of processed records
    pub fn eligibility_rate(&self) -> f64 {
        if self.processed == 0 {
            0.0
        } else {
            (self.eligible as f64 / self.processed as f64) * 100.0
        }
    }
}

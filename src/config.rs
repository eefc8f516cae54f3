//! Configuration management and validation.
//!
//! Holds the filtering parameters: which column decides eligibility, the
//! threshold it must exceed, and how often progress is reported.

use crate::constants::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TARGET_COLUMN, DEFAULT_THRESHOLD};
use crate::error::{FilterError, Result};
use crate::record_parser::trim_field;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for a single filtering run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Header name of the column holding the range value
    pub target_column: String,

    /// Records whose value is strictly greater than this are written
    pub threshold: i32,

    /// Report progress every N processed records (0 = never)
    pub progress_interval: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            threshold: DEFAULT_THRESHOLD,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl FilterConfig {
    /// Create configuration with a custom target column
    pub fn with_target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = column.into();
        self
    }

    /// Create configuration with a custom threshold
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create configuration with a custom progress interval
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Whether a progress report is due after `processed` records
    pub fn progress_due(&self, processed: u64) -> bool {
        self.progress_interval > 0 && processed % self.progress_interval == 0
    }

    /// Validate configuration parameters
    ///
    /// Header names are compared after trimming, so the target column is
    /// normalised the same way here.
    pub fn validate(mut self) -> Result<Self> {
        let trimmed = trim_field(&self.target_column);
        if trimmed.is_empty() {
            return Err(FilterError::configuration(
                "Target column name must not be empty",
            ));
        }
        if trimmed.len() != self.target_column.len() {
            self.target_column = trimmed.to_string();
        }

        debug!(
            "Validated configuration: column='{}', threshold={}, progress_interval={}",
            self.target_column, self.threshold, self.progress_interval
        );
        Ok(self)
    }
}

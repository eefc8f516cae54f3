//! Range Filter Library
//!
//! Streams a comma-delimited dataset, keeps the records whose value in a
//! named integer column (by default `Electric Range`) is strictly greater
//! than a threshold, and counts processed, eligible and invalid records.
//!
//! This library provides:
//! - Quote-aware line splitting with trimmed fields
//! - Header-driven resolution of the target column
//! - Per-record classification where malformed rows are counted, never fatal
//! - Single-pass streaming output with guaranteed flushing
//!
//! ```
//! use range_filter::{FilterConfig, StreamFilter};
//!
//! let input = "Make,Electric Range\nTesla,250\nLeaf,150\n";
//! let mut output = Vec::new();
//!
//! let filter = StreamFilter::new(FilterConfig::default()).unwrap();
//! let summary = filter.run(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(summary.eligible, 1);
//! assert_eq!(output, b"Make,Electric Range\nTesla,250\n");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;
pub mod record_parser;

// Re-export commonly used types
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use models::{FilterSummary, InvalidReason, Record, RecordOutcome, ResolvedHeader};
pub use processor::StreamFilter;
pub use record_parser::parse_fields;

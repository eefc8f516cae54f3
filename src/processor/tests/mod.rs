//! Tests for the streaming filter
//!
//! Runs the complete pipeline over in-memory input and output.

pub mod error_handling;

use crate::config::FilterConfig;
use crate::error::Result;
use crate::models::FilterSummary;
use crate::processor::StreamFilter;

/// Dataset used across the filtering scenarios
pub const SAMPLE_CSV: &str = "Make,Electric Range,Model
Tesla,250,Model3
Leaf,150,Leaf
Ford,abc,Focus
Kia,,Soul
";

/// Run the default filter over `input`, returning the result and the output text
pub fn run_default(input: &str) -> (Result<FilterSummary>, String) {
    run_with(FilterConfig::default(), input)
}

/// Run a filter with `config` over `input`, returning the result and the output text
pub fn run_with(config: FilterConfig, input: &str) -> (Result<FilterSummary>, String) {
    let filter = StreamFilter::new(config).unwrap();
    let mut output = Vec::new();
    let result = filter.run(input.as_bytes(), &mut output);
    (result, String::from_utf8(output).unwrap())
}

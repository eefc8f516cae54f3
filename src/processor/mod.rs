//! Streaming filter engine.
//!
//! Reads the header, resolves the target column, then evaluates each data
//! line in turn and writes the eligible ones. Only one line is held in
//! memory at a time.

pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::reader::LineReader;
use self::writer::RecordWriter;

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::models::{FilterSummary, InvalidReason, Record, RecordOutcome, ResolvedHeader};
use crate::record_parser::trim_field;

use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Single-pass threshold filter over delimited text
#[derive(Debug)]
pub struct StreamFilter {
    config: FilterConfig,
    progress: Option<ProgressBar>,
}

impl StreamFilter {
    /// Create a filter from a validated configuration
    pub fn new(config: FilterConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            progress: None,
        })
    }

    /// Attach a progress indicator advanced once per data line
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter `input_path` into `output_path`
    pub fn run_files(&self, input_path: &Path, output_path: &Path) -> Result<FilterSummary> {
        let input = File::open(input_path).map_err(|source| FilterError::OpenInput {
            path: input_path.to_path_buf(),
            source,
        })?;
        let output = File::create(output_path).map_err(|source| FilterError::CreateOutput {
            path: output_path.to_path_buf(),
            source,
        })?;

        info!(
            "Filtering {} -> {}",
            input_path.display(),
            output_path.display()
        );

        let summary = self.run(BufReader::new(input), BufWriter::new(output))?;

        info!(
            "Finished: {} processed, {} eligible, {} invalid",
            summary.processed, summary.eligible, summary.invalid
        );
        Ok(summary)
    }

    /// Run the filter over a line stream.
    ///
    /// The output is flushed before returning, whether the run succeeded or
    /// aborted on a fatal error.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<FilterSummary> {
        let mut writer = RecordWriter::new(output);
        let result = self.stream(input, &mut writer);
        let flushed = writer.flush();

        match (result, flushed) {
            (Ok(summary), Ok(())) => {
                debug!("Wrote {} lines", writer.lines_written());
                Ok(summary)
            }
            (Ok(_), Err(e)) => Err(e),
            (Err(e), flushed) => {
                if let Err(flush_error) = flushed {
                    warn!("Failed to flush output after error: {}", flush_error);
                }
                warn!("Filtering aborted: {}", e);
                Err(e)
            }
        }
    }

    fn stream<R: BufRead, W: Write>(
        &self,
        input: R,
        writer: &mut RecordWriter<W>,
    ) -> Result<FilterSummary> {
        let mut lines = LineReader::new(input);
        let header = self.initialize(&mut lines, writer)?;
        let mut summary = FilterSummary::new();

        for line in lines {
            let line = line?;
            self.process_line(&line, header.column_index, &mut summary, writer)?;

            if let Some(progress) = &self.progress {
                progress.inc(1);
            }
            if self.config.progress_due(summary.processed) {
                self.report_progress(&summary);
            }
        }

        Ok(summary)
    }

    /// Read the header, resolve the target column and echo the header.
    ///
    /// Nothing is written when the column cannot be resolved.
    pub fn initialize<I, W>(
        &self,
        lines: &mut I,
        writer: &mut RecordWriter<W>,
    ) -> Result<ResolvedHeader>
    where
        I: Iterator<Item = io::Result<String>>,
        W: Write,
    {
        let line = lines.next().ok_or(FilterError::EmptyInput)??;
        let record = Record::parse(&line);

        let column_index = record
            .position(&self.config.target_column)
            .ok_or_else(|| FilterError::missing_column(&self.config.target_column))?;

        debug!(
            "Resolved column '{}' at index {} of {}",
            self.config.target_column,
            column_index,
            record.len()
        );

        writer.write_record(&record)?;
        Ok(ResolvedHeader {
            record,
            column_index,
        })
    }

    /// Evaluate one data line, write it if eligible and update the counters.
    ///
    /// Malformed records never fail; only output errors are returned.
    pub fn process_line<W: Write>(
        &self,
        line: &str,
        column_index: usize,
        summary: &mut FilterSummary,
        writer: &mut RecordWriter<W>,
    ) -> Result<RecordOutcome> {
        summary.processed += 1;

        let record = Record::parse(line);
        let outcome = self.classify(&record, column_index);

        match &outcome {
            RecordOutcome::Eligible { .. } => writer.write_record(&record)?,
            RecordOutcome::Invalid(reason) => {
                debug!("Skipped record {}: {}", summary.processed, reason);
            }
            RecordOutcome::BelowThreshold { .. } => {}
        }

        summary.record(&outcome);
        Ok(outcome)
    }

    /// Decide the fate of a parsed record
    pub fn classify(&self, record: &Record, column_index: usize) -> RecordOutcome {
        let Some(raw) = record.get(column_index) else {
            return RecordOutcome::Invalid(InvalidReason::ShortRecord {
                field_count: record.len(),
            });
        };

        let value = trim_field(raw);
        if value.is_empty() {
            return RecordOutcome::Invalid(InvalidReason::EmptyValue);
        }

        match value.parse::<i32>() {
            Ok(value) if value > self.config.threshold => RecordOutcome::Eligible { value },
            Ok(value) => RecordOutcome::BelowThreshold { value },
            Err(_) => RecordOutcome::Invalid(InvalidReason::NotAnInteger {
                value: value.to_string(),
            }),
        }
    }

    fn report_progress(&self, summary: &FilterSummary) {
        info!("Processed {} records...", summary.processed);

        if let Some(progress) = &self.progress {
            progress.set_message(format!(
                "{} eligible, {} invalid",
                summary.eligible, summary.invalid
            ));
        }
    }
}

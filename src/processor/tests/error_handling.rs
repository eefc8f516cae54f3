//! Fatal error handling tests

use super::run_default;
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::processor::StreamFilter;
use std::io::{self, Write};

/// Writer that counts flushes and can be told to reject writes
#[derive(Default)]
struct TrackingWriter {
    buffer: Vec<u8>,
    flushes: usize,
    fail_writes: bool,
}

impl Write for TrackingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::other("disk full"));
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[test]
fn test_empty_input() {
    let (result, output) = run_default("");

    assert!(matches!(result, Err(FilterError::EmptyInput)));
    assert!(output.is_empty());
}

#[test]
fn test_missing_column() {
    let (result, output) = run_default("Make,Range,Model\nTesla,250,Model3\n");

    match result {
        Err(FilterError::MissingColumn { column }) => assert_eq!(column, "Electric Range"),
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
    assert!(output.is_empty());
}

#[test]
fn test_column_name_must_match_exactly() {
    let (result, _) = run_default("Make,electric range,Electric Range (mi)\n");
    assert!(matches!(result, Err(FilterError::MissingColumn { .. })));
}

#[test]
fn test_blank_first_line_is_not_empty_input() {
    let (result, _) = run_default("\nMake,Electric Range\n");
    assert!(matches!(result, Err(FilterError::MissingColumn { .. })));
}

#[test]
fn test_output_flushed_after_fatal_error() {
    let filter = StreamFilter::new(FilterConfig::default()).unwrap();
    let mut output = TrackingWriter::default();

    let result = filter.run("Make,Model\n".as_bytes(), &mut output);

    assert!(result.is_err());
    assert_eq!(output.flushes, 1);
}

#[test]
fn test_output_flushed_after_success() {
    let filter = StreamFilter::new(FilterConfig::default()).unwrap();
    let mut output = TrackingWriter::default();

    filter
        .run("Electric Range\n300\n".as_bytes(), &mut output)
        .unwrap();

    assert_eq!(output.flushes, 1);
    assert_eq!(output.buffer, b"Electric Range\n300\n");
}

#[test]
fn test_write_failure_is_fatal() {
    let filter = StreamFilter::new(FilterConfig::default()).unwrap();
    let mut output = TrackingWriter {
        fail_writes: true,
        ..Default::default()
    };

    let result = filter.run("Electric Range\n300\n".as_bytes(), &mut output);

    assert!(matches!(result, Err(FilterError::Io(_))));
    assert_eq!(output.flushes, 1);
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let filter = StreamFilter::new(FilterConfig::default()).unwrap();
    let input: &[u8] = b"Electric Range\n\xff\xfe300\n";
    let mut output = Vec::new();

    let result = filter.run(input, &mut output);

    assert!(matches!(result, Err(FilterError::Io(_))));
    assert_eq!(output, b"Electric Range\n");
}

#[test]
fn test_malformed_records_never_abort() {
    let input = "Electric Range,Model\n\"unterminated,x\nabc\n,\n300,ok\n";
    let (result, output) = run_default(input);
    let summary = result.unwrap();

    assert_eq!(summary.processed, 4);
    assert_eq!(summary.invalid, 3);
    assert_eq!(summary.eligible, 1);
    assert_eq!(output, "Electric Range,Model\n300,ok\n");
}

#[test]
fn test_blank_target_column_rejected() {
    let result = StreamFilter::new(FilterConfig::default().with_target_column(""));
    assert!(matches!(result, Err(FilterError::Configuration { .. })));
}

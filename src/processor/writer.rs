//! Output serialization for filtered records
//!
//! Each record is written as its trimmed fields joined by the delimiter,
//! followed by the line terminator. Fields are not re-quoted.

use crate::constants::{DELIMITER, LINE_TERMINATOR};
use crate::error::Result;
use crate::models::Record;
use std::io::Write;

/// Line-oriented writer for records
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    lines_written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            lines_written: 0,
        }
    }

    /// Write one record as a delimited line
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let mut delimiter = [0u8; 4];
        let delimiter = DELIMITER.encode_utf8(&mut delimiter).as_bytes();

        for (i, field) in record.fields().iter().enumerate() {
            if i > 0 {
                self.inner.write_all(delimiter)?;
            }
            self.inner.write_all(field.as_bytes())?;
        }
        self.inner.write_all(LINE_TERMINATOR.as_bytes())?;

        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines written so far, header included
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

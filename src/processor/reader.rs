//! Line splitting for the input stream
//!
//! A line ends at `\n`, `\r` or `\r\n`. Terminators are not part of the
//! returned text, and a terminator at end of input does not produce an extra
//! empty line. Lines must be valid UTF-8.

use std::io::{self, BufRead};

/// Iterator over the lines of a buffered reader
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    inner: R,
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            skip_lf: false,
        }
    }

    /// Read the next line, or `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut started = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            // `\n` completing a `\r\n` left over from the previous line
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }
            started = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = available[end];
                    bytes.extend_from_slice(&available[..end]);
                    self.inner.consume(end + 1);
                    self.skip_lf = terminator == b'\r';
                    return decode(bytes).map(Some);
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }

        if started {
            decode(bytes).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

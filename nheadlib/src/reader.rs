//! Delimited record reader.
//!
//! [`LineReader`] pulls one newline-terminated record at a time out of a
//! buffered byte stream. Every read returns a single [`ReadOutcome`], so the
//! caller never has to tell end-of-stream apart from a failure by looking at
//! a byte count and an error flag separately.

use std::io::{self, BufRead};

/// Byte that terminates a record.
pub const LINE_DELIMITER: u8 = b'\n';

/// Starting capacity of the record buffer; it grows as long lines need.
pub const DEFAULT_CAPACITY: usize = 256;

/// Result of a single record read.
#[derive(Debug)]
pub enum ReadOutcome<'a> {
    /// A record, including its trailing delimiter unless it is the final,
    /// unterminated record of the stream.
    Record(&'a [u8]),
    /// The stream ended before any byte of a new record was read.
    EndOfStream,
    /// The underlying source failed.
    Error(io::Error),
}

/// Reads delimited records from a byte stream into a reusable buffer.
pub struct LineReader<R: BufRead> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Create a reader whose record buffer starts at `capacity` bytes.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Read the next record.
    ///
    /// The returned slice borrows the internal buffer and is only valid until
    /// the next call.
    pub fn read_record(&mut self) -> ReadOutcome<'_> {
        self.buf.clear();
        // read_until grows `buf` as needed and retries on `Interrupted`.
        match self.inner.read_until(LINE_DELIMITER, &mut self.buf) {
            Ok(0) => ReadOutcome::EndOfStream,
            Ok(_) => ReadOutcome::Record(&self.buf),
            Err(e) => ReadOutcome::Error(e),
        }
    }

    /// Current capacity of the record buffer.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

//! # nheadlib
//!
//! Line window selection for head-like filters.
//!
//! ## Overview
//!
//! Given a byte stream, this library prints the lines inside a window of
//! leading lines, optionally keeping only the odd or even ones:
//!
//! - **Positive counts**: the first `K` lines
//! - **Negative counts**: all but the last `|K|` lines, when the source can
//!   be rewound and counted; one-pass streams fall back to the first `|K|`
//! - **Parity**: only odd- or even-numbered lines inside the window
//!
//! Lines are copied byte for byte, including a final line with no trailing
//! newline. Running out of input early is not an error.
//!
//! ## Example
//!
//! ```rust
//! use nheadlib::{print_window, LineCount, Parity, Rewindable};
//! use std::io::Cursor;
//!
//! let mut source = Rewindable(Cursor::new(b"a\nb\nc\nd\ne\n".to_vec()));
//! let mut out = Vec::new();
//!
//! // All but the last two lines
//! let count = LineCount::new(-2).unwrap();
//! let summary = print_window(&mut source, count, Parity::None, &mut out).unwrap();
//! assert_eq!(out, b"a\nb\nc\n");
//! assert_eq!(summary.lines_emitted, 3);
//! ```

pub mod counter;
pub mod error;
pub mod options;
pub mod printer;
pub mod reader;
pub mod source;

use std::io::Write;

use log::debug;

pub use counter::count_lines;
pub use error::{ErrorKind, HeadError};
pub use options::{parse_count, should_emit, Config, LineCount, Parity, Source, DEFAULT_COUNT};
pub use printer::{print_lines, print_window, resolve_target, PrintSummary};
pub use reader::{LineReader, ReadOutcome};
pub use source::{open_source, Input, InputSource, Rewindable, Stream};

/// Result type for nheadlib operations
pub type Result<T> = std::result::Result<T, HeadError>;

/// Open the configured source, print its selected lines to `out` and flush.
///
/// The source is closed before this returns, whether or not printing
/// succeeded.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> Result<PrintSummary> {
    debug!(
        "Printing {} lines from {} using {:?} line listing",
        config.count, config.source, config.parity
    );
    let mut source = open_source(&config.source)?;
    let summary = print_window(&mut source, config.count, config.parity, out)?;
    out.flush().map_err(HeadError::Write)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("five.txt");
        fs::write(&path, "a\nb\nc\nd\ne\n").unwrap();

        let config = Config::new()
            .count(LineCount::new(-2).unwrap())
            .select(Parity::Odd)
            .unwrap()
            .path(&path);
        let mut out = Vec::new();
        let summary = run(&config, &mut out).unwrap();

        assert_eq!(out, b"a\nc\n");
        assert_eq!(summary.target, 3);
    }

    #[test]
    fn test_run_default_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("many.txt");
        let text: String = (1..=25).map(|i| format!("{i}\n")).collect();
        fs::write(&path, &text).unwrap();

        let mut out = Vec::new();
        let summary = run(&Config::new().path(&path), &mut out).unwrap();

        assert_eq!(summary.lines_emitted, 10);
        assert!(String::from_utf8(out).unwrap().ends_with("\n10\n"));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::new().path(dir.path().join("missing.txt"));
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Open);
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let config = Config::new().path(dir.path());
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }
}

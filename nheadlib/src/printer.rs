//! The stream printer: drives the reader and the selection policy.
//!
//! Printing happens in two steps. First the requested count is turned into a
//! concrete window size ([`resolve_target`]), counting the source if the
//! request is negative and the source can be rewound. Then the records in
//! that window are read and filtered until the window is exhausted or the
//! source runs out.

use std::io::{BufRead, BufReader, Write};

use log::debug;

use crate::error::HeadError;
use crate::options::{should_emit, LineCount, Parity};
use crate::reader::{LineReader, ReadOutcome};
use crate::source::Input;
use crate::Result;

/// Counters for one print run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintSummary {
    /// Size of the window: how many leading lines the run may traverse
    pub target: u64,
    /// Records read from the source
    pub lines_read: u64,
    /// Records written to the output
    pub lines_emitted: u64,
}

impl PrintSummary {
    /// True when the source ran out before the window was filled.
    pub fn is_short(&self) -> bool {
        self.lines_read < self.target
    }
}

/// Turn a requested count into the size of the window of leading lines.
///
/// `total` is the source's line count, or `None` when the source cannot be
/// rewound. A negative count against a known total means "all but the last
/// `|K|`", never less than zero. Without a total the magnitude is used.
pub fn resolve_target(count: LineCount, total: Option<u64>) -> u64 {
    match total {
        Some(total) if count.is_negative() => total.saturating_sub(count.magnitude()),
        _ => count.magnitude(),
    }
}

/// Print the lines among the first `count` lines of `source` that pass
/// `parity`.
///
/// Running out of input before the window is filled is not an error.
pub fn print_window<I, W>(
    source: &mut I,
    count: LineCount,
    parity: Parity,
    out: &mut W,
) -> Result<PrintSummary>
where
    I: Input + ?Sized,
    W: Write + ?Sized,
{
    let total = if count.is_negative() && source.is_rewindable() {
        source.total_lines().map_err(HeadError::Read)?
    } else {
        None
    };
    let target = resolve_target(count, total);
    match total {
        Some(total) => debug!("Source has {total} lines, printing the first {target}"),
        None if count.is_negative() => {
            debug!("Source cannot be rewound, printing {target} lines for count {count}")
        }
        None => debug!("Printing up to {target} lines"),
    }

    print_lines(BufReader::new(source), target, parity, out)
}

/// Read up to `target` records from `reader` and write the ones that pass
/// `parity` to `out`.
///
/// Parity is checked against each record's position in the input, not its
/// position in the output. Without a parity filter every record in the
/// window is written, so `lines_emitted` is `min(target, lines)`.
pub fn print_lines<R, W>(
    reader: R,
    target: u64,
    parity: Parity,
    out: &mut W,
) -> Result<PrintSummary>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut reader = LineReader::new(reader);
    let mut summary = PrintSummary {
        target,
        ..PrintSummary::default()
    };

    while summary.lines_read < target {
        match reader.read_record() {
            ReadOutcome::Record(bytes) => {
                summary.lines_read += 1;
                if should_emit(summary.lines_read, parity) {
                    out.write_all(bytes).map_err(HeadError::Write)?;
                    summary.lines_emitted += 1;
                }
            }
            ReadOutcome::EndOfStream => break,
            ReadOutcome::Error(e) => return Err(HeadError::Read(e)),
        }
    }

    if summary.is_short() {
        debug!(
            "Only able to read {} of {} lines",
            summary.lines_read, summary.target
        );
    }
    debug!(
        "Read {} lines, printed {} ({:?} lines)",
        summary.lines_read, summary.lines_emitted, parity
    );
    Ok(summary)
}

//! Input options for a print run.
//!
//! This module contains the configuration types that control which lines
//! are selected: the requested count, the odd/even filter and the source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroI64;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::HeadError;
use crate::Result;

/// Number of lines printed when no count is given.
pub const DEFAULT_COUNT: i64 = 10;

const DEFAULT_LINE_COUNT: NonZeroI64 = match NonZeroI64::new(DEFAULT_COUNT) {
    Some(count) => count,
    None => panic!("default line count must be non-zero"),
};

/// Odd/even restriction on the lines that get printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// Print every line (default)
    #[default]
    None,
    /// Print only odd-numbered lines
    Odd,
    /// Print only even-numbered lines
    Even,
}

impl Parity {
    /// Whether the line at `ordinal` (1-based) passes this filter.
    pub fn admits(self, ordinal: u64) -> bool {
        match self {
            Parity::None => true,
            Parity::Odd => ordinal % 2 == 1,
            Parity::Even => ordinal % 2 == 0,
        }
    }
}

/// Selection policy: decide whether the record at `ordinal` is emitted.
pub fn should_emit(ordinal: u64, parity: Parity) -> bool {
    parity.admits(ordinal)
}

/// A validated, non-zero signed line count.
///
/// Positive values ask for the first `K` lines. Negative values ask for all
/// but the last `|K|` lines when the source can be rewound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCount(NonZeroI64);

impl LineCount {
    /// Build a count, rejecting zero.
    pub fn new(value: i64) -> Result<Self> {
        NonZeroI64::new(value)
            .map(LineCount)
            .ok_or_else(|| HeadError::usage("line count must be non-zero"))
    }

    pub fn get(self) -> i64 {
        self.0.get()
    }

    pub fn is_negative(self) -> bool {
        self.0.get() < 0
    }

    /// Absolute value of the count.
    pub fn magnitude(self) -> u64 {
        self.0.get().unsigned_abs()
    }
}

impl Default for LineCount {
    fn default() -> Self {
        LineCount(DEFAULT_LINE_COUNT)
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineCount {
    type Err = HeadError;

    fn from_str(s: &str) -> Result<Self> {
        parse_count(s)
    }
}

/// Parse the argument of the count option.
///
/// Empty, malformed and zero values are all usage errors.
pub fn parse_count(text: &str) -> Result<LineCount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HeadError::usage("option requires an argument -- 'n'"));
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| HeadError::usage(format!("invalid line count: '{}'", text)))?;
    LineCount::new(value)
}

/// Where lines are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Source {
    /// Standard input (never rewindable)
    #[default]
    Stdin,
    /// A path opened for reading
    Path(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "standard input"),
            Source::Path(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// Complete configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Requested count (default 10)
    pub count: LineCount,
    /// Odd/even filter
    pub parity: Parity,
    /// Input source
    pub source: Source,
}

impl Config {
    /// Create new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested count.
    pub fn count(mut self, count: LineCount) -> Self {
        self.count = count;
        self
    }

    /// Restrict output to odd or even lines.
    ///
    /// Selecting odd after even (or the reverse) is a usage error.
    pub fn select(mut self, parity: Parity) -> Result<Self> {
        match (self.parity, parity) {
            (Parity::Odd, Parity::Even) | (Parity::Even, Parity::Odd) => Err(HeadError::usage(
                "You can only choose odd or even line listing, not both.",
            )),
            (_, Parity::None) => Ok(self),
            (_, selected) => {
                self.parity = selected;
                Ok(self)
            }
        }
    }

    /// Read from the given path instead of standard input.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Source::Path(path.into());
        self
    }
}

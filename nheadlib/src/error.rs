//! Error types for nheadlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting and printing lines
#[derive(Error, Debug)]
pub enum HeadError {
    /// Bad, missing or conflicting options
    #[error("{0}")]
    Usage(String),

    /// The source path could not be opened
    #[error("unable to open file '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O failure while reading records, distinct from end of stream
    #[error("failed to read lines: {0}")]
    Read(#[source] std::io::Error),

    /// I/O failure while writing selected records
    #[error("failed to write lines: {0}")]
    Write(#[source] std::io::Error),
}

/// Tag identifying which stage of an invocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Open,
    Read,
    Write,
}

impl HeadError {
    /// The kind of failure, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeadError::Usage(_) => ErrorKind::Usage,
            HeadError::Open { .. } => ErrorKind::Open,
            HeadError::Read(_) => ErrorKind::Read,
            HeadError::Write(_) => ErrorKind::Write,
        }
    }

    /// Shorthand for building a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        HeadError::Usage(message.into())
    }

    /// True when output went to a reader that has already hung up.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, HeadError::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_kind_tags() {
        assert_eq!(HeadError::usage("bad").kind(), ErrorKind::Usage);
        let open = HeadError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(open.kind(), ErrorKind::Open);
        assert_eq!(
            HeadError::Read(io::Error::other("boom")).kind(),
            ErrorKind::Read
        );
    }

    #[test]
    fn test_open_error_names_path() {
        let err = HeadError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_broken_pipe_detection() {
        let pipe = HeadError::Write(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(pipe.is_broken_pipe());
        let other = HeadError::Write(io::Error::other("disk full"));
        assert!(!other.is_broken_pipe());
        let read = HeadError::Read(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(!read.is_broken_pipe());
    }
}

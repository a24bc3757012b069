//! Input sources and their rewind capability.
//!
//! Negative counts can only be resolved against a source that can be read
//! twice. [`Input`] exposes that capability: rewindable sources report their
//! total line count, one-pass streams report `None`.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::PathBuf;

use log::debug;

use crate::counter::count_lines;
use crate::error::HeadError;
use crate::options::Source;
use crate::Result;

/// A readable source that may be able to report its total line count.
pub trait Input: Read {
    /// Whether the read position can be reset to the start.
    fn is_rewindable(&self) -> bool;

    /// Count every line in the source and rewind it.
    ///
    /// Returns `Ok(None)` for sources that cannot be rewound, without
    /// consuming anything from them.
    fn total_lines(&mut self) -> io::Result<Option<u64>>;
}

/// Wraps a one-pass reader (a pipe, a socket, standard input).
#[derive(Debug)]
pub struct Stream<R>(pub R);

impl<R: Read> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<R: Read> Input for Stream<R> {
    fn is_rewindable(&self) -> bool {
        false
    }

    fn total_lines(&mut self) -> io::Result<Option<u64>> {
        Ok(None)
    }
}

/// Wraps a seekable reader that can be counted and rewound.
#[derive(Debug)]
pub struct Rewindable<S>(pub S);

impl<S: Read> Read for Rewindable<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<S: Read + Seek> Input for Rewindable<S> {
    fn is_rewindable(&self) -> bool {
        true
    }

    fn total_lines(&mut self) -> io::Result<Option<u64>> {
        count_lines(&mut self.0).map(Some)
    }
}

/// An opened source, owned for the duration of one run.
///
/// Dropping it releases the file handle.
#[derive(Debug)]
pub enum InputSource {
    /// Locked standard input
    Stdin(Stream<io::StdinLock<'static>>),
    /// A regular file, which can be counted and rewound
    File {
        path: PathBuf,
        file: Rewindable<File>,
    },
    /// A path that is not a regular file (FIFO, character device)
    Special { path: PathBuf, file: Stream<File> },
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::Stdin(stdin) => stdin.read(buf),
            InputSource::File { file, .. } => file.read(buf),
            InputSource::Special { file, .. } => file.read(buf),
        }
    }
}

impl Input for InputSource {
    fn is_rewindable(&self) -> bool {
        matches!(self, InputSource::File { .. })
    }

    fn total_lines(&mut self) -> io::Result<Option<u64>> {
        match self {
            InputSource::Stdin(stdin) => stdin.total_lines(),
            InputSource::File { file, .. } => file.total_lines(),
            InputSource::Special { file, .. } => file.total_lines(),
        }
    }
}

/// Open the configured source for reading.
///
/// Standard input is never treated as rewindable. A path is rewindable only
/// when it names a regular file.
pub fn open_source(source: &Source) -> Result<InputSource> {
    match source {
        Source::Stdin => {
            debug!("Reading from standard input");
            Ok(InputSource::Stdin(Stream(io::stdin().lock())))
        }
        Source::Path(path) => {
            let open_error = |source: io::Error| HeadError::Open {
                path: path.clone(),
                source,
            };
            let file = File::open(path).map_err(open_error)?;
            let is_regular = file.metadata().map_err(open_error)?.is_file();
            debug!(
                "Opened '{}' ({})",
                path.display(),
                if is_regular { "rewindable" } else { "stream" }
            );
            if is_regular {
                Ok(InputSource::File {
                    path: path.clone(),
                    file: Rewindable(file),
                })
            } else {
                Ok(InputSource::Special {
                    path: path.clone(),
                    file: Stream(file),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_stream_has_no_total() {
        let mut input = Stream(Cursor::new(b"a\nb\n".to_vec()));
        assert!(!input.is_rewindable());
        assert_eq!(input.total_lines().unwrap(), None);

        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "a\nb\n");
    }

    #[test]
    fn test_rewindable_total_leaves_data_readable() {
        let mut input = Rewindable(Cursor::new(b"a\nb\nc".to_vec()));
        assert!(input.is_rewindable());
        assert_eq!(input.total_lines().unwrap(), Some(2));

        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "a\nb\nc");
    }

    #[test]
    fn test_open_regular_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "x\ny\n").unwrap();

        let mut input = open_source(&Source::Path(path.clone())).unwrap();
        assert!(input.is_rewindable());
        assert_eq!(input.total_lines().unwrap(), Some(2));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = open_source(&Source::Path(path.clone())).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Open);
        assert!(err.to_string().contains("nope.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_character_device_is_stream() {
        let input = open_source(&Source::Path(PathBuf::from("/dev/null"))).unwrap();
        assert!(!input.is_rewindable());
    }
}

//! Line counting for rewindable sources.
//!
//! Counting is only needed to resolve negative counts, and only makes sense
//! for sources that can be read a second time from the start.

use std::io::{self, BufRead, BufReader, Read, Seek};

use crate::reader::LINE_DELIMITER;

/// Count delimiter bytes from the current position to the end of `source`,
/// then rewind it to the start.
///
/// An unterminated final record is not counted: only delimiters are. The
/// source is rewound on success; on a read failure its position is
/// unspecified and the error is returned.
pub fn count_lines<S: Read + Seek>(source: &mut S) -> io::Result<u64> {
    let mut lines = 0u64;
    {
        let mut reader = BufReader::new(&mut *source);
        loop {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if chunk.is_empty() {
                break;
            }
            lines += chunk.iter().filter(|&&b| b == LINE_DELIMITER).count() as u64;
            let len = chunk.len();
            reader.consume(len);
        }
    }
    source.rewind()?;
    Ok(lines)
}

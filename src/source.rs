use std::io::BufRead;

use crate::error::ImportError;

/// Drains the reader into owned lines. A failure mid-stream stops reading
/// and is returned as a single diagnostic next to the lines obtained so
/// far; the caller processes those anyway. An empty reader is simply zero
/// lines, not an error.
pub fn read_lines(reader: impl BufRead) -> (Vec<String>, Option<ImportError>) {
    let mut lines = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(source) => return (lines, Some(ImportError::ReadFailure { source })),
        }
    }
    (lines, None)
}

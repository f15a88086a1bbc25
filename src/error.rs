use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while importing an inventory. Only
/// `SourceUnavailable` stops a run; the other variants are per-line
/// diagnostics the pipeline recovers from.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot open input {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("skipped malformed record (expected at least 7 fields, found {found}): {line}")]
    MalformedRecord { line: String, found: usize },

    #[error("stopped reading input after an error, processing lines read so far: {source}")]
    ReadFailure {
        #[source]
        source: io::Error,
    },
}

impl ImportError {
    /// True for the one variant that prevents the pipeline from running.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ImportError::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_message_carries_line_and_count() {
        let err = ImportError::MalformedRecord {
            line: "TABLE;T2;dbo".into(),
            found: 3,
        };
        let message = err.to_string();
        assert!(message.contains("TABLE;T2;dbo"), "got: {message}");
        assert!(message.contains("found 3"), "got: {message}");
    }

    #[test]
    fn only_source_unavailable_is_fatal() {
        let unavailable = ImportError::SourceUnavailable {
            path: PathBuf::from("objects.csv"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let malformed = ImportError::MalformedRecord {
            line: String::new(),
            found: 1,
        };
        let read = ImportError::ReadFailure {
            source: io::Error::from(io::ErrorKind::InvalidData),
        };
        assert!(unavailable.is_fatal());
        assert!(!malformed.is_fatal());
        assert!(!read.is_fatal());
    }

    #[test]
    fn messages_are_single_lines() {
        let err = ImportError::SourceUnavailable {
            path: PathBuf::from("objects.csv"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!err.to_string().contains('\n'));
    }
}

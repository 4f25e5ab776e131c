use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read line {line}: {source}")]
    LineRead {
        line: u64,
        #[source]
        source: ReadError,
    },

    #[error("line {line}: unexpected number of fields in line, expected: {expected}, got: {actual}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: email: {email} does not match regexp")]
    InvalidEmail { line: u64, email: String },

    #[error("compile email pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ImportError {
    /// Input line the error was raised on, if it belongs to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            ImportError::LineRead { line, .. }
            | ImportError::MalformedRecord { line, .. }
            | ImportError::InvalidEmail { line, .. } => Some(*line),
            ImportError::FileOpen { .. } | ImportError::Regex { .. } => None,
        }
    }
}

/// Why a row could not be read; the row is dropped as a whole.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("bare \" in non-quoted-field (line {line}, column {column})")]
    BareQuote { line: u64, column: usize },

    #[error("extraneous or missing \" in quoted-field (line {line}, column {column})")]
    Quote { line: u64, column: usize },

    #[error("quoted field starting on line {line} is never closed")]
    UnterminatedQuote { line: u64 },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_reported_for_per_line_errors() {
        let err = ImportError::MalformedRecord {
            line: 7,
            expected: 5,
            actual: 2,
        };
        assert_eq!(err.line(), Some(7));
        assert_eq!(
            err.to_string(),
            "line 7: unexpected number of fields in line, expected: 5, got: 2"
        );

        let err = ImportError::InvalidEmail {
            line: 3,
            email: "bad-email".to_string(),
        };
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("bad-email"));
    }

    #[test]
    fn read_errors_name_the_quote_problem() {
        let err = ImportError::LineRead {
            line: 4,
            source: ReadError::BareQuote { line: 4, column: 6 },
        };
        assert_eq!(err.line(), Some(4));
        assert_eq!(
            err.to_string(),
            "read line 4: bare \" in non-quoted-field (line 4, column 6)"
        );
    }

    #[test]
    fn file_open_has_no_line() {
        let err = ImportError::FileOpen {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.line(), None);
        assert!(err.to_string().starts_with("open file 'missing.csv'"));
    }
}

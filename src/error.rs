//! Error types for hashspell.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashSpellError {
    /// Zero capacity, empty key and similar caller mistakes.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The dictionary file is missing or unreadable.
    #[error("Unable to read dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Capacity arithmetic overflowed or the bucket array could not be allocated.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HashSpellError>;

impl HashSpellError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HashSpellError::InvalidArgument(msg.into())
    }

    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        HashSpellError::ResourceExhausted(msg.into())
    }

    pub fn dictionary<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        HashSpellError::Dictionary {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error_names_path() {
        let err = HashSpellError::dictionary(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"), "{}", msg);
        assert!(msg.contains("no such file"), "{}", msg);
    }

    #[test]
    fn test_io_conversion() {
        let err: HashSpellError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, HashSpellError::Io(_)));
    }
}

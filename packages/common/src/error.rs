use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a build or an incremental rebuild
#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Generic(String),
}

impl IconError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = IconError::io(
            "dist/icons",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "IO error at dist/icons: denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_generic_message_verbatim() {
        let err = IconError::Generic("Output directory would be cleared".to_string());
        assert_eq!(err.to_string(), "Output directory would be cleared");
    }
}

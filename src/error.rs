//! Error types.
//!
//! Only constructing a [`Vite`](crate::Vite) can fail; tag generation never does.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a [`ViteManifest`](crate::ViteManifest).
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file is missing or could not be read.
    #[error("manifest file not found or unreadable: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest file was read but is not a valid manifest document.
    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory manifest document is not valid.
    #[error("failed to parse manifest document")]
    Malformed(#[from] serde_json::Error),
}

impl ManifestError {
    /// True when the manifest file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True when the content could not be deserialized.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Malformed(_))
    }
}

/// Crate result alias.
pub type Result<T, E = ManifestError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_kinds() {
        let read = ManifestError::Read {
            path: PathBuf::from("dist/manifest.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(read.is_not_found());
        assert!(!read.is_parse_error());
        assert_eq!(
            read.to_string(),
            "manifest file not found or unreadable: dist/manifest.json"
        );

        let parse = ManifestError::Parse {
            path: PathBuf::from("dist/manifest.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert!(parse.is_parse_error());
        assert!(!parse.is_not_found());
        assert_eq!(parse.to_string(), "failed to parse manifest dist/manifest.json");
    }

    #[test]
    fn test_permission_error_is_not_not_found() {
        let err = ManifestError::Read {
            path: PathBuf::from("m.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
    }
}

// ABOUTME: Error types for spell table extraction, fetching, and output.
// ABOUTME: Provides the SpellError enum with convenience constructors and boolean helpers.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a spell extraction run.
///
/// A row whose name and level counts disagree is not an error; see
/// [`crate::extract::RowMismatch`].
#[derive(Debug, Error)]
pub enum SpellError {
    /// The document contains no `<table>` element.
    #[error("No table found on the page.")]
    NoTableFound,

    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure or non-success HTTP status.
    #[error("fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dataset (de)serialization failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpellError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        SpellError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a Network error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        SpellError::Network {
            url: url.into(),
            source,
        }
    }

    /// Create an Io error tied to a path.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        SpellError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if the document had no table.
    pub fn is_no_table(&self) -> bool {
        matches!(self, SpellError::NoTableFound)
    }

    /// Returns true if this is a Network error.
    pub fn is_network(&self) -> bool {
        matches!(self, SpellError::Network { .. })
    }

    /// Returns true if this is an Io error.
    pub fn is_io(&self) -> bool {
        matches!(self, SpellError::Io { .. })
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, SpellError::InvalidUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_table_message_matches_cli_output() {
        assert_eq!(SpellError::NoTableFound.to_string(), "No table found on the page.");
        assert!(SpellError::NoTableFound.is_no_table());
    }

    #[test]
    fn io_error_names_the_path() {
        let err = SpellError::io(
            "public/assets/druid.json",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.is_io());
        assert!(!err.is_network());
        assert!(err.to_string().starts_with("public/assets/druid.json: "));
    }

    #[test]
    fn invalid_url_helper() {
        let err = SpellError::invalid_url("ftp://x", "scheme must be http or https");
        assert!(err.is_invalid_url());
        assert_eq!(err.to_string(), "invalid URL ftp://x: scheme must be http or https");
    }
}

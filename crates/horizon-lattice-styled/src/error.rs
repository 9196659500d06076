//! Error types for the styled component layer.

use std::path::PathBuf;

/// Result type alias for styled operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building style inputs.
///
/// Style resolution itself never fails; these errors only surface while
/// constructing templates or loading theme configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template literal and raw sequences are not parallel.
    #[error("Template has {cooked} literal segments but {raw} raw segments")]
    MismatchedTemplate { cooked: usize, raw: usize },

    /// Template without any literal segment.
    #[error("Template must contain at least one literal segment")]
    EmptyTemplate,

    /// Theme JSON could not be parsed.
    #[error("Invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme TOML could not be parsed.
    #[error("Invalid theme TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme document has the wrong shape.
    #[error("Invalid theme: {message}")]
    InvalidTheme { message: String },
}

impl Error {
    /// Create a template mismatch error.
    pub fn mismatched_template(cooked: usize, raw: usize) -> Self {
        Self::MismatchedTemplate { cooked, raw }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a theme shape error.
    pub fn invalid_theme(message: impl Into<String>) -> Self {
        Self::InvalidTheme {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::mismatched_template(3, 2);
        assert_eq!(
            err.to_string(),
            "Template has 3 literal segments but 2 raw segments"
        );

        let err = Error::invalid_theme("root must be a table");
        assert_eq!(err.to_string(), "Invalid theme: root must be a table");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::io(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.json"));
        assert!(err.source().is_some());
    }
}

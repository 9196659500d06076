//! Loading themes from JSON and TOML documents.

use std::path::Path;

use serde_json::Value;

use super::Theme;
use crate::error::{Error, Result};

impl Theme {
    /// Parse a theme from a JSON document.
    ///
    /// The root must be an object.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        if !value.is_object() {
            return Err(Error::invalid_theme("theme root must be an object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a theme from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a theme from a file.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let theme = if is_toml {
            Self::from_toml_str(&source)?
        } else {
            Self::from_json_str(&source)?
        };

        tracing::debug!(
            target: crate::targets::THEME,
            "Loaded theme from {} ({} components)",
            path.display(),
            theme.component_map().map_or(0, |c| c.len())
        );

        Ok(theme)
    }
}

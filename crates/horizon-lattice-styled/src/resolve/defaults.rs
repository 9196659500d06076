//! Theme defaulting.

use std::sync::Arc;

use crate::theme::Theme;

/// Effective theme for a style expression.
///
/// A missing or empty theme is replaced by `default`; any other theme is
/// returned as is.
pub fn resolve_theme(theme: Option<&Arc<Theme>>, default: &Arc<Theme>) -> Arc<Theme> {
    match theme {
        Some(theme) if !theme.is_empty() => Arc::clone(theme),
        _ => Arc::clone(default),
    }
}

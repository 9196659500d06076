//! Built-in default theme.

use serde_json::json;

use super::Theme;

impl Theme {
    /// The built-in light theme used when no theme is supplied.
    ///
    /// It declares no component overrides or variants, only the shared
    /// design tokens style functions commonly read.
    pub fn builtin() -> Self {
        Self::new()
            .with_value(
                "palette",
                json!({
                    "mode": "light",
                    "primary": {
                        "main": "#1976D2",
                        "light": "#42A5F5",
                        "dark": "#1565C0",
                        "contrastText": "#FFFFFF"
                    },
                    "secondary": {
                        "main": "#9C27B0",
                        "light": "#BA68C8",
                        "dark": "#7B1FA2",
                        "contrastText": "#FFFFFF"
                    },
                    "error": { "main": "#D32F2F" },
                    "warning": { "main": "#ED6C02" },
                    "info": { "main": "#0288D1" },
                    "success": { "main": "#2E7D32" },
                    "text": {
                        "primary": "rgba(0, 0, 0, 0.87)",
                        "secondary": "rgba(0, 0, 0, 0.6)",
                        "disabled": "rgba(0, 0, 0, 0.38)"
                    },
                    "background": { "default": "#FFFFFF", "paper": "#FFFFFF" },
                    "divider": "rgba(0, 0, 0, 0.12)",
                }),
            )
            .with_value("spacing", 8)
            .with_value("direction", "ltr")
            .with_value("shape", json!({ "borderRadius": 4 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_not_empty() {
        let theme = Theme::builtin();
        assert!(!theme.is_empty());
        assert!(theme.components.is_none());
    }

    #[test]
    fn builtin_tokens() {
        let theme = Theme::builtin();
        assert_eq!(theme.value("spacing"), Some(&json!(8)));
        assert_eq!(theme.value("direction"), Some(&json!("ltr")));
        assert_eq!(
            theme.value("palette").and_then(|p| p["primary"]["main"].as_str()),
            Some("#1976D2")
        );
    }
}

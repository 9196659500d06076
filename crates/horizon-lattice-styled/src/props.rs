//! Props passed to style expressions.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::theme::Theme;

/// Ordered map of prop names to values.
pub type PropMap = BTreeMap<String, Value>;

/// A flat style object (`{ "padding": "8px", ... }`).
pub type StyleObject = serde_json::Map<String, Value>;

/// Name of the theme prop.
pub const THEME_PROP: &str = "theme";
/// Name of the style-props prop.
pub const STYLE_PROPS_PROP: &str = "styleProps";
/// Name of the ad-hoc style prop.
pub const SX_PROP: &str = "sx";

/// The prop bag a style expression receives.
///
/// `theme` and `style_props` are modelled as typed fields because the
/// resolution pipeline reads them directly. Everything else lives in
/// `fields` and is matched by name.
#[derive(Debug, Clone, Default)]
pub struct Props {
    /// Theme supplied by the renderer, if any.
    pub theme: Option<Arc<Theme>>,
    /// Owner-computed state used for variant matching.
    pub style_props: PropMap,
    /// All remaining props.
    pub fields: PropMap,
}

impl Props {
    /// Create an empty prop bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set a regular prop.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a style prop.
    pub fn with_style_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style_props.insert(name.into(), value.into());
        self
    }

    /// Get a regular prop.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a style prop.
    pub fn style_prop(&self, name: &str) -> Option<&Value> {
        self.style_props.get(name)
    }

    /// The `sx` prop, if present.
    pub fn sx(&self) -> Option<&Value> {
        self.fields.get(SX_PROP)
    }

    /// Copy of these props with the theme replaced.
    pub fn with_theme(&self, theme: Arc<Theme>) -> Self {
        Self {
            theme: Some(theme),
            style_props: self.style_props.clone(),
            fields: self.fields.clone(),
        }
    }

    /// Names of every prop present, including `theme` and `styleProps`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let theme = self.theme.as_ref().map(|_| THEME_PROP);
        let style_props = (!self.style_props.is_empty()).then_some(STYLE_PROPS_PROP);
        theme
            .into_iter()
            .chain(style_props)
            .chain(self.fields.keys().map(String::as_str))
    }
}

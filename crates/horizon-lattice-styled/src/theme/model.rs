//! Theme data model.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::props::{PropMap, StyleObject};

/// A theme as seen by the styled layer.
///
/// Only `components` is inspected during resolution. Every other top-level
/// key (palette, spacing, typography, ...) is kept verbatim in `values` and
/// handed to style functions untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Per-component overrides and variants, keyed by component name.
    ///
    /// `Some(None)` records a `components` key that is present but null.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub components: Option<Option<BTreeMap<String, ComponentStyles>>>,
    /// All other theme keys.
    #[serde(flatten)]
    pub values: StyleObject,
}

/// Deserialize a key that is present, keeping an explicit null as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Theme configuration for a single named component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentStyles {
    /// Style overrides, usually keyed by slot or class key.
    #[serde(
        default,
        rename = "styleOverrides",
        skip_serializing_if = "Option::is_none"
    )]
    pub style_overrides: Option<Value>,
    /// Conditional styles activated by prop matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantDef>>,
}

/// A theme-declared variant: a prop matcher plus the style it activates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDef {
    /// Every entry must match for the variant to apply.
    pub props: PropMap,
    /// Style contributed on match.
    pub style: Value,
}

impl Theme {
    /// Create an empty theme.
    ///
    /// An empty theme is replaced by the default theme during resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the theme has no keys at all.
    ///
    /// A `components` key counts even when its value is null or empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_none() && self.values.is_empty()
    }

    /// Add or replace a component entry.
    pub fn with_component(mut self, name: impl Into<String>, styles: ComponentStyles) -> Self {
        self.components
            .get_or_insert_with(|| Some(BTreeMap::new()))
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), styles);
        self
    }

    /// The component table, if one is declared and not null.
    pub fn component_map(&self) -> Option<&BTreeMap<String, ComponentStyles>> {
        self.components.as_ref()?.as_ref()
    }

    /// Set an arbitrary top-level theme value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get a top-level theme value.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Theme configuration for a component.
    pub fn component(&self, name: &str) -> Option<&ComponentStyles> {
        self.component_map()?.get(name)
    }

    /// Style overrides declared for a component.
    pub fn style_overrides(&self, name: &str) -> Option<&Value> {
        self.component(name)?.style_overrides.as_ref()
    }

    /// Variants declared for a component, empty when none are declared.
    pub fn variants(&self, name: &str) -> &[VariantDef] {
        self.component(name)
            .and_then(|c| c.variants.as_deref())
            .unwrap_or(&[])
    }
}

impl ComponentStyles {
    /// Create an empty component entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style overrides.
    pub fn style_overrides(mut self, overrides: impl Into<Value>) -> Self {
        self.style_overrides = Some(overrides.into());
        self
    }

    /// Append a variant.
    pub fn variant(mut self, variant: VariantDef) -> Self {
        self.variants.get_or_insert_with(Vec::new).push(variant);
        self
    }
}

impl VariantDef {
    /// Create a variant from matcher entries and a style.
    pub fn new<K, V>(props: impl IntoIterator<Item = (K, V)>, style: impl Into<Value>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            props: props
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            style: style.into(),
        }
    }
}

//! Boundary to the underlying style-attachment primitive.

use std::fmt;

use crate::definition::{Interpolation, StyleDefinition};
use crate::forward::ShouldForwardProp;
use crate::props::StyleObject;

/// Options passed through to the primitive.
///
/// Anything set here takes precedence over the values the styled layer
/// computes itself.
#[derive(Clone, Default)]
pub struct PrimitiveOptions {
    /// Replaces the slot-derived forwarding policy.
    pub should_forward_prop: Option<ShouldForwardProp>,
    /// Replaces the identity-derived label.
    pub label: Option<String>,
    /// Primitive-specific options, uninterpreted.
    pub extra: StyleObject,
}

impl PrimitiveOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the forwarding policy.
    pub fn should_forward_prop<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.should_forward_prop = Some(std::sync::Arc::new(f));
        self
    }

    /// Override the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set a primitive-specific option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for PrimitiveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveOptions")
            .field("should_forward_prop", &self.should_forward_prop.is_some())
            .field("label", &self.label)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Final configuration handed to the primitive.
#[derive(Clone)]
pub struct AttachConfig {
    /// Decides which props reach the rendered element.
    pub should_forward_prop: ShouldForwardProp,
    /// Class name label, absent for unnamed components.
    pub label: Option<String>,
    /// Primitive-specific options.
    pub options: StyleObject,
}

impl AttachConfig {
    /// Combine computed defaults with caller options; caller options win.
    pub fn new(
        should_forward_prop: ShouldForwardProp,
        label: Option<String>,
        options: PrimitiveOptions,
    ) -> Self {
        Self {
            should_forward_prop: options.should_forward_prop.unwrap_or(should_forward_prop),
            label: options.label.or(label),
            options: options.extra,
        }
    }
}

impl fmt::Debug for AttachConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachConfig")
            .field("label", &self.label)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A component that can carry a devtools name.
pub trait DisplayName {
    /// Set the display name.
    fn set_display_name(&mut self, name: String);
}

/// The primitive that turns a style definition into a styled component.
///
/// The styled layer never evaluates styles itself; it only shapes the
/// arguments passed to [`attach`](Self::attach). Expressions are evaluated
/// later, whenever the primitive computes styles.
pub trait StylePrimitive {
    /// The element or component being styled.
    type Tag;
    /// The styled component produced.
    type Component: DisplayName;

    /// Attach `definition` and `expressions` to `tag`.
    fn attach(
        &self,
        tag: &Self::Tag,
        config: &AttachConfig,
        definition: StyleDefinition,
        expressions: Vec<Interpolation>,
    ) -> Self::Component;
}

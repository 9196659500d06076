//! Style definitions as authored by component code.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::props::Props;

/// A style function evaluated lazily by the primitive.
///
/// `None` means "no contribution", distinct from an empty style object.
pub type StyleFn = Arc<dyn Fn(&Props) -> Option<Value> + Send + Sync>;

/// An expression interleaved with template segments, or appended to a
/// style definition.
#[derive(Clone)]
pub enum Interpolation {
    /// A value fixed at authoring time.
    Static(Value),
    /// A value computed from props at style-computation time.
    Dynamic(StyleFn),
}

impl Interpolation {
    /// Wrap a closure as a dynamic interpolation.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Props) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Evaluate against props.
    pub fn evaluate(&self, props: &Props) -> Option<Value> {
        match self {
            Self::Static(value) => Some(value.clone()),
            Self::Dynamic(f) => f(props),
        }
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<Value> for Interpolation {
    fn from(value: Value) -> Self {
        Self::Static(value)
    }
}

/// Literal segments of a template-style definition.
///
/// `cooked` and `raw` are parallel: they always have the same length. A
/// template with `n` segments is paired with `n - 1` interpolations, each
/// sitting between two consecutive segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    cooked: Vec<String>,
    raw: Vec<String>,
}

impl Template {
    /// Create a template from parallel cooked and raw segments.
    pub fn new<S: Into<String>>(
        cooked: impl IntoIterator<Item = S>,
        raw: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let cooked: Vec<String> = cooked.into_iter().map(Into::into).collect();
        let raw: Vec<String> = raw.into_iter().map(Into::into).collect();

        if cooked.len() != raw.len() {
            return Err(Error::mismatched_template(cooked.len(), raw.len()));
        }
        if cooked.is_empty() {
            return Err(Error::EmptyTemplate);
        }

        Ok(Self { cooked, raw })
    }

    /// Create a template whose raw segments equal its cooked segments.
    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Result<Self> {
        let cooked: Vec<String> = segments.into_iter().map(Into::into).collect();
        let raw = cooked.clone();
        Self::new(cooked, raw)
    }

    /// Cooked (escape-processed) segments.
    pub fn cooked(&self) -> &[String] {
        &self.cooked
    }

    /// Raw segments.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.cooked.len()
    }

    /// Always false for a constructed template.
    pub fn is_empty(&self) -> bool {
        self.cooked.is_empty()
    }

    /// Append `count` empty segments to both sequences.
    ///
    /// Each appended segment is the literal slot following one extra
    /// interpolation.
    pub fn extend(&mut self, count: usize) {
        self.cooked.extend(std::iter::repeat_n(String::new(), count));
        self.raw.extend(std::iter::repeat_n(String::new(), count));
    }
}

/// The style an author attaches to a component.
#[derive(Clone)]
pub enum StyleDefinition {
    /// A plain style object or CSS string.
    Static(Value),
    /// Literal segments interleaved with interpolations.
    Templated(Template),
    /// A function of props.
    Computed(StyleFn),
}

impl StyleDefinition {
    /// Wrap a closure as a computed definition.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Props) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// The template, if this is a templated definition.
    pub fn as_template(&self) -> Option<&Template> {
        match self {
            Self::Templated(template) => Some(template),
            _ => None,
        }
    }
}

impl fmt::Debug for StyleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Templated(template) => f.debug_tuple("Templated").field(template).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Value> for StyleDefinition {
    fn from(value: Value) -> Self {
        Self::Static(value)
    }
}

impl From<Template> for StyleDefinition {
    fn from(template: Template) -> Self {
        Self::Templated(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_requires_parallel_raw() {
        let err = Template::new(["a", "b"], ["a"]).unwrap_err();
        assert!(matches!(
            err,
            Error::MismatchedTemplate { cooked: 2, raw: 1 }
        ));

        let err = Template::new(Vec::<String>::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyTemplate));
    }

    #[test]
    fn template_extend() {
        let mut template =
            Template::new(["color: ", ";\\n"], ["color: ", ";\\\\n"]).unwrap();
        template.extend(2);

        assert_eq!(template.len(), 4);
        assert_eq!(template.cooked()[..2], ["color: ", ";\\n"]);
        assert_eq!(template.raw()[..2], ["color: ", ";\\\\n"]);
        assert_eq!(template.cooked()[2..], ["", ""]);
        assert_eq!(template.raw()[2..], ["", ""]);
    }

    #[test]
    fn interpolation_evaluation() {
        let props = Props::new().with("size", "large");

        let fixed = Interpolation::from(json!({ "margin": 0 }));
        assert_eq!(fixed.evaluate(&props), Some(json!({ "margin": 0 })));

        let dynamic = Interpolation::dynamic(|p| p.get("size").cloned());
        assert_eq!(dynamic.evaluate(&props), Some(json!("large")));
    }
}

//! In-memory style primitive.
//!
//! [`ElementPrimitive`] records what it is given and evaluates it on
//! demand. It is the primitive used by the crate's own tests and a
//! reference for embedders wiring up a real renderer.

use serde_json::Value;

use crate::definition::{Interpolation, StyleDefinition};
use crate::forward::ShouldForwardProp;
use crate::primitive::{AttachConfig, DisplayName, StylePrimitive};
use crate::props::{PropMap, Props, STYLE_PROPS_PROP, StyleObject, THEME_PROP};
use crate::resolve::merge_styles;

/// One evaluated piece of a styled element's style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChunk {
    /// Literal CSS text.
    Css(String),
    /// A style object (or any other non-text value).
    Style(Value),
}

impl StyleChunk {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(css) => Some(Self::Css(css)),
            other => Some(Self::Style(other)),
        }
    }
}

/// Primitive producing [`StyledElement`]s for named tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementPrimitive;

impl StylePrimitive for ElementPrimitive {
    type Tag = String;
    type Component = StyledElement;

    fn attach(
        &self,
        tag: &String,
        config: &AttachConfig,
        definition: StyleDefinition,
        expressions: Vec<Interpolation>,
    ) -> StyledElement {
        StyledElement {
            tag: tag.clone(),
            label: config.label.clone(),
            options: config.options.clone(),
            should_forward_prop: config.should_forward_prop.clone(),
            display_name: None,
            definition,
            expressions,
        }
    }
}

/// A styled element: a tag plus its style definition and expressions.
#[derive(Clone)]
pub struct StyledElement {
    tag: String,
    label: Option<String>,
    options: StyleObject,
    should_forward_prop: ShouldForwardProp,
    display_name: Option<String>,
    definition: StyleDefinition,
    expressions: Vec<Interpolation>,
}

impl StyledElement {
    /// The underlying tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Class name label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Devtools name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Passthrough options.
    pub fn options(&self) -> &StyleObject {
        &self.options
    }

    /// The style definition as attached.
    pub fn definition(&self) -> &StyleDefinition {
        &self.definition
    }

    /// The expression chain as attached.
    pub fn expressions(&self) -> &[Interpolation] {
        &self.expressions
    }

    /// Evaluate the definition and every expression, in order.
    ///
    /// Template segments and expressions are interleaved; empty segments
    /// and `None`/null results are dropped.
    pub fn compute(&self, props: &Props) -> Vec<StyleChunk> {
        let mut chunks = Vec::new();
        let mut push = |value: Option<Value>| {
            if let Some(chunk) = value.and_then(StyleChunk::from_value) {
                chunks.push(chunk);
            }
        };

        match &self.definition {
            StyleDefinition::Static(value) => {
                push(Some(value.clone()));
                for expression in &self.expressions {
                    push(expression.evaluate(props));
                }
            }
            StyleDefinition::Computed(f) => {
                push(f(props));
                for expression in &self.expressions {
                    push(expression.evaluate(props));
                }
            }
            StyleDefinition::Templated(template) => {
                let mut expressions = self.expressions.iter();
                for segment in template.cooked() {
                    if !segment.is_empty() {
                        push(Some(Value::String(segment.clone())));
                    }
                    if let Some(expression) = expressions.next() {
                        push(expression.evaluate(props));
                    }
                }
                for expression in expressions {
                    push(expression.evaluate(props));
                }
            }
        }

        chunks
    }

    /// Merge every object chunk, in order, into one style object.
    pub fn computed_style(&self, props: &Props) -> StyleObject {
        let mut style = StyleObject::new();
        for chunk in self.compute(props) {
            if let StyleChunk::Style(value) = chunk {
                merge_styles(&mut style, &value);
            }
        }
        style
    }

    /// Concatenate every CSS text chunk.
    pub fn css_text(&self, props: &Props) -> String {
        self.compute(props)
            .into_iter()
            .filter_map(|chunk| match chunk {
                StyleChunk::Css(css) => Some(css),
                StyleChunk::Style(_) => None,
            })
            .collect()
    }

    /// Props that reach the rendered element.
    ///
    /// The theme is never forwarded.
    pub fn forwarded_props(&self, props: &Props) -> PropMap {
        props
            .names()
            .filter(|name| *name != THEME_PROP && (self.should_forward_prop)(*name))
            .filter_map(|name| {
                let value = if name == STYLE_PROPS_PROP {
                    Value::Object(props.style_props.clone().into_iter().collect())
                } else {
                    props.fields.get(name)?.clone()
                };
                Some((name.to_string(), value))
            })
            .collect()
    }
}

impl DisplayName for StyledElement {
    fn set_display_name(&mut self, name: String) {
        self.display_name = Some(name);
    }
}

impl std::fmt::Debug for StyledElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyledElement")
            .field("tag", &self.tag)
            .field("label", &self.label)
            .field("display_name", &self.display_name)
            .field("definition", &self.definition)
            .field("expressions", &self.expressions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Template;
    use crate::forward::{forward_root, forward_slot};
    use crate::primitive::PrimitiveOptions;
    use crate::theme::Theme;
    use serde_json::json;
    use std::sync::Arc;

    fn attach(definition: StyleDefinition, expressions: Vec<Interpolation>) -> StyledElement {
        let config = AttachConfig::new(
            Arc::new(forward_root),
            Some("Box-root".into()),
            PrimitiveOptions::new(),
        );
        ElementPrimitive.attach(&"div".to_string(), &config, definition, expressions)
    }

    #[test]
    fn template_interleaves_segments() {
        let template =
            Template::from_segments(["color: red;", "margin: 0;", ""]).unwrap();
        let element = attach(
            template.into(),
            vec![
                Interpolation::dynamic(|p| p.get("pad").cloned()),
                Interpolation::from(json!({ "display": "flex" })),
            ],
        );

        let props = Props::new().with("pad", "padding: 4px;");
        assert_eq!(
            element.compute(&props),
            vec![
                StyleChunk::Css("color: red;".into()),
                StyleChunk::Css("padding: 4px;".into()),
                StyleChunk::Css("margin: 0;".into()),
                StyleChunk::Style(json!({ "display": "flex" })),
            ]
        );
        assert_eq!(element.css_text(&props), "color: red;padding: 4px;margin: 0;");
    }

    #[test]
    fn computed_style_merges_objects() {
        let element = attach(
            StyleDefinition::computed(|_| Some(json!({ "padding": 4, "color": "red" }))),
            vec![
                Interpolation::dynamic(|_| None),
                Interpolation::from(json!({ "padding": 8 })),
            ],
        );

        assert_eq!(
            Value::Object(element.computed_style(&Props::new())),
            json!({ "padding": 8, "color": "red" })
        );
    }

    #[test]
    fn forwarded_props_follow_policy() {
        let element = attach(json!({}).into(), vec![]);
        let props = Props::new()
            .with("onClick", "handler")
            .with("classes", json!({ "root": "x" }))
            .with("sx", json!({}))
            .with_style_prop("size", "small");

        let forwarded = element.forwarded_props(&props);
        assert_eq!(forwarded.keys().collect::<Vec<_>>(), vec!["onClick"]);

        let config = AttachConfig::new(Arc::new(forward_slot), None, PrimitiveOptions::new());
        let slot = ElementPrimitive.attach(&"span".to_string(), &config, json!({}).into(), vec![]);
        assert!(slot.forwarded_props(&props).contains_key("classes"));

        let config = AttachConfig::new(Arc::new(|_: &str| true), None, PrimitiveOptions::new());
        let open = ElementPrimitive.attach(&"span".to_string(), &config, json!({}).into(), vec![]);
        let themed = props.clone().theme(Theme::builtin());
        let forwarded = open.forwarded_props(&themed);
        assert!(!forwarded.contains_key("theme"));
        assert_eq!(forwarded["styleProps"], json!({ "size": "small" }));
    }

    #[test]
    fn display_name_starts_unset() {
        let mut element = attach(json!({}).into(), vec![]);
        assert!(element.display_name().is_none());
        element.set_display_name("Box".into());
        assert_eq!(element.display_name(), Some("Box"));
        assert_eq!(element.label(), Some("Box-root"));
        assert_eq!(element.tag(), "div");
    }
}

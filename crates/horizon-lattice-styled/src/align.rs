//! Keeps a style definition aligned with the expressions injected after it.

use std::sync::Arc;

use crate::definition::{Interpolation, StyleDefinition, StyleFn};
use crate::props::Props;
use crate::resolve::resolve_theme;
use crate::theme::Theme;

/// Wrap a style function so it always observes a non-empty theme.
pub fn with_default_theme(f: StyleFn, default_theme: Arc<Theme>) -> StyleFn {
    Arc::new(move |props: &Props| {
        let theme = resolve_theme(props.theme.as_ref(), &default_theme);
        f(&props.with_theme(theme))
    })
}

/// Apply theme defaulting to an author interpolation.
///
/// Static interpolations pass through untouched.
pub fn wrap_interpolation(
    interpolation: Interpolation,
    default_theme: &Arc<Theme>,
) -> Interpolation {
    match interpolation {
        Interpolation::Dynamic(f) => {
            Interpolation::Dynamic(with_default_theme(f, Arc::clone(default_theme)))
        }
        fixed @ Interpolation::Static(_) => fixed,
    }
}

/// Transform the author's definition for `injected` extra expressions.
///
/// - Templates gain `injected` empty segments in both their cooked and raw
///   sequences, one per injected expression.
/// - Computed definitions are wrapped with theme defaulting.
/// - Static definitions pass through unchanged.
pub fn align_definition(
    definition: StyleDefinition,
    injected: usize,
    default_theme: &Arc<Theme>,
) -> StyleDefinition {
    match definition {
        StyleDefinition::Templated(mut template) => {
            template.extend(injected);
            StyleDefinition::Templated(template)
        }
        StyleDefinition::Computed(f) => {
            StyleDefinition::Computed(with_default_theme(f, Arc::clone(default_theme)))
        }
        fixed @ StyleDefinition::Static(_) => fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Template;
    use serde_json::{Value, json};

    fn spacing_of(props: &Props) -> Option<Value> {
        props.theme.as_ref()?.value("spacing").cloned()
    }

    #[test]
    fn template_gains_placeholders() {
        let template = Template::new(["a", "b", "c"], ["A", "B", "C"]).unwrap();
        let default = Arc::new(Theme::builtin());

        for injected in 0..4 {
            let aligned = align_definition(template.clone().into(), injected, &default);
            let aligned = aligned.as_template().unwrap();

            assert_eq!(aligned.cooked().len(), 3 + injected);
            assert_eq!(aligned.raw().len(), 3 + injected);
            assert_eq!(aligned.cooked()[..3], template.cooked()[..]);
            assert_eq!(aligned.raw()[..3], template.raw()[..]);
            assert!(aligned.cooked()[3..].iter().all(String::is_empty));
            assert!(aligned.raw()[3..].iter().all(String::is_empty));
        }
    }

    #[test]
    fn computed_sees_default_theme() {
        let default = Arc::new(Theme::builtin());
        let definition = align_definition(StyleDefinition::computed(spacing_of), 3, &default);
        let StyleDefinition::Computed(f) = definition else {
            panic!("expected computed definition");
        };

        assert_eq!(f(&Props::new()), Some(json!(8)));
        assert_eq!(f(&Props::new().theme(Theme::new())), Some(json!(8)));
        assert_eq!(
            f(&Props::new().theme(Theme::new().with_value("spacing", 2))),
            Some(json!(2))
        );
    }

    #[test]
    fn computed_keeps_other_props() {
        let default = Arc::new(Theme::builtin());
        let definition = align_definition(
            StyleDefinition::computed(|props| props.get("size").cloned()),
            0,
            &default,
        );
        let StyleDefinition::Computed(f) = definition else {
            panic!("expected computed definition");
        };

        assert_eq!(f(&Props::new().with("size", "small")), Some(json!("small")));
    }

    #[test]
    fn static_passes_through() {
        let default = Arc::new(Theme::builtin());
        let definition = align_definition(json!({ "display": "flex" }).into(), 2, &default);
        assert!(
            matches!(definition, StyleDefinition::Static(v) if v == json!({ "display": "flex" }))
        );
    }

    #[test]
    fn interpolations() {
        let default = Arc::new(Theme::builtin());

        let wrapped = wrap_interpolation(Interpolation::dynamic(spacing_of), &default);
        assert_eq!(wrapped.evaluate(&Props::new()), Some(json!(8)));

        let fixed = wrap_interpolation(json!("color: red;").into(), &default);
        assert!(matches!(fixed, Interpolation::Static(v) if v == json!("color: red;")));
    }
}

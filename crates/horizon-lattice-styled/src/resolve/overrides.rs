//! Theme style overrides.

use std::sync::Arc;

use serde_json::Value;

use crate::props::Props;
use crate::theme::Theme;

/// Turns a component's theme `styleOverrides` into a style for the current
/// props.
///
/// The layer only locates overrides; interpreting their shape (per-slot
/// keys, class keys, ...) is up to the resolver.
pub type OverridesResolver = Arc<dyn Fn(&Props, &Value) -> Option<Value> + Send + Sync>;

/// Resolve the theme overrides for component `name`.
///
/// Returns `None` when the theme declares no overrides for the component;
/// otherwise returns whatever `resolver` produces.
pub fn resolve_overrides(
    props: &Props,
    theme: &Theme,
    name: &str,
    resolver: &OverridesResolver,
) -> Option<Value> {
    let overrides = theme.style_overrides(name)?;
    tracing::trace!(
        target: crate::targets::RESOLVE,
        component = name,
        "Applying style overrides"
    );
    resolver(props, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ComponentStyles;
    use serde_json::json;

    fn root_slot() -> OverridesResolver {
        Arc::new(|_props: &Props, overrides: &Value| overrides.get("root").cloned())
    }

    #[test]
    fn missing_component_yields_none() {
        let theme = Theme::builtin();
        assert!(
            resolve_overrides(&Props::new(), &theme, "Button", &root_slot()).is_none()
        );
    }

    #[test]
    fn missing_overrides_yields_none() {
        let theme = Theme::new().with_component("Button", ComponentStyles::new());
        let resolver: OverridesResolver = Arc::new(|_: &Props, _: &Value| -> Option<Value> {
            panic!("resolver must not run")
        });
        assert!(resolve_overrides(&Props::new(), &theme, "Button", &resolver).is_none());
    }

    #[test]
    fn resolver_result_is_returned_verbatim() {
        let theme = Theme::new().with_component(
            "Button",
            ComponentStyles::new()
                .style_overrides(json!({ "root": { "margin": 4 }, "label": {} })),
        );

        assert_eq!(
            resolve_overrides(&Props::new(), &theme, "Button", &root_slot()),
            Some(json!({ "margin": 4 }))
        );

        let whole: OverridesResolver =
            Arc::new(|_: &Props, overrides: &Value| Some(overrides.clone()));
        assert_eq!(
            resolve_overrides(&Props::new(), &theme, "Button", &whole),
            Some(json!({ "root": { "margin": 4 }, "label": {} }))
        );
    }

    #[test]
    fn resolver_sees_props() {
        let theme = Theme::new().with_component(
            "Button",
            ComponentStyles::new().style_overrides(json!({ "small": { "padding": 2 } })),
        );
        let by_size: OverridesResolver = Arc::new(|props: &Props, overrides: &Value| {
            let size = props.get("size")?.as_str()?;
            overrides.get(size).cloned()
        });

        let props = Props::new().with("size", "small");
        assert_eq!(
            resolve_overrides(&props, &theme, "Button", &by_size),
            Some(json!({ "padding": 2 }))
        );
        assert!(resolve_overrides(&Props::new(), &theme, "Button", &by_size).is_none());
    }
}

//! Theme variant matching.

use std::collections::HashMap;

use serde_json::Value;

use super::cascade::merge_styles;
use super::class_key::ClassKey;
use crate::props::{PropMap, Props, StyleObject};
use crate::theme::Theme;

/// Variant styles keyed by the canonical class key of their matcher.
pub type VariantStyles = HashMap<String, Value>;

/// Index the variant styles declared for component `name`.
///
/// A later variant with the same class key replaces an earlier one.
pub fn variant_styles(theme: &Theme, name: &str, class_key: &dyn ClassKey) -> VariantStyles {
    theme
        .variants(name)
        .iter()
        .map(|variant| (class_key.class_key(&variant.props), variant.style.clone()))
        .collect()
}

/// Whether every matcher entry is satisfied by either the style props or
/// the regular props.
pub fn matches_variant(props: &Props, matcher: &PropMap) -> bool {
    matcher.iter().all(|(key, expected)| {
        props.style_prop(key) == Some(expected) || props.get(key) == Some(expected)
    })
}

/// Accumulate the styles of all variants of `name` that match `props`.
///
/// Variants are visited in declaration order and merged shallowly, so a
/// later match overwrites keys set by an earlier one. Always returns an
/// object, empty when nothing matches.
pub fn resolve_variants(
    props: &Props,
    styles: &VariantStyles,
    theme: &Theme,
    name: &str,
    class_key: &dyn ClassKey,
) -> StyleObject {
    let mut resolved = StyleObject::new();

    for variant in theme.variants(name) {
        if !matches_variant(props, &variant.props) {
            continue;
        }

        let key = class_key.class_key(&variant.props);
        let Some(style) = styles.get(&key) else {
            continue;
        };

        if !merge_styles(&mut resolved, style) {
            tracing::debug!(
                target: crate::targets::RESOLVE,
                component = name,
                class_key = %key,
                "Ignoring non-object variant style"
            );
        }
    }

    resolved
}

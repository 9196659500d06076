//! Resolution stages injected after the author's styles.

mod cascade;
mod class_key;
mod defaults;
mod overrides;
mod sx;
mod variants;

pub use cascade::merge_styles;
pub use class_key::{ClassKey, PropsClassKey, capitalize};
pub use defaults::resolve_theme;
pub use overrides::{OverridesResolver, resolve_overrides};
pub use sx::{SxEvaluator, SxProp};
pub use variants::{VariantStyles, matches_variant, resolve_variants, variant_styles};

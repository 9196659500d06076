//! Theme-aware styled components for Horizon Lattice.
//!
//! This crate sits between a component library and a style-attachment
//! primitive. Given a tag and a style definition it produces a styled
//! component whose final style is the ordered merge of:
//!
//! - **Author styles**: the definition and its interpolations
//! - **Overrides**: `theme.components[name].styleOverrides`
//! - **Variants**: `theme.components[name].variants` matched against props
//! - **sx**: the per-instance `sx` prop
//!
//! # Example
//!
//! ```
//! use horizon_lattice_styled::prelude::*;
//! use serde_json::json;
//!
//! let engine = StyledEngine::default();
//! let chip = engine.styled(
//!     ElementPrimitive,
//!     "div".to_string(),
//!     PrimitiveOptions::new(),
//!     StyledOptions::new()
//!         .name("Chip")
//!         .slot("Root")
//!         .overrides_resolver(|_props, overrides| overrides.get("root").cloned()),
//! );
//!
//! let element = chip.style(json!({ "display": "inline-flex" }), vec![]);
//! assert_eq!(element.display_name(), Some("ChipRoot"));
//!
//! let theme = Theme::new().with_component(
//!     "Chip",
//!     ComponentStyles::new()
//!         .variant(VariantDef::new([("variant", "outlined")], json!({ "border": "1px" }))),
//! );
//! let props = Props::new().theme(theme).with("variant", "outlined");
//! assert_eq!(element.computed_style(&props)["border"], "1px");
//! ```

pub mod align;
pub mod definition;
pub mod element;
pub mod factory;
pub mod forward;
pub mod naming;
pub mod primitive;
pub mod props;
pub mod resolve;
pub mod theme;

mod error;

pub use error::{Error, Result};

/// Target names for log filtering.
pub mod targets {
    /// Factory configuration and expression assembly.
    pub const FACTORY: &str = "horizon_lattice_styled::factory";
    /// Override and variant resolution.
    pub const RESOLVE: &str = "horizon_lattice_styled::resolve";
    /// Theme loading.
    pub const THEME: &str = "horizon_lattice_styled::theme";
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::definition::{Interpolation, StyleDefinition, StyleFn, Template};
    pub use crate::element::{ElementPrimitive, StyleChunk, StyledElement};
    pub use crate::factory::{Styled, StyledEngine, StyledOptions};
    pub use crate::forward::{forward_root, forward_slot};
    pub use crate::naming::ComponentIdentity;
    pub use crate::primitive::{AttachConfig, DisplayName, PrimitiveOptions, StylePrimitive};
    pub use crate::props::{PropMap, Props, StyleObject};
    pub use crate::resolve::{ClassKey, OverridesResolver, PropsClassKey, SxEvaluator, SxProp};
    pub use crate::theme::{ComponentStyles, Theme, VariantDef};
}

//! Theme model, built-in default theme, and theme loading.

mod builtin;
mod loader;
mod model;

pub use model::{ComponentStyles, Theme, VariantDef};

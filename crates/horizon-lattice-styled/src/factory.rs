//! The styled component factory.
//!
//! [`StyledEngine::styled`] configures a factory once per component
//! identity. Each call to [`Styled::style`] then assembles the expression
//! chain, aligns the author's definition with it, and hands both to the
//! primitive:
//!
//! ```text
//! [author expressions] -> [overrides] -> [variants] -> [sx]
//! ```
//!
//! Every injected stage re-derives the effective theme from the props it
//! is called with; nothing is cached between calls.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::align::{align_definition, wrap_interpolation};
use crate::definition::{Interpolation, StyleDefinition};
use crate::forward::{is_root_slot, policy_for_slot};
use crate::naming::ComponentIdentity;
use crate::primitive::{AttachConfig, DisplayName, PrimitiveOptions, StylePrimitive};
use crate::props::Props;
use crate::resolve::{
    ClassKey, OverridesResolver, PropsClassKey, SxEvaluator, SxProp, resolve_overrides,
    resolve_theme, resolve_variants, variant_styles,
};
use crate::theme::Theme;

/// Options controlling which resolution stages a component gets.
#[derive(Clone, Default)]
pub struct StyledOptions {
    /// Name and slot of the component.
    pub identity: ComponentIdentity,
    /// Turns theme overrides into styles. Also required for variants.
    pub overrides_resolver: Option<OverridesResolver>,
    /// Skip variant matching. Defaults to true for non-root slots.
    pub skip_variants_resolver: Option<bool>,
    /// Skip the `sx` stage.
    pub skip_sx: bool,
}

impl StyledOptions {
    /// Options for an unnamed component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.identity.name = Some(name.into());
        self
    }

    /// Set the slot.
    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.identity.slot = Some(slot.into());
        self
    }

    /// Set the overrides resolver.
    pub fn overrides_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Props, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.overrides_resolver = Some(Arc::new(resolver));
        self
    }

    /// Explicitly enable or disable variant matching.
    pub fn skip_variants_resolver(mut self, skip: bool) -> Self {
        self.skip_variants_resolver = Some(skip);
        self
    }

    /// Enable or disable the `sx` stage.
    pub fn skip_sx(mut self, skip: bool) -> Self {
        self.skip_sx = skip;
        self
    }

    /// Effective variant skipping: explicit value, else true for any slot
    /// other than the root.
    pub fn skips_variants(&self) -> bool {
        self.skip_variants_resolver
            .unwrap_or_else(|| !is_root_slot(self.identity.slot_name()))
    }
}

impl fmt::Debug for StyledOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledOptions")
            .field("identity", &self.identity)
            .field("overrides_resolver", &self.overrides_resolver.is_some())
            .field("skip_variants_resolver", &self.skip_variants_resolver)
            .field("skip_sx", &self.skip_sx)
            .finish()
    }
}

/// Shared collaborators for every styled component.
///
/// Holds the default theme substituted for missing or empty themes, the
/// canonical class-key function, and the `sx` evaluator. The engine is
/// immutable once built and cheap to clone.
#[derive(Clone)]
pub struct StyledEngine {
    default_theme: Arc<Theme>,
    class_key: Arc<dyn ClassKey>,
    sx: Arc<dyn SxEvaluator>,
}

impl StyledEngine {
    /// Create an engine with a default theme.
    pub fn new(default_theme: impl Into<Arc<Theme>>) -> Self {
        Self {
            default_theme: default_theme.into(),
            class_key: Arc::new(PropsClassKey),
            sx: Arc::new(SxProp),
        }
    }

    /// Replace the class-key function.
    pub fn with_class_key(mut self, class_key: impl ClassKey + 'static) -> Self {
        self.class_key = Arc::new(class_key);
        self
    }

    /// Replace the `sx` evaluator.
    pub fn with_sx(mut self, sx: impl SxEvaluator + 'static) -> Self {
        self.sx = Arc::new(sx);
        self
    }

    /// The default theme.
    pub fn default_theme(&self) -> &Arc<Theme> {
        &self.default_theme
    }

    /// Configure a styled factory for `tag`.
    pub fn styled<P: StylePrimitive>(
        &self,
        primitive: P,
        tag: P::Tag,
        options: PrimitiveOptions,
        styled: StyledOptions,
    ) -> Styled<P> {
        let identity = styled.identity.clone();
        let skip_variants_resolver = styled.skips_variants();

        let config = AttachConfig::new(
            policy_for_slot(identity.slot_name()),
            identity.class_name(),
            options,
        );

        tracing::debug!(
            target: crate::targets::FACTORY,
            name = identity.name.as_deref().unwrap_or(""),
            slot = identity.slot_name().unwrap_or(""),
            overrides = styled.overrides_resolver.is_some(),
            skip_variants_resolver,
            skip_sx = styled.skip_sx,
            "Configured styled factory"
        );

        Styled {
            engine: self.clone(),
            primitive,
            tag,
            config,
            display_name: identity.display_name(),
            identity,
            overrides_resolver: styled.overrides_resolver,
            skip_variants_resolver,
            skip_sx: styled.skip_sx,
        }
    }

    fn overrides_stage(&self, name: &str, resolver: &OverridesResolver) -> Interpolation {
        let default_theme = Arc::clone(&self.default_theme);
        let name = name.to_string();
        let resolver = Arc::clone(resolver);

        Interpolation::dynamic(move |props| {
            let theme = resolve_theme(props.theme.as_ref(), &default_theme);
            resolve_overrides(props, &theme, &name, &resolver)
        })
    }

    fn variants_stage(&self, name: &str) -> Interpolation {
        let default_theme = Arc::clone(&self.default_theme);
        let name = name.to_string();
        let class_key = Arc::clone(&self.class_key);

        Interpolation::dynamic(move |props| {
            let theme = resolve_theme(props.theme.as_ref(), &default_theme);
            let styles = variant_styles(&theme, &name, &*class_key);
            let resolved = resolve_variants(props, &styles, &theme, &name, &*class_key);
            Some(Value::Object(resolved))
        })
    }

    fn sx_stage(&self) -> Interpolation {
        let default_theme = Arc::clone(&self.default_theme);
        let sx = Arc::clone(&self.sx);

        Interpolation::dynamic(move |props| {
            let theme = resolve_theme(props.theme.as_ref(), &default_theme);
            sx.evaluate(&props.with_theme(theme))
        })
    }
}

impl Default for StyledEngine {
    fn default() -> Self {
        Self::new(Theme::builtin())
    }
}

impl fmt::Debug for StyledEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledEngine")
            .field("default_theme", &self.default_theme)
            .finish_non_exhaustive()
    }
}

/// A configured styled factory for one component identity.
///
/// Use it like the primitive's own factory: each call to
/// [`style`](Self::style) produces a new styled component.
pub struct Styled<P: StylePrimitive> {
    engine: StyledEngine,
    primitive: P,
    tag: P::Tag,
    config: AttachConfig,
    identity: ComponentIdentity,
    display_name: Option<String>,
    overrides_resolver: Option<OverridesResolver>,
    skip_variants_resolver: bool,
    skip_sx: bool,
}

impl<P: StylePrimitive> Styled<P> {
    /// The component identity.
    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    /// The configuration handed to the primitive.
    pub fn config(&self) -> &AttachConfig {
        &self.config
    }

    /// Create a styled component from a definition and author expressions.
    pub fn style(
        &self,
        definition: impl Into<StyleDefinition>,
        expressions: Vec<Interpolation>,
    ) -> P::Component {
        let chain = self.expressions(expressions);
        let injected = chain.len() - chain.authored;

        let definition =
            align_definition(definition.into(), injected, &self.engine.default_theme);

        let mut component = self
            .primitive
            .attach(&self.tag, &self.config, definition, chain.expressions);

        if let Some(display_name) = &self.display_name {
            component.set_display_name(display_name.clone());
        }

        component
    }

    /// Assemble the full expression chain for one call.
    fn expressions(&self, authored: Vec<Interpolation>) -> ExpressionChain {
        let default_theme = &self.engine.default_theme;
        let authored_count = authored.len();

        let mut expressions: Vec<Interpolation> = authored
            .into_iter()
            .map(|expression| wrap_interpolation(expression, default_theme))
            .collect();

        if let (Some(name), Some(resolver)) = (&self.identity.name, &self.overrides_resolver) {
            expressions.push(self.engine.overrides_stage(name, resolver));

            if !self.skip_variants_resolver {
                expressions.push(self.engine.variants_stage(name));
            }
        }

        if !self.skip_sx {
            expressions.push(self.engine.sx_stage());
        }

        tracing::trace!(
            target: crate::targets::FACTORY,
            name = self.identity.name.as_deref().unwrap_or(""),
            authored = authored_count,
            injected = expressions.len() - authored_count,
            "Assembled style expressions"
        );

        ExpressionChain {
            expressions,
            authored: authored_count,
        }
    }
}

impl<P> fmt::Debug for Styled<P>
where
    P: StylePrimitive + fmt::Debug,
    P::Tag: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("primitive", &self.primitive)
            .field("tag", &self.tag)
            .field("identity", &self.identity)
            .field("config", &self.config)
            .field("skip_variants_resolver", &self.skip_variants_resolver)
            .field("skip_sx", &self.skip_sx)
            .finish_non_exhaustive()
    }
}

struct ExpressionChain {
    expressions: Vec<Interpolation>,
    authored: usize,
}

impl ExpressionChain {
    fn len(&self) -> usize {
        self.expressions.len()
    }
}

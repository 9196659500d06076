//! Component identity and derived names.

/// Identity of a styleable component: its name and optional slot.
///
/// The name keys theme lookups. Without a name the component still works
/// but is not addressable by theme overrides or variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentIdentity {
    /// Component name (e.g. "Button").
    pub name: Option<String>,
    /// Slot within the component (e.g. "Root", "Label").
    pub slot: Option<String>,
}

impl ComponentIdentity {
    /// Identity for a named component root.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            slot: None,
        }
    }

    /// Set the slot.
    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// The slot, with an empty string treated as no slot.
    pub fn slot_name(&self) -> Option<&str> {
        self.slot.as_deref().filter(|slot| !slot.is_empty())
    }

    /// Devtools name: `name` followed by the slot, if any.
    pub fn display_name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(format!("{name}{}", self.slot_name().unwrap_or("")))
    }

    /// Class name prefix: `name-slot` with the slot's first letter lowered.
    pub fn class_name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let slot = self.slot_name().unwrap_or("Root");
        Some(format!("{name}-{}", lower_first(slot)))
    }
}

/// Lowercase only the first character.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

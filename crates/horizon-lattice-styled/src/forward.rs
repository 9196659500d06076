//! Prop forwarding policy.
//!
//! Decides which props reach the underlying primitive and which are only
//! consumed by style resolution.

use std::sync::Arc;

/// Predicate deciding whether a prop is forwarded to the primitive.
pub type ShouldForwardProp = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Props consumed by resolution and never forwarded from a slot.
const RESOLUTION_PROPS: &[&str] = &["styleProps", "theme", "isRtl", "sx", "as"];

/// Forwarding policy for root components.
///
/// Root components additionally consume `classes`.
pub fn forward_root(prop: &str) -> bool {
    prop != "classes" && forward_slot(prop)
}

/// Forwarding policy for non-root slots.
pub fn forward_slot(prop: &str) -> bool {
    !RESOLUTION_PROPS.contains(&prop)
}

/// Whether a slot name denotes the root of a component.
///
/// An empty slot name is the same as no slot.
pub fn is_root_slot(slot: Option<&str>) -> bool {
    matches!(slot, None | Some("" | "Root"))
}

/// Select the forwarding policy for a slot.
pub fn policy_for_slot(slot: Option<&str>) -> ShouldForwardProp {
    let policy: fn(&str) -> bool = if is_root_slot(slot) {
        forward_root
    } else {
        forward_slot
    };
    Arc::new(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXCLUDED: &[&str] = &["styleProps", "theme", "isRtl", "sx", "as", "classes"];

    #[test]
    fn root_excludes_resolution_props() {
        for prop in EXCLUDED {
            assert!(!forward_root(prop), "{prop} should not be forwarded");
        }
        for prop in ["onClick", "children", "variant", "className", "", "Classes"] {
            assert!(forward_root(prop), "{prop} should be forwarded");
        }
    }

    #[test]
    fn slot_admits_classes() {
        assert!(forward_slot("classes"));
        for prop in EXCLUDED.iter().filter(|p| **p != "classes") {
            assert!(!forward_slot(prop));
        }
        assert!(forward_slot("disabled"));
    }

    #[test]
    fn policy_selection() {
        assert!(!policy_for_slot(None)("classes"));
        assert!(!policy_for_slot(Some("Root"))("classes"));
        assert!(!policy_for_slot(Some(""))("classes"));
        assert!(policy_for_slot(Some("Label"))("classes"));
        // Slot names are case sensitive.
        assert!(policy_for_slot(Some("root"))("classes"));
    }
}

//! Canonical class keys for variant matchers.

use serde_json::Value;

use crate::props::PropMap;

/// Derives a stable key from a variant's prop matcher.
///
/// Implementations must return the same key for equal prop-value sets,
/// regardless of insertion order.
pub trait ClassKey: Send + Sync {
    /// Canonical key for a matcher.
    fn class_key(&self, props: &PropMap) -> String;
}

/// Default class key: `variant` value first, then every other entry in key
/// order, camel-cased.
///
/// `{ variant: "outlined", color: "primary", size: "large" }` becomes
/// `outlinedPrimarySizeLarge`. The `color` key contributes only its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropsClassKey;

impl ClassKey for PropsClassKey {
    fn class_key(&self, props: &PropMap) -> String {
        let mut key = props
            .get("variant")
            .filter(|v| is_truthy(v))
            .map(value_to_string)
            .unwrap_or_default();

        // PropMap iterates in sorted key order.
        for (name, value) in props.iter().filter(|(name, _)| *name != "variant") {
            let value = value_to_string(value);
            if name == "color" {
                if key.is_empty() {
                    key.push_str(&value);
                } else {
                    key.push_str(&capitalize(&value));
                }
            } else {
                if key.is_empty() {
                    key.push_str(name);
                } else {
                    key.push_str(&capitalize(name));
                }
                key.push_str(&capitalize(&value));
            }
        }

        key
    }
}

/// Uppercase only the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

//! The ad-hoc `sx` style channel.

use serde_json::Value;

use super::cascade::merge_styles;
use crate::props::{Props, StyleObject};

/// Evaluates the per-instance `sx` style.
///
/// The props passed in always carry the effective theme.
pub trait SxEvaluator: Send + Sync {
    /// Style for these props, or `None` for no contribution.
    fn evaluate(&self, props: &Props) -> Option<Value>;
}

impl<F> SxEvaluator for F
where
    F: Fn(&Props) -> Option<Value> + Send + Sync,
{
    fn evaluate(&self, props: &Props) -> Option<Value> {
        self(props)
    }
}

/// Reads the `sx` prop directly.
///
/// An object is used as is; an array has its object entries merged in
/// order. Anything else contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SxProp;

impl SxEvaluator for SxProp {
    fn evaluate(&self, props: &Props) -> Option<Value> {
        match props.sx()? {
            Value::Object(style) => Some(Value::Object(style.clone())),
            Value::Array(entries) => {
                let mut merged = StyleObject::new();
                for entry in entries {
                    merge_styles(&mut merged, entry);
                }
                Some(Value::Object(merged))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_sx() {
        let props = Props::new().with("sx", json!({ "mt": 2 }));
        assert_eq!(SxProp.evaluate(&props), Some(json!({ "mt": 2 })));
    }

    #[test]
    fn array_sx_merges_in_order() {
        let props =
            Props::new().with("sx", json!([{ "mt": 2, "p": 1 }, null, false, { "mt": 3 }]));
        assert_eq!(SxProp.evaluate(&props), Some(json!({ "mt": 3, "p": 1 })));
    }

    #[test]
    fn missing_sx() {
        assert!(SxProp.evaluate(&Props::new()).is_none());
        assert!(SxProp.evaluate(&Props::new().with("sx", "m: 1")).is_none());
    }

    #[test]
    fn closures_are_evaluators() {
        let evaluator = |props: &Props| props.theme.as_ref().map(|_| json!({ "themed": true }));
        assert!(evaluator.evaluate(&Props::new()).is_none());
    }
}

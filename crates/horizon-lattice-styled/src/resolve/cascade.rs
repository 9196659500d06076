//! Style object merging.

use serde_json::Value;

use crate::props::StyleObject;

/// Shallow, right-biased merge of `source` into `target`.
///
/// Keys from `source` overwrite keys in `target`; nested objects are
/// replaced, not merged. A non-object `source` contributes nothing.
pub fn merge_styles(target: &mut StyleObject, source: &Value) -> bool {
    match source {
        Value::Object(source) => {
            for (key, value) in source {
                target.insert(key.clone(), value.clone());
            }
            true
        }
        _ => false,
    }
}

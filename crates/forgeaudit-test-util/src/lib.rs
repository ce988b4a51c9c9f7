//! Shared test utilities for the forgeaudit workspace.
//!
//! Lives in its own crate so both the CLI integration tests and `xtask` can use
//! `normalize_nondeterministic` outside of `#[cfg(test)]`.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` only when the root object looks
///    like a report envelope (`schema`, `tool`, `verdict`, `categories`, `data`). Nested objects
///    with a similar shape are left alone.
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "categories", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

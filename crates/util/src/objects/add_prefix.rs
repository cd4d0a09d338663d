use serde_json::{Map, Value as JsonValue};

use crate::value::Object;

use super::property_names;

/// Copy `object` into a new object with `prefix` prepended to every key.
///
/// Inherited properties are copied too and become own properties of the
/// result.
///
/// # Examples
///
/// ```
/// use object_util::{add_prefix, Object};
///
/// let obj = Object::new().with("name", "x").with("id", 1);
/// let prefixed = add_prefix(&obj, "user_");
///
/// assert_eq!(prefixed.own_keys(), vec!["user_name".to_string(), "user_id".to_string()]);
/// ```
pub fn add_prefix(object: &Object, prefix: &str) -> Object {
    let out = Object::new();
    for name in property_names(object) {
        if let Some(value) = object.get(&name) {
            out.set(format!("{prefix}{name}"), value);
        }
    }
    out
}

/// [`add_prefix`] for `serde_json::Map`.
pub fn add_prefix_json(object: &Map<String, JsonValue>, prefix: &str) -> Map<String, JsonValue> {
    object
        .iter()
        .map(|(key, val)| (format!("{prefix}{key}"), val.clone()))
        .collect()
}

use serde_json::{Map, Value as JsonValue};

use crate::value::{Object, Value};

/// Build a new object from the own entries of `object` for which `f`
/// returns `true`, in the spirit of `Array.prototype.filter`.
///
/// # Examples
///
/// ```
/// use object_util::{object_filter, Object};
///
/// let obj = Object::new().with("keep", 1).with("drop", 2);
/// let kept = object_filter(&obj, |key, _| key.starts_with('k'));
///
/// assert_eq!(kept.own_keys(), vec!["keep".to_string()]);
/// ```
pub fn object_filter<F>(object: &Object, mut f: F) -> Object
where
    F: FnMut(&str, &Value) -> bool,
{
    object
        .own_entries()
        .into_iter()
        .filter(|(key, val)| f(key.as_str(), val))
        .collect()
}

/// [`object_filter`] for `serde_json::Map`.
pub fn object_filter_json<F>(object: &Map<String, JsonValue>, mut f: F) -> Map<String, JsonValue>
where
    F: FnMut(&str, &JsonValue) -> bool,
{
    object
        .iter()
        .filter(|&(key, val)| f(key.as_str(), val))
        .map(|(key, val)| (key.clone(), val.clone()))
        .collect()
}

use serde_json::{Map, Value as JsonValue};

use crate::value::{Object, Value};

/// Build a new object by transforming each own entry of `object`, in the
/// spirit of `Array.prototype.map`.
///
/// `f` receives each key and value and returns the new entry. When two
/// entries map to the same key the later one wins. The result has no
/// prototype.
///
/// # Examples
///
/// ```
/// use object_util::{object_map, Object, Value};
///
/// let obj = Object::new().with("a", 1).with("b", 2);
/// let doubled = object_map(&obj, |key, val| {
///     (key.to_uppercase(), Value::from(val.as_f64().unwrap_or_default() * 2.0))
/// });
///
/// assert_eq!(doubled.get("A").and_then(|v| v.as_f64()), Some(2.0));
/// assert_eq!(doubled.get("B").and_then(|v| v.as_f64()), Some(4.0));
/// ```
pub fn object_map<F>(object: &Object, mut f: F) -> Object
where
    F: FnMut(&str, &Value) -> (String, Value),
{
    object
        .own_entries()
        .iter()
        .map(|(key, val)| f(key.as_str(), val))
        .collect()
}

/// [`object_map`] for `serde_json::Map`.
pub fn object_map_json<F>(object: &Map<String, JsonValue>, mut f: F) -> Map<String, JsonValue>
where
    F: FnMut(&str, &JsonValue) -> (String, JsonValue),
{
    object.iter().map(|(key, val)| f(key.as_str(), val)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ignores_inherited() {
        let base = Object::new().with("inherited", 1);
        let obj = Object::with_prototype(base).with("own", 1);
        let mapped = object_map(&obj, |k, v| (k.to_string(), v.clone()));
        assert_eq!(mapped.own_keys(), vec!["own".to_string()]);
        assert!(mapped.prototype().is_none());
    }

    #[test]
    fn test_colliding_keys_keep_last() {
        let obj = Object::new().with("a", 1).with("b", 2);
        let mapped = object_map(&obj, |_, v| ("k".to_string(), v.clone()));
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped.get("k").and_then(|v| v.as_f64()), Some(2.0));
    }

    #[test]
    fn test_json() {
        let json = json!({"a": 1, "b": "x"});
        let mapped = object_map_json(json.as_object().unwrap(), |k, v| (format!("{k}{k}"), v.clone()));
        assert_eq!(JsonValue::Object(mapped), json!({"aa": 1, "bb": "x"}));
    }
}

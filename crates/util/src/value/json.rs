//! Conversion between [`Value`] and `serde_json::Value`.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::{Array, Object, Value};
use crate::error::ValueError;
use crate::objects::property_names;

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect::<Array>()),
            JsonValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        Value::from(&json)
    }
}

impl Value {
    /// Export this value as JSON.
    ///
    /// Dates become millisecond timestamps, sets and custom iterables become
    /// arrays, maps become arrays of `[key, value]` pairs and objects
    /// include the properties they inherit.
    ///
    /// ```
    /// use object_util::{Object, Value, ValueError};
    /// use serde_json::json;
    ///
    /// let obj = Object::new().with("a", 1);
    /// assert_eq!(Value::from(obj.clone()).to_json(), Ok(json!({"a": 1})));
    ///
    /// obj.set("me", obj.clone());
    /// assert_eq!(Value::from(obj).to_json(), Err(ValueError::Cyclic));
    /// ```
    pub fn to_json(&self) -> Result<JsonValue, ValueError> {
        let mut ancestors = Vec::new();
        to_json(self, &mut ancestors)
    }
}

fn to_json(value: &Value, ancestors: &mut Vec<usize>) -> Result<JsonValue, ValueError> {
    let unrepresentable = || ValueError::Unrepresentable { kind: value.kind() };
    match value {
        Value::Null => return Ok(JsonValue::Null),
        Value::Bool(b) => return Ok(JsonValue::Bool(*b)),
        Value::Number(n) => return number_to_json(*n),
        Value::BigInt(n) => {
            return i64::try_from(*n)
                .map(Number::from)
                .or_else(|_| u64::try_from(*n).map(Number::from))
                .map(JsonValue::Number)
                .map_err(|_| unrepresentable())
        }
        Value::String(s) => return Ok(JsonValue::String(s.clone())),
        Value::Date(date) => return Ok(JsonValue::Number(date.millis().into())),
        Value::Undefined | Value::Symbol(_) | Value::Function(_) => return Err(unrepresentable()),
        _ => {}
    }

    let Some(address) = value.address() else {
        return Err(unrepresentable());
    };
    if ancestors.contains(&address) {
        return Err(ValueError::Cyclic);
    }
    ancestors.push(address);
    let result = composite_to_json(value, ancestors);
    ancestors.pop();
    result
}

fn composite_to_json(value: &Value, ancestors: &mut Vec<usize>) -> Result<JsonValue, ValueError> {
    let array = |items: Vec<Value>, ancestors: &mut Vec<usize>| {
        items
            .iter()
            .map(|item| to_json(item, ancestors))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array)
    };
    match value {
        Value::Array(arr) => array(arr.to_vec(), ancestors),
        Value::Set(set) => array(set.values(), ancestors),
        Value::Iterable(it) => array(it.values(), ancestors),
        Value::Map(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, val) in map.entries() {
                pairs.push(JsonValue::Array(vec![
                    to_json(&key, ancestors)?,
                    to_json(&val, ancestors)?,
                ]));
            }
            Ok(JsonValue::Array(pairs))
        }
        Value::Object(obj) => {
            let mut out = JsonMap::new();
            for name in property_names(obj) {
                if let Some(val) = obj.get(&name) {
                    out.insert(name, to_json(&val, ancestors)?);
                }
            }
            Ok(JsonValue::Object(out))
        }
        _ => Err(ValueError::Unrepresentable { kind: value.kind() }),
    }
}

fn number_to_json(n: f64) -> Result<JsonValue, ValueError> {
    if !n.is_finite() {
        return Err(ValueError::NonFiniteNumber(n));
    }
    // Keep integral values integral so that `1` round-trips as `1`, not `1.0`.
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Ok(JsonValue::Number(Number::from(n as i64)));
    }
    Number::from_f64(n)
        .map(JsonValue::Number)
        .ok_or(ValueError::NonFiniteNumber(n))
}

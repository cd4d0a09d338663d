//! `Debug` output for values that may contain cycles.
//!
//! A composite that is already being printed further up the tree is
//! rendered as `[Circular]`.

use std::cell::RefCell;
use std::fmt;

use super::{Array, Iterable, Map, Object, Set, Value};

struct Printer<'a> {
    value: &'a Value,
    ancestors: &'a RefCell<Vec<usize>>,
}

impl Printer<'_> {
    fn child<'b>(&'b self, value: &'b Value) -> Printer<'b> {
        Printer {
            value,
            ancestors: self.ancestors,
        }
    }
}

impl fmt::Debug for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = match self.value {
            Value::Array(_) | Value::Set(_) | Value::Map(_) | Value::Object(_) => self.value.address(),
            _ => None,
        };
        if let Some(addr) = address {
            if self.ancestors.borrow().contains(&addr) {
                return f.write_str("[Circular]");
            }
            self.ancestors.borrow_mut().push(addr);
        }
        let result = self.fmt_value(f);
        if address.is_some() {
            self.ancestors.borrow_mut().pop();
        }
        result
    }
}

impl Printer<'_> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "{s:?}"),
            Value::Function(func) => write!(f, "{func:?}"),
            Value::Date(date) => write!(f, "Date({})", date.millis()),
            Value::Iterable(it) => write!(f, "[Iterable@{:#x}]", it.address()),
            Value::Array(arr) => {
                let items = arr.items();
                f.debug_list()
                    .entries(items.iter().map(|item| self.child(item)))
                    .finish()
            }
            Value::Set(set) => {
                let values = set.values();
                f.write_str("Set ")?;
                f.debug_set()
                    .entries(values.iter().map(|item| self.child(item)))
                    .finish()
            }
            Value::Map(map) => {
                let entries = map.entries();
                f.write_str("Map ")?;
                f.debug_map()
                    .entries(entries.iter().map(|(k, v)| (self.child(k), self.child(v))))
                    .finish()
            }
            Value::Object(obj) => {
                let entries = obj.own_entries();
                let mut map = f.debug_map();
                for (key, value) in &entries {
                    map.entry(key, &self.child(value));
                }
                map.finish()
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors = RefCell::new(Vec::new());
        Printer {
            value: self,
            ancestors: &ancestors,
        }
        .fmt(f)
    }
}

macro_rules! debug_via_value {
    ($($ty:ident),* $(,)?) => {
        $(
            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(&Value::$ty(self.clone()), f)
                }
            }
        )*
    };
}

debug_via_value!(Array, Set, Map, Iterable, Object);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_nested() {
        let obj = Object::new()
            .with("a", 1)
            .with("b", Value::from(vec![Value::from("x"), Value::Null]));
        assert_eq!(format!("{:?}", Value::from(obj)), r#"{"a": 1, "b": ["x", null]}"#);
    }

    #[test]
    fn test_debug_cycle() {
        let obj = Object::new();
        obj.set("x", obj.clone());
        assert_eq!(format!("{obj:?}"), r#"{"x": [Circular]}"#);
    }

    #[test]
    fn test_debug_shared_is_not_circular() {
        let shared = Array::from(vec![Value::from(1)]);
        let outer = Array::from(vec![Value::from(shared.clone()), Value::from(shared)]);
        assert_eq!(format!("{outer:?}"), "[[1], [1]]");
    }
}

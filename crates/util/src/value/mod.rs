//! Dynamically typed values.
//!
//! [`Value`] models the kind of loosely shaped data a scripting runtime
//! passes around: primitives compared by value, and composite values
//! (arrays, sets, maps, objects, custom iterables) that are shared
//! reference-counted handles. Because composites are shared, a value can
//! refer back to itself:
//!
//! ```
//! use object_util::{Object, Value};
//!
//! let node = Object::new();
//! node.set("self", node.clone());
//!
//! let inner = node.get("self").unwrap();
//! assert!(inner.as_object().unwrap().ptr_eq(&node));
//! ```

mod collections;
mod date;
mod debug;
mod function;
mod json;
mod object;
mod symbol;

use std::fmt;

pub use collections::{Array, Iterable, IterableSource, Map, Set};
pub use date::Date;
pub use function::Function;
pub use object::Object;
pub use symbol::Symbol;

/// A dynamically typed value.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Array(Array),
    Date(Date),
    Set(Set),
    Map(Map),
    Iterable(Iterable),
    Object(Object),
}

/// Runtime kind of a [`Value`], the analogue of `typeof`.
///
/// Every composite value (array, date, set, map, iterable, object)
/// reports [`Kind::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Object,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Function => "function",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Create a big integer value.
    pub fn bigint(value: i128) -> Self {
        Value::BigInt(value)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Function(_) => Kind::Function,
            Value::Array(_)
            | Value::Date(_)
            | Value::Set(_)
            | Value::Map(_)
            | Value::Iterable(_)
            | Value::Object(_) => Kind::Object,
        }
    }

    /// Returns true for values of [`Kind::Object`].
    pub fn is_composite(&self) -> bool {
        self.kind() == Kind::Object
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self {
            Value::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// `SameValueZero` comparison: primitives by value (with `NaN` equal
    /// to itself and `+0` equal to `-0`), everything else by identity.
    ///
    /// Dates are plain timestamps in this model and compare by value.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            _ => match (self.address(), other.address()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Address of the shared allocation behind this value, if it has one.
    pub(crate) fn address(&self) -> Option<usize> {
        match self {
            Value::Symbol(s) => Some(s.address()),
            Value::Function(f) => Some(f.address()),
            Value::Array(arr) => Some(arr.address()),
            Value::Set(set) => Some(set.address()),
            Value::Map(map) => Some(map.address()),
            Value::Iterable(it) => Some(it.address()),
            Value::Object(obj) => Some(obj.address()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Array::from(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_from_handle {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$ty(v)
                }
            }
        )*
    };
}

impl_from_handle!(Symbol, Function, Array, Date, Set, Map, Iterable, Object);

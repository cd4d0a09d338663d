//! Structural equality for [`Value`]s.
//!
//! Two values are compared with the first matching rule:
//!
//! 1. Identical values (same handle, or equal primitives, with `NaN`
//!    equal to itself) are equal.
//! 2. Values of different [`Kind`], or that are not composites, are not
//!    equal.
//! 3. If either value was already visited during this comparison the pair
//!    is assumed equal. This makes cyclic graphs terminate, but a node
//!    reached a second time (through a cycle or a shared subtree) is never
//!    compared again, so some differently shaped graphs compare equal.
//! 4. Arrays are equal when they have the same length and equal items at
//!    every index.
//! 5. Dates are equal when their timestamps are.
//! 6. Sets, maps and custom iterables are turned into arrays in iteration
//!    order and compared as arrays. Equal sets inserted in a different
//!    order are therefore not equal.
//! 7. Objects are equal when they expose the same property names,
//!    including inherited ones, with equal values behind each name.
//!
//! Functions and symbols only compare equal to themselves.

mod guard;
mod options;

use tracing::trace;

use self::guard::CycleGuard;
use crate::objects::property_names;
use crate::value::{Kind, Object, Value};

pub use options::DeepEqualsOptions;

/// Check whether two values are deeply equal.
///
/// Never panics and always terminates, including on cyclic values.
///
/// # Examples
///
/// ```
/// use object_util::{deep_equals, Object, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"foo": [1, 2, 3]}));
/// let b = Value::from(json!({"foo": [1, 2, 3]}));
/// let c = Value::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equals(&a, &b));
/// assert!(!deep_equals(&a, &c));
///
/// let x = Object::new();
/// x.set("x", x.clone());
/// let y = Object::new();
/// y.set("x", y.clone());
/// assert!(deep_equals(&x.into(), &y.into()));
/// ```
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    deep_equals_with(a, b, &DeepEqualsOptions::default())
}

/// [`deep_equals`] with explicit options.
pub fn deep_equals_with(a: &Value, b: &Value, options: &DeepEqualsOptions) -> bool {
    Comparator::new(options).equals(a, b, 0)
}

struct Comparator<'o> {
    options: &'o DeepEqualsOptions,
    guard: CycleGuard,
    /// Array snapshots and sequences materialized from iterables. Their
    /// composites may be recorded in the guard, so they must outlive the
    /// comparison.
    scratch: Vec<Vec<Value>>,
}

impl<'o> Comparator<'o> {
    fn new(options: &'o DeepEqualsOptions) -> Self {
        Comparator {
            options,
            guard: CycleGuard::default(),
            scratch: Vec::new(),
        }
    }

    fn equals(&mut self, a: &Value, b: &Value, depth: usize) -> bool {
        if a.same_value_zero(b) {
            return true;
        }
        if a.kind() != b.kind() || a.kind() != Kind::Object {
            return false;
        }
        if self.options.max_depth.is_some_and(|max| depth > max) {
            trace!(depth, "depth limit reached, comparing by identity");
            return false;
        }

        // Assume already visited values are equal
        if self.guard.contains(a) || self.guard.contains(b) {
            trace!(depth, "revisited value, assuming equal");
            return true;
        }
        self.guard.insert(a);
        self.guard.insert(b);

        match (a, b) {
            (Value::Array(x), Value::Array(y)) => {
                // Snapshot the items so no borrow is held while iterable
                // sources run further down.
                let (x, y) = (x.to_vec(), y.to_vec());
                self.compare_and_keep(x, y, depth)
            }
            (Value::Array(_), _) | (_, Value::Array(_)) => false,
            (Value::Date(x), Value::Date(y)) => x.millis() == y.millis(),
            (Value::Date(_), _) | (_, Value::Date(_)) => false,
            _ => match (materialize(a), materialize(b)) {
                (Some(x), Some(y)) => self.compare_and_keep(x, y, depth),
                (None, None) => match (a, b) {
                    (Value::Object(x), Value::Object(y)) => self.objects_equal(x, y, depth),
                    _ => false,
                },
                _ => false,
            },
        }
    }

    /// Compare two owned sequences, then keep them alive for the rest of
    /// the comparison.
    fn compare_and_keep(&mut self, a: Vec<Value>, b: Vec<Value>, depth: usize) -> bool {
        let eq = self.sequences_equal(&a, &b, depth);
        self.scratch.push(a);
        self.scratch.push(b);
        eq
    }

    /// `depth` is the depth of the containers holding `a` and `b`.
    fn sequences_equal(&mut self, a: &[Value], b: &[Value], depth: usize) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(x, y)| self.equals(x, y, depth + 1))
    }

    fn objects_equal(&mut self, a: &Object, b: &Object, depth: usize) -> bool {
        let a_names = property_names(a);
        let b_names = property_names(b);
        if a_names.len() != b_names.len() {
            return false;
        }
        a_names.iter().all(|name| {
            b_names.contains(name)
                && match (a.get(name), b.get(name)) {
                    (Some(x), Some(y)) => self.equals(&x, &y, depth + 1),
                    _ => false,
                }
        })
    }
}

/// The iteration sequence of a set, map or custom iterable. Map entries
/// become `[key, value]` arrays.
fn materialize(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::Set(set) => Some(set.values()),
        Value::Map(map) => Some(
            map.entries()
                .into_iter()
                .map(|(k, v)| Value::from(vec![k, v]))
                .collect(),
        ),
        Value::Iterable(it) => Some(it.values()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Array, Date, Function, Iterable, Map, Set, Symbol};
    use serde_json::json;

    fn eq(a: impl Into<Value>, b: impl Into<Value>) -> bool {
        deep_equals(&a.into(), &b.into())
    }

    fn js(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    // Primitives
    #[test]
    fn test_primitives() {
        assert!(eq(1, 1));
        assert!(!eq(1, "1"));
        assert!(!eq(Value::Null, Value::Undefined));
        assert!(eq(Value::Null, Value::Null));
        assert!(eq(Value::Undefined, Value::Undefined));
        assert!(eq("a", "a"));
        assert!(!eq("a", "b"));
        assert!(!eq(true, 1));
        assert!(!eq(0, false));
        assert!(!eq("", Value::Null));
    }

    #[test]
    fn test_nan_and_signed_zero() {
        assert!(eq(f64::NAN, f64::NAN));
        assert!(eq(0.0, -0.0));
    }

    #[test]
    fn test_bigint_is_not_number() {
        assert!(eq(Value::bigint(1), Value::bigint(1)));
        assert!(!eq(Value::bigint(1), 1));
    }

    #[test]
    fn test_symbols_by_identity() {
        let s = Symbol::new("x");
        assert!(eq(s.clone(), s));
        assert!(!eq(Symbol::new("x"), Symbol::new("x")));
    }

    #[test]
    fn test_functions_by_identity() {
        let f = Function::new(|_| Value::Null);
        assert!(eq(f.clone(), f));
        assert!(!eq(Function::new(|_| Value::Null), Function::new(|_| Value::Null)));
        assert!(!eq(Function::new(|_| Value::Null), Object::new()));
    }

    #[test]
    fn test_null_vs_object() {
        assert!(!eq(Value::Null, Object::new()));
        assert!(!eq(Array::new(), Value::Null));
    }

    // Arrays
    #[test]
    fn test_arrays() {
        assert!(eq(js(json!([1, 2, 3])), js(json!([1, 2, 3]))));
        assert!(!eq(js(json!([1, 2, 3])), js(json!([1, 2]))));
        assert!(eq(js(json!([1, [2, 3]])), js(json!([1, [2, 3]]))));
        assert!(!eq(js(json!([1, 2])), js(json!([2, 1]))));
        assert!(eq(js(json!([])), js(json!([]))));
    }

    #[test]
    fn test_array_vs_object() {
        assert!(!eq(js(json!([1, 2])), js(json!({"0": 1, "1": 2}))));
        assert!(!eq(js(json!({})), js(json!([]))));
    }

    // Objects
    #[test]
    fn test_objects() {
        assert!(eq(js(json!({"a": 1, "b": 2})), js(json!({"b": 2, "a": 1}))));
        assert!(!eq(js(json!({"a": 1})), js(json!({"a": 1, "b": 2}))));
        assert!(!eq(js(json!({"a": 1, "c": 3})), js(json!({"a": 1, "d": 3}))));
        assert!(eq(js(json!({"a": [{"b": "c"}]})), js(json!({"a": [{"b": "c"}]}))));
    }

    #[test]
    fn test_undefined_property_is_still_a_property() {
        let a = Object::new().with("a", Value::Undefined);
        assert!(!eq(a.clone(), Object::new()));
        assert!(!eq(Object::new().with("b", Value::Undefined), a));
    }

    #[test]
    fn test_inherited_properties_count() {
        let base = Object::new().with("a", 1);
        let inherited = Object::with_prototype(base).with("b", 2);
        let flat = Object::new().with("a", 1).with("b", 2);
        assert!(eq(inherited.clone(), flat.clone()));
        assert!(eq(flat, inherited.clone()));
        assert!(!eq(inherited, Object::new().with("b", 2)));
    }

    #[test]
    fn test_shadowed_property_uses_nearest_value() {
        let base = Object::new().with("a", 1);
        let shadowing = Object::with_prototype(base).with("a", 2);
        assert!(eq(shadowing.clone(), Object::new().with("a", 2)));
        assert!(!eq(shadowing, Object::new().with("a", 1)));
    }

    // Dates
    #[test]
    fn test_dates() {
        assert!(eq(Date::from_millis(1000), Date::from_millis(1000)));
        assert!(!eq(Date::from_millis(1000), Date::from_millis(1001)));
        assert!(!eq(Date::from_millis(0), Object::new()));
        assert!(!eq(Object::new(), Date::from_millis(0)));
        assert!(!eq(Date::from_millis(0), 0));
    }

    // Iterables
    #[test]
    fn test_sets() {
        let a: Set = [Value::from(1), js(json!({"x": 1}))].into_iter().collect();
        let b: Set = [Value::from(1), js(json!({"x": 1}))].into_iter().collect();
        let reordered: Set = [js(json!({"x": 1})), Value::from(1)].into_iter().collect();
        assert!(eq(a.clone(), b));
        assert!(!eq(a, reordered));
    }

    #[test]
    fn test_maps() {
        let a: Map = [("k", 1), ("j", 2)].into_iter().collect();
        let b: Map = [("k", 1), ("j", 2)].into_iter().collect();
        let c: Map = [("k", 1), ("j", 3)].into_iter().collect();
        assert!(eq(a.clone(), b));
        assert!(!eq(a, c));
    }

    #[test]
    fn test_iterables_compare_across_types() {
        let set: Set = [Value::from(1), Value::from(2)].into_iter().collect();
        let it = Iterable::from_fn(|| vec![Value::from(1), Value::from(2)]);
        assert!(eq(set, it));

        let map: Map = [(1, 2)].into_iter().collect();
        let pairs: Set = [js(json!([1, 2]))].into_iter().collect();
        assert!(eq(map, pairs));
    }

    #[test]
    fn test_iterable_vs_non_iterable() {
        let empty_set = Set::new();
        assert!(!eq(empty_set.clone(), Object::new()));
        assert!(!eq(Object::new(), empty_set.clone()));
        assert!(!eq(empty_set, Array::new()));
    }

    // Cycles
    #[test]
    fn test_self_referencing_objects() {
        let a = Object::new();
        a.set("x", a.clone());
        let b = Object::new();
        b.set("x", b.clone());
        assert!(eq(a.clone(), b));
        assert!(eq(a.clone(), a));
    }

    #[test]
    fn test_self_referencing_arrays() {
        let a = Array::new();
        a.push(1);
        a.push(a.clone());
        let b = Array::new();
        b.push(1);
        b.push(b.clone());
        assert!(eq(a, b));
    }

    #[test]
    fn test_cycle_optimism_is_unsound() {
        // a -> {v: 1, next: a}, b -> {v: 1, next: {v: 2, next: b}}
        let a = Object::new().with("v", 1);
        a.set("next", a.clone());
        let b = Object::new().with("v", 1);
        let b2 = Object::new().with("v", 2).with("next", b.clone());
        b.set("next", b2);
        assert!(eq(a, b));
    }

    #[test]
    fn test_iterable_mutating_its_array() {
        let a = Array::new();
        let owner = a.clone();
        a.push(Iterable::from_fn(move || {
            owner.push(0);
            Vec::new()
        }));
        let b = Array::from(vec![Value::from(Iterable::from_fn(Vec::new))]);

        assert!(eq(a.clone(), b));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_cycle_through_map() {
        let a = Map::new();
        a.set("self", a.clone());
        let b = Map::new();
        b.set("self", b.clone());
        assert!(eq(a, b));
    }

    #[test]
    fn test_shared_subtree_compared_once() {
        // The guard is never cleared, so the second visit of `shared` is
        // taken as equal without looking at `{"k": 2}`.
        let shared = Object::new().with("k", 1);
        let a = Array::from(vec![Value::from(shared.clone()), Value::from(shared)]);
        let b = js(json!([{"k": 1}, {"k": 2}]));
        assert!(eq(a.clone(), b.clone()));
        assert!(eq(b, a));
    }

    // Options
    #[test]
    fn test_max_depth_degrades_to_identity() {
        let options = DeepEqualsOptions::default().with_max_depth(1);
        let shallow_a = js(json!([[1]]));
        let shallow_b = js(json!([[1]]));
        assert!(deep_equals_with(&shallow_a, &shallow_b, &options));

        let deep_a = js(json!([[[1]]]));
        let deep_b = js(json!([[[1]]]));
        assert!(!deep_equals_with(&deep_a, &deep_b, &options));
        assert!(deep_equals_with(&deep_a, &deep_a, &options));
        assert!(deep_equals(&deep_a, &deep_b));
    }

    #[test]
    fn test_max_depth_zero_still_compares_top_level() {
        let options = DeepEqualsOptions::default().with_max_depth(0);
        assert!(deep_equals_with(&js(json!([1, 2])), &js(json!([1, 2])), &options));
        assert!(!deep_equals_with(&js(json!([{}])), &js(json!([{}])), &options));
    }
}

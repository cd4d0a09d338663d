//! Shared sequence and collection handles.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::Value;

/// A shared, growable array of values.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Store `value` at `index`, padding with `undefined` when the array
    /// is shorter than `index`.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value.into();
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn items(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(items)))
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// A shared, insertion-ordered set of values.
///
/// Membership uses [`Value::same_value_zero`], so composites are distinct
/// unless they are the same handle.
#[derive(Clone, Default)]
pub struct Set(Rc<RefCell<Vec<Value>>>);

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`, returning `false` if it was already present.
    pub fn add(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.has(&value) {
            return false;
        }
        self.0.borrow_mut().push(value);
        true
    }

    pub fn has(&self, value: &Value) -> bool {
        self.0.borrow().iter().any(|v| v.same_value_zero(value))
    }

    pub fn delete(&self, value: &Value) -> bool {
        let mut items = self.0.borrow_mut();
        match items.iter().position(|v| v.same_value_zero(value)) {
            Some(pos) => {
                items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Members in insertion order.
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &Set) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl FromIterator<Value> for Set {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let set = Set::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

/// A shared, insertion-ordered map with arbitrary keys.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<Vec<(Value, Value)>>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`. A replaced entry keeps its
    /// original position.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        match entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| k.same_value_zero(key))
            .map(|(_, v)| v.clone())
    }

    pub fn has(&self, key: &Value) -> bool {
        self.0.borrow().iter().any(|(k, _)| k.same_value_zero(key))
    }

    pub fn delete(&self, key: &Value) -> bool {
        let mut entries = self.0.borrow_mut();
        match entries.iter().position(|(k, _)| k.same_value_zero(key)) {
            Some(pos) => {
                entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &Map) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Map::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// Something that can produce an ordered sequence of values on demand.
///
/// Implemented for any `Fn() -> Vec<Value>` closure.
pub trait IterableSource {
    fn values(&self) -> Vec<Value>;
}

impl<F> IterableSource for F
where
    F: Fn() -> Vec<Value>,
{
    fn values(&self) -> Vec<Value> {
        self()
    }
}

/// A user-defined iterable value.
///
/// ```
/// use object_util::{Iterable, Value};
///
/// let evens = Iterable::from_fn(|| (0..3).map(|i| Value::from(i * 2)).collect());
/// assert_eq!(evens.values().len(), 3);
/// ```
#[derive(Clone)]
pub struct Iterable(Rc<dyn IterableSource>);

impl Iterable {
    pub fn new(source: impl IterableSource + 'static) -> Self {
        Iterable(Rc::new(source))
    }

    /// Create an iterable from a closure producing its values.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> Vec<Value> + 'static,
    {
        Iterable(Rc::new(f))
    }

    pub fn values(&self) -> Vec<Value> {
        self.0.values()
    }

    pub fn ptr_eq(&self, other: &Iterable) -> bool {
        self.address() == other.address()
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_set_pads_with_undefined() {
        let arr = Array::new();
        arr.set(2, "c");
        assert_eq!(arr.len(), 3);
        assert!(arr.get(0).is_some_and(|v| v.is_undefined()));
        assert_eq!(arr.get(2).and_then(|v| v.as_str().map(String::from)), Some("c".to_string()));
    }

    #[test]
    fn test_array_clone_shares_storage() {
        let a = Array::new();
        let b = a.clone();
        b.push(1);
        assert_eq!(a.len(), 1);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_set_dedupes_primitives() {
        let set = Set::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert!(set.add(f64::NAN));
        assert!(!set.add(f64::NAN));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_keeps_distinct_composites() {
        let set = Set::new();
        set.add(Array::new());
        set.add(Array::new());
        assert_eq!(set.len(), 2);
        assert!(!set.delete(&Value::from(1)));
    }

    #[test]
    fn test_map_replaces_in_place() {
        let map: Map = [("a", 1), ("b", 2)].into_iter().collect();
        map.set("a", 3);
        let entries = map.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.as_str(), Some("a"));
        assert_eq!(entries[0].1.as_f64(), Some(3.0));
        assert!(map.delete(&Value::from("b")));
        assert!(!map.has(&Value::from("b")));
    }

    #[test]
    fn test_iterable_from_closure() {
        let it = Iterable::from_fn(|| vec![Value::from(1), Value::from(2)]);
        assert_eq!(it.values().len(), 2);
        assert!(it.ptr_eq(&it.clone()));
    }
}

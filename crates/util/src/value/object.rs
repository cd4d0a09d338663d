//! Structured values with a prototype chain.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use super::Value;
use crate::error::ValueError;

#[derive(Default)]
struct ObjectData {
    properties: IndexMap<String, Value>,
    prototype: Option<Object>,
}

/// A shared object with named properties and an optional prototype.
///
/// Property reads fall back to the prototype chain; writes always land on
/// the object itself.
///
/// ```
/// use object_util::Object;
///
/// let base = Object::new().with("kind", "shape");
/// let square = Object::with_prototype(base).with("sides", 4);
///
/// assert_eq!(square.get("kind").and_then(|v| v.as_str().map(String::from)), Some("shape".into()));
/// assert!(!square.has_own("kind"));
/// ```
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: Object) -> Self {
        Object(Rc::new(RefCell::new(ObjectData {
            properties: IndexMap::new(),
            prototype: Some(prototype),
        })))
    }

    /// Builder-style [`Object::set`].
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an own property, returning the previous own value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().properties.insert(key.into(), value.into())
    }

    /// Remove an own property, keeping the order of the remaining ones.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().properties.shift_remove(key)
    }

    /// Look up a property on the object or anywhere on its prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if let Some(value) = obj.get_own(key) {
                return Some(value);
            }
            current = obj.prototype();
        }
        None
    }

    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.0.borrow().properties.get(key).cloned()
    }

    pub fn has(&self, key: &str) -> bool {
        self.chain().iter().any(|obj| obj.has_own(key))
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.0.borrow().properties.contains_key(key)
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().properties.is_empty()
    }

    pub fn own_keys(&self) -> Vec<String> {
        self.0.borrow().properties.keys().cloned().collect()
    }

    /// Own properties in insertion order.
    pub fn own_entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn prototype(&self) -> Option<Object> {
        self.0.borrow().prototype.clone()
    }

    /// Replace the prototype. Fails if `self` is already on the chain of
    /// `prototype`.
    pub fn set_prototype(&self, prototype: Option<Object>) -> Result<(), ValueError> {
        if let Some(proto) = &prototype {
            if proto.chain().iter().any(|obj| obj.ptr_eq(self)) {
                return Err(ValueError::CyclicPrototype);
            }
        }
        self.0.borrow_mut().prototype = prototype;
        Ok(())
    }

    /// The object followed by each of its prototypes, nearest first.
    pub fn chain(&self) -> Vec<Object> {
        let mut chain = vec![self.clone()];
        while let Some(proto) = chain.last().and_then(Object::prototype) {
            chain.push(proto);
        }
        chain
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let obj = Object::new();
        for (key, value) in iter {
            obj.set(key, value);
        }
        obj
    }
}

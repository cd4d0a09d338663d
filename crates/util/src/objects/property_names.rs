use indexmap::IndexSet;

use crate::value::Object;

/// Collect every property name reachable from `object`, including the
/// names inherited through its prototype chain.
///
/// Own names come first, followed by each prototype's names in chain
/// order. Names shadowed further down the chain appear once.
///
/// # Examples
///
/// ```
/// use object_util::{property_names, Object};
///
/// let base = Object::new().with("a", 1).with("b", 2);
/// let obj = Object::with_prototype(base).with("c", 3).with("a", 0);
///
/// let names: Vec<_> = property_names(&obj).into_iter().collect();
/// assert_eq!(names, ["c", "a", "b"]);
/// ```
pub fn property_names(object: &Object) -> IndexSet<String> {
    let mut names = IndexSet::new();
    for obj in object.chain() {
        names.extend(obj.own_keys());
    }
    names
}

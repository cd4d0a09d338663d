//! object-util - Dynamic object values and cycle-tolerant deep equality
//!
//! This crate provides a loosely typed [`Value`] model with shared
//! composites (arrays, sets, maps, objects with prototypes), a few object
//! helpers, and [`deep_equals`], a structural equality check that
//! terminates on cyclic values.

pub mod deep_equals;
pub mod error;
pub mod objects;
pub mod value;

// Re-exports for convenience
pub use deep_equals::{deep_equals, deep_equals_with, DeepEqualsOptions};
pub use error::ValueError;
pub use objects::{
    add_prefix, add_prefix_json, object_filter, object_filter_json, object_map, object_map_json,
    property_names,
};
pub use value::{Array, Date, Function, Iterable, IterableSource, Kind, Map, Object, Set, Symbol, Value};

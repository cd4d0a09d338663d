//! Helpers for building and inspecting objects.
//!
//! Each helper comes in two flavours: one for [`Object`](crate::Object)
//! and a `_json` variant for `serde_json::Map`.

mod add_prefix;
mod object_filter;
mod object_map;
mod property_names;

pub use add_prefix::{add_prefix, add_prefix_json};
pub use object_filter::{object_filter, object_filter_json};
pub use object_map::{object_map, object_map_json};
pub use property_names::property_names;

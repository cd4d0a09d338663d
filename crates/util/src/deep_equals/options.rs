use serde::{Deserialize, Serialize};

/// Settings for [`deep_equals_with`](super::deep_equals_with).
///
/// ```
/// use object_util::DeepEqualsOptions;
///
/// let options: DeepEqualsOptions = serde_json::from_str(r#"{"max_depth": 64}"#).unwrap();
/// assert_eq!(options.max_depth, Some(64));
///
/// let defaults: DeepEqualsOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, DeepEqualsOptions::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepEqualsOptions {
    /// Deepest composite nesting level compared structurally. The top-level
    /// pair sits at depth 0. Composites nested deeper than this are only
    /// equal when they are the same handle. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl DeepEqualsOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

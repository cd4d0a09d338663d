use thiserror::Error;

use crate::value::Kind;

/// Errors raised by fallible value operations.
///
/// Equality checks never fail; these only come from building or
/// exporting values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("cyclic value cannot be represented as JSON")]
    Cyclic,
    #[error("{kind} value cannot be represented as JSON")]
    Unrepresentable { kind: Kind },
    #[error("non-finite number {0} cannot be represented as JSON")]
    NonFiniteNumber(f64),
    #[error("prototype assignment would create a cycle")]
    CyclicPrototype,
}

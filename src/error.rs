//! Error types.
//!
//! The registry reports misses as `None`, never as errors. `ValueError` is
//! for callers that want a reason: parsing a tag, or unwrapping a
//! `DataValue` into a concrete variant.

use crate::values::ValueKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("unknown value kind tag: {0:?}")]
    UnknownKind(String),

    #[error("expected a {expected} but found a {found}")]
    KindMismatch { expected: ValueKind, found: ValueKind },
}

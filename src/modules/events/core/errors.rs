use crate::modules::events::core::kind::{EventCategory, EventKind};
use thiserror::Error;

/// Reasons a single dispatch is refused. None of them is transient.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown event category: {0}")]
    UnknownCategory(String),

    #[error("event kind {kind} is not a {category} event")]
    CategoryLeafMismatch {
        kind: EventKind,
        category: EventCategory,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

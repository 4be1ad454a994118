// Labeled field values produced by one successful dispatch.
//
// Purpose
// - The handoff shape between leaf handlers and a render sink.
//
// Ordering
// - Envelope fields first (process id, timestamp), then the category identifier,
//   then the leaf-specific value. Leaf handlers are the only producers.

use crate::modules::events::core::kind::{EventCategory, EventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldLabel {
    ProcessId,
    Timestamp,
    SessionId,
    UserId,
    SpecificData,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderedField {
    pub label: FieldLabel,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderedFields {
    pub kind: EventKind,
    pub fields: Vec<RenderedField>,
}

impl RenderedField {
    pub fn new(label: FieldLabel, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl RenderedFields {
    pub fn category(&self) -> EventCategory {
        self.kind.category()
    }

    pub fn values(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|field| field.value.as_str())
            .collect()
    }

    pub fn labels(&self) -> Vec<FieldLabel> {
        self.fields.iter().map(|field| field.label).collect()
    }

    pub fn value_of(&self, label: FieldLabel) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

// Discriminator for records that arrive untrusted.
//
// Purpose
// - Resolve a raw integer kind tag, with an optional declared category, into a typed record.
//
// Responsibilities
// - Unknown kind tags and unknown category names are UnknownCategory.
// - A declared category that disagrees with the kind is CategoryLeafMismatch.
// - Malformed frames are InvalidInput.
//
// Boundaries
// - Typed records never pass through here. Their category cannot disagree with their kind.

use crate::modules::events::core::errors::DispatchError;
use crate::modules::events::core::kind::{EventCategory, EventKind, category_of};
use crate::modules::events::core::record::EventRecord;
use crate::shared::core::primitives::{ProcessId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawEventRecord {
    pub kind: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub process_id: ProcessId,
    pub timestamp: Timestamp,
    pub identifier: String,
    pub specific_data: i32,
}

impl TryFrom<i32> for EventKind {
    type Error = DispatchError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| DispatchError::UnknownCategory(format!("kind tag {tag}")))
    }
}

impl RawEventRecord {
    pub fn from_json(frame: &str) -> Result<Self, DispatchError> {
        if frame.trim().is_empty() {
            return Err(DispatchError::InvalidInput("empty event frame".into()));
        }
        serde_json::from_str(frame)
            .map_err(|e| DispatchError::InvalidInput(e.to_string()))
    }

    pub fn from_record(record: &EventRecord) -> Self {
        let kind = record.kind();
        Self {
            kind: kind.tag(),
            category: Some(kind.category().to_string()),
            process_id: record.envelope().process_id,
            timestamp: record.envelope().timestamp,
            identifier: record.category_identifier().to_string(),
            specific_data: record.extra().specific_data,
        }
    }
}

pub fn discriminate(raw: &RawEventRecord) -> Result<EventKind, DispatchError> {
    let kind = EventKind::try_from(raw.kind)?;
    if let Some(name) = raw.category.as_deref() {
        let declared = EventCategory::from_name(name)
            .ok_or_else(|| DispatchError::UnknownCategory(name.to_string()))?;
        if declared != category_of(kind) {
            return Err(DispatchError::CategoryLeafMismatch {
                kind,
                category: declared,
            });
        }
    }
    Ok(kind)
}

pub fn decode(raw: &RawEventRecord) -> Result<EventRecord, DispatchError> {
    let kind = discriminate(raw)?;
    Ok(EventRecord::new(
        kind,
        raw.process_id,
        raw.timestamp,
        raw.identifier.as_str(),
        raw.specific_data,
    ))
}

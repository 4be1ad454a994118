// Test-only decoder for the text report layout written by StreamRenderSink.

use crate::modules::events::adapters::outbound::stream_sink::leaf_phrase;
use crate::modules::events::core::kind::{EventCategory, EventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedReport {
    pub category: String,
    pub leaf: String,
    pub values: Vec<String>,
}

pub fn decode_text_report(text: &str) -> Option<DecodedReport> {
    let mut category = None;
    let mut leaf = None;
    let mut values = Vec::new();

    for line in text.lines() {
        let value = if let Some(v) = line.strip_prefix("PID is ") {
            v
        } else if let Some(v) = line.strip_prefix("Timestamp is ") {
            v
        } else if let Some(v) = line.strip_prefix("Session id is ") {
            category = Some(EventCategory::Session);
            v
        } else if let Some(v) = line.strip_prefix("User is ") {
            category = Some(EventCategory::Auth);
            v
        } else {
            let rest = line.strip_prefix("Specific data for ")?;
            let (phrase, v) = rest.split_once(" event: ")?;
            leaf = EventKind::ALL
                .into_iter()
                .find(|kind| leaf_phrase(*kind) == phrase);
            v
        };
        values.push(value.to_string());
    }

    Some(DecodedReport {
        category: category?.to_string(),
        leaf: leaf?.to_string(),
        values,
    })
}

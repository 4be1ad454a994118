// RenderSink that writes to any byte stream.
//
// Formats
// - Text: one "<label> is <value>" line per field, the human-readable report layout.
// - JsonLines: one JSON object per dispatch.
//
// Responsibilities
// - Write and flush a whole record under one lock, so concurrent emits never interleave lines.
//
// Blocking
// - The writer is a std::io::Write and the lock is a std Mutex. An emit blocks the calling
//   worker thread for one write and flush. No lock is held across an await point.

use crate::modules::events::core::kind::EventKind;
use crate::modules::events::core::ports::{RenderSink, SinkError};
use crate::modules::events::core::rendered::{FieldLabel, RenderedFields};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Text,
    JsonLines,
}

pub fn leaf_phrase(kind: EventKind) -> &'static str {
    match kind {
        EventKind::SessionStart => "session start",
        EventKind::SessionEnd => "session end",
        EventKind::AuthLogin => "auth login",
        EventKind::AuthLogout => "auth logout",
    }
}

pub fn render_text(rendered: &RenderedFields) -> String {
    let mut out = String::new();
    for field in &rendered.fields {
        let line = match field.label {
            FieldLabel::ProcessId => format!("PID is {}", field.value),
            FieldLabel::Timestamp => format!("Timestamp is {}", field.value),
            FieldLabel::SessionId => format!("Session id is {}", field.value),
            FieldLabel::UserId => format!("User is {}", field.value),
            FieldLabel::SpecificData => format!(
                "Specific data for {} event: {}",
                leaf_phrase(rendered.kind),
                field.value
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub struct StreamRenderSink<W: Write + Send> {
    writer: Mutex<W>,
    format: RenderFormat,
    closed: AtomicBool,
}

impl<W: Write + Send> StreamRenderSink<W> {
    pub fn new(writer: W, format: RenderFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
            closed: AtomicBool::new(false),
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn encode(&self, rendered: &RenderedFields) -> Result<String, SinkError> {
        match self.format {
            RenderFormat::Text => Ok(render_text(rendered)),
            RenderFormat::JsonLines => {
                let mut line = serde_json::to_string(rendered)?;
                line.push('\n');
                Ok(line)
            }
        }
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> RenderSink for StreamRenderSink<W> {
    fn is_open(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
    }

    async fn emit(&self, rendered: &RenderedFields) -> Result<(), SinkError> {
        if !self.is_open() {
            return Err(SinkError::Closed);
        }
        let encoded = self.encode(rendered)?;
        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writer.write_all(encoded.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

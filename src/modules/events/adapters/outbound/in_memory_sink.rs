// In memory implementation of the RenderSink port.
//
// Purpose
// - Support use case tests and local runs without any output stream.
//
// Responsibilities
// - Keep every emitted row in arrival order.
// - Refuse output after `close`, the way an unusable stream would.

use crate::modules::events::core::ports::{RenderSink, SinkError};
use crate::modules::events::core::rendered::RenderedFields;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

pub struct InMemoryRenderSink {
    rows: Mutex<Vec<RenderedFields>>,
    closed: AtomicBool,
}

impl Default for InMemoryRenderSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRenderSink {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub async fn rows(&self) -> Vec<RenderedFields> {
        self.rows.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl RenderSink for InMemoryRenderSink {
    fn is_open(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
    }

    async fn emit(&self, rendered: &RenderedFields) -> Result<(), SinkError> {
        if !self.is_open() {
            return Err(SinkError::Closed);
        }
        self.rows.lock().await.push(rendered.clone());
        Ok(())
    }
}

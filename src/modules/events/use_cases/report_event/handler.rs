// Report use case: dispatch one event and hand the result to the render sink.
//
// Responsibilities
// - Refuse work up front when the sink cannot accept output.
// - Emit exactly once per successful dispatch, never on failure.
// - Log the outcome. The dispatch core itself stays silent.

use crate::modules::events::core::errors::DispatchError;
use crate::modules::events::core::ports::{RenderSink, SinkError};
use crate::modules::events::core::record::EventRecord;
use crate::modules::events::core::rendered::RenderedFields;
use crate::modules::events::dispatch::discriminator::{RawEventRecord, decode};
use crate::modules::events::dispatch::top::dispatch;
use std::sync::Arc;
use thiserror::Error;

const SINK_NOT_OPEN: &str = "render sink is not accepting output";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

pub struct ReportEventHandler<TSink>
where
    TSink: RenderSink + 'static,
{
    sink: Arc<TSink>,
}

impl<TSink> Clone for ReportEventHandler<TSink>
where
    TSink: RenderSink + 'static,
{
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
        }
    }
}

impl<TSink> ReportEventHandler<TSink>
where
    TSink: RenderSink + 'static,
{
    pub fn new(sink: Arc<TSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, record: &EventRecord) -> Result<RenderedFields, ReportError> {
        self.ensure_sink_open()?;
        self.report(record).await
    }

    pub async fn handle_raw(&self, raw: &RawEventRecord) -> Result<RenderedFields, ReportError> {
        self.ensure_sink_open()?;
        self.report_raw(raw).await
    }

    pub async fn handle_frame(&self, frame: &str) -> Result<RenderedFields, ReportError> {
        self.ensure_sink_open()?;
        let raw = RawEventRecord::from_json(frame).inspect_err(|e| {
            tracing::warn!(error = %e, "event frame rejected");
        })?;
        self.report_raw(&raw).await
    }

    async fn report_raw(&self, raw: &RawEventRecord) -> Result<RenderedFields, ReportError> {
        let record = decode(raw).inspect_err(|e| {
            tracing::warn!(kind_tag = raw.kind, error = %e, "event rejected");
        })?;
        self.report(&record).await
    }

    async fn report(&self, record: &EventRecord) -> Result<RenderedFields, ReportError> {
        let rendered = dispatch(record);
        self.sink.emit(&rendered).await?;
        tracing::debug!(
            kind = %rendered.kind,
            category = %rendered.category(),
            process_id = record.envelope().process_id,
            "event reported"
        );
        Ok(rendered)
    }

    fn ensure_sink_open(&self) -> Result<(), DispatchError> {
        if self.sink.is_open() {
            Ok(())
        } else {
            Err(DispatchError::InvalidInput(SINK_NOT_OPEN.into()))
        }
    }
}

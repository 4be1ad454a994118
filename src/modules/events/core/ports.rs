// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the render sink that receives rendered fields after a successful dispatch.
//
// Boundaries
// - No concrete output here. Adapters implement the trait in the adapters layer.
// - The sink owns its own synchronization. Dispatch never touches it.

use crate::modules::events::core::rendered::RenderedFields;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("render sink is closed")]
    Closed,

    #[error("render sink lock poisoned by a panicked writer")]
    Poisoned,

    #[error("render sink write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("render sink encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait RenderSink: Send + Sync {
    /// Whether the sink can currently accept output.
    fn is_open(&self) -> bool;

    async fn emit(&self, rendered: &RenderedFields) -> Result<(), SinkError>;
}

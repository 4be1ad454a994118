use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use ops_events::modules::events::adapters::outbound::stream_sink::StreamRenderSink;
use ops_events::modules::events::core::record::{Envelope, EventRecord};
use ops_events::modules::events::use_cases::report_event::handler::ReportEventHandler;
use ops_events::shell::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let sink = Arc::new(StreamRenderSink::new(std::io::stdout(), config.output));
    let handler = ReportEventHandler::new(sink);

    // Sample events
    let session = Envelope::now(9876);
    let auth = Envelope::now(6789);
    let events = [
        EventRecord::session_start(session.process_id, session.timestamp, "session123", 42),
        EventRecord::auth_login(auth.process_id, auth.timestamp, "Fred", 42),
    ];

    for event in &events {
        handler.handle(event).await?;
    }
    tracing::info!(count = events.len(), "sample events reported");
    Ok(())
}

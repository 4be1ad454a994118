// Top dispatcher: the single entry point for routing an event.
//
// Purpose
// - Resolve the category, forward to that category's dispatcher, return the handler output.
//
// Boundaries
// - Synchronous and stateless. Every call stands alone.
// - Typed records cannot fail. Raw records fail before any handler runs.

use crate::modules::events::core::errors::DispatchError;
use crate::modules::events::core::record::{EventPayload, EventRecord};
use crate::modules::events::core::rendered::RenderedFields;
use crate::modules::events::dispatch::category::{dispatch_auth, dispatch_session};
use crate::modules::events::dispatch::discriminator::{RawEventRecord, decode};
use crate::modules::events::dispatch::handler::EventHandler;
use crate::modules::events::dispatch::leaf_handlers::FieldRenderer;

pub fn dispatch_with<H: EventHandler>(record: &EventRecord, handler: &mut H) -> H::Output {
    let envelope = record.envelope();
    match record.payload() {
        EventPayload::Session(event) => dispatch_session(envelope, event, handler),
        EventPayload::Auth(event) => dispatch_auth(envelope, event, handler),
    }
}

pub fn dispatch(record: &EventRecord) -> RenderedFields {
    dispatch_with(record, &mut FieldRenderer)
}

pub fn dispatch_raw(raw: &RawEventRecord) -> Result<RenderedFields, DispatchError> {
    let record = decode(raw)?;
    Ok(dispatch(&record))
}

pub fn dispatch_raw_with<H: EventHandler>(
    raw: &RawEventRecord,
    handler: &mut H,
) -> Result<H::Output, DispatchError> {
    let record = decode(raw)?;
    Ok(dispatch_with(&record, handler))
}

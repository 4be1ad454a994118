// Leaf handlers: one pure function per leaf kind.
//
// Purpose
// - Turn the envelope, category fields, and leaf data of one record into rendered fields.
//
// Boundaries
// - No side effects. Handing the result to a sink is the caller's job.
// - No handler knows about any other leaf kind.

use crate::modules::events::core::kind::EventKind;
use crate::modules::events::core::record::{
    AuthFields, AuthLogin, AuthLogout, Envelope, SessionEnd, SessionFields, SessionStart,
};
use crate::modules::events::core::rendered::{FieldLabel, RenderedField, RenderedFields};
use crate::modules::events::dispatch::handler::EventHandler;
use crate::shared::core::primitives::format_timestamp;

pub fn render_session_start(
    envelope: &Envelope,
    session: &SessionFields,
    leaf: &SessionStart,
) -> RenderedFields {
    render(
        EventKind::SessionStart,
        envelope,
        session_field(session),
        leaf.extra.specific_data,
    )
}

pub fn render_session_end(
    envelope: &Envelope,
    session: &SessionFields,
    leaf: &SessionEnd,
) -> RenderedFields {
    render(
        EventKind::SessionEnd,
        envelope,
        session_field(session),
        leaf.extra.specific_data,
    )
}

pub fn render_auth_login(
    envelope: &Envelope,
    auth: &AuthFields,
    leaf: &AuthLogin,
) -> RenderedFields {
    render(
        EventKind::AuthLogin,
        envelope,
        user_field(auth),
        leaf.extra.specific_data,
    )
}

pub fn render_auth_logout(
    envelope: &Envelope,
    auth: &AuthFields,
    leaf: &AuthLogout,
) -> RenderedFields {
    render(
        EventKind::AuthLogout,
        envelope,
        user_field(auth),
        leaf.extra.specific_data,
    )
}

fn session_field(session: &SessionFields) -> RenderedField {
    RenderedField::new(FieldLabel::SessionId, session.session_id.as_str())
}

fn user_field(auth: &AuthFields) -> RenderedField {
    RenderedField::new(FieldLabel::UserId, auth.user_id.as_str())
}

fn render(
    kind: EventKind,
    envelope: &Envelope,
    category_field: RenderedField,
    specific_data: i32,
) -> RenderedFields {
    let process_id = envelope.process_id.to_string();
    let timestamp = format_timestamp(&envelope.timestamp);
    let specific_data = specific_data.to_string();
    RenderedFields {
        kind,
        fields: vec![
            RenderedField::new(FieldLabel::ProcessId, process_id),
            RenderedField::new(FieldLabel::Timestamp, timestamp),
            category_field,
            RenderedField::new(FieldLabel::SpecificData, specific_data),
        ],
    }
}

/// Default handler set: routes each leaf to its render function.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldRenderer;

impl EventHandler for FieldRenderer {
    type Output = RenderedFields;

    fn session_start(
        &mut self,
        envelope: &Envelope,
        session: &SessionFields,
        leaf: &SessionStart,
    ) -> RenderedFields {
        render_session_start(envelope, session, leaf)
    }

    fn session_end(
        &mut self,
        envelope: &Envelope,
        session: &SessionFields,
        leaf: &SessionEnd,
    ) -> RenderedFields {
        render_session_end(envelope, session, leaf)
    }

    fn auth_login(
        &mut self,
        envelope: &Envelope,
        auth: &AuthFields,
        leaf: &AuthLogin,
    ) -> RenderedFields {
        render_auth_login(envelope, auth, leaf)
    }

    fn auth_logout(
        &mut self,
        envelope: &Envelope,
        auth: &AuthFields,
        leaf: &AuthLogout,
    ) -> RenderedFields {
        render_auth_logout(envelope, auth, leaf)
    }
}

// Recording EventHandler used to observe which leaf handler ran.

use crate::modules::events::core::kind::EventKind;
use crate::modules::events::core::record::{
    AuthFields, AuthLogin, AuthLogout, Envelope, SessionEnd, SessionFields, SessionStart,
};
use crate::modules::events::dispatch::handler::EventHandler;

#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub calls: Vec<(EventKind, String)>,
}

impl RecordingHandler {
    pub fn count(&self, kind: EventKind) -> usize {
        self.calls
            .iter()
            .filter(|(called, _)| *called == kind)
            .count()
    }

    fn record(&mut self, kind: EventKind, identifier: &str) -> EventKind {
        self.calls.push((kind, identifier.to_string()));
        kind
    }
}

impl EventHandler for RecordingHandler {
    type Output = EventKind;

    fn session_start(
        &mut self,
        _: &Envelope,
        session: &SessionFields,
        _: &SessionStart,
    ) -> EventKind {
        self.record(EventKind::SessionStart, &session.session_id)
    }

    fn session_end(&mut self, _: &Envelope, session: &SessionFields, _: &SessionEnd) -> EventKind {
        self.record(EventKind::SessionEnd, &session.session_id)
    }

    fn auth_login(&mut self, _: &Envelope, auth: &AuthFields, _: &AuthLogin) -> EventKind {
        self.record(EventKind::AuthLogin, &auth.user_id)
    }

    fn auth_logout(&mut self, _: &Envelope, auth: &AuthFields, _: &AuthLogout) -> EventKind {
        self.record(EventKind::AuthLogout, &auth.user_id)
    }
}

// Event record: envelope plus a two-level closed tagged union.
//
// Purpose
// - Hold the common envelope, the category fields, and the leaf data of one event.
// - Make a record whose category disagrees with its leaf impossible to build.
//
// Responsibilities
// - One constructor per leaf kind. Fields are private so the kind is fixed at construction.
// - Derive kind and category from the payload shape.
//
// Boundaries
// - Pure data. No dispatch, no rendering, no input or output.

use crate::modules::events::core::kind::{EventCategory, EventKind};
use crate::shared::core::primitives::{ProcessId, Timestamp};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub process_id: ProcessId,
    pub timestamp: Timestamp,
}

impl Envelope {
    pub fn new(process_id: ProcessId, timestamp: Timestamp) -> Self {
        Self {
            process_id,
            timestamp,
        }
    }

    pub fn now(process_id: ProcessId) -> Self {
        Self::new(process_id, Utc::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFields {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFields {
    pub user_id: String,
}

/// Opaque per-leaf payload. Carries no meaning of its own yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafExtra {
    pub specific_data: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    pub extra: LeafExtra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnd {
    pub extra: LeafExtra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLogin {
    pub extra: LeafExtra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLogout {
    pub extra: LeafExtra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLeaf {
    Start(SessionStart),
    End(SessionEnd),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthLeaf {
    Login(AuthLogin),
    Logout(AuthLogout),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub session: SessionFields,
    pub leaf: SessionLeaf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEvent {
    pub auth: AuthFields,
    pub leaf: AuthLeaf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    Session(SessionEvent),
    Auth(AuthEvent),
}

impl SessionEvent {
    pub fn kind(&self) -> EventKind {
        match self.leaf {
            SessionLeaf::Start(_) => EventKind::SessionStart,
            SessionLeaf::End(_) => EventKind::SessionEnd,
        }
    }

    pub fn extra(&self) -> LeafExtra {
        match &self.leaf {
            SessionLeaf::Start(leaf) => leaf.extra,
            SessionLeaf::End(leaf) => leaf.extra,
        }
    }
}

impl AuthEvent {
    pub fn kind(&self) -> EventKind {
        match self.leaf {
            AuthLeaf::Login(_) => EventKind::AuthLogin,
            AuthLeaf::Logout(_) => EventKind::AuthLogout,
        }
    }

    pub fn extra(&self) -> LeafExtra {
        match &self.leaf {
            AuthLeaf::Login(leaf) => leaf.extra,
            AuthLeaf::Logout(leaf) => leaf.extra,
        }
    }
}

impl EventPayload {
    /// Category as encoded by the outer variant.
    pub fn category(&self) -> EventCategory {
        match self {
            EventPayload::Session(_) => EventCategory::Session,
            EventPayload::Auth(_) => EventCategory::Auth,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::Session(event) => event.kind(),
            EventPayload::Auth(event) => event.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    envelope: Envelope,
    payload: EventPayload,
}

impl EventRecord {
    pub fn from_parts(envelope: Envelope, payload: EventPayload) -> Self {
        Self { envelope, payload }
    }

    /// Builds a record of any kind from the common constructor arguments.
    pub fn new(
        kind: EventKind,
        process_id: ProcessId,
        timestamp: Timestamp,
        identifier: impl Into<String>,
        specific_data: i32,
    ) -> Self {
        match kind {
            EventKind::SessionStart => {
                Self::session_start(process_id, timestamp, identifier, specific_data)
            }
            EventKind::SessionEnd => {
                Self::session_end(process_id, timestamp, identifier, specific_data)
            }
            EventKind::AuthLogin => {
                Self::auth_login(process_id, timestamp, identifier, specific_data)
            }
            EventKind::AuthLogout => {
                Self::auth_logout(process_id, timestamp, identifier, specific_data)
            }
        }
    }

    pub fn session_start(
        process_id: ProcessId,
        timestamp: Timestamp,
        session_id: impl Into<String>,
        specific_data: i32,
    ) -> Self {
        let leaf = SessionLeaf::Start(SessionStart {
            extra: LeafExtra { specific_data },
        });
        Self::session(process_id, timestamp, session_id, leaf)
    }

    pub fn session_end(
        process_id: ProcessId,
        timestamp: Timestamp,
        session_id: impl Into<String>,
        specific_data: i32,
    ) -> Self {
        let leaf = SessionLeaf::End(SessionEnd {
            extra: LeafExtra { specific_data },
        });
        Self::session(process_id, timestamp, session_id, leaf)
    }

    pub fn auth_login(
        process_id: ProcessId,
        timestamp: Timestamp,
        user_id: impl Into<String>,
        specific_data: i32,
    ) -> Self {
        let leaf = AuthLeaf::Login(AuthLogin {
            extra: LeafExtra { specific_data },
        });
        Self::auth(process_id, timestamp, user_id, leaf)
    }

    pub fn auth_logout(
        process_id: ProcessId,
        timestamp: Timestamp,
        user_id: impl Into<String>,
        specific_data: i32,
    ) -> Self {
        let leaf = AuthLeaf::Logout(AuthLogout {
            extra: LeafExtra { specific_data },
        });
        Self::auth(process_id, timestamp, user_id, leaf)
    }

    fn session(
        process_id: ProcessId,
        timestamp: Timestamp,
        session_id: impl Into<String>,
        leaf: SessionLeaf,
    ) -> Self {
        let session = SessionFields {
            session_id: session_id.into(),
        };
        Self::from_parts(
            Envelope::new(process_id, timestamp),
            EventPayload::Session(SessionEvent { session, leaf }),
        )
    }

    fn auth(
        process_id: ProcessId,
        timestamp: Timestamp,
        user_id: impl Into<String>,
        leaf: AuthLeaf,
    ) -> Self {
        let auth = AuthFields {
            user_id: user_id.into(),
        };
        Self::from_parts(
            Envelope::new(process_id, timestamp),
            EventPayload::Auth(AuthEvent { auth, leaf }),
        )
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    pub fn category(&self) -> EventCategory {
        self.kind().category()
    }

    /// Session id or user id, depending on the category.
    pub fn category_identifier(&self) -> &str {
        match &self.payload {
            EventPayload::Session(event) => &event.session.session_id,
            EventPayload::Auth(event) => &event.auth.user_id,
        }
    }

    pub fn extra(&self) -> LeafExtra {
        match &self.payload {
            EventPayload::Session(event) => event.extra(),
            EventPayload::Auth(event) => event.extra(),
        }
    }
}

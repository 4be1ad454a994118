// Leaf and category identity for every event.
//
// Purpose
// - EventKind is the single source of truth for what an event is.
// - EventCategory is always derived from the kind, never stored next to it.
//
// Extending
// - A new leaf kind needs a variant here, an arm in `category_of`, and a wire tag.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    SessionStart,
    SessionEnd,
    AuthLogin,
    AuthLogout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventCategory {
    Session,
    Auth,
}

/// Tag reserved for "no kind". Never produced, always rejected.
pub const UNKNOWN_KIND_TAG: i32 = 0;

pub const fn category_of(kind: EventKind) -> EventCategory {
    match kind {
        EventKind::SessionStart | EventKind::SessionEnd => EventCategory::Session,
        EventKind::AuthLogin | EventKind::AuthLogout => EventCategory::Auth,
    }
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::SessionStart,
        EventKind::SessionEnd,
        EventKind::AuthLogin,
        EventKind::AuthLogout,
    ];

    pub const fn category(self) -> EventCategory {
        category_of(self)
    }

    /// Stable integer used when a kind crosses a process boundary.
    pub const fn tag(self) -> i32 {
        match self {
            EventKind::SessionStart => 1,
            EventKind::SessionEnd => 2,
            EventKind::AuthLogin => 3,
            EventKind::AuthLogout => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::SessionStart => "SessionStart",
            EventKind::SessionEnd => "SessionEnd",
            EventKind::AuthLogin => "AuthLogin",
            EventKind::AuthLogout => "AuthLogout",
        }
    }
}

impl EventCategory {
    pub const ALL: [EventCategory; 2] = [EventCategory::Session, EventCategory::Auth];

    pub const fn as_str(self) -> &'static str {
        match self {
            EventCategory::Session => "Session",
            EventCategory::Auth => "Auth",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }

    pub fn kinds(self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(move |kind| kind.category() == self)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Category dispatchers: the second level of dispatch.
//
// Responsibilities
// - Expose the category fields shared by every leaf of the category.
// - Match on the leaf restricted to the kinds legal for that category.
// - Call exactly one handler method.

use crate::modules::events::core::record::{
    AuthEvent, AuthLeaf, Envelope, SessionEvent, SessionLeaf,
};
use crate::modules::events::dispatch::handler::EventHandler;

pub fn dispatch_session<H: EventHandler>(
    envelope: &Envelope,
    event: &SessionEvent,
    handler: &mut H,
) -> H::Output {
    let session = &event.session;
    match &event.leaf {
        SessionLeaf::Start(leaf) => handler.session_start(envelope, session, leaf),
        SessionLeaf::End(leaf) => handler.session_end(envelope, session, leaf),
    }
}

pub fn dispatch_auth<H: EventHandler>(
    envelope: &Envelope,
    event: &AuthEvent,
    handler: &mut H,
) -> H::Output {
    let auth = &event.auth;
    match &event.leaf {
        AuthLeaf::Login(leaf) => handler.auth_login(envelope, auth, leaf),
        AuthLeaf::Logout(leaf) => handler.auth_logout(envelope, auth, leaf),
    }
}

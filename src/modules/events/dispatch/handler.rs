// Leaf handler seam.
//
// Purpose
// - One method per leaf kind. The dispatcher calls exactly one of them per record.
//
// Extending
// - A new leaf kind adds one method here. Existing methods and their
//   implementations stay as they are.

use crate::modules::events::core::record::{
    AuthFields, AuthLogin, AuthLogout, Envelope, SessionEnd, SessionFields, SessionStart,
};

pub trait EventHandler {
    type Output;

    fn session_start(
        &mut self,
        envelope: &Envelope,
        session: &SessionFields,
        leaf: &SessionStart,
    ) -> Self::Output;

    fn session_end(
        &mut self,
        envelope: &Envelope,
        session: &SessionFields,
        leaf: &SessionEnd,
    ) -> Self::Output;

    fn auth_login(&mut self, envelope: &Envelope, auth: &AuthFields, leaf: &AuthLogin)
    -> Self::Output;

    fn auth_logout(
        &mut self,
        envelope: &Envelope,
        auth: &AuthFields,
        leaf: &AuthLogout,
    ) -> Self::Output;
}

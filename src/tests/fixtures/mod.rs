// Shared test fixtures, compiled into the crate only for tests.

pub mod handlers;
pub mod rendered_text;

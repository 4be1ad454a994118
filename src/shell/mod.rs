// Composition root for the events bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Pick the concrete render sink and wire it into the report use case.

pub mod config;

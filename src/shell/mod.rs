// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory stores, the clock and the email adapter.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.
// - Spawn the reminder worker.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;

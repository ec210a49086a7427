// Composition root for the activities service.
//
// Responsibilities
// - Read config from environment.
// - Build the seeded in-memory registry and wire it into the use case handlers.
// - Expose the HTTP router (REST and GraphQL) and serve it.

pub mod config;
pub mod graphql;
pub mod http;
pub mod server;
pub mod state;

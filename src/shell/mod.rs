// Composition root for the manuscripts bounded context.
//
// Responsibilities
// - Read config from environment and optional config files.
// - Instantiate the manuscript source (journal API client).
// - Wire it into the progress use case and expose HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

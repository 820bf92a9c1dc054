//! A mock GraphQL server for exercising concurrent client-side queries.
//!
//! Serves a single operation on `POST /graphql`:
//!
//! ```graphql
//! getFilterOptions(type: String!): [Item!]!
//! ```
//!
//! Recognized `type` values are `tags`, `persons` and `locations`; anything
//! else yields an empty list, not an error. Every request is answered from a
//! static table after a pseudo-random delay drawn uniformly from a
//! configurable range (default 1000..2000 ms) to simulate network latency.
//!
//! Requests are handled fully independently: no shared mutable state, no
//! queueing, no timeouts. Responses complete in whatever order the delays
//! dictate, which is the whole point.

pub mod data;
pub mod graphql;
pub mod server;

pub use server::{FilterServer, ServerConfig, ServerError};

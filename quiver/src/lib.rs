//! A minimal GraphQL client built around composable exchanges.
//!
//! # Getting Started
//!
//! Queries are plain Rust modules implementing [GraphQLQuery](trait.GraphQLQuery.html):
//! a `Variables` struct, a `ResponseData` struct and the query text. Build a
//! client, then run typed queries against it:
//!
//! ```ignore
//! use quiver::{Client, FetchExchange};
//!
//! let client = Client::builder("http://localhost:4000/graphql")
//!     .with_exchange(FetchExchange)
//!     .build();
//!
//! let response = client.query(GetFilterOptions, variables).await?;
//! ```
//!
//! # Exchanges
//!
//! Exchanges are bi-directional middleware. Each exchange acts on the outgoing
//! operation, passes it down the chain and acts on the incoming result. Chains
//! are built bottom to top: the first exchange added is the last one executed.
//!
//! Only one exchange ships with this crate:
//!
//! ## FetchExchange
//!
//! Serializes the query, POSTs it as JSON over HTTP using `reqwest` and
//! deserializes the response. It never forwards an operation, so it must be
//! the terminal exchange in the chain.
//!
//! There is intentionally **no cache exchange and no dedup exchange**. Every
//! query reaches the network, and two identical in-flight queries run as two
//! independent requests. Result caching in a client library is exactly the
//! behavior that loses concurrent results in other stacks, so this client
//! stays a dumb pipe and leaves result retention to the caller's state
//! container.

#[macro_use]
extern crate serde;
#[macro_use]
extern crate async_trait;

use serde::{de::DeserializeOwned, Serialize};
use std::{collections::HashMap, fmt, fmt::Display};
use types::*;

pub mod client;
mod error;
pub mod exchanges;
pub(crate) mod types;
pub mod utils;

pub use client::{Client, ClientBuilder};
pub use error::QueryError;
pub use exchanges::FetchExchange;
pub use types::HeaderPair;

/// Types used by custom exchanges. Regular users probably don't need these.
pub mod exchange {
    pub use crate::types::{
        Exchange, ExchangeFactory, ExchangeResult, Operation, OperationMeta, OperationOptions,
        OperationResult, OperationType
    };
}

/// The form in which queries are sent over HTTP. This will be built using the
/// [GraphQLQuery](./trait.GraphQLQuery.html) trait normally.
#[derive(Debug, Serialize, Clone)]
pub struct QueryBody<Variables: Serialize + Send + Sync + Clone> {
    /// The values for the variables. They must match those declared in the query.
    pub variables: Variables,
    /// The GraphQL query, as a string.
    pub query: &'static str,
    /// The GraphQL operation name, as a string.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str
}

/// A typed GraphQL operation. Implemented once per query module.
pub trait GraphQLQuery: Send + Sync + 'static {
    /// The shape of the variables expected by the query.
    type Variables: Serialize + Send + Sync + Clone + 'static;
    /// The top-level shape of the response data (the `data` field in the
    /// GraphQL response).
    type ResponseData: DeserializeOwned + Send + Sync + Clone + 'static;

    /// Produce a serializable query body and the operation metadata used for
    /// log correlation.
    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta);
}

/// The generic shape taken by the responses of GraphQL APIs.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Response<Data: Clone> {
    /// The absent, partial or complete response data.
    pub data: Option<Data>,
    /// The top-level errors returned by the server.
    pub errors: Option<Vec<Error>>
}

/// An element in the top-level `errors` array of a response body.
///
/// This tries to be as close to the spec as possible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    /// The human-readable error message. This is the only required field.
    pub message: String,
    /// Which locations in the query the error applies to.
    pub locations: Option<Vec<Location>>,
    /// Which path in the query the error applies to, e.g. `["users", 0, "email"]`.
    pub path: Option<Vec<PathFragment>>,
    /// Additional errors. Their exact format is defined by the server.
    pub extensions: Option<HashMap<String, serde_json::Value>>
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use `/` as a separator like JSON Pointer.
        let path = self
            .path
            .as_ref()
            .map(|fragments| {
                fragments
                    .iter()
                    .fold(String::new(), |mut acc, item| {
                        acc.push_str(&format!("{}/", item));
                        acc
                    })
                    .trim_end_matches('/')
                    .to_string()
            })
            .unwrap_or_else(|| "<query>".to_string());

        // Get the location of the error. We'll use just the first location for this.
        let loc = self
            .locations
            .as_ref()
            .and_then(|locations| locations.iter().next())
            .cloned()
            .unwrap_or_default();

        write!(f, "{}:{}:{}: {}", path, loc.line, loc.column, self.message)
    }
}

/// Part of a path in a query. It can be an object key or an array index. See [Error](./struct.Error.html).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PathFragment {
    /// A key inside an object
    Key(String),
    /// An index inside an array
    Index(i32)
}

impl Display for PathFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathFragment::Key(ref key) => write!(f, "{}", key),
            PathFragment::Index(ref idx) => write!(f, "{}", idx)
        }
    }
}

/// Represents a location inside a query string. Used in errors. See [Error](./struct.Error.html).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// The line number in the query string where the error originated (starting from 1).
    pub line: i32,
    /// The column number in the query string where the error originated (starting from 1).
    pub column: i32
}

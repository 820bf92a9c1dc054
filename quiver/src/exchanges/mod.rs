use crate::{
    types::{ExchangeResult, Operation},
    Exchange, GraphQLQuery
};
use std::{error::Error, fmt};

mod fetch;

pub use fetch::{FetchError, FetchExchange};

#[derive(Debug)]
enum MiddlewareError {
    UnexpectedEndOfChain
}
impl Error for MiddlewareError {}

impl fmt::Display for MiddlewareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected end of middleware chain")
    }
}

/// The exchange a `ClientBuilder` starts out with. Running an operation
/// against it is a configuration error: a terminal exchange such as
/// `FetchExchange` must be added before the client is built.
pub struct DummyExchange;

#[async_trait]
impl Exchange for DummyExchange {
    async fn run<Q: GraphQLQuery>(
        &self,
        _operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData> {
        Err(MiddlewareError::UnexpectedEndOfChain.into())
    }
}

use crate::{GraphQLQuery, QueryBody, QueryError, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

pub type ExchangeResult<R> = Result<OperationResult<R>, QueryError>;

/// A bi-directional middleware. Exchanges receive the outgoing operation,
/// forward it (or not) and return the result flowing back up the chain.
#[async_trait]
pub trait Exchange: Send + Sync + 'static {
    async fn run<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData>;
}

/// Builds an exchange from the next exchange in the chain. Implemented by the
/// zero-size factory types passed to `ClientBuilder::with_exchange`.
pub trait ExchangeFactory<TNext: Exchange> {
    type Output: Exchange;

    fn build(self, next: TNext) -> Self::Output;
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription
}

/// A single extra header sent with every fetch.
pub struct HeaderPair(pub &'static str, pub &'static str);

#[derive(Clone, Debug, PartialEq)]
pub struct OperationMeta {
    /// Static key of the query itself, independent of variables.
    pub query_key: u32,
    pub operation_type: OperationType
}

#[derive(Clone)]
pub struct OperationOptions {
    pub url: String,
    pub extra_headers: Option<Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>>
}

#[derive(Clone)]
pub struct Operation<V: Serialize + Clone + Send + Sync> {
    /// Key of this concrete operation, combining the query key with the
    /// variables. Two loads of the same query with the same variables share a
    /// key but still run as independent requests.
    pub key: u64,
    pub meta: OperationMeta,
    pub query: QueryBody<V>,
    pub options: OperationOptions
}

#[derive(Clone, Debug)]
pub struct OperationResult<R: DeserializeOwned + Send + Sync + Clone> {
    pub key: u64,
    pub meta: OperationMeta,
    pub response: Response<R>
}

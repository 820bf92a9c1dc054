use crate::{
    types::{ExchangeResult, Operation, OperationResult},
    Exchange, ExchangeFactory, GraphQLQuery, HeaderPair, OperationOptions, QueryBody, Response
};
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum FetchError {
    NetworkError(Box<dyn Error + Send + Sync>),
    DecodeError(reqwest::Error)
}
impl Error for FetchError {}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NetworkError(e) => write!(f, "fetch error: {}", e),
            FetchError::DecodeError(e) => write!(f, "decoding error: {}", e)
        }
    }
}

/// The default terminal exchange.
///
/// Serializes the operation, POSTs it as JSON using `reqwest` and
/// deserializes the response body. It never forwards an operation, so it must
/// be the first exchange added to the builder (and therefore the last one
/// executed).
///
/// Each operation is an independent request. Concurrent identical operations
/// are neither merged nor cached, so their responses arrive in whatever order
/// the network produces.
pub struct FetchExchange;

impl<TNext: Exchange> ExchangeFactory<TNext> for FetchExchange {
    type Output = FetchExchange;

    fn build(self, _next: TNext) -> Self::Output {
        FetchExchange
    }
}

impl FetchExchange {
    async fn fetch<Q: GraphQLQuery>(
        extra_headers: Vec<HeaderPair>,
        options: OperationOptions,
        query: QueryBody<Q::Variables>
    ) -> Result<Response<Q::ResponseData>, FetchError> {
        let client = reqwest::Client::new();
        let mut request = client
            .post(&options.url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&query);

        for HeaderPair(key, value) in extra_headers {
            request = request.header(key, value);
        }

        request
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(Box::new(e)))?
            .json()
            .await
            .map_err(FetchError::DecodeError)
    }
}

#[async_trait]
impl Exchange for FetchExchange {
    async fn run<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData> {
        let extra_headers = if let Some(ref extra_headers) = operation.options.extra_headers {
            extra_headers()
        } else {
            Vec::new()
        };

        tracing::debug!(
            key = operation.key,
            operation = operation.query.operation_name,
            url = %operation.options.url,
            "sending query"
        );

        let response =
            FetchExchange::fetch::<Q>(extra_headers, operation.options, operation.query).await?;

        Ok(OperationResult {
            key: operation.key,
            meta: operation.meta,
            response
        })
    }
}

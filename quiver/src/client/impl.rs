use crate::{
    types::{Operation, OperationMeta, OperationOptions},
    utils::progressive_hash,
    Exchange, GraphQLQuery, HeaderPair, QueryBody, QueryError, Response
};
use std::sync::Arc;

pub struct ClientImpl<M: Exchange> {
    pub(crate) url: String,
    pub(crate) exchange: M,
    pub(crate) extra_headers: Option<Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>>
}

impl<M: Exchange> ClientImpl<M> {
    pub async fn query<Q: GraphQLQuery>(
        self: &Arc<Self>,
        _query: Q,
        variables: Q::Variables
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        let (query, meta) = Q::build_query(variables);
        let operation = self.create_request_operation::<Q>(query, meta);
        self.execute_request_operation::<Q>(operation).await
    }

    pub(crate) async fn execute_request_operation<Q: GraphQLQuery>(
        self: &Arc<Self>,
        operation: Operation<Q::Variables>
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        self.exchange
            .run::<Q>(operation)
            .await
            .map(|operation_result| operation_result.response)
    }

    pub(crate) fn create_request_operation<Q: GraphQLQuery>(
        &self,
        query: QueryBody<Q::Variables>,
        meta: OperationMeta
    ) -> Operation<Q::Variables> {
        let key = progressive_hash(meta.query_key, &query.variables);

        Operation {
            key,
            meta,
            query,
            options: OperationOptions {
                url: self.url.clone(),
                extra_headers: self.extra_headers.clone()
            }
        }
    }
}

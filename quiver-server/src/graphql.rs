//! Wire types and the request handler for `POST /graphql`.

use crate::{data, server::AppState};
use axum::{extract::State, Json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

/// The standard GraphQL-over-HTTP request envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: serde_json::Value
}

/// The standard GraphQL response envelope.
#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>
}

#[derive(Debug, Serialize)]
pub struct GraphQLError {
    pub message: String
}

/// Resolves `getFilterOptions` after the configured artificial delay.
///
/// The delay is drawn per request, so concurrent requests resolve in an
/// order unrelated to their submission order. Unknown categories resolve to
/// an empty list.
pub(crate) async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<GraphQLRequest>
) -> Json<GraphQLResponse> {
    if !request.query.contains("getFilterOptions") {
        return Json(GraphQLResponse {
            data: None,
            errors: Some(vec![GraphQLError {
                message: "unknown operation: only getFilterOptions is served".to_string()
            }])
        });
    }

    let requested = request
        .variables
        .get("type")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string();

    tracing::info!(
        category = %requested,
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "request received"
    );

    let delay = rand::thread_rng().gen_range(state.delay_ms.clone());
    tokio::time::sleep(Duration::from_millis(delay)).await;

    let items = data::options_for(&requested);

    tracing::info!(
        category = %requested,
        delay_ms = delay,
        count = items.len(),
        "response sent"
    );

    Json(GraphQLResponse {
        data: Some(json!({ "getFilterOptions": items })),
        errors: None
    })
}

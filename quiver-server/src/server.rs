use crate::graphql;
use axum::{routing::post, Router};
use std::net::SocketAddr;
use std::ops::Range;
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Port to listen on. Port 0 asks the OS for a free one.
    pub port: u16,
    /// Bounds of the artificial per-request delay, in milliseconds.
    /// Half-open: the upper bound is excluded.
    pub delay_ms: Range<u64>
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 4000,
            delay_ms: 1000..2000
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub delay_ms: Range<u64>
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error)
}

pub(crate) fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/graphql", post(graphql::graphql_handler))
        .with_state(AppState {
            delay_ms: config.delay_ms.clone()
        })
}

/// The mock server, bound but not yet running.
///
/// Binding and running are split so callers (tests in particular) can bind to
/// port 0 and read the actual address before serving.
pub struct FilterServer {
    addr: SocketAddr,
    listener: TcpListener,
    router: Router
}

impl FilterServer {
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
        let addr = listener.local_addr().map_err(ServerError::Bind)?;

        tracing::info!(%addr, delay_ms = ?config.delay_ms, "mock filter server bound");

        Ok(FilterServer {
            addr,
            listener,
            router: router(&config)
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until the process is stopped. Consumes the pre-bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            addr = %self.addr,
            "serving getFilterOptions; recognized categories: {}",
            crate::data::CATEGORIES.join(", ")
        );

        axum::serve(self.listener, self.router)
            .await
            .map_err(ServerError::Serve)
    }
}

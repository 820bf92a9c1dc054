use crate::{
    client::ClientImpl, exchanges::DummyExchange, Client, Exchange, ExchangeFactory, HeaderPair
};
use std::sync::Arc;

pub struct ClientBuilder<M: Exchange = DummyExchange> {
    exchange: M,
    url: String,
    extra_headers: Option<Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>>
}

impl ClientBuilder<DummyExchange> {
    pub fn new<U: Into<String>>(url: U) -> Self {
        ClientBuilder {
            exchange: DummyExchange,
            url: url.into(),
            extra_headers: None
        }
    }
}

impl<M: Exchange> ClientBuilder<M> {
    /// Add an exchange to the chain. Keep in mind that exchanges are executed
    /// bottom to top, so the first one added will be the last one executed.
    pub fn with_exchange<F>(self, exchange_factory: F) -> ClientBuilder<F::Output>
    where
        F: ExchangeFactory<M>
    {
        let exchange = exchange_factory.build(self.exchange);
        ClientBuilder {
            exchange,
            url: self.url,
            extra_headers: self.extra_headers
        }
    }

    pub fn with_extra_headers<F: Fn() -> Vec<HeaderPair> + Send + Sync + 'static>(
        mut self,
        header_fn: F
    ) -> Self {
        self.extra_headers = Some(Arc::new(header_fn));
        self
    }

    pub fn build(self) -> Client<M> {
        let client = ClientImpl {
            url: self.url,
            exchange: self.exchange,
            extra_headers: self.extra_headers
        };

        Client(Arc::new(client))
    }
}

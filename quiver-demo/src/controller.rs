//! The on-demand load/reset operations driving the filter state.

use crate::queries::get_filter_options::get_filter_options::Variables;
use crate::queries::GetFilterOptions;
use crate::store::{Category, FilterAction, FilterStore};
use quiver::{exchange::Exchange, Client};
use std::sync::Arc;

/// Issues one query per button press and folds the result into the shared
/// store. Holds no state of its own beyond the client and the store handle.
pub struct FilterController<M: Exchange> {
    client: Client<M>,
    store: Arc<FilterStore>
}

impl<M: Exchange> FilterController<M> {
    pub fn new(client: Client<M>, store: Arc<FilterStore>) -> Self {
        FilterController { client, store }
    }

    pub fn store(&self) -> &Arc<FilterStore> {
        &self.store
    }

    /// Load one category: flag it as loading, query the server, and on a
    /// non-empty result replace that category's slice. The loading flag
    /// clears whether the query succeeded or failed; failures are logged and
    /// swallowed, leaving the last successful data in place.
    ///
    /// Loads are neither deduplicated nor cancelled. Two concurrent loads of
    /// the same category race and the later resolution wins; loads of
    /// different categories never interfere, since each resolution dispatches
    /// only against its own slice.
    pub async fn load(&self, category: Category) {
        tracing::info!(%category, "loading filter options");

        self.store.dispatch(FilterAction::SetLoading {
            category,
            loading: true
        });

        let variables = Variables {
            type_: category.as_str().to_string()
        };

        match self.client.query(GetFilterOptions, variables).await {
            Ok(response) => {
                let items = response
                    .data
                    .map(|data| data.get_filter_options)
                    .unwrap_or_default();

                tracing::info!(%category, count = items.len(), "query completed");

                if !items.is_empty() {
                    self.store.dispatch(FilterAction::SetData { category, items });
                }
            }
            Err(error) => {
                tracing::error!(%category, %error, "failed to load filter options");
            }
        }

        self.store.dispatch(FilterAction::SetLoading {
            category,
            loading: false
        });
    }

    /// Reset the whole state to its empty form. In-flight loads are not
    /// cancelled; whatever they resolve to will still be dispatched.
    pub fn reset(&self) {
        tracing::info!("clearing all filter state");
        self.store.dispatch(FilterAction::ClearAll);
    }
}

//! Shared filter state: an explicit store mutated only by a pure reducer.
//!
//! Everything outside this module works with snapshots; the only way to
//! change state is to dispatch a [`FilterAction`].

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

pub use crate::queries::get_filter_options::get_filter_options::GetFilterOptionsGetFilterOptions as FilterOption;

/// The fixed set of filter categories. Doubles as the query variable (string
/// form) and as the state-slice key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Tags,
    Persons,
    Locations
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Tags, Category::Persons, Category::Locations];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tags => "tags",
            Category::Persons => "persons",
            Category::Locations => "locations"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole UI state. Created empty, reset to empty by `ClearAll`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub data_by_category: HashMap<Category, Vec<FilterOption>>,
    pub loading_by_category: HashMap<Category, bool>
}

impl FilterState {
    pub fn data(&self, category: Category) -> &[FilterOption] {
        self.data_by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_loading(&self, category: Category) -> bool {
        self.loading_by_category
            .get(&category)
            .copied()
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug)]
pub enum FilterAction {
    SetData {
        category: Category,
        items: Vec<FilterOption>
    },
    SetLoading {
        category: Category,
        loading: bool
    },
    ClearAll
}

/// Pure reduction function mapping (state, action) to the next state. Each
/// action touches exactly one slice, except `ClearAll` which rebuilds the
/// initial state.
pub fn reduce(state: &FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::SetData { category, items } => {
            let mut next = state.clone();
            next.data_by_category.insert(category, items);
            next
        }
        FilterAction::SetLoading { category, loading } => {
            let mut next = state.clone();
            next.loading_by_category.insert(category, loading);
            next
        }
        FilterAction::ClearAll => FilterState::default()
    }
}

/// A handle to the shared state. Passed by `Arc` to whoever needs to read or
/// dispatch; there is no ambient global.
pub struct FilterStore {
    state: Mutex<FilterState>
}

impl FilterStore {
    pub fn new() -> Self {
        FilterStore {
            state: Mutex::new(FilterState::default())
        }
    }

    pub fn dispatch(&self, action: FilterAction) {
        let mut state = self.state.lock();
        *state = reduce(&state, action);
    }

    pub fn snapshot(&self) -> FilterState {
        self.state.lock().clone()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        FilterStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(category: Category, names: &[&str]) -> Vec<FilterOption> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| FilterOption {
                id: (i + 1).to_string(),
                name: (*name).to_string(),
                type_: category.as_str().to_string()
            })
            .collect()
    }

    #[test]
    fn set_data_touches_only_its_own_category() {
        let store = FilterStore::new();
        store.dispatch(FilterAction::SetData {
            category: Category::Tags,
            items: items(Category::Tags, &["Nature"])
        });
        store.dispatch(FilterAction::SetData {
            category: Category::Persons,
            items: items(Category::Persons, &["John Doe"])
        });

        let state = store.snapshot();
        assert_eq!(state.data(Category::Tags).len(), 1);
        assert_eq!(state.data(Category::Persons).len(), 1);
        assert!(state.data(Category::Locations).is_empty());
    }

    #[test]
    fn set_data_replaces_rather_than_appends() {
        let store = FilterStore::new();
        store.dispatch(FilterAction::SetData {
            category: Category::Tags,
            items: items(Category::Tags, &["Nature", "Urban"])
        });
        store.dispatch(FilterAction::SetData {
            category: Category::Tags,
            items: items(Category::Tags, &["Wildlife"])
        });

        let state = store.snapshot();
        let names: Vec<&str> = state
            .data(Category::Tags)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Wildlife"]);
    }

    #[test]
    fn loading_flags_are_independent_per_category() {
        let store = FilterStore::new();
        store.dispatch(FilterAction::SetLoading {
            category: Category::Tags,
            loading: true
        });

        let state = store.snapshot();
        assert!(state.is_loading(Category::Tags));
        assert!(!state.is_loading(Category::Persons));
        assert!(!state.is_loading(Category::Locations));
    }

    #[test]
    fn clear_all_restores_the_initial_state_regardless_of_prior_state() {
        let store = FilterStore::new();
        for category in Category::ALL {
            store.dispatch(FilterAction::SetLoading {
                category,
                loading: true
            });
            store.dispatch(FilterAction::SetData {
                category,
                items: items(category, &["a", "b"])
            });
        }

        store.dispatch(FilterAction::ClearAll);

        let state = store.snapshot();
        assert_eq!(state, FilterState::default());
        for category in Category::ALL {
            assert!(state.data(category).is_empty());
            assert!(!state.is_loading(category));
        }
    }

    #[test]
    fn reduce_leaves_the_input_state_untouched() {
        let initial = FilterState::default();
        let next = reduce(
            &initial,
            FilterAction::SetLoading {
                category: Category::Tags,
                loading: true
            }
        );

        assert!(!initial.is_loading(Category::Tags));
        assert!(next.is_loading(Category::Tags));
    }
}

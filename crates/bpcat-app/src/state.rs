//! Application state (Model in TEA pattern)

use crate::form_state::FormState;
use crate::list_state::ListState;
use crate::navigation::Route;

/// Complete state for the catalog UI.
///
/// One view is active at a time: the list is always present (it is the
/// home view), the form exists only while its route is active and is
/// discarded on every navigation away; there is no draft persistence.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The active route.
    pub route: Route,

    /// View generation, bumped on every route entry.
    ///
    /// Async completions carry the epoch they were spawned under; the
    /// update function discards mismatches, so a late response can never
    /// write into a view that has been torn down since.
    pub epoch: u64,

    /// Product list view state.
    pub list: ListState,

    /// Product form view state, present only on the form routes.
    pub form: Option<FormState>,

    /// Initial page size for a freshly entered list view (configurable;
    /// distinct from the fallback used for invalid page-size input).
    pub default_page_size: usize,
}

impl AppState {
    pub fn new(default_page_size: usize) -> Self {
        Self {
            route: Route::ProductList,
            epoch: 0,
            list: ListState::new(default_page_size),
            form: None,
            default_page_size,
        }
    }

    /// True when `epoch` does not belong to the active view.
    pub fn is_stale(&self, epoch: u64) -> bool {
        epoch != self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_the_list_route() {
        let state = AppState::new(5);
        assert_eq!(state.route, Route::ProductList);
        assert!(state.form.is_none());
        assert_eq!(state.list.page_size(), 5);
    }

    #[test]
    fn test_epoch_staleness() {
        let mut state = AppState::new(5);
        let spawned_under = state.epoch;
        assert!(!state.is_stale(spawned_under));

        state.epoch += 1;
        assert!(state.is_stale(spawned_under));
    }
}

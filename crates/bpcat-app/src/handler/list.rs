//! Product list handlers
//!
//! The list reloads on every route entry and after every successful
//! delete; everything else is synchronous recomputation of the derived
//! views.

use tracing::{debug, error};

use bpcat_core::Product;

use crate::list_state::ListState;
use crate::navigation::Route;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// User-facing message when the full fetch fails.
pub(crate) const LOAD_FAILED_MSG: &str = "No se pudo cargar productos.";

/// User-facing message when a delete fails.
pub(crate) const DELETE_FAILED_MSG: &str = "No se pudo eliminar el producto.";

/// Entry hook for the list route.
///
/// Resets the view to a fresh instance (the form, if any, is discarded;
/// term and page size return to defaults) and starts a full fetch. Runs
/// on every landing on the base path, including the return after a form
/// submission, so the view never shows stale data.
pub(crate) fn handle_list_entered(state: &mut AppState) -> UpdateResult {
    state.epoch += 1;
    state.route = Route::ProductList;
    state.form = None;
    state.list = ListState::new(state.default_page_size);
    state.list.begin_load();
    UpdateResult::action(UpdateAction::FetchProducts { epoch: state.epoch })
}

pub(crate) fn handle_products_loaded(
    state: &mut AppState,
    epoch: u64,
    products: Vec<Product>,
) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale product list response");
        return UpdateResult::none();
    }
    state.list.products_loaded(products);
    UpdateResult::none()
}

pub(crate) fn handle_products_load_failed(
    state: &mut AppState,
    epoch: u64,
    err: &str,
) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale product list failure");
        return UpdateResult::none();
    }
    error!(error = err, "product list fetch failed");
    state.list.load_failed(LOAD_FAILED_MSG);
    UpdateResult::none()
}

pub(crate) fn handle_search_changed(state: &mut AppState, term: &str) -> UpdateResult {
    state.list.set_search_term(term);
    UpdateResult::none()
}

pub(crate) fn handle_page_size_changed(state: &mut AppState, input: &str) -> UpdateResult {
    state.list.set_page_size_input(input);
    UpdateResult::none()
}

/// Start a delete. The source set is not touched locally; the reload
/// after completion is what reflects the change, so the view always
/// matches server state.
pub(crate) fn handle_delete_requested(state: &mut AppState, id: String) -> UpdateResult {
    state.list.error = None;
    UpdateResult::action(UpdateAction::DeleteProduct {
        id,
        epoch: state.epoch,
    })
}

/// Delete resolved: trigger exactly one reload, sequenced after it.
pub(crate) fn handle_delete_completed(state: &mut AppState, epoch: u64) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale delete completion");
        return UpdateResult::none();
    }
    state.list.begin_load();
    UpdateResult::action(UpdateAction::FetchProducts { epoch: state.epoch })
}

pub(crate) fn handle_delete_failed(state: &mut AppState, epoch: u64, err: &str) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale delete failure");
        return UpdateResult::none();
    }
    error!(error = err, "product delete failed");
    state.list.error = Some(DELETE_FAILED_MSG.to_string());
    UpdateResult::none()
}

/// Pure navigation intent, no state mutation.
pub(crate) fn handle_create_requested() -> UpdateResult {
    UpdateResult::action(UpdateAction::Navigate {
        route: Route::ProductCreate,
        query: None,
    })
}

/// Pure navigation intent, no state mutation.
pub(crate) fn handle_edit_requested(id: String) -> UpdateResult {
    UpdateResult::action(UpdateAction::Navigate {
        route: Route::ProductEdit(id),
        query: None,
    })
}

//! Product form handlers
//!
//! Mode is fixed at entry by the presence of a route identifier. The
//! revision-date derivation lives in `FormState::set_field`, active for
//! the whole lifetime of the form regardless of mode.

use chrono::NaiveDate;
use tracing::{debug, error, warn};

use bpcat_core::Product;

use crate::form_state::{Field, FormMode, FormState};
use crate::navigation::Route;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// User-facing message when the edit-mode fetch fails.
pub(crate) const FETCH_FAILED_MSG: &str = "Producto no encontrado.";

/// User-facing message when a save fails.
pub(crate) const SAVE_FAILED_MSG: &str = "No se pudo guardar el producto.";

/// Entry hook for the form routes.
///
/// Edit mode captures the identifier, disables the id field, and fetches
/// the record. Create mode seeds the release date from `today` and
/// derives the revision date.
pub(crate) fn handle_form_entered(
    state: &mut AppState,
    id: Option<String>,
    today: NaiveDate,
) -> UpdateResult {
    state.epoch += 1;
    state.route = match &id {
        Some(id) => Route::ProductEdit(id.clone()),
        None => Route::ProductCreate,
    };

    let mut form = FormState::enter(id, today);
    let result = match form.id_param().map(str::to_string) {
        Some(id) => {
            form.loading = true;
            UpdateResult::action(UpdateAction::FetchProduct {
                id,
                epoch: state.epoch,
            })
        }
        None => UpdateResult::none(),
    };
    state.form = Some(form);
    result
}

pub(crate) fn handle_field_changed(state: &mut AppState, field: Field, value: &str) -> UpdateResult {
    let Some(form) = state.form.as_mut() else {
        debug!(field = field.name(), "field change with no form active");
        return UpdateResult::none();
    };
    form.set_field(field, value);
    UpdateResult::none()
}

pub(crate) fn handle_product_fetched(
    state: &mut AppState,
    epoch: u64,
    product: Product,
) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale record fetch");
        return UpdateResult::none();
    }
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };
    form.populate(&product);
    form.loading = false;
    UpdateResult::none()
}

/// Fetch failure leaves the form unpopulated. A miss and a transport
/// error present the same way; the distinction is kept in the logs.
pub(crate) fn handle_product_fetch_failed(
    state: &mut AppState,
    epoch: u64,
    err: &str,
) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale record fetch failure");
        return UpdateResult::none();
    }
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };
    error!(error = err, "record fetch failed");
    form.error = Some(FETCH_FAILED_MSG.to_string());
    form.loading = false;
    UpdateResult::none()
}

/// Submit the form.
///
/// Invalid forms surface their errors (every field marked touched) and
/// emit no effect. Valid forms assemble the payload from raw values,
/// the disabled identifier included, and dispatch create or update
/// depending on mode.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let epoch = state.epoch;
    let Some(form) = state.form.as_mut() else {
        debug!("submit with no form active");
        return UpdateResult::none();
    };

    if !form.is_valid() {
        warn!("submit blocked by validation");
        form.mark_all_touched();
        return UpdateResult::none();
    }
    if form.saving || form.loading {
        debug!("submit ignored, request already in flight");
        return UpdateResult::none();
    }

    form.saving = true;
    form.error = None;
    let product = form.payload();

    match form.mode() {
        FormMode::Edit { id } => UpdateResult::action(UpdateAction::UpdateProduct {
            id: id.clone(),
            product,
            epoch,
        }),
        FormMode::Create => UpdateResult::action(UpdateAction::CreateProduct { product, epoch }),
    }
}

/// Save succeeded: back to the list with the refresh signal. The list's
/// entry hook does the actual reload.
pub(crate) fn handle_save_completed(state: &mut AppState, epoch: u64) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale save completion");
        return UpdateResult::none();
    }
    if let Some(form) = state.form.as_mut() {
        form.saving = false;
    }
    UpdateResult::action(UpdateAction::Navigate {
        route: Route::ProductList,
        query: Some("refresh=1".to_string()),
    })
}

/// Save failed: clear the flag, keep the form populated for retry.
pub(crate) fn handle_save_failed(state: &mut AppState, epoch: u64, err: &str) -> UpdateResult {
    if state.is_stale(epoch) {
        debug!(epoch, "dropping stale save failure");
        return UpdateResult::none();
    }
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };
    error!(error = err, "product save failed");
    form.saving = false;
    form.error = Some(SAVE_FAILED_MSG.to_string());
    UpdateResult::none()
}

/// Clear the form. Edit mode reloads the original record, discarding
/// unsaved edits; create mode re-seeds the entry date and its derived
/// revision date.
pub(crate) fn handle_reset(state: &mut AppState) -> UpdateResult {
    let epoch = state.epoch;
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };

    form.reset_fields();
    if let Some(id) = form.id_param().map(str::to_string) {
        form.loading = true;
        return UpdateResult::action(UpdateAction::FetchProduct { id, epoch });
    }
    form.seed_dates();
    UpdateResult::none()
}

/// Pure navigation back to the list, no confirmation, no save.
pub(crate) fn handle_cancel() -> UpdateResult {
    UpdateResult::action(UpdateAction::Navigate {
        route: Route::ProductList,
        query: None,
    })
}

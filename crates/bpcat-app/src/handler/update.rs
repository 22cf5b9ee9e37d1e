//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{form, list, UpdateResult};

/// Process a message and update state.
/// Returns an optional effect for the event loop to perform.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Navigation Entry
        // ─────────────────────────────────────────────────────────
        Message::ListEntered => list::handle_list_entered(state),
        Message::FormEntered { id, today } => form::handle_form_entered(state, id, today),

        // ─────────────────────────────────────────────────────────
        // List Messages
        // ─────────────────────────────────────────────────────────
        Message::SearchChanged { term } => list::handle_search_changed(state, &term),
        Message::PageSizeChanged { input } => list::handle_page_size_changed(state, &input),
        Message::DeleteRequested { id } => list::handle_delete_requested(state, id),
        Message::CreateRequested => list::handle_create_requested(),
        Message::EditRequested { id } => list::handle_edit_requested(id),
        Message::ProductsLoaded { epoch, products } => {
            list::handle_products_loaded(state, epoch, products)
        }
        Message::ProductsLoadFailed { epoch, error } => {
            list::handle_products_load_failed(state, epoch, &error)
        }
        Message::DeleteCompleted { epoch } => list::handle_delete_completed(state, epoch),
        Message::DeleteFailed { epoch, error } => {
            list::handle_delete_failed(state, epoch, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FieldChanged { field, value } => {
            form::handle_field_changed(state, field, &value)
        }
        Message::SubmitRequested => form::handle_submit(state),
        Message::ResetRequested => form::handle_reset(state),
        Message::CancelRequested => form::handle_cancel(),
        Message::ProductFetched { epoch, product } => {
            form::handle_product_fetched(state, epoch, product)
        }
        Message::ProductFetchFailed { epoch, error } => {
            form::handle_product_fetch_failed(state, epoch, &error)
        }
        Message::SaveCompleted { epoch } => form::handle_save_completed(state, epoch),
        Message::SaveFailed { epoch, error } => form::handle_save_failed(state, epoch, &error),
    }
}

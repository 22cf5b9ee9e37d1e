//! Message types for the application (TEA pattern)

use chrono::NaiveDate;

use bpcat_core::Product;

use crate::form_state::Field;

/// All possible messages/actions in the application.
///
/// Entry messages are synthesized by the engine when a navigation lands
/// on a route. Completion messages are posted by spawned API effects and
/// carry the view epoch they were spawned under; stale ones are dropped.
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Navigation Entry
    // ─────────────────────────────────────────────────────────
    /// Navigation landed on the list route. Always reloads: landing on
    /// the base path after a form submission must never show stale data.
    ListEntered,

    /// Navigation landed on the form route. An identifier selects edit
    /// mode; `today` is the local calendar date captured at entry, used
    /// to seed the release date in create mode.
    FormEntered {
        id: Option<String>,
        today: NaiveDate,
    },

    // ─────────────────────────────────────────────────────────
    // List Intents
    // ─────────────────────────────────────────────────────────
    /// Search input changed.
    SearchChanged { term: String },
    /// Page-size input changed (raw text, parsed with fallback).
    PageSizeChanged { input: String },
    /// Delete the product with the given identifier.
    DeleteRequested { id: String },
    /// Open the form in create mode.
    CreateRequested,
    /// Open the form in edit mode for the given identifier.
    EditRequested { id: String },

    // ─────────────────────────────────────────────────────────
    // List Completions
    // ─────────────────────────────────────────────────────────
    /// Full fetch succeeded.
    ProductsLoaded { epoch: u64, products: Vec<Product> },
    /// Full fetch failed.
    ProductsLoadFailed { epoch: u64, error: String },
    /// Delete succeeded; the handler triggers the reload.
    DeleteCompleted { epoch: u64 },
    /// Delete failed.
    DeleteFailed { epoch: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Form Intents
    // ─────────────────────────────────────────────────────────
    /// A field value changed.
    FieldChanged { field: Field, value: String },
    /// Submit the form (create or update depending on mode).
    SubmitRequested,
    /// Clear the form; edit mode reloads the record afterwards.
    ResetRequested,
    /// Leave the form without saving.
    CancelRequested,

    // ─────────────────────────────────────────────────────────
    // Form Completions
    // ─────────────────────────────────────────────────────────
    /// Edit-mode record fetch succeeded.
    ProductFetched { epoch: u64, product: Product },
    /// Edit-mode record fetch failed (not found or transport error).
    ProductFetchFailed { epoch: u64, error: String },
    /// Create/update succeeded.
    SaveCompleted { epoch: u64 },
    /// Create/update failed.
    SaveFailed { epoch: u64, error: String },
}

//! bpcat-app - State engine for the bank product catalog
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! catalog's two views: the product list (search/pagination/reload) and
//! the create/edit form (mode-dependent lifecycle, derived revision date,
//! validation). State transitions are pure functions over an explicit
//! state object; API calls are effects the engine spawns, whose
//! completions come back as messages.

pub mod config;
pub mod engine;
pub mod form_state;
pub mod handler;
pub mod list_state;
pub mod message;
pub mod navigation;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use form_state::{Field, FormMode, FormState, ValidationReport};
pub use handler::{update, UpdateAction, UpdateResult};
pub use list_state::{ListState, FALLBACK_PAGE_SIZE};
pub use message::Message;
pub use navigation::Route;
pub use state::AppState;

//! # bpcat-core - Core Domain Types
//!
//! Foundation crate for the bank product catalog. Provides the product
//! entity, date canonicalization and derivation, field validation rules,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`product`)
//! - [`Product`] - The catalog entity as it travels over the wire
//!
//! ### Dates (`dates`)
//! - [`to_iso_date()`] - Canonicalize a date string to ISO `YYYY-MM-DD`
//! - [`add_one_year()`] - Derive the revision date from the release date
//! - [`format_display()`] - Render an ISO date as `DD/MM/YYYY`
//!
//! ### Validation (`validation`)
//! - [`FieldError`] - Why a field value is rejected
//! - [`check_required()`], [`check_length()`] - Rule primitives
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum covering transport and config failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bpcat_core::prelude::*;
//! ```

pub mod dates;
pub mod error;
pub mod logging;
pub mod product;
pub mod validation;

/// Prelude for common imports used throughout all catalog crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use dates::{add_one_year, format_display, plus_one_year, to_iso_date, today_local};
pub use error::{Error, Result};
pub use product::Product;
pub use validation::{check_length, check_required, FieldError};

//! Abstract CRUD surface for the product catalog
//!
//! The state engine consumes this trait; the HTTP implementation lives in
//! [`crate::http`]. Tests substitute in-memory fakes.

use bpcat_core::prelude::*;
use bpcat_core::Product;

/// CRUD operations on the product catalog.
///
/// Every operation resolves exactly once, with the stored record (or unit)
/// on success and a typed [`Error`] on failure. The backend enforces
/// identifier uniqueness and returns records unchanged apart from
/// server-assigned fields.
#[trait_variant::make(ProductsApi: Send)]
pub trait LocalProductsApi {
    /// Fetch the full product set.
    async fn list(&self) -> Result<Vec<Product>>;

    /// Fetch one product by identifier. Misses surface as
    /// [`Error::NotFound`] so callers can tell them from transport
    /// failures.
    async fn get(&self, id: &str) -> Result<Product>;

    /// Create a new product and return the stored record.
    async fn create(&self, product: &Product) -> Result<Product>;

    /// Replace an existing product and return the stored record.
    async fn update(&self, id: &str, product: &Product) -> Result<Product>;

    /// Delete a product by identifier.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Check whether an identifier is already taken.
    ///
    /// Available for an identifier-uniqueness pre-check before create;
    /// the current flows rely on the backend's uniqueness enforcement
    /// instead.
    async fn verify_id(&self, id: &str) -> Result<bool>;
}

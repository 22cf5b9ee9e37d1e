//! bpcat-api - Products API client
//!
//! Defines the transport-agnostic [`ProductsApi`] trait the state engine
//! is written against, and the HTTP implementation that talks to the
//! backend's `/bp/products` routes.

pub mod client;
pub mod http;

pub use client::{LocalProductsApi, ProductsApi};
pub use http::HttpProductsApi;

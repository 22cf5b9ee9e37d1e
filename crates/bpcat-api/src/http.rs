//! HTTP implementation of the products API
//!
//! Talks to the backend's `/bp/products` routes. The collection endpoints
//! wrap their payloads in envelopes (`{ "data": … }` for reads,
//! `{ "message": …, "data": … }` for writes); fetch-by-id returns the bare
//! record. Identifiers are percent-encoded before being spliced into the
//! path.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use url::Url;

use bpcat_core::prelude::*;
use bpcat_core::Product;

use crate::client::ProductsApi;

const PRODUCTS_PATH: &str = "/bp/products";

/// Products API over HTTP (reqwest).
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    client: reqwest::Client,
    base: Url,
}

/// `GET /bp/products` response envelope.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Vec<Product>,
}

/// `POST`/`PUT` response envelope. The accompanying `message` field is
/// ignored; the stored record is what callers need.
#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    data: Product,
}

impl HttpProductsApi {
    /// Build a client for the given backend base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|err| Error::config(format!("invalid base URL {base_url:?}: {err}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::http(err.to_string()))?;
        Ok(Self { client, base })
    }

    fn collection_url(&self) -> Result<Url> {
        self.join(PRODUCTS_PATH)
    }

    fn item_url(&self, id: &str) -> Result<Url> {
        let segment = utf8_percent_encode(id, NON_ALPHANUMERIC);
        self.join(&format!("{PRODUCTS_PATH}/{segment}"))
    }

    fn verification_url(&self, id: &str) -> Result<Url> {
        let segment = utf8_percent_encode(id, NON_ALPHANUMERIC);
        self.join(&format!("{PRODUCTS_PATH}/verification/{segment}"))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|err| Error::config(format!("invalid request path {path:?}: {err}")))
    }
}

impl ProductsApi for HttpProductsApi {
    async fn list(&self) -> Result<Vec<Product>> {
        let url = self.collection_url()?;
        debug!(%url, "GET product list");
        let response = self.client.get(url).send().await.map_err(to_http_error)?;
        let response = check_status(response).await?;
        let envelope: ListEnvelope = response.json().await.map_err(to_http_error)?;
        Ok(envelope.data)
    }

    async fn get(&self, id: &str) -> Result<Product> {
        let url = self.item_url(id)?;
        debug!(%url, "GET product");
        let response = self.client.get(url).send().await.map_err(to_http_error)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::not_found(id));
        }
        let response = check_status(response).await?;
        response.json().await.map_err(to_http_error)
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        let url = self.collection_url()?;
        debug!(%url, id = %product.id, "POST product");
        let response = self
            .client
            .post(url)
            .json(product)
            .send()
            .await
            .map_err(to_http_error)?;
        let response = check_status(response).await?;
        let envelope: ProductEnvelope = response.json().await.map_err(to_http_error)?;
        Ok(envelope.data)
    }

    async fn update(&self, id: &str, product: &Product) -> Result<Product> {
        let url = self.item_url(id)?;
        debug!(%url, "PUT product");
        let response = self
            .client
            .put(url)
            .json(product)
            .send()
            .await
            .map_err(to_http_error)?;
        let response = check_status(response).await?;
        let envelope: ProductEnvelope = response.json().await.map_err(to_http_error)?;
        Ok(envelope.data)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.item_url(id)?;
        debug!(%url, "DELETE product");
        let response = self.client.delete(url).send().await.map_err(to_http_error)?;
        check_status(response).await?;
        Ok(())
    }

    async fn verify_id(&self, id: &str) -> Result<bool> {
        let url = self.verification_url(id)?;
        debug!(%url, "GET id verification");
        let response = self.client.get(url).send().await.map_err(to_http_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(to_http_error)
    }
}

fn to_http_error(err: reqwest::Error) -> Error {
    Error::http(err.to_string())
}

/// Turn non-2xx responses into [`Error::Api`], keeping whatever body the
/// backend sent as the diagnostic message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::api(status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpProductsApi {
        HttpProductsApi::new("http://localhost:3002", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpProductsApi::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            api().collection_url().unwrap().as_str(),
            "http://localhost:3002/bp/products"
        );
    }

    #[test]
    fn test_item_url_percent_encodes_the_id() {
        assert_eq!(
            api().item_url("P 001/x").unwrap().as_str(),
            "http://localhost:3002/bp/products/P%20001%2Fx"
        );
    }

    #[test]
    fn test_verification_url() {
        assert_eq!(
            api().verification_url("P001").unwrap().as_str(),
            "http://localhost:3002/bp/products/verification/P001"
        );
    }

    #[test]
    fn test_list_envelope_parses() {
        let raw = r#"{"data":[{"id":"P001","name":"Cuenta Flexible","description":"Cuenta de ahorro sin comisiones","logo":"https://cdn.example.com/p001.png","date_release":"2025-03-10","date_revision":"2026-03-10"}]}"#;
        let envelope: ListEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, "P001");
    }

    #[test]
    fn test_list_envelope_defaults_missing_data_to_empty() {
        let envelope: ListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_write_envelope_keeps_the_stored_record() {
        let raw = r#"{"message":"Product added successfully","data":{"id":"P001","name":"Cuenta Flexible","description":"Cuenta de ahorro sin comisiones","logo":"https://cdn.example.com/p001.png","date_release":"2025-03-10","date_revision":"2026-03-10"}}"#;
        let envelope: ProductEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.name, "Cuenta Flexible");
    }
}

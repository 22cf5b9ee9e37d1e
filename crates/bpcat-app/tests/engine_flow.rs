//! End-to-end engine flows over an in-memory API
//!
//! Drives the public surface the way the binary does: navigate, feed
//! intents, run until idle, inspect the state.

use std::sync::Mutex;

use bpcat_api::ProductsApi;
use bpcat_core::prelude::*;
use bpcat_core::{dates, Product};
use bpcat_app::{Engine, Field, Message, Route};

/// Minimal in-memory backend: unique ids, stored records returned as-is.
#[derive(Default)]
struct MemoryApi {
    store: Mutex<Vec<Product>>,
}

impl ProductsApi for MemoryApi {
    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.store.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Product> {
        self.store
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        let mut store = self.store.lock().unwrap();
        if store.iter().any(|p| p.id == product.id) {
            return Err(Error::api(400, "duplicate id"));
        }
        store.push(product.clone());
        Ok(product.clone())
    }

    async fn update(&self, id: &str, product: &Product) -> Result<Product> {
        let mut store = self.store.lock().unwrap();
        let slot = store
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(id))?;
        *slot = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|p| p.id != id);
        if store.len() == before {
            return Err(Error::not_found(id));
        }
        Ok(())
    }

    async fn verify_id(&self, id: &str) -> Result<bool> {
        Ok(self.store.lock().unwrap().iter().any(|p| p.id == id))
    }
}

fn set_fields(engine: &mut Engine<MemoryApi>, fields: &[(Field, &str)]) {
    for (field, value) in fields {
        engine.dispatch(Message::FieldChanged {
            field: *field,
            value: value.to_string(),
        });
    }
}

#[tokio::test]
async fn full_catalog_lifecycle() {
    let mut engine = Engine::new(MemoryApi::default(), 5);

    // Empty catalog to start.
    engine.navigate(Route::ProductList);
    engine.run_until_idle().await;
    assert!(engine.state().list.visible().is_empty());

    // Create a product through the form.
    engine.navigate(Route::ProductCreate);
    set_fields(
        &mut engine,
        &[
            (Field::Id, "TDC1"),
            (Field::Name, "Tarjeta Oro"),
            (Field::Description, "Tarjeta de crédito con recompensas"),
            (Field::Logo, "https://cdn.example.com/tdc1.png"),
            (Field::DateRelease, "2025-03-10"),
        ],
    );
    engine.dispatch(Message::SubmitRequested);
    engine.run_until_idle().await;

    // Submission navigated back to a freshly reloaded list.
    assert_eq!(engine.state().route, Route::ProductList);
    let visible = engine.state().list.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].date_revision, "2026-03-10");

    // Edit it: the identifier survives even though the field is disabled.
    engine.navigate(Route::ProductEdit("TDC1".to_string()));
    engine.run_until_idle().await;
    set_fields(&mut engine, &[(Field::Name, "Tarjeta Platino")]);
    engine.dispatch(Message::SubmitRequested);
    engine.run_until_idle().await;

    let visible = engine.state().list.visible();
    assert_eq!(visible[0].id, "TDC1");
    assert_eq!(visible[0].name, "Tarjeta Platino");

    // Delete it; the reloaded view no longer contains it.
    engine.dispatch(Message::DeleteRequested {
        id: "TDC1".to_string(),
    });
    engine.run_until_idle().await;
    assert!(engine.state().list.visible().is_empty());
}

#[tokio::test]
async fn blocked_submit_makes_no_api_call_and_surfaces_errors() {
    let mut engine = Engine::new(MemoryApi::default(), 5);

    engine.navigate(Route::ProductCreate);
    set_fields(
        &mut engine,
        &[
            (Field::Id, "T1"), // too short
            (Field::Name, "abc"), // too short
            (Field::Description, "Tarjeta de crédito"),
            (Field::Logo, "https://cdn.example.com/t.png"),
        ],
    );
    engine.dispatch(Message::SubmitRequested);
    engine.run_until_idle().await;

    // Still on the form, everything touched, nothing persisted.
    let form = engine.state().form.as_ref().unwrap();
    assert!(!form.saving);
    assert_eq!(form.touched.len(), 6);
    let report = form.validate();
    assert!(report.error_for(Field::Id).is_some());
    assert!(report.error_for(Field::Name).is_some());

    engine.navigate(Route::ProductList);
    engine.run_until_idle().await;
    assert!(engine.state().list.visible().is_empty());
}

#[tokio::test]
async fn duplicate_create_fails_and_form_survives_for_retry() {
    let mut engine = Engine::new(MemoryApi::default(), 5);

    for attempt in 0..2 {
        engine.navigate(Route::ProductCreate);
        set_fields(
            &mut engine,
            &[
                (Field::Id, "AHO1"),
                (Field::Name, "Cuenta Ahorro"),
                (Field::Description, "Cuenta de ahorro sin comisiones"),
                (Field::Logo, "https://cdn.example.com/aho1.png"),
            ],
        );
        engine.dispatch(Message::SubmitRequested);
        engine.run_until_idle().await;

        if attempt == 0 {
            assert_eq!(engine.state().route, Route::ProductList);
        }
    }

    // Second create of the same id: backend rejected it, form kept.
    let form = engine.state().form.as_ref().unwrap();
    assert!(form.error.as_deref().unwrap().contains("guardar"));
    assert_eq!(form.fields.id, "AHO1");
}

#[tokio::test]
async fn search_narrows_and_page_size_truncates() {
    let api = MemoryApi::default();
    {
        let mut store = api.store.lock().unwrap();
        for n in 1..=7 {
            store.push(Product {
                id: format!("P00{n}"),
                name: format!("Producto {n}"),
                description: "Descripción genérica suficiente".to_string(),
                logo: "https://cdn.example.com/logo.png".to_string(),
                date_release: "2025-01-01".to_string(),
                date_revision: "2026-01-01".to_string(),
            });
        }
    }
    let mut engine = Engine::new(api, 5);

    engine.navigate(Route::ProductList);
    engine.run_until_idle().await;
    assert_eq!(engine.state().list.visible().len(), 5);

    engine.dispatch(Message::SearchChanged {
        term: "Producto 6".to_string(),
    });
    let visible = engine.state().list.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "P006");

    engine.dispatch(Message::SearchChanged { term: String::new() });
    engine.dispatch(Message::PageSizeChanged {
        input: "7".to_string(),
    });
    assert_eq!(engine.state().list.visible().len(), 7);
}

#[tokio::test]
async fn create_mode_seeds_dates_from_the_local_clock() {
    let mut engine = Engine::new(MemoryApi::default(), 5);

    engine.navigate(Route::ProductCreate);
    let form = engine.state().form.as_ref().unwrap();
    let today = dates::today_local().format("%Y-%m-%d").to_string();
    assert_eq!(form.fields.date_release, today);
    assert_eq!(form.fields.date_revision, dates::add_one_year(&today));
}

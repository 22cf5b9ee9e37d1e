//! Engine: the event loop connecting pure updates to API effects
//!
//! The engine owns the state and an API client. Messages flow through the
//! pure [`update`] function; any [`UpdateAction`] it returns is performed
//! here: navigation synchronously (invoking the target view's entry
//! hook), API calls as spawned tasks whose completions are posted back as
//! messages. In-flight effects are counted so callers can drive the loop
//! until the state has settled.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use bpcat_api::ProductsApi;
use bpcat_core::dates;

use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::navigation::Route;
use crate::state::AppState;

/// Capacity of the completion-message channel.
const CHANNEL_CAPACITY: usize = 64;

/// The catalog event loop.
pub struct Engine<A> {
    state: AppState,
    api: Arc<A>,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    in_flight: usize,
}

impl<A: ProductsApi + Send + Sync + 'static> Engine<A> {
    pub fn new(api: A, default_page_size: usize) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            state: AppState::new(default_page_size),
            api: Arc::new(api),
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Navigate to a route, invoking its entry hook.
    pub fn navigate(&mut self, route: Route) {
        self.perform(UpdateAction::Navigate { route, query: None });
    }

    /// Feed one message through the update function and perform whatever
    /// effect it produces.
    pub fn dispatch(&mut self, message: Message) {
        let result = update(&mut self.state, message);
        if let Some(action) = result.action {
            self.perform(action);
        }
    }

    /// Process effect completions until nothing is in flight.
    ///
    /// Effects spawned by those completions (e.g. the reload after a
    /// delete) are awaited too, so the state is fully settled when this
    /// returns.
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 {
            let Some(message) = self.msg_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.dispatch(message);
        }
    }

    fn perform(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::Navigate { route, query } => {
                info!(
                    path = %route.to_path(),
                    query = query.as_deref().unwrap_or(""),
                    "navigating"
                );
                // The entry hook: the clock is sampled here, at the
                // navigation boundary, so update() stays pure.
                let entry = match route {
                    Route::ProductList => Message::ListEntered,
                    Route::ProductCreate => Message::FormEntered {
                        id: None,
                        today: dates::today_local(),
                    },
                    Route::ProductEdit(id) => Message::FormEntered {
                        id: Some(id),
                        today: dates::today_local(),
                    },
                };
                self.dispatch(entry);
            }

            UpdateAction::FetchProducts { epoch } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    match api.list().await {
                        Ok(products) => Message::ProductsLoaded { epoch, products },
                        Err(err) => Message::ProductsLoadFailed {
                            epoch,
                            error: err.to_string(),
                        },
                    }
                });
            }

            UpdateAction::FetchProduct { id, epoch } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    match api.get(&id).await {
                        Ok(product) => Message::ProductFetched { epoch, product },
                        Err(err) => Message::ProductFetchFailed {
                            epoch,
                            error: err.to_string(),
                        },
                    }
                });
            }

            UpdateAction::CreateProduct { product, epoch } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    match api.create(&product).await {
                        Ok(_) => Message::SaveCompleted { epoch },
                        Err(err) => Message::SaveFailed {
                            epoch,
                            error: err.to_string(),
                        },
                    }
                });
            }

            UpdateAction::UpdateProduct { id, product, epoch } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    match api.update(&id, &product).await {
                        Ok(_) => Message::SaveCompleted { epoch },
                        Err(err) => Message::SaveFailed {
                            epoch,
                            error: err.to_string(),
                        },
                    }
                });
            }

            UpdateAction::DeleteProduct { id, epoch } => {
                let api = Arc::clone(&self.api);
                self.spawn(async move {
                    match api.delete(&id).await {
                        Ok(()) => Message::DeleteCompleted { epoch },
                        Err(err) => Message::DeleteFailed {
                            epoch,
                            error: err.to_string(),
                        },
                    }
                });
            }
        }
    }

    /// Spawn an API effect. Every effect resolves to exactly one message,
    /// success or failure, so the in-flight count always drains.
    fn spawn<F>(&mut self, effect: F)
    where
        F: Future<Output = Message> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let message = effect.await;
            if tx.send(message).await.is_err() {
                debug!("engine dropped before effect completion");
            }
        });
    }
}

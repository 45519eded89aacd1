//! Runtime: owns the state, executes effects, collects completions.
//!
//! ## Inbox Pattern
//!
//! Spawned requests send their `UiEvent::RequestCompleted` to `inbox_tx`;
//! the runtime receives from `inbox_rx` and feeds each event through the
//! reducer, one at a time. Every spawned effect carries a fallback event
//! that is posted if the task dies first, so `in_flight` always drains.
//!
//! Structure:
//! - `mod.rs`: `AppRuntime`, effect dispatch
//! - `inbox.rs`: inbox channel types
//! - `handlers.rs`: effect handler implementations

mod handlers;
mod inbox;

use std::future::Future;

use inbox::{InboxGuard, UiEventReceiver, UiEventSender};
use quire_core::api::ApiClient;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::update;

pub struct AppRuntime {
    pub state: AppState,
    client: ApiClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    /// Spawned requests whose completion has not been received yet.
    in_flight: usize,
}

impl AppRuntime {
    /// Creates a runtime whose initial session follows the stored token.
    pub fn new(client: ApiClient) -> Self {
        let state = AppState::new(client.session().has_token());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            inbox_tx,
            inbox_rx,
            in_flight: 0,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Feeds one event through the reducer and executes its effects.
    ///
    /// Must be called inside a tokio runtime: requests are spawned.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Applies completions until no spawned request is outstanding.
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 {
            let Some(event) = self.inbox_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.dispatch(event);
        }
    }

    /// Dispatches `event` and waits for everything it started.
    pub async fn run(&mut self, event: UiEvent) {
        self.dispatch(event);
        self.run_until_idle().await;
    }

    fn spawn_effect<F, Fut>(&mut self, fallback: UiEvent, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let guard = InboxGuard::new(self.inbox_tx.clone(), fallback);
        self.in_flight += 1;
        tokio::spawn(async move {
            let event = f().await;
            guard.send(event);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::SendRequest { task, request } => {
                let client = self.client.clone();
                self.spawn_effect(handlers::abandoned_request(task), move || {
                    handlers::send_request(client, task, request)
                });
            }
            UiEffect::StoreToken { token } => {
                if let Some(event) = handlers::store_token(self.client.session(), &token) {
                    self.dispatch(event);
                }
            }
            UiEffect::ClearToken => {
                if let Some(event) = handlers::clear_token(self.client.session()) {
                    self.dispatch(event);
                }
            }
        }
    }
}

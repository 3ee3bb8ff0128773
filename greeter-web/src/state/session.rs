//! Session state management
//!
//! The orchestrator lives for the whole page session in a local-only
//! `StoredValue`; the reactive `SessionState` signal mirrors it for rendering.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_connect::config::app_config;
use lib_connect::{ConnectorConfig, DisplayIdentity, Orchestrator, SessionState};

use crate::services::wallet::{alert, InjectedConnector};
use crate::utils::format::alert_text;

pub type BrowserOrchestrator = Orchestrator<InjectedConnector>;

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<SessionState>,
    pub connecting: RwSignal<bool>,
    orchestrator: StoredValue<Rc<BrowserOrchestrator>, LocalStorage>,
}

impl SessionContext {
    pub fn new(config: ConnectorConfig) -> Self {
        let orchestrator = Orchestrator::new(InjectedConnector, config);
        Self {
            session: RwSignal::new(orchestrator.state()),
            connecting: RwSignal::new(false),
            orchestrator: StoredValue::new_local(Rc::new(orchestrator)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|state| state.connected)
    }

    pub fn identity(&self) -> DisplayIdentity {
        self.session.with(|state| state.identity.clone())
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting.get()
    }

    /// Kick off `Orchestrator::initialize` on the UI task queue.
    ///
    /// A wrong-network failure raises one alert; every other failure only logs.
    pub fn initialize(&self) {
        let Some(orchestrator) = self.orchestrator.try_get_value() else {
            log::warn!("Session orchestrator already disposed");
            return;
        };
        let session = self.session;
        let connecting = self.connecting;

        connecting.set(true);
        spawn_local(async move {
            let outcome = orchestrator.initialize().await;

            if let Some(text) = outcome.user_facing_error().and_then(alert_text) {
                alert(&text);
            }

            connecting.set(orchestrator.is_in_flight());
            // Unchanged state must not notify, or the page effect would retry forever.
            let state = orchestrator.state();
            if session.with_untracked(|current| *current != state) {
                session.set(state);
            }
        });
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new(ConnectorConfig::from(app_config()));
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

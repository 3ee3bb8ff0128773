//! # Connection Orchestrator
//!
//! Owns the session's connection state and drives the wallet handshake:
//!
//! ```text
//! connector.connect(config) → client(provider) → network_id() == required?
//!     → signer().address() → lookup_address(address) → connected
//! ```
//!
//! ## State
//!
//! Two states, `Disconnected` (initial) and `Connected` (terminal). A failed
//! attempt leaves the session disconnected; nothing but a later successful
//! attempt changes the state.
//!
//! ## Failure policy
//!
//! Every failure inside the handshake is logged and returned as
//! [`ConnectOutcome::Failed`]. Nothing escapes as a panic or a propagated
//! error, and nothing is retried. The caller decides how to present the
//! failure; only [`ConnectError::WrongNetwork`] is user-facing.
//!
//! ## Re-entrancy
//!
//! At most one handshake runs at a time. A trigger that arrives while one is in
//! flight returns [`ConnectOutcome::Skipped`] with [`SkipReason::InFlight`].
//! The in-flight flag is released by a drop guard, so a dropped attempt does
//! not wedge the session.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let orchestrator = Orchestrator::new(InjectedConnector::default(), ConnectorConfig::default());
//! match orchestrator.initialize().await {
//!     ConnectOutcome::Connected(identity) => show(identity.as_str()),
//!     ConnectOutcome::Failed(err) if err.is_user_facing() => alert(&err.to_string()),
//!     _ => {}
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::config::ConnectorConfig;
use crate::error::{ConnectError, Result};
use crate::provider::{NetworkClient, Signer, WalletConnector};

/// What the page shows as the user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DisplayIdentity {
    #[default]
    Empty,
    /// Primary ENS name of the account.
    Name(String),
    /// Raw account address, exactly as the signer reported it.
    Address(String),
}

impl DisplayIdentity {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayIdentity::Empty => "",
            DisplayIdentity::Name(name) => name,
            DisplayIdentity::Address(address) => address,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayIdentity::Empty)
    }
}

impl fmt::Display for DisplayIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the session, read by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionState {
    pub connected: bool,
    pub identity: DisplayIdentity,
}

/// Why a trigger did not start a handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyConnected,
    InFlight,
}

/// Result of one `initialize` / `connect` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(DisplayIdentity),
    Skipped(SkipReason),
    Failed(ConnectError),
}

impl ConnectOutcome {
    /// The failure the user should be told about, if any.
    pub fn user_facing_error(&self) -> Option<&ConnectError> {
        match self {
            ConnectOutcome::Failed(err) if err.is_user_facing() => Some(err),
            _ => None,
        }
    }
}

/// Holds the in-flight flag for exactly one handshake.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Session-scoped driver of the connection flow.
pub struct Orchestrator<C> {
    connector: C,
    config: ConnectorConfig,
    state: RefCell<SessionState>,
    in_flight: Cell<bool>,
}

impl<C: WalletConnector> Orchestrator<C> {
    pub fn new(connector: C, config: ConnectorConfig) -> Self {
        Self {
            connector,
            config,
            state: RefCell::new(SessionState::default()),
            in_flight: Cell::new(false),
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    pub fn identity(&self) -> DisplayIdentity {
        self.state.borrow().identity.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Session-start entry point. A no-op once connected.
    pub async fn initialize(&self) -> ConnectOutcome {
        if self.is_connected() {
            debug!("initialize skipped: wallet already connected");
            return ConnectOutcome::Skipped(SkipReason::AlreadyConnected);
        }

        info!(
            "initializing wallet connector: {}",
            serde_json::to_string(&self.config).unwrap_or_else(|_| self.config.required_network.to_string())
        );
        self.connect().await
    }

    /// Run one handshake attempt and record its result.
    pub async fn connect(&self) -> ConnectOutcome {
        if self.is_connected() {
            debug!("connect skipped: wallet already connected");
            return ConnectOutcome::Skipped(SkipReason::AlreadyConnected);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("connect skipped: a handshake is already in flight");
            return ConnectOutcome::Skipped(SkipReason::InFlight);
        };

        match self.handshake().await {
            Ok(identity) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.identity = identity.clone();
                    state.connected = true;
                }
                info!("wallet connected as {}", identity);
                ConnectOutcome::Connected(identity)
            }
            Err(err) => {
                if err.is_user_facing() {
                    warn!("wallet connection refused: {}", err);
                } else {
                    error!("wallet connection failed ({}): {}", err.kind(), err);
                }
                ConnectOutcome::Failed(err)
            }
        }
    }

    async fn handshake(&self) -> Result<DisplayIdentity> {
        let provider = self.connector.connect(&self.config).await?;
        let client = self.connector.client(provider);

        let expected = self.config.required_network.chain_id();
        let actual = client.network_id().await?;
        if actual != expected {
            return Err(ConnectError::WrongNetwork { expected, actual });
        }

        let address = client.signer().address().await?;
        resolve_identity(&address, &client).await
    }
}

/// Pick the name for `address` if it has one, else the address itself.
pub async fn resolve_identity<N>(address: &str, client: &N) -> Result<DisplayIdentity>
where
    N: NetworkClient,
{
    let identity = match client.lookup_address(address).await? {
        Some(name) if !name.is_empty() => DisplayIdentity::Name(name),
        _ => DisplayIdentity::Address(address.to_string()),
    };
    Ok(identity)
}

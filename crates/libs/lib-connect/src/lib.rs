//! # Wallet Connection Library
//!
//! Connects a browser wallet, checks it is on the required network and turns
//! the connected account into something to greet the user with.
//!
//! ## Modules
//!
//! - **[`orchestrator`]**: the connection flow and session state
//! - **[`provider`]**: traits for the wallet connector, network client and JSON-RPC transport
//! - **[`web3`]**: [`NetworkClient`] over raw JSON-RPC, including ENS reverse lookup
//! - **[`ens`]**: namehash and ABI helpers
//! - **[`network`]**: known chains and their ENS registries
//! - **[`config`]**: build-time configuration
//! - **[`error`]**: error taxonomy

pub mod config;
pub mod ens;
pub mod error;
pub mod network;
pub mod orchestrator;
pub mod provider;
pub mod web3;

pub use config::{AppConfig, ConnectorConfig};
pub use error::{ClientError, ConnectError, ConnectorError, Result};
pub use network::Network;
pub use orchestrator::{ConnectOutcome, DisplayIdentity, Orchestrator, SessionState, SkipReason};
pub use provider::{NetworkClient, RpcTransport, Signer, WalletConnector};
pub use web3::{Web3Client, Web3Signer};

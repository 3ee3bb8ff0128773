//! # Collaborator Traits
//!
//! The orchestrator never talks to a wallet or a node directly. It drives three
//! seams, each implemented by the front-end for the real browser objects and by
//! fakes in tests:
//!
//! ```text
//! Orchestrator → WalletConnector ──connect──► Provider
//!                                 ──client───► NetworkClient ──signer──► Signer
//! ```
//!
//! [`RpcTransport`] is the lower seam used by [`crate::web3::Web3Client`], the
//! stock [`NetworkClient`] built on raw JSON-RPC.
//!
//! All traits are `?Send`: wallet handles in the browser are JS objects that
//! never leave the UI thread.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ConnectorConfig;
use crate::error::{ClientError, ConnectorError};

/// Negotiates access to the user's wallet.
#[async_trait(?Send)]
pub trait WalletConnector {
    /// Opaque handle the wallet hands out on approval.
    type Provider;
    /// Client built on top of that handle.
    type Client: NetworkClient;

    /// Request a provider handle. May wait on user interaction for an unbounded time.
    async fn connect(&self, config: &ConnectorConfig) -> Result<Self::Provider, ConnectorError>;

    /// Wrap a provider handle in a read/write network client.
    fn client(&self, provider: Self::Provider) -> Self::Client;
}

/// Read access to the connected chain.
#[async_trait(?Send)]
pub trait NetworkClient {
    type Signer: Signer;

    /// Chain id of the network the wallet is currently on.
    async fn network_id(&self) -> Result<u64, ClientError>;

    fn signer(&self) -> Self::Signer;

    /// Reverse-resolve an address to its primary name. `None` when no name is set.
    async fn lookup_address(&self, address: &str) -> Result<Option<String>, ClientError>;
}

/// The account that would sign on the user's behalf.
#[async_trait(?Send)]
pub trait Signer {
    async fn address(&self) -> Result<String, ClientError>;
}

/// A JSON-RPC request channel (an EIP-1193 provider, an HTTP endpoint, a fake).
#[async_trait(?Send)]
pub trait RpcTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError>;
}

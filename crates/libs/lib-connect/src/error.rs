//! # Connection Error Taxonomy
//!
//! Errors are split by the collaborator that produced them:
//!
//! - [`ConnectorError`] - the wallet connector could not hand out a provider
//! - [`ClientError`] - the network client failed while querying chain state
//! - [`ConnectError`] - the flow-level taxonomy the orchestrator reports
//!
//! Collaborator errors convert into [`ConnectError`] with `?`, so the handshake
//! reads as a straight line of fallible steps.
//!
//! ## User-facing errors
//!
//! Only [`ConnectError::WrongNetwork`] is meant to reach the user. Every other
//! kind is logged and otherwise swallowed; see [`ConnectError::is_user_facing`].

use thiserror::Error;

/// Convenience type alias for `Result<T, ConnectError>`.
pub type Result<T, E = ConnectError> = std::result::Result<T, E>;

/// Failure of the wallet connector to produce a provider handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// The user dismissed or rejected the wallet prompt.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// No wallet provider is installed, or the configured provider kind is disabled.
    #[error("no provider available: {0}")]
    Unavailable(String),
}

/// Failure of the network client (JSON-RPC or response decoding).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The node or wallet answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// `eth_accounts` returned an empty list.
    #[error("wallet exposes no accounts")]
    NoAccounts,

    /// The connected chain has no ENS registry.
    #[error("network {0} does not support ENS")]
    EnsUnsupported(u64),

    /// Input was not a 20-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Flow-level failure of a connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The wallet is on a different chain than the one the app requires.
    #[error("wrong network: expected chain id {expected}, wallet is on {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    /// The connector failed because the user rejected the request.
    #[error("connection rejected: {0}")]
    ConnectionRejected(String),

    /// The connector found no usable provider.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Network id, signer or name queries failed.
    #[error("resolution failure: {0}")]
    Resolution(#[from] ClientError),
}

impl ConnectError {
    /// Whether the rendering layer should tell the user about this failure.
    ///
    /// Rejections and provider problems are deliberately collapsed into a log line.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ConnectError::WrongNetwork { .. })
    }

    /// Short stable name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectError::WrongNetwork { .. } => "WrongNetwork",
            ConnectError::ConnectionRejected(_) => "ConnectionRejected",
            ConnectError::ProviderUnavailable(_) => "ProviderUnavailable",
            ConnectError::Resolution(_) => "ResolutionFailure",
        }
    }
}

impl From<ConnectorError> for ConnectError {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Rejected(msg) => ConnectError::ConnectionRejected(msg),
            ConnectorError::Unavailable(msg) => ConnectError::ProviderUnavailable(msg),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse(format!("JSON error: {}", err))
    }
}

impl From<hex::FromHexError> for ClientError {
    fn from(err: hex::FromHexError) -> Self {
        ClientError::InvalidResponse(format!("hex error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_error_mapping() {
        let rejected: ConnectError = ConnectorError::Rejected("user closed modal".into()).into();
        assert_eq!(rejected, ConnectError::ConnectionRejected("user closed modal".into()));

        let missing: ConnectError = ConnectorError::Unavailable("no window.ethereum".into()).into();
        assert_eq!(missing.kind(), "ProviderUnavailable");
    }

    #[test]
    fn test_only_wrong_network_is_user_facing() {
        assert!(ConnectError::WrongNetwork { expected: 4, actual: 1 }.is_user_facing());
        assert!(!ConnectError::ConnectionRejected("x".into()).is_user_facing());
        assert!(!ConnectError::ProviderUnavailable("x".into()).is_user_facing());
        assert!(!ConnectError::Resolution(ClientError::NoAccounts).is_user_facing());
    }

    #[test]
    fn test_display() {
        let err = ConnectError::WrongNetwork { expected: 4, actual: 1 };
        assert_eq!(err.to_string(), "wrong network: expected chain id 4, wallet is on 1");

        let err: ConnectError = ClientError::Rpc { code: -32000, message: "boom".into() }.into();
        assert_eq!(err.to_string(), "resolution failure: RPC error -32000: boom");
    }
}

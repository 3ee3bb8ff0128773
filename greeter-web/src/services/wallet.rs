//! Injected (EIP-1193) Wallet Integration via wasm-bindgen
//!
//! Binds the provider a browser extension such as MetaMask injects at
//! `window.ethereum` to the `lib-connect` collaborator traits:
//!
//! - [`InjectedConnector`] - the wallet connector (`eth_requestAccounts`)
//! - [`Eip1193Transport`] - JSON-RPC over `provider.request({ method, params })`

use async_trait::async_trait;
use js_sys::Reflect;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use lib_connect::provider::{RpcTransport, WalletConnector};
use lib_connect::{ClientError, ConnectorConfig, ConnectorError, Web3Client};

/// EIP-1193 "User Rejected Request".
pub const USER_REJECTED: i64 = 4001;
/// JSON-RPC "Internal error", used when a JS error carries no code.
const INTERNAL_ERROR: i64 = -32603;

// ============================================================================
// EIP-1193 PROVIDER (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function injectedProvider() {
    if (typeof window === 'undefined') {
        return null;
    }
    return window.ethereum || null;
}

export async function providerRequest(provider, method, params) {
    return await provider.request({ method: method, params: params });
}
")]
extern "C" {
    /// The injected provider, if a wallet extension is installed
    #[wasm_bindgen(js_name = injectedProvider)]
    fn injected_provider() -> Option<JsValue>;

    /// Send one JSON-RPC request through the provider
    #[wasm_bindgen(js_name = providerRequest, catch)]
    async fn provider_request(provider: &JsValue, method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected `provider.request` promise into an RPC error.
fn rpc_error(err: &JsValue) -> ClientError {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64)
        .unwrap_or(INTERNAL_ERROR);

    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ClientError::Rpc { code, message }
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// JSON-RPC transport over an injected provider object.
pub struct Eip1193Transport {
    provider: JsValue,
}

#[async_trait(?Send)]
impl RpcTransport for Eip1193Transport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ClientError::InvalidResponse(format!("cannot encode params: {}", e)))?;

        let result = provider_request(&self.provider, method, params)
            .await
            .map_err(|e| rpc_error(&e))?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("{} returned {}", method, e)))
    }
}

// ============================================================================
// CONNECTOR
// ============================================================================

/// Provider handle handed out after the user approved the connection.
pub struct InjectedProvider {
    inner: JsValue,
}

/// Wallet connector for browser-extension wallets.
#[derive(Default)]
pub struct InjectedConnector;

#[async_trait(?Send)]
impl WalletConnector for InjectedConnector {
    type Provider = InjectedProvider;
    type Client = Web3Client<Eip1193Transport>;

    async fn connect(&self, config: &ConnectorConfig) -> Result<Self::Provider, ConnectorError> {
        if !config.allow_injected_provider {
            return Err(ConnectorError::Unavailable(
                "injected providers are disabled".to_string(),
            ));
        }

        let provider = injected_provider().ok_or_else(|| {
            ConnectorError::Unavailable("no injected wallet found at window.ethereum".to_string())
        })?;

        log::debug!("Requesting accounts for {}", config.required_network);
        provider_request(&provider, "eth_requestAccounts", js_sys::Array::new().into())
            .await
            .map_err(|e| match rpc_error(&e) {
                ClientError::Rpc { code: USER_REJECTED, message } => {
                    ConnectorError::Rejected(format!("{} (code {})", message, USER_REJECTED))
                }
                other => ConnectorError::Rejected(other.to_string()),
            })?;

        Ok(InjectedProvider { inner: provider })
    }

    fn client(&self, provider: Self::Provider) -> Self::Client {
        Web3Client::new(Eip1193Transport {
            provider: provider.inner,
        })
    }
}

// ============================================================================
// NOTIFICATION
// ============================================================================

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window available for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", e);
    }
}

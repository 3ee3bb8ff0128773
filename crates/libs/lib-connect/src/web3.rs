//! # JSON-RPC Network Client
//!
//! [`Web3Client`] implements [`NetworkClient`] over any [`RpcTransport`]:
//!
//! - `network_id` → `eth_chainId` (cached after the first answer)
//! - `signer().address()` → first entry of `eth_accounts`
//! - `lookup_address` → ENS reverse record, accepted only if the name resolves
//!   forward to the same address
//!
//! ```text
//! registry.resolver(namehash(<addr>.addr.reverse)) ─► resolver.name(node) ─► "alice.eth"
//! registry.resolver(namehash("alice.eth"))         ─► resolver.addr(node) ─► must equal <addr>
//! ```

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};

use crate::ens::{self, ADDR_SELECTOR, NAME_SELECTOR, RESOLVER_SELECTOR};
use crate::error::ClientError;
use crate::network::Network;
use crate::provider::{NetworkClient, RpcTransport, Signer};

/// Read/write client for the chain behind a JSON-RPC transport.
pub struct Web3Client<T> {
    transport: Rc<T>,
    chain_id: Cell<Option<u64>>,
}

impl<T: RpcTransport> Web3Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
            chain_id: Cell::new(None),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, to: &str, data: String) -> Result<String, ClientError> {
        let result = self
            .transport
            .request("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await?;

        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ClientError::InvalidResponse(format!("eth_call returned {}", result)))
    }

    async fn resolver(&self, registry: &str, node: &[u8; 32]) -> Result<Option<String>, ClientError> {
        let data = self.call(registry, ens::encode_call(RESOLVER_SELECTOR, node)).await?;
        ens::decode_address(&data)
    }

    async fn ens_registry(&self) -> Result<&'static str, ClientError> {
        let chain_id = self.network_id().await?;
        Network::from_chain_id(chain_id)
            .ens_registry()
            .ok_or(ClientError::EnsUnsupported(chain_id))
    }
}

#[async_trait(?Send)]
impl<T: RpcTransport> NetworkClient for Web3Client<T> {
    type Signer = Web3Signer<T>;

    async fn network_id(&self) -> Result<u64, ClientError> {
        if let Some(chain_id) = self.chain_id.get() {
            return Ok(chain_id);
        }

        let value = self.transport.request("eth_chainId", json!([])).await?;
        let chain_id = parse_quantity(&value)?;
        self.chain_id.set(Some(chain_id));
        Ok(chain_id)
    }

    fn signer(&self) -> Self::Signer {
        Web3Signer {
            transport: Rc::clone(&self.transport),
        }
    }

    async fn lookup_address(&self, address: &str) -> Result<Option<String>, ClientError> {
        let registry = self.ens_registry().await?;

        let reverse_node = ens::namehash(&ens::reverse_name(address)?);
        let Some(reverse_resolver) = self.resolver(registry, &reverse_node).await? else {
            debug!("no reverse resolver for {}", shared::utils::truncate_address(address));
            return Ok(None);
        };

        let name = ens::decode_string(
            &self
                .call(&reverse_resolver, ens::encode_call(NAME_SELECTOR, &reverse_node))
                .await?,
        )?;
        if name.is_empty() {
            return Ok(None);
        }

        let forward_node = ens::namehash(&name);
        let Some(forward_resolver) = self.resolver(registry, &forward_node).await? else {
            debug!("reverse record '{}' has no forward resolver", name);
            return Ok(None);
        };
        let forward = ens::decode_address(
            &self
                .call(&forward_resolver, ens::encode_call(ADDR_SELECTOR, &forward_node))
                .await?,
        )?;

        match forward {
            Some(resolved) if resolved.eq_ignore_ascii_case(address) => Ok(Some(name)),
            _ => {
                debug!("reverse record '{}' does not resolve back to the account", name);
                Ok(None)
            }
        }
    }
}

/// Signer backed by the wallet's account list.
pub struct Web3Signer<T> {
    transport: Rc<T>,
}

#[async_trait(?Send)]
impl<T: RpcTransport> Signer for Web3Signer<T> {
    async fn address(&self) -> Result<String, ClientError> {
        let accounts = self.transport.request("eth_accounts", json!([])).await?;
        let accounts = accounts
            .as_array()
            .ok_or_else(|| ClientError::InvalidResponse(format!("eth_accounts returned {}", accounts)))?;

        match accounts.first() {
            Some(Value::String(address)) => Ok(address.clone()),
            Some(other) => Err(ClientError::InvalidResponse(format!("account entry {}", other))),
            None => Err(ClientError::NoAccounts),
        }
    }
}

/// Parse a JSON-RPC quantity: a `0x` hex string, or a plain number.
pub fn parse_quantity(value: &Value) -> Result<u64, ClientError> {
    match value {
        Value::String(s) => {
            let digits = s
                .strip_prefix("0x")
                .ok_or_else(|| ClientError::InvalidResponse(format!("quantity '{}' lacks 0x", s)))?;
            u64::from_str_radix(digits, 16)
                .map_err(|e| ClientError::InvalidResponse(format!("quantity '{}': {}", s, e)))
        }
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| ClientError::InvalidResponse(format!("quantity {}", n))),
        other => Err(ClientError::InvalidResponse(format!("quantity {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ens::{abi_address, abi_string};
    use crate::network::ENS_REGISTRY;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const ALICE: &str = "0xABCDEF0123456789ABCDEF0123456789ABCD1234";
    const RESOLVER: &str = "0x4976fb03c32e5b8cfe2b6ccb31c09ba78ebaba41";

    #[derive(Default)]
    struct FakeTransport {
        chain_id: Value,
        accounts: Value,
        calls: HashMap<(String, String), String>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn on_chain(chain_id: &str) -> Self {
            Self {
                chain_id: json!(chain_id),
                accounts: json!([ALICE]),
                ..Default::default()
            }
        }

        fn answer(&mut self, to: &str, data: String, result: String) {
            self.calls.insert((to.to_lowercase(), data), result);
        }

        /// Wire a reverse record for `address` -> `name` and a forward record `name` -> `forward`.
        fn with_records(mut self, address: &str, name: &str, forward: &str) -> Self {
            let reverse_node = ens::namehash(&ens::reverse_name(address).unwrap());
            let forward_node = ens::namehash(name);
            self.answer(ENS_REGISTRY, ens::encode_call(RESOLVER_SELECTOR, &reverse_node), abi_address(RESOLVER));
            self.answer(RESOLVER, ens::encode_call(NAME_SELECTOR, &reverse_node), abi_string(name));
            self.answer(ENS_REGISTRY, ens::encode_call(RESOLVER_SELECTOR, &forward_node), abi_address(RESOLVER));
            self.answer(RESOLVER, ens::encode_call(ADDR_SELECTOR, &forward_node), abi_address(forward));
            self
        }

        fn count(&self, method: &str) -> usize {
            self.requests.borrow().iter().filter(|m| m.as_str() == method).count()
        }
    }

    #[async_trait(?Send)]
    impl RpcTransport for FakeTransport {
        async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError> {
            self.requests.borrow_mut().push(method.to_string());
            match method {
                "eth_chainId" => Ok(self.chain_id.clone()),
                "eth_accounts" => Ok(self.accounts.clone()),
                "eth_call" => {
                    let to = params[0]["to"].as_str().unwrap_or_default().to_lowercase();
                    let data = params[0]["data"].as_str().unwrap_or_default().to_string();
                    let result = self.calls.get(&(to, data)).cloned().unwrap_or_else(|| "0x".to_string());
                    Ok(json!(result))
                }
                other => Err(ClientError::Rpc {
                    code: -32601,
                    message: format!("method {} not found", other),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_network_id_is_parsed_and_cached() {
        let client = Web3Client::new(FakeTransport::on_chain("0x4"));
        assert_eq!(client.network_id().await.unwrap(), 4);
        assert_eq!(client.network_id().await.unwrap(), 4);
        assert_eq!(client.transport().count("eth_chainId"), 1);
    }

    #[tokio::test]
    async fn test_signer_reads_first_account_verbatim() {
        let client = Web3Client::new(FakeTransport::on_chain("0x4"));
        assert_eq!(client.signer().address().await.unwrap(), ALICE);
    }

    #[tokio::test]
    async fn test_signer_without_accounts() {
        let mut transport = FakeTransport::on_chain("0x4");
        transport.accounts = json!([]);
        let client = Web3Client::new(transport);
        assert_eq!(client.signer().address().await, Err(ClientError::NoAccounts));
    }

    #[tokio::test]
    async fn test_lookup_returns_verified_name() {
        let transport = FakeTransport::on_chain("0x4").with_records(ALICE, "alice.eth", ALICE);
        let client = Web3Client::new(transport);
        assert_eq!(client.lookup_address(ALICE).await.unwrap(), Some("alice.eth".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_rejects_name_pointing_elsewhere() {
        let other = "0x1111111111111111111111111111111111111111";
        let transport = FakeTransport::on_chain("0x4").with_records(ALICE, "alice.eth", other);
        let client = Web3Client::new(transport);
        assert_eq!(client.lookup_address(ALICE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lookup_without_reverse_record() {
        let client = Web3Client::new(FakeTransport::on_chain("0x4"));
        assert_eq!(client.lookup_address(ALICE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lookup_on_chain_without_ens() {
        let client = Web3Client::new(FakeTransport::on_chain("0x89"));
        assert_eq!(
            client.lookup_address(ALICE).await,
            Err(ClientError::EnsUnsupported(137))
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(&json!("0x4")).unwrap(), 4);
        assert_eq!(parse_quantity(&json!("0xaa36a7")).unwrap(), 11_155_111);
        assert_eq!(parse_quantity(&json!(5)).unwrap(), 5);
        assert!(parse_quantity(&json!("4")).is_err());
        assert!(parse_quantity(&json!(null)).is_err());
    }
}

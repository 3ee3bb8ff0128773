//! Known Ethereum networks and their ENS registries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ENS registry address shared by every network that deploys ENS.
pub const ENS_REGISTRY: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";

/// A chain the app can require the wallet to be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u64", from = "u64")]
pub enum Network {
    Mainnet,
    Ropsten,
    #[default]
    Rinkeby,
    Goerli,
    Kovan,
    Sepolia,
    Other(u64),
}

impl Network {
    pub fn from_chain_id(chain_id: u64) -> Self {
        match chain_id {
            1 => Network::Mainnet,
            3 => Network::Ropsten,
            4 => Network::Rinkeby,
            5 => Network::Goerli,
            42 => Network::Kovan,
            11_155_111 => Network::Sepolia,
            other => Network::Other(other),
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Ropsten => 3,
            Network::Rinkeby => 4,
            Network::Goerli => 5,
            Network::Kovan => 42,
            Network::Sepolia => 11_155_111,
            Network::Other(id) => *id,
        }
    }

    /// Lowercase identifier, as wallet connectors spell it (`"rinkeby"`).
    pub fn name(&self) -> String {
        match self {
            Network::Mainnet => "mainnet".to_string(),
            Network::Ropsten => "ropsten".to_string(),
            Network::Rinkeby => "rinkeby".to_string(),
            Network::Goerli => "goerli".to_string(),
            Network::Kovan => "kovan".to_string(),
            Network::Sepolia => "sepolia".to_string(),
            Network::Other(id) => format!("chain-{}", id),
        }
    }

    /// Human label for user-facing text (`"Rinkeby"`).
    pub fn label(&self) -> String {
        match self {
            Network::Mainnet => "Ethereum Mainnet".to_string(),
            Network::Ropsten => "Ropsten".to_string(),
            Network::Rinkeby => "Rinkeby".to_string(),
            Network::Goerli => "Goerli".to_string(),
            Network::Kovan => "Kovan".to_string(),
            Network::Sepolia => "Sepolia".to_string(),
            Network::Other(id) => format!("chain {}", id),
        }
    }

    /// Address of the ENS registry, if ENS is deployed on this chain.
    pub fn ens_registry(&self) -> Option<&'static str> {
        match self {
            Network::Mainnet
            | Network::Ropsten
            | Network::Rinkeby
            | Network::Goerli
            | Network::Sepolia => Some(ENS_REGISTRY),
            Network::Kovan | Network::Other(_) => None,
        }
    }
}

impl From<u64> for Network {
    fn from(chain_id: u64) -> Self {
        Network::from_chain_id(chain_id)
    }
}

impl From<Network> for u64 {
    fn from(network: Network) -> Self {
        network.chain_id()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.chain_id())
    }
}

impl FromStr for Network {
    type Err = String;

    /// Accepts a network name, a decimal chain id or a `0x` hex chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        let network = match value.as_str() {
            "mainnet" | "homestead" => Network::Mainnet,
            "ropsten" => Network::Ropsten,
            "rinkeby" => Network::Rinkeby,
            "goerli" => Network::Goerli,
            "kovan" => Network::Kovan,
            "sepolia" => Network::Sepolia,
            _ => {
                let chain_id = match value.strip_prefix("0x") {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => value.parse::<u64>(),
                }
                .map_err(|_| format!("unknown network '{}'", s.trim()))?;
                Network::from_chain_id(chain_id)
            }
        };
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_ids() {
        assert_eq!("rinkeby".parse::<Network>(), Ok(Network::Rinkeby));
        assert_eq!("Homestead".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("4".parse::<Network>(), Ok(Network::Rinkeby));
        assert_eq!("0x5".parse::<Network>(), Ok(Network::Goerli));
        assert_eq!("137".parse::<Network>(), Ok(Network::Other(137)));
        assert!("polygon-ish".parse::<Network>().is_err());
    }

    #[test]
    fn test_chain_id_roundtrip_for_known_networks() {
        for network in [
            Network::Mainnet,
            Network::Ropsten,
            Network::Rinkeby,
            Network::Goerli,
            Network::Kovan,
            Network::Sepolia,
        ] {
            assert_eq!(Network::from_chain_id(network.chain_id()), network);
        }
    }

    #[test]
    fn test_ens_support() {
        assert_eq!(Network::Rinkeby.ens_registry(), Some(ENS_REGISTRY));
        assert_eq!(Network::Kovan.ens_registry(), None);
        assert_eq!(Network::Other(137).ens_registry(), None);
    }

    #[test]
    fn test_default_is_rinkeby() {
        assert_eq!(Network::default().chain_id(), 4);
        assert_eq!(Network::default().label(), "Rinkeby");
    }

    #[test]
    fn test_serializes_as_chain_id() {
        assert_eq!(serde_json::to_string(&Network::Rinkeby).unwrap(), "4");
        let parsed: Network = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Network::Mainnet);
    }
}

//! # Application Configuration
//!
//! The browser has no process environment, so configuration is read from
//! variables captured at build time (`option_env!`). [`AppConfig::from_vars`]
//! takes any lookup function, which keeps parsing testable.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `DAPP_REQUIRED_NETWORK` | `rinkeby` | network name or chain id the wallet must be on |
//! | `DAPP_ALLOW_INJECTED` | `true` | whether browser-extension providers may be used |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_connect::config::{app_config, init_config};
//!
//! init_config().expect("invalid build configuration");
//! let required = app_config().required_network;
//! ```

use std::sync::OnceLock;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::network::Network;

pub const REQUIRED_NETWORK_VAR: &str = "DAPP_REQUIRED_NETWORK";
pub const ALLOW_INJECTED_VAR: &str = "DAPP_ALLOW_INJECTED";

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// The only network a connection is accepted on.
    pub required_network: Network,

    /// Allow injected (browser-extension) providers such as MetaMask.
    pub allow_injected_provider: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            required_network: Network::Rinkeby,
            allow_injected_provider: true,
        }
    }
}

impl AppConfig {
    /// Build configuration from a variable lookup, falling back to defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let required_network = match lookup(REQUIRED_NETWORK_VAR) {
            Some(raw) => raw
                .parse::<Network>()
                .map_err(|e| format!("{} is invalid: {}", REQUIRED_NETWORK_VAR, e))?,
            None => defaults.required_network,
        };

        let allow_injected_provider = match lookup(ALLOW_INJECTED_VAR) {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| format!("{} must be true or false, got '{}'", ALLOW_INJECTED_VAR, raw))?,
            None => defaults.allow_injected_provider,
        };

        Ok(Self {
            required_network,
            allow_injected_provider,
        })
    }

    /// Configuration captured from the build environment.
    pub fn from_build_env() -> Result<Self, String> {
        Self::from_vars(|key| match key {
            REQUIRED_NETWORK_VAR => option_env!("DAPP_REQUIRED_NETWORK").map(str::to_string),
            ALLOW_INJECTED_VAR => option_env!("DAPP_ALLOW_INJECTED").map(str::to_string),
            _ => None,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.required_network.chain_id() == 0 {
            return Err("required network chain id must be non-zero".to_string());
        }

        if !self.allow_injected_provider {
            return Err(format!(
                "{} is false but no other provider kinds are configured",
                ALLOW_INJECTED_VAR
            ));
        }

        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What the wallet connector is configured with for a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    pub required_network: Network,
    /// Extra provider integrations. Always empty: only the injected provider is used.
    pub provider_options: Map<String, Value>,
    pub allow_injected_provider: bool,
}

impl From<&AppConfig> for ConnectorConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            required_network: config.required_network,
            provider_options: Map::new(),
            allow_injected_provider: config.allow_injected_provider,
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Load, validate and store the global configuration.
///
/// # Errors
///
/// Returns an error if a variable is malformed, validation fails, or the
/// config was already initialized.
pub fn init_config() -> Result<(), String> {
    let config = AppConfig::from_build_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// The global configuration, or the defaults if [`init_config`] never ran.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

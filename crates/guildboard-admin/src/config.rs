/*
[INPUT]:  YAML configuration file and GUILDBOARD_* environment variables
[OUTPUT]: Validated admin configuration
[POS]:    Configuration layer - endpoints, timeouts, logging
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use guildboard_adapter::ClientConfig;
use guildboard_adapter::rpc::DEFAULT_RPC_URL;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "GUILDBOARD";

/// Top-level configuration for the admin tool
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Bot backend base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// EVM JSON-RPC endpoint used for token balances
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Directory for daily rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// Wallet shown by `balance` when no addresses are given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletConfig>,
}

/// Default token/owner pair for balance lookups
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletConfig {
    /// ERC-20 contract address
    pub contract: String,
    /// Holder address
    pub owner: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            rpc_url: default_rpc_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_dir: None,
            wallet: None,
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl AdminConfig {
    /// Load configuration from a YAML file, with environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(Some(path), true)
    }

    /// Load from `path`, or from the default location when it exists
    ///
    /// Without any file, defaults plus environment overrides are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = default_config_path();
                Self::build(default_path.as_deref(), false)
            }
        }
    }

    fn build(path: Option<&Path>, required: bool) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Yaml)
                    .required(required),
            );
        }
        // GUILDBOARD_RPC_URL, GUILDBOARD_WALLET__OWNER, ...
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: Self = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later at request time
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base_url)
            .with_context(|| format!("api_base_url is not a valid URL: {}", self.api_base_url))?;
        url::Url::parse(&self.rpc_url)
            .with_context(|| format!("rpc_url is not a valid URL: {}", self.rpc_url))?;
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        if self.connect_timeout_secs == 0 {
            bail!("connect_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize config to YAML")
    }
}

/// `<config dir>/guildboard/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("guildboard").join("config.yaml"))
}

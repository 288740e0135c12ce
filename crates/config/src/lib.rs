mod args;
mod error;
mod log;
mod network;

pub use args::{Args, QueryKind};
pub use error::ConfigError;
pub use log::LogConfig;
pub use network::NetworkConfig;

use serde::Deserialize;
use std::path::Path;

/// Flat view of the `AGW_*` environment, as envy reads it.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default = "default_rpc_url")]
    rpc_url: String,
    #[serde(default = "default_package_id")]
    package_id: String,
    #[serde(default = "default_agent_registry_id")]
    agent_registry_id: String,
    #[serde(default = "default_escrow_table_id")]
    escrow_table_id: String,
    #[serde(default = "default_walrus_aggregator")]
    walrus_aggregator: String,
}

fn default_rpc_url() -> String {
    network::DEFAULT_RPC_URL.to_string()
}

fn default_package_id() -> String {
    network::DEFAULT_PACKAGE_ID.to_string()
}

fn default_agent_registry_id() -> String {
    network::DEFAULT_AGENT_REGISTRY_ID.to_string()
}

fn default_escrow_table_id() -> String {
    network::DEFAULT_ESCROW_TABLE_ID.to_string()
}

fn default_walrus_aggregator() -> String {
    network::DEFAULT_WALRUS_AGGREGATOR.to_string()
}

impl From<EnvConfig> for DecoderConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
            },
            network: NetworkConfig {
                rpc_url: env.rpc_url,
                package_id: env.package_id,
                agent_registry_id: env.agent_registry_id,
                agentic_escrow_table_id: env.escrow_table_id,
                walrus_aggregator: env.walrus_aggregator,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecoderConfig {
    pub log: LogConfig,
    pub network: NetworkConfig,
}

impl DecoderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed("AGW_").from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load `path` into the process environment if it exists, then read the
    /// configuration. Variables already set take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            dotenv::from_filename(path).map_err(|source| ConfigError::EnvFileError {
                path: path.display().to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.network.validate()?;
        Ok(())
    }
}

use crate::ConfigError;

pub(crate) const DEFAULT_RPC_URL: &str = "https://fullnode.testnet.sui.io:443";
pub(crate) const DEFAULT_PACKAGE_ID: &str =
    "0x3b306a587f6d4c6beedf8f086c0d6d8837479d67cf3c0a1a93cf7587ec0a3d73";
pub(crate) const DEFAULT_AGENT_REGISTRY_ID: &str =
    "0xe9fa137fee367293ecc85c9ffaefe8a7033fa070fc48107ecbd288d1a4c256ee";
pub(crate) const DEFAULT_ESCROW_TABLE_ID: &str =
    "0x876471ce34e6b17dee6670fa0a7e67a1a34e1b781c69fe361bbb1acd47bdd52a";
pub(crate) const DEFAULT_WALRUS_AGGREGATOR: &str = "https://aggregator.walrus-testnet.walrus.space";

/// Deployment the simulation responses were produced against.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Fullnode JSON-RPC endpoint
    ///
    /// Env: AGW_RPC_URL
    /// Valid schemes: http://, https://
    /// Default: https://fullnode.testnet.sui.io:443
    pub rpc_url: String,

    /// Package that defines `agentwave_profile` and `agentwave_contract`
    ///
    /// Env: AGW_PACKAGE_ID
    pub package_id: String,

    /// Shared agent registry object
    ///
    /// Env: AGW_AGENT_REGISTRY_ID
    pub agent_registry_id: String,

    /// Shared agentic escrow table object
    ///
    /// Env: AGW_ESCROW_TABLE_ID
    pub agentic_escrow_table_id: String,

    /// Walrus aggregator serving uploaded deliverables
    ///
    /// Env: AGW_WALRUS_AGGREGATOR
    /// Default: https://aggregator.walrus-testnet.walrus.space
    pub walrus_aggregator: String,
}

impl NetworkConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_url(&self.rpc_url)?;
        Self::validate_url(&self.walrus_aggregator)?;
        Self::validate_object_id("package id", &self.package_id)?;
        Self::validate_object_id("agent registry id", &self.agent_registry_id)?;
        Self::validate_object_id("escrow table id", &self.agentic_escrow_table_id)?;
        Ok(())
    }

    fn validate_url(url_str: &str) -> Result<(), ConfigError> {
        if url_str.is_empty() {
            return Err(ConfigError::ValidateError(
                "URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(url_str)
            .map_err(|e| ConfigError::ValidateError(format!("Invalid URL '{}': {}", url_str, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::ValidateError(format!(
                "Invalid URL scheme '{}'. Must be http:// or https://",
                scheme
            ))),
        }
    }

    /// "0x" followed by 1 to 64 hex characters.
    fn validate_object_id(label: &str, id: &str) -> Result<(), ConfigError> {
        let valid = id
            .strip_prefix("0x")
            .is_some_and(|hex| {
                !hex.is_empty() && hex.len() <= 64 && hex.chars().all(|c| c.is_ascii_hexdigit())
            });

        if valid {
            Ok(())
        } else {
            Err(ConfigError::ValidateError(format!(
                "Invalid {} '{}'. Expected 0x followed by up to 64 hex characters",
                label, id
            )))
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            package_id: DEFAULT_PACKAGE_ID.to_string(),
            agent_registry_id: DEFAULT_AGENT_REGISTRY_ID.to_string(),
            agentic_escrow_table_id: DEFAULT_ESCROW_TABLE_ID.to_string(),
            walrus_aggregator: DEFAULT_WALRUS_AGGREGATOR.to_string(),
        }
    }
}

//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, applying environment overrides,
//! validating all parameters, and providing clear error messages for
//! misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::domain::price::EthAmount;

/// Environment variable overriding `network.rpc_url`.
pub const RPC_URL_ENV: &str = "OPENNFT_RPC_URL";

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: defaults are used instead.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let mut config = if path.exists() {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)?
  } else {
    info!(path = %path.display(), "No config file, using defaults");
    AppConfig::default()
  };

  if let Ok(rpc_url) = std::env::var(RPC_URL_ENV) {
    config.network.rpc_url = rpc_url;
  }

  validate_config(&config)?;

  info!(
    chain_id = config.network.chain_id,
    nft = %config.contracts.nft,
    marketplace = %config.contracts.marketplace,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse TOML text into a config (no validation).
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).with_context(|| "Failed to parse config.toml")
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A non-zero chain id and non-empty RPC URL
/// - Positive polling interval and confirmation timeout
/// - Non-zero, distinct contract addresses
/// - A default price that converts to wei
pub fn validate_config(config: &AppConfig) -> Result<()> {
  // Network validation
  anyhow::ensure!(config.network.chain_id > 0, "network.chain_id must be positive");
  anyhow::ensure!(
    !config.network.rpc_url.trim().is_empty(),
    "network.rpc_url must not be empty"
  );
  anyhow::ensure!(
    config.network.poll_interval_ms > 0,
    "network.poll_interval_ms must be positive"
  );
  anyhow::ensure!(
    config.network.confirmation_timeout_seconds > 0,
    "network.confirmation_timeout_seconds must be positive"
  );

  // Contract validation
  anyhow::ensure!(
    !config.contracts.nft.is_zero(),
    "contracts.nft must not be the zero address"
  );
  anyhow::ensure!(
    !config.contracts.marketplace.is_zero(),
    "contracts.marketplace must not be the zero address"
  );
  anyhow::ensure!(
    config.contracts.nft != config.contracts.marketplace,
    "contracts.nft and contracts.marketplace must differ"
  );

  // Client validation
  EthAmount::parse_ether(&config.client.default_price)
    .with_context(|| format!("client.default_price {:?} is not a valid ETH amount", config.client.default_price))?;

  Ok(())
}

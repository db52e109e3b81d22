//! Configuration Module - TOML-based Client Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field
//! has a default pointing at the public Sepolia deployment, so the file
//! is optional. The signing key is never read from this file; it comes
//! from the `WALLET_PRIVATE_KEY` environment variable.

pub mod loader;

use alloy::primitives::{Address, address};
use serde::Deserialize;

/// Sepolia chain id (0xaa36a7).
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Client identity and logging.
  #[serde(default)]
  pub client: ClientConfig,
  /// Required network and RPC access.
  #[serde(default)]
  pub network: NetworkConfig,
  /// Deployed contract addresses.
  #[serde(default)]
  pub contracts: ContractConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Structured JSON lines.
  Json,
  /// Human-readable.
  #[default]
  Pretty,
}

/// Client identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
  /// Display name shown in the header.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Log output format.
  #[serde(default)]
  pub log_format: LogFormat,
  /// Initial price input in ETH.
  #[serde(default = "default_price")]
  pub default_price: String,
}

/// Network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
  /// Chain id the wallet must be on.
  #[serde(default = "default_chain_id")]
  pub chain_id: u64,
  /// Display name of that chain.
  #[serde(default = "default_chain_name")]
  pub chain_name: String,
  /// JSON-RPC endpoint of the wallet provider.
  #[serde(default = "default_rpc_url")]
  pub rpc_url: String,
  /// Receipt polling interval (milliseconds).
  #[serde(default = "default_poll_interval")]
  pub poll_interval_ms: u64,
  /// Give up waiting for a receipt after this long (seconds).
  #[serde(default = "default_confirmation_timeout")]
  pub confirmation_timeout_seconds: u64,
}

/// Contract addresses. Always in config, never hardcoded in adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
  /// NFT contract.
  #[serde(default = "default_nft_address")]
  pub nft: Address,
  /// Marketplace contract.
  #[serde(default = "default_marketplace_address")]
  pub marketplace: Address,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      log_format: LogFormat::default(),
      default_price: default_price(),
    }
  }
}

impl Default for NetworkConfig {
  fn default() -> Self {
    Self {
      chain_id: default_chain_id(),
      chain_name: default_chain_name(),
      rpc_url: default_rpc_url(),
      poll_interval_ms: default_poll_interval(),
      confirmation_timeout_seconds: default_confirmation_timeout(),
    }
  }
}

impl Default for ContractConfig {
  fn default() -> Self {
    Self {
      nft: default_nft_address(),
      marketplace: default_marketplace_address(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "OpenNFT".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_price() -> String {
  "0.01".to_string()
}

const fn default_chain_id() -> u64 {
  SEPOLIA_CHAIN_ID
}

fn default_chain_name() -> String {
  "Sepolia".to_string()
}

fn default_rpc_url() -> String {
  "https://ethereum-sepolia-rpc.publicnode.com".to_string()
}

const fn default_poll_interval() -> u64 {
  2_000
}

const fn default_confirmation_timeout() -> u64 {
  300
}

const fn default_nft_address() -> Address {
  address!("7654b4896f75CCBCE20a2e17E3a35D00F1D4454c")
}

const fn default_marketplace_address() -> Address {
  address!("eD2feAB16BF7080E8100E070a19a89D4975D170B")
}

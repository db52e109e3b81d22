//! OpenNFT Client — Entry Point
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load config.toml (defaults if absent) + validate
//! 3. Init tracing (stderr; JSON or pretty)
//! 4. Build the RPC provider, keyed from WALLET_PRIVATE_KEY when set
//! 5. Create wallet, contract and notice adapters
//! 6. Create the MarketplaceClient controller
//! 7. Run the interactive shell or a one-shot subcommand

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::info;

use opennft_client::adapters::chain::{
    MarketplaceContractClient, NftContractClient, RpcProvider, RpcWallet,
};
use opennft_client::adapters::terminal::{TerminalNotifier, render_view, run_shell};
use opennft_client::config::{self, AppConfig, LogFormat};
use opennft_client::domain::listing::TokenId;
use opennft_client::domain::session::AppState;
use opennft_client::domain::view::Ownership;
use opennft_client::ports::contracts::ReadContext;
use opennft_client::usecases::{MarketplaceClient, NetworkGuard};

type Client = MarketplaceClient<
    RpcWallet,
    NftContractClient,
    MarketplaceContractClient,
    TerminalNotifier<std::io::Stdout>,
>;

/// OpenNFT marketplace client.
#[derive(Parser, Debug)]
#[command(name = "opennft")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, env = "OPENNFT_CONFIG", default_value = "config.toml")]
    config: String,

    /// Subcommand to execute (defaults to the interactive shell).
    #[command(subcommand)]
    command: Option<Command>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Interactive session.
    Shell,

    /// Print active listings (no wallet needed).
    Listings,

    /// Connect, mint a new NFT and list it.
    MintAndList {
        /// Price in ETH.
        #[arg(short, long)]
        price: Option<String>,
    },

    /// Connect and buy a listed NFT.
    Buy {
        /// Token to buy.
        token_id: TokenId,
    },

    /// Show who owns a token.
    Owner {
        /// Token to look up.
        token_id: TokenId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Parse CLI ────────────────────────────────────────
    let cli = Cli::parse();

    // ── 2. Load configuration ───────────────────────────────
    let config = config::loader::load_config(&cli.config)
        .context("Failed to load configuration")?;

    // ── 3. Initialize logging ───────────────────────────────
    init_tracing(&config);

    info!(
        name = %config.client.name,
        version = env!("CARGO_PKG_VERSION"),
        chain_id = config.network.chain_id,
        "Starting OpenNFT client"
    );

    // ── 4-6. Build adapters and controller ──────────────────
    let mut client = build_client(&config)?;
    let title = config.client.name.as_str();

    // ── 7. Dispatch ─────────────────────────────────────────
    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            run_shell(&mut client, title, stdin, tokio::io::stdout()).await?;
        }
        Command::Listings => {
            client.load_listings(ReadContext::Provider).await;
            print!("{}", render_view(&client.view(), title));
        }
        Command::MintAndList { price } => {
            if let Some(price) = price {
                client.set_price_input(price);
            }
            client.connect().await?;
            client.mint_and_list().await?;
            print!("{}", render_view(&client.view(), title));
        }
        Command::Buy { token_id } => {
            client.connect().await?;
            client.buy(token_id).await?;
            print!("{}", render_view(&client.view(), title));
        }
        Command::Owner { token_id } => {
            // Without a key there is no account to compare against.
            if client.wallet_installed() {
                client.connect().await?;
            }
            match client.owner_of(token_id).await? {
                (_, Ownership::OwnedByYou) => println!("#{token_id}: Owned by you"),
                (owner, Ownership::Purchasable) => println!("#{token_id}: {owner}"),
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.client.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.client.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn build_client(config: &AppConfig) -> Result<Client> {
    let provider = Arc::new(
        RpcProvider::from_env(&config.network).context("Failed to create RPC provider")?,
    );

    let wallet = Arc::new(RpcWallet::new(Arc::clone(&provider)));
    let nft = Arc::new(NftContractClient::new(
        Arc::clone(&provider),
        config.contracts.nft,
    ));
    let marketplace = Arc::new(MarketplaceContractClient::new(
        Arc::clone(&provider),
        config.contracts.marketplace,
    ));
    let notifier = Arc::new(TerminalNotifier::stdout());

    let guard = NetworkGuard::new(config.network.chain_id, config.network.chain_name.clone());
    let state = AppState::new(config.client.default_price.clone());

    Ok(MarketplaceClient::new(
        wallet,
        nft,
        marketplace,
        notifier,
        guard,
        state,
    ))
}

//! Interactive Shell - One Session, Many Actions
//!
//! Reads commands line by line and drives the marketplace controller.
//! State (connection, listings, price input) lives as long as the shell.
//! Failures of connect, mint and buy have already been surfaced as
//! notices by the controller, so the shell only re-renders.

use std::str::FromStr;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::domain::listing::TokenId;
use crate::domain::view::Ownership;
use crate::ports::contracts::{MarketplaceContract, NftContract};
use crate::ports::notifier::Notifier;
use crate::ports::wallet::Wallet;
use crate::usecases::marketplace::MarketplaceClient;

use super::render::render_view;

const HELP: &str = "\
Commands:
  connect        connect the wallet and load listings
  price <eth>    set the listing price (e.g. price 0.5)
  mint           mint a new NFT and list it at the current price
  buy <id>       buy a listed NFT
  owner <id>     show the current owner of a token
  refresh        reload listings
  show           print the marketplace
  help           this text
  quit           exit
";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `connect`
    Connect,
    /// `price <eth>`, kept as typed until the next mint.
    Price(String),
    /// `mint`
    Mint,
    /// `buy <id>`
    Buy(TokenId),
    /// `owner <id>`
    Owner(TokenId),
    /// `refresh`
    Refresh,
    /// `show` or `ls`
    Show,
    /// `help` or `?`
    Help,
    /// `quit` or `exit`
    Quit,
    /// Blank line.
    Empty,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(Self::Empty);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments for `{cmd}`"));
        }

        let token_id = |arg: Option<&str>| -> Result<TokenId, String> {
            let arg = arg.ok_or_else(|| format!("`{cmd}` needs a token id"))?;
            arg.parse::<TokenId>()
                .map_err(|_| format!("`{arg}` is not a token id"))
        };

        match cmd.to_ascii_lowercase().as_str() {
            "connect" => Ok(Self::Connect),
            "price" => arg
                .map(|p| Self::Price(p.to_string()))
                .ok_or_else(|| "`price` needs an amount in ETH".to_string()),
            "mint" => Ok(Self::Mint),
            "buy" => token_id(arg).map(Self::Buy),
            "owner" => token_id(arg).map(Self::Owner),
            "refresh" => Ok(Self::Refresh),
            "show" | "ls" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `{other}` (try `help`)")),
        }
    }
}

/// Run the shell until `quit` or end of input.
pub async fn run_shell<W, F, M, N, In, Out>(
    client: &mut MarketplaceClient<W, F, M, N>,
    title: &str,
    input: In,
    mut output: Out,
) -> Result<()>
where
    W: Wallet,
    F: NftContract,
    M: MarketplaceContract,
    N: Notifier,
    In: AsyncBufRead + Unpin,
    Out: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(HELP.as_bytes()).await?;
    prompt(&mut output).await?;

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                output.write_all(format!("{message}\n").as_bytes()).await?;
                prompt(&mut output).await?;
                continue;
            }
        };

        let mut render = true;
        match command {
            ShellCommand::Connect => {
                if let Err(e) = client.connect().await {
                    debug!(error = %e, "connect ended with error");
                }
            }
            ShellCommand::Price(price) => client.set_price_input(price),
            ShellCommand::Mint => {
                if let Err(e) = client.mint_and_list().await {
                    debug!(error = %e, "mint ended with error");
                }
            }
            ShellCommand::Buy(token_id) => {
                if let Err(e) = client.buy(token_id).await {
                    debug!(error = %e, "buy ended with error");
                }
            }
            ShellCommand::Owner(token_id) => {
                render = false;
                let text = match client.owner_of(token_id).await {
                    Ok((_, Ownership::OwnedByYou)) => format!("#{token_id}: Owned by you\n"),
                    Ok((owner, Ownership::Purchasable)) => format!("#{token_id}: {owner}\n"),
                    Err(e) => format!("ownerOf #{token_id} failed: {e}\n"),
                };
                output.write_all(text.as_bytes()).await?;
            }
            ShellCommand::Refresh => client.refresh_listings().await,
            ShellCommand::Show => {}
            ShellCommand::Help => {
                render = false;
                output.write_all(HELP.as_bytes()).await?;
            }
            ShellCommand::Quit => break,
            ShellCommand::Empty => render = false,
        }

        if render {
            output
                .write_all(render_view(&client.view(), title).as_bytes())
                .await?;
        }
        prompt(&mut output).await?;
    }

    output.flush().await?;
    Ok(())
}

async fn prompt<Out: AsyncWrite + Unpin>(output: &mut Out) -> Result<()> {
    output.write_all(b"> ").await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("connect".parse::<ShellCommand>(), Ok(ShellCommand::Connect));
        assert_eq!("  MINT ".parse::<ShellCommand>(), Ok(ShellCommand::Mint));
        assert_eq!("price 0.5".parse::<ShellCommand>(), Ok(ShellCommand::Price("0.5".to_string())));
        assert_eq!("buy 4".parse::<ShellCommand>(), Ok(ShellCommand::Buy(U256::from(4))));
        assert_eq!("owner 0x10".parse::<ShellCommand>(), Ok(ShellCommand::Owner(U256::from(16))));
        assert_eq!("".parse::<ShellCommand>(), Ok(ShellCommand::Empty));
        assert_eq!("exit".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
    }

    #[test]
    fn rejects_bad_lines() {
        assert!("buy".parse::<ShellCommand>().is_err());
        assert!("buy four".parse::<ShellCommand>().is_err());
        assert!("price".parse::<ShellCommand>().is_err());
        assert!("mint now please".parse::<ShellCommand>().is_err());
        assert!("sell 3".parse::<ShellCommand>().is_err());
    }
}

//! Text rendering of the marketplace view.

use std::fmt::Write;

use crate::domain::view::{MarketplaceView, Ownership};

/// Shown when there is nothing to list.
pub const EMPTY_MARKETPLACE: &str = "No active listings found on this contract.";

/// Render `view` under the heading `title`.
#[must_use]
pub fn render_view(view: &MarketplaceView, title: &str) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{title}");
    match &view.account {
        Some(account) => {
            let _ = writeln!(out, "  {account}  ● Connected ({})", view.network);
        }
        None => {
            let _ = writeln!(out, "  Not connected (run `connect`)");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Create New Listing");
    let action = if view.busy { "Processing..." } else { "Mint & List" };
    let _ = writeln!(out, "  Price: {} ETH  [{action}]", view.price_input);

    let _ = writeln!(out);
    let _ = writeln!(out, "Marketplace");
    if view.rows.is_empty() {
        let _ = writeln!(out, "  {EMPTY_MARKETPLACE}");
    }
    for row in &view.rows {
        let action = match row.ownership {
            Ownership::OwnedByYou => "Owned by you".to_string(),
            Ownership::Purchasable => format!("Buy Now (buy {})", row.token_id),
        };
        let _ = writeln!(
            out,
            "  {:<8} {:>14} ETH   {action}",
            format!("#{}", row.token_id),
            row.price_eth
        );
    }

    out
}

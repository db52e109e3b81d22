//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that the listing filter, ownership
//! classification and ETH amount conversion hold across random inputs.

use alloy::primitives::{Address, U256};
use proptest::prelude::*;

use opennft_client::domain::address::AccountAddress;
use opennft_client::domain::listing::{Listing, active_only};
use opennft_client::domain::price::EthAmount;
use opennft_client::domain::stage::MintListStage;
use opennft_client::domain::view::{Ownership, classify};

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

fn listing(id: u64, seller: [u8; 20], active: bool) -> Listing {
    Listing {
        token_id: U256::from(id),
        seller: AccountAddress::new(Address::from(seller)),
        price: U256::from(id) * U256::from(1_000u64),
        active,
    }
}

/// Flip the case of every hex letter whose mask bit is set.
fn scramble_case(hex: &str, mask: u64) -> String {
    hex.chars()
        .enumerate()
        .map(|(i, c)| {
            if (mask >> (i % 64)) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

// ── Listing Filter Properties ───────────────────────────────

proptest! {
    /// Only active listings survive, in their original order.
    #[test]
    fn active_filter_is_ordered_subset(
        entries in prop::collection::vec((any::<u64>(), any::<bool>()), 0..40),
    ) {
        let fetched: Vec<Listing> = entries
            .iter()
            .map(|&(id, active)| listing(id, [0x11; 20], active))
            .collect();
        let expected: Vec<Listing> = fetched.iter().filter(|l| l.active).cloned().collect();

        let kept = active_only(fetched);
        prop_assert!(kept.iter().all(|l| l.active));
        prop_assert_eq!(kept, expected);
    }
}

// ── Ownership Properties ────────────────────────────────────

proptest! {
    /// An address matches itself whatever the letter case on input.
    #[test]
    fn ownership_ignores_letter_case(
        bytes in any::<[u8; 20]>(),
        mask_a in any::<u64>(),
        mask_b in any::<u64>(),
    ) {
        let hex = hex_string(&bytes);
        let seller: AccountAddress = format!("0x{}", scramble_case(&hex, mask_a)).parse().unwrap();
        let account: AccountAddress = format!("0x{}", scramble_case(&hex, mask_b)).parse().unwrap();

        prop_assert_eq!(seller, account);
        prop_assert_eq!(classify(&seller, Some(&account)), Ownership::OwnedByYou);
    }

    /// Distinct addresses are purchasable, and nothing is owned when disconnected.
    #[test]
    fn distinct_or_missing_account_is_purchasable(
        a in any::<[u8; 20]>(),
        b in any::<[u8; 20]>(),
    ) {
        prop_assume!(a != b);
        let seller = AccountAddress::new(Address::from(a));
        let account = AccountAddress::new(Address::from(b));

        prop_assert_eq!(classify(&seller, Some(&account)), Ownership::Purchasable);
        prop_assert_eq!(classify(&seller, None), Ownership::Purchasable);
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ── ETH Amount Properties ───────────────────────────────────

proptest! {
    /// `whole.frac` parses to exactly `whole * 10^18 + frac * 10^(18 - digits)` wei.
    #[test]
    fn parse_ether_is_exact(
        whole in 0u64..1_000_000,
        frac in 0u64..1_000_000_000,
        digits in 9usize..=18,
    ) {
        let frac_str = format!("{frac:09}");
        let padded = format!("{frac_str:0<digits$}");
        let input = format!("{whole}.{padded}");

        let scale = 10u128.pow(u32::try_from(18 - digits).unwrap());
        let frac_wei = u128::from(frac) * 10u128.pow(u32::try_from(digits - 9).unwrap()) * scale;
        let expected = U256::from(u128::from(whole) * WEI_PER_ETH + frac_wei);

        let amount = EthAmount::parse_ether(&input).unwrap();
        prop_assert_eq!(amount.wei(), expected);
    }

    /// Formatting then parsing returns the same wei amount.
    #[test]
    fn format_then_parse_preserves_wei(wei in any::<u64>(), eth in 0u64..10_000) {
        let value = U256::from(eth) * U256::from(WEI_PER_ETH) + U256::from(wei);
        let amount = EthAmount::from_wei(value);

        let text = amount.to_string();
        prop_assert!(text.contains('.'));
        prop_assert_eq!(EthAmount::parse_ether(&text).unwrap(), amount);
    }

    /// A digit separator anywhere in an otherwise valid price is refused.
    #[test]
    fn underscore_anywhere_rejected(
        whole in 0u64..1_000_000,
        frac in 0u32..1_000_000,
        at in any::<prop::sample::Index>(),
    ) {
        let mut input = format!("{whole}.{frac}");
        let pos = at.index(input.len() + 1);
        input.insert(pos, '_');
        prop_assert!(EthAmount::parse_ether(&input).is_err(), "{:?} was accepted", input);
    }

    /// Negative prices never convert.
    #[test]
    fn negative_prices_rejected(whole in 1u64..1_000_000, frac in 0u32..1000) {
        let input = format!("-{whole}.{frac}");
        prop_assert!(EthAmount::parse_ether(&input).is_err());
    }
}

// ── Mint Stage Properties ───────────────────────────────────

proptest! {
    /// Whatever step fails, the stage lands in `Failed` and stays there.
    #[test]
    fn failure_is_terminal(id in any::<u64>(), steps in 0usize..4) {
        let token_id = U256::from(id);
        let mut stage = MintListStage::Idle.start();
        if steps > 0 {
            stage = stage.minted(token_id);
        }
        if steps > 1 {
            stage = stage.approved();
        }
        if steps > 2 {
            stage = stage.listed();
            prop_assert_eq!(stage, MintListStage::Done { token_id });
        } else {
            let failed = stage.fail();
            let is_failed = matches!(failed, MintListStage::Failed { .. });
            prop_assert!(is_failed, "expected a failed stage, got {:?}", failed);
            prop_assert_eq!(failed.fail(), failed);
            prop_assert_eq!(failed.approved(), failed);
        }
    }
}

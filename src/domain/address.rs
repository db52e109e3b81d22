//! Account addresses.
//!
//! Wallets report checksummed text, contracts return raw 20-byte values,
//! and users type whatever case they like. All of them enter the state
//! model through [`AccountAddress`], which holds the parsed bytes, so two
//! addresses that differ only in letter case are the same value.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::error::ClientError;

/// A normalized 20-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountAddress(Address);

impl AccountAddress {
    /// Wrap an already-decoded address.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// The underlying alloy address.
    #[must_use]
    pub const fn as_address(&self) -> Address {
        self.0
    }
}

impl From<Address> for AccountAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl FromStr for AccountAddress {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .to_ascii_lowercase()
            .parse::<Address>()
            .map(Self)
            .map_err(|_| ClientError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_checksum(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x7654b4896f75CCBCE20a2e17E3a35D00F1D4454c";

    #[test]
    fn case_variants_parse_to_same_value() {
        let mixed: AccountAddress = CHECKSUMMED.parse().unwrap();
        let lower: AccountAddress = CHECKSUMMED.to_lowercase().parse().unwrap();
        let upper: AccountAddress = format!("0x{}", CHECKSUMMED[2..].to_uppercase())
            .parse()
            .unwrap();

        assert_eq!(mixed, lower);
        assert_eq!(mixed, upper);
    }

    #[test]
    fn displays_checksummed() {
        let addr: AccountAddress = CHECKSUMMED.to_lowercase().parse().unwrap();
        assert_eq!(addr.to_string(), CHECKSUMMED);
    }

    #[test]
    fn rejects_garbage() {
        assert!("0x1234".parse::<AccountAddress>().is_err());
        assert!("not an address".parse::<AccountAddress>().is_err());
    }
}

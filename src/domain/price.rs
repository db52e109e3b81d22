//! ETH amounts — decimal input in, wei out.
//!
//! User prices are whole-ETH decimal strings ("0.5"). They are parsed
//! with `rust_decimal` so no precision is lost on the way to wei, and
//! formatted back the same way ethers' `formatEther` does ("0.5",
//! "1.0").

use std::fmt;
use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;

use crate::error::ClientError;

/// Decimal places between ETH and wei.
pub const ETHER_DECIMALS: u32 = 18;

/// An amount of ether held as wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthAmount(U256);

impl EthAmount {
    /// Wrap a wei value.
    #[must_use]
    pub const fn from_wei(wei: U256) -> Self {
        Self(wei)
    }

    /// Value in wei.
    #[must_use]
    pub const fn wei(&self) -> U256 {
        self.0
    }

    /// Parse a decimal ETH string into wei.
    ///
    /// # Errors
    /// Rejects empty input, anything but digits and one decimal point
    /// (no `_`, `+` or exponent), negative values, and more than 18
    /// fractional digits.
    pub fn parse_ether(input: &str) -> Result<Self, ClientError> {
        let invalid = |reason: &str| ClientError::InvalidPrice {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let text = input.trim();
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let well_formed = unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
            && unsigned.matches('.').count() <= 1
            && unsigned.chars().any(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(invalid("expected digits with an optional decimal point"));
        }

        // `Decimal` wants a digit on both sides of the point.
        let mut normalized = text.to_string();
        if unsigned.starts_with('.') {
            normalized.insert(text.len() - unsigned.len(), '0');
        }
        if normalized.ends_with('.') {
            normalized.push('0');
        }

        let value = Decimal::from_str(&normalized).map_err(|e| invalid(&e.to_string()))?;

        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid("price must not be negative"));
        }

        let scale = value.scale();
        if scale > ETHER_DECIMALS {
            return Err(invalid("more than 18 decimal places"));
        }

        let mantissa = value.mantissa().unsigned_abs();
        let factor = U256::from(10u64).pow(U256::from(ETHER_DECIMALS - scale));

        Ok(Self(U256::from(mantissa) * factor))
    }
}

impl From<U256> for EthAmount {
    fn from(wei: U256) -> Self {
        Self(wei)
    }
}

impl fmt::Display for EthAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = U256::from(10u64).pow(U256::from(ETHER_DECIMALS));
        let whole = self.0 / unit;
        let frac = self.0 % unit;

        if frac.is_zero() {
            return write!(f, "{whole}.0");
        }

        let digits = format!("{:0>18}", frac.to_string());
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_ether_to_wei() {
        let amount = EthAmount::parse_ether("0.5").unwrap();
        assert_eq!(amount.wei(), U256::from(500_000_000_000_000_000u128));
    }

    #[test]
    fn default_price_to_wei() {
        let amount = EthAmount::parse_ether("0.01").unwrap();
        assert_eq!(amount.wei(), U256::from(10_000_000_000_000_000u128));
    }

    #[test]
    fn whole_and_smallest_units() {
        assert_eq!(
            EthAmount::parse_ether("2").unwrap().wei(),
            U256::from(2_000_000_000_000_000_000u128)
        );
        assert_eq!(
            EthAmount::parse_ether("0.000000000000000001").unwrap().wei(),
            U256::from(1u64)
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(EthAmount::parse_ether("").is_err());
        assert!(EthAmount::parse_ether("abc").is_err());
        assert!(EthAmount::parse_ether("-1").is_err());
        assert!(EthAmount::parse_ether("0.0000000000000000001").is_err());
    }

    #[test]
    fn rejects_separators_and_explicit_plus() {
        for input in ["0_5", "1_0", "+0.5", "1,5", "1.2.3", ".", "-", "1e18", "0x10"] {
            let err = EthAmount::parse_ether(input).unwrap_err();
            assert!(
                matches!(err, ClientError::InvalidPrice { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn bare_point_forms() {
        assert_eq!(
            EthAmount::parse_ether(".5").unwrap().wei(),
            U256::from(500_000_000_000_000_000u128)
        );
        assert_eq!(
            EthAmount::parse_ether("5.").unwrap().wei(),
            U256::from(5_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn formats_like_format_ether() {
        assert_eq!(EthAmount::parse_ether("0.5").unwrap().to_string(), "0.5");
        assert_eq!(EthAmount::parse_ether("1").unwrap().to_string(), "1.0");
        assert_eq!(EthAmount::parse_ether("0.01").unwrap().to_string(), "0.01");
        assert_eq!(EthAmount::from_wei(U256::from(1u64)).to_string(), "0.000000000000000001");
    }
}

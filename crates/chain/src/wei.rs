//! Wei amounts
//!
//! Amounts arrive from the subgraph and from URL paths as decimal strings
//! that can exceed 64 bits. [`Wei`] keeps the normalized digit string and
//! formats it without ever going through floating point.

use crate::{ChainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of decimals in one ether
pub const ETHER_DECIMALS: usize = 18;

/// A non-negative wei amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Wei(String);

impl Wei {
    /// Zero wei
    pub fn zero() -> Self {
        Wei("0".to_string())
    }

    /// Decimal digits, without leading zeros
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Format as ether (see [`format_ether`])
    pub fn format_ether(&self) -> String {
        format_units(&self.0, ETHER_DECIMALS)
    }
}

impl FromStr for Wei {
    type Err = ChainError;

    /// Parse a decimal integer string
    ///
    /// Leading zeros are dropped. Signs, decimal points, whitespace and hex
    /// are rejected.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChainError::InvalidAmount(s.to_string()));
        }
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            Ok(Wei::zero())
        } else {
            Ok(Wei(trimmed.to_string()))
        }
    }
}

impl TryFrom<String> for Wei {
    type Error = ChainError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Wei> for String {
    fn from(value: Wei) -> Self {
        value.0
    }
}

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Wei(value.to_string())
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a wei decimal string as ether
///
/// The integer part is everything but the last 18 digits (or `0`); the
/// fraction is the last 18 digits with trailing zeros removed, and is
/// omitted entirely when it is empty.
///
/// # Arguments
///
/// * `wei` - Decimal integer string
///
/// # Example
///
/// ```rust
/// use chain::format_ether;
///
/// assert_eq!(format_ether("1000000000000000000").unwrap(), "1");
/// assert_eq!(format_ether("10000000000000000").unwrap(), "0.01");
/// ```
pub fn format_ether(wei: &str) -> Result<String> {
    Ok(wei.parse::<Wei>()?.format_ether())
}

fn format_units(digits: &str, decimals: usize) -> String {
    let padded = format!("{:0>width$}", digits, width = decimals);
    let split = padded.len() - decimals;
    let (integer, fraction) = padded.split_at(split);
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_ether() {
        assert_eq!(format_ether("1000000000000000000").unwrap(), "1");
        assert_eq!(format_ether("42000000000000000000").unwrap(), "42");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_ether("1500000000000000000").unwrap(), "1.5");
        assert_eq!(format_ether("10000000000000000").unwrap(), "0.01");
        assert_eq!(format_ether("1").unwrap(), "0.000000000000000001");
        assert_eq!(format_ether("123456789000000000000").unwrap(), "123.456789");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_ether("0").unwrap(), "0");
        assert_eq!(format_ether("000").unwrap(), "0");
    }

    #[test]
    fn test_beyond_u128() {
        let wei: Wei = "340282366920938463463374607431768211456000".parse().unwrap();
        assert_eq!(wei.format_ether(), "340282366920938463463374.607431768211456");
    }

    #[test]
    fn test_rejects_non_integers() {
        for bad in ["", "-1", "1.5", "0x10", " 1", "1e18"] {
            assert_eq!(
                bad.parse::<Wei>(),
                Err(ChainError::InvalidAmount(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_leading_zeros_dropped() {
        let wei: Wei = "000120".parse().unwrap();
        assert_eq!(wei.as_str(), "120");
        assert!(!wei.is_zero());
        assert!(Wei::zero().is_zero());
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let wei: Wei = serde_json::from_str("\"5000\"").unwrap();
        assert_eq!(wei, Wei::from(5000u128));
        assert!(serde_json::from_str::<Wei>("\"abc\"").is_err());
    }
}

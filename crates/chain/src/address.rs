//! 20-byte account addresses
//!
//! Parsing accepts all-lowercase, all-uppercase or correctly checksummed
//! input. Mixed-case input with the wrong casing is rejected, since it is
//! most likely a typo.
//!
//! Reference: <https://eips.ethereum.org/EIPS/eip-55>

use crate::{keccak256, to_hex, ChainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An account or contract address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase `0x`-prefixed form
    pub fn to_lowercase_hex(&self) -> String {
        format!("0x{}", to_hex(&self.0))
    }

    /// EIP-55 checksummed `0x`-prefixed form
    ///
    /// Each hex letter is uppercased when the matching nibble of the
    /// Keccak-256 hash of the lowercase address is 8 or more.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain::Address;
    ///
    /// let addr: Address = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359".parse().unwrap();
    /// assert_eq!(addr.to_checksum(), "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
    /// ```
    pub fn to_checksum(&self) -> String {
        let lower = to_hex(&self.0);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, ch) in lower.chars().enumerate() {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if ch.is_ascii_alphabetic() && nibble >= 8 {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl FromStr for Address {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| ChainError::InvalidAddress(s.to_string()))?;

        if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChainError::InvalidAddress(s.to_string()));
        }

        let mut bytes = [0u8; 20];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| ChainError::InvalidAddress(s.to_string()))?;
        }
        let address = Address(bytes);

        let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum()[2..] != *hex {
            return Err(ChainError::InvalidChecksum(s.to_string()));
        }

        Ok(address)
    }
}

impl TryFrom<String> for Address {
    type Error = ChainError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_checksum()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

/// Parse and checksum an address in one step
///
/// # Example
///
/// ```rust
/// use chain::address::get_address;
///
/// let checksummed = get_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
/// assert_eq!(checksummed, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
/// ```
pub fn get_address(input: &str) -> Result<String> {
    Ok(input.parse::<Address>()?.to_checksum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VECTORS: &[(&str, &str)] = &[
        (
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        ),
        (
            "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        ),
        (
            "0x8a1f3a7c1c2b4e5d6f708192a3b4c5d6e7f80912",
            "0x8a1F3A7c1c2b4E5d6F708192A3b4c5D6e7F80912",
        ),
    ];

    #[test]
    fn test_checksum_vectors() {
        for (lower, checksummed) in VECTORS {
            assert_eq!(get_address(lower).unwrap(), *checksummed);
        }
    }

    #[test]
    fn test_accepts_checksummed_and_uppercase() {
        for (_, checksummed) in VECTORS {
            assert_eq!(get_address(checksummed).unwrap(), *checksummed);
        }
        let upper = format!("0x{}", VECTORS[0].0[2..].to_uppercase());
        assert_eq!(get_address(&upper).unwrap(), VECTORS[0].1);
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let bad = "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(get_address(bad), Err(ChainError::InvalidChecksum(bad.to_string())));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1bea",
            "0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "",
        ] {
            assert!(matches!(
                bad.parse::<Address>(),
                Err(ChainError::InvalidAddress(_))
            ));
        }
    }

    #[test]
    fn test_lowercase_hex() {
        let addr: Address = VECTORS[0].1.parse().unwrap();
        assert_eq!(addr.to_lowercase_hex(), VECTORS[0].0);
        assert_eq!(addr.to_string(), VECTORS[0].1);
    }

    #[test]
    fn test_serde_uses_checksum() {
        let addr: Address = serde_json::from_str(&format!("\"{}\"", VECTORS[1].0)).unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), format!("\"{}\"", VECTORS[1].1));
    }
}

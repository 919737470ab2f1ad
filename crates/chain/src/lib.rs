//! EVM helpers for frame transactions
//!
//! This crate provides the small amount of chain plumbing the frames need:
//! formatting wei amounts as ether, checksumming addresses, encoding
//! contract call data, and describing a transaction for the frame client.
//! Nothing here talks to a node; transactions are only described, never sent.
//!
//! # Modules
//!
//! - [`wei`] - Wei amounts and ether formatting
//! - [`address`] - 20-byte addresses with EIP-55 checksums
//! - [`abi`] - Function selectors and call data encoding
//! - [`transaction`] - Transaction intent descriptors
//!
//! # Example
//!
//! ```rust
//! use chain::{Address, Wei};
//!
//! let amount: Wei = "1500000000000000000".parse().unwrap();
//! assert_eq!(amount.format_ether(), "1.5");
//!
//! let addr: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
//! assert_eq!(addr.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
pub mod address;
pub mod transaction;
pub mod wei;

use thiserror::Error;

/// Chain helper errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Address is not 0x-prefixed 40 hex characters
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Mixed-case address whose casing does not match its checksum
    #[error("Invalid address checksum: {0}")]
    InvalidChecksum(String),

    /// Amount is not a non-negative integer
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Function signature could not be parsed
    #[error("Invalid function signature: {0}")]
    InvalidSignature(String),
}

/// Result type for chain helpers
pub type Result<T> = std::result::Result<T, ChainError>;

pub use abi::{encode_string_call, function_selector, AbiFunction, AbiParam};
pub use address::Address;
pub use transaction::{ContractCall, TransactionParams, TransactionResponse};
pub use wei::{format_ether, Wei};

/// Lowercase hex without prefix
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Keccak-256 digest
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};

    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest = hasher.finalize();

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

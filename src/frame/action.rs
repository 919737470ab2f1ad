//! Frame action payloads
//!
//! Clients POST a signed message plus an unsigned copy of its fields. The
//! signature is not checked; the unsigned fields are only used for logging.

use serde::{Deserialize, Serialize};

/// Cast the frame was shown in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastId {
    /// Author fid
    pub fid: u64,
    /// Cast hash
    pub hash: String,
}

/// Unsigned copy of the action fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    /// Acting user
    pub fid: u64,
    /// Frame URL
    #[serde(default)]
    pub url: String,
    /// Message hash
    #[serde(default)]
    pub message_hash: String,
    /// Client timestamp (ms)
    #[serde(default)]
    pub timestamp: u64,
    /// Farcaster network id
    #[serde(default)]
    pub network: u64,
    /// 1-based button index
    #[serde(default)]
    pub button_index: u8,
    /// Text input contents
    #[serde(default)]
    pub input_text: Option<String>,
    /// Cast the frame was shown in
    #[serde(default)]
    pub cast_id: Option<CastId>,
    /// Connected wallet address
    #[serde(default)]
    pub address: Option<String>,
    /// Hash of a submitted transaction
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Serialized frame state
    #[serde(default)]
    pub state: Option<String>,
}

/// Signed message bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    /// Hex-encoded protobuf message
    pub message_bytes: String,
}

/// A frame action POST body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAction {
    /// Unsigned fields
    pub untrusted_data: UntrustedData,
    /// Signed message
    #[serde(default)]
    pub trusted_data: Option<TrustedData>,
}

/// Parse a POST body; `None` for empty or malformed bodies
pub fn parse_action(body: &[u8]) -> Option<FrameAction> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(action) => Some(action),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparseable frame action");
            None
        }
    }
}

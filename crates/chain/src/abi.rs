//! Contract ABI descriptors and call data encoding
//!
//! Only what the frames need is supported: JSON ABI entries for the client,
//! 4-byte selectors, and encoding a call whose single argument is a
//! `string`.

use crate::{keccak256, to_hex, ChainError, Result};
use serde::{Deserialize, Serialize};

/// One input or output of an ABI function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    /// Solidity type as written in source
    pub internal_type: String,
    /// Parameter name
    pub name: String,
    /// Canonical ABI type
    #[serde(rename = "type")]
    pub param_type: String,
}

impl AbiParam {
    /// Parameter whose internal and canonical types are the same
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        let param_type = param_type.into();
        Self {
            internal_type: param_type.clone(),
            name: name.into(),
            param_type,
        }
    }
}

/// One ABI function entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiFunction {
    /// Inputs in order
    pub inputs: Vec<AbiParam>,
    /// Function name
    pub name: String,
    /// Outputs in order
    pub outputs: Vec<AbiParam>,
    /// `pure`, `view`, `nonpayable` or `payable`
    pub state_mutability: String,
    /// Always `function`
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl AbiFunction {
    /// Payable function with no outputs
    pub fn payable(name: impl Into<String>, inputs: Vec<AbiParam>) -> Self {
        Self {
            inputs,
            name: name.into(),
            outputs: Vec::new(),
            state_mutability: "payable".to_string(),
            entry_type: "function".to_string(),
        }
    }

    /// Canonical signature, e.g. `contributeEth(string)`
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.inputs.iter().map(|p| p.param_type.as_str()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// 4-byte selector of this function
    pub fn selector(&self) -> [u8; 4] {
        selector_bytes(&self.signature())
    }
}

fn selector_bytes(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// 4-byte function selector of a canonical signature
///
/// # Arguments
///
/// * `signature` - Canonical signature such as `transfer(address,uint256)`
///
/// # Example
///
/// ```rust
/// use chain::function_selector;
///
/// assert_eq!(function_selector("transfer(address,uint256)").unwrap(), [0xa9, 0x05, 0x9c, 0xbb]);
/// ```
pub fn function_selector(signature: &str) -> Result<[u8; 4]> {
    let valid = signature
        .find('(')
        .map(|open| open > 0 && signature.ends_with(')') && !signature.contains(' '))
        .unwrap_or(false);
    if !valid {
        return Err(ChainError::InvalidSignature(signature.to_string()));
    }
    Ok(selector_bytes(signature))
}

/// Encode a call to a function taking a single `string`
///
/// Layout: selector, offset word (`0x20`), length word, then the UTF-8
/// bytes right-padded to a 32-byte boundary.
///
/// # Returns
///
/// `0x`-prefixed call data
pub fn encode_string_call(function: &AbiFunction, arg: &str) -> Result<String> {
    match function.inputs.as_slice() {
        [only] if only.param_type == "string" => {}
        _ => return Err(ChainError::InvalidSignature(function.signature())),
    }

    let mut data = Vec::with_capacity(4 + 64 + arg.len() + 32);
    data.extend_from_slice(&function.selector());
    data.extend_from_slice(&uint_word(32));
    data.extend_from_slice(&uint_word(arg.len() as u64));
    data.extend_from_slice(arg.as_bytes());
    let padding = (32 - arg.len() % 32) % 32;
    data.extend(std::iter::repeat(0u8).take(padding));

    Ok(format!("0x{}", to_hex(&data)))
}

fn uint_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribute_eth() -> AbiFunction {
        AbiFunction::payable("contributeEth", vec![AbiParam::new("message", "string")])
    }

    #[test]
    fn test_selectors() {
        assert_eq!(
            function_selector("transfer(address,uint256)").unwrap(),
            [0xa9, 0x05, 0x9c, 0xbb]
        );
        assert_eq!(contribute_eth().selector(), [0xb8, 0x63, 0x78, 0x23]);
    }

    #[test]
    fn test_invalid_signatures() {
        for bad in ["transfer", "(uint256)", "transfer(address, uint256)", "f(x"] {
            assert!(function_selector(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_signature() {
        assert_eq!(contribute_eth().signature(), "contributeEth(string)");
    }

    #[test]
    fn test_encode_string_call() {
        let data = encode_string_call(&contribute_eth(), "WE BALL FROM FRAMES").unwrap();
        let expected = concat!(
            "0xb8637823",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000013",
            "57452042414c4c2046524f4d204652414d455300000000000000000000000000",
        );
        assert_eq!(data, expected);
    }

    #[test]
    fn test_encode_empty_string() {
        let data = encode_string_call(&contribute_eth(), "").unwrap();
        // selector + two words, no data words
        assert_eq!(data.len(), 2 + 8 + 128);
    }

    #[test]
    fn test_encode_exact_word() {
        let arg = "a".repeat(32);
        let data = encode_string_call(&contribute_eth(), &arg).unwrap();
        assert_eq!(data.len(), 2 + 8 + 128 + 64);
    }

    #[test]
    fn test_encode_rejects_other_inputs() {
        let f = AbiFunction::payable("f", vec![AbiParam::new("x", "uint256")]);
        assert_eq!(
            encode_string_call(&f, "x"),
            Err(ChainError::InvalidSignature("f(uint256)".to_string()))
        );
    }

    #[test]
    fn test_abi_json_shape() {
        let json = serde_json::to_value(contribute_eth()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inputs": [{"internalType": "string", "name": "message", "type": "string"}],
                "name": "contributeEth",
                "outputs": [],
                "stateMutability": "payable",
                "type": "function"
            })
        );
    }
}

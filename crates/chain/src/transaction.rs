//! Transaction intents
//!
//! A [`ContractCall`] describes a payable call; [`ContractCall::to_response`]
//! turns it into the JSON body a frame client expects from a transaction
//! target. The service never signs or sends anything.

use crate::abi::{encode_string_call, AbiFunction};
use crate::address::Address;
use crate::wei::Wei;
use crate::{ChainError, Result};
use serde::{Deserialize, Serialize};

/// JSON-RPC method requested from the wallet
pub const SEND_TRANSACTION: &str = "eth_sendTransaction";

/// A contract call with a single string argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    /// ABI entries handed to the client
    pub abi: Vec<AbiFunction>,
    /// Name of the function to call
    pub function_name: String,
    /// Target chain as a CAIP-2 id (e.g. `eip155:8453`)
    pub chain_id: String,
    /// Contract address
    pub to: Address,
    /// Value sent with the call
    pub value: Wei,
    /// String argument
    pub arg: String,
}

impl ContractCall {
    /// Build the transaction response for this call
    ///
    /// # Errors
    ///
    /// [`ChainError::InvalidSignature`] when `function_name` is not in the
    /// ABI or does not take a single string.
    pub fn to_response(&self) -> Result<TransactionResponse> {
        let function = self
            .abi
            .iter()
            .find(|f| f.name == self.function_name)
            .ok_or_else(|| ChainError::InvalidSignature(self.function_name.clone()))?;

        let data = encode_string_call(function, &self.arg)?;

        Ok(TransactionResponse {
            chain_id: self.chain_id.clone(),
            method: SEND_TRANSACTION.to_string(),
            params: TransactionParams {
                abi: self.abi.clone(),
                to: self.to.to_checksum(),
                value: self.value.to_string(),
                data,
            },
        })
    }
}

/// Transaction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
    /// ABI entries for display
    pub abi: Vec<AbiFunction>,
    /// Checksummed target address
    pub to: String,
    /// Value in wei as a decimal string
    pub value: String,
    /// `0x`-prefixed call data
    pub data: String,
}

/// Transaction intent returned to the frame client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// CAIP-2 chain id
    pub chain_id: String,
    /// Wallet method
    pub method: String,
    /// Call parameters
    pub params: TransactionParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::AbiParam;

    fn call() -> ContractCall {
        ContractCall {
            abi: vec![AbiFunction::payable(
                "contributeEth",
                vec![AbiParam::new("message", "string")],
            )],
            function_name: "contributeEth".to_string(),
            chain_id: "eip155:8453".to_string(),
            to: "0x8a1f3a7c1c2b4e5d6f708192a3b4c5d6e7f80912".parse().unwrap(),
            value: "10000000000000000".parse().unwrap(),
            arg: "WE BALL FROM FRAMES".to_string(),
        }
    }

    #[test]
    fn test_response_shape() {
        let response = call().to_response().unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["chainId"], "eip155:8453");
        assert_eq!(json["method"], "eth_sendTransaction");
        assert_eq!(json["params"]["to"], "0x8a1F3A7c1c2b4E5d6F708192A3b4c5D6e7F80912");
        assert_eq!(json["params"]["value"], "10000000000000000");
        assert_eq!(json["params"]["abi"][0]["name"], "contributeEth");
        assert!(json["params"]["data"].as_str().unwrap().starts_with("0xb8637823"));
    }

    #[test]
    fn test_unknown_function() {
        let mut call = call();
        call.function_name = "withdraw".to_string();
        assert_eq!(
            call.to_response(),
            Err(ChainError::InvalidSignature("withdraw".to_string()))
        );
    }
}

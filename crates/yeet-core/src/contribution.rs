//! Contribution transaction

use crate::branding::chain::{CHAIN_ID, CONTRIBUTE_FUNCTION, CONTRIBUTION_MESSAGE};
use chain::{AbiFunction, AbiParam, Address, ContractCall, Wei};

/// ABI of the campaign's payable `contributeEth(string message)`
pub fn contribute_abi() -> Vec<AbiFunction> {
    vec![AbiFunction::payable(
        CONTRIBUTE_FUNCTION,
        vec![AbiParam::new("message", "string")],
    )]
}

/// Call sending `min_tribute` wei to the campaign at `yeeter_id`
///
/// # Errors
///
/// Fails when `yeeter_id` is not an address or `min_tribute` is not a
/// non-negative integer.
pub fn contribution_call(yeeter_id: &str, min_tribute: &str) -> chain::Result<ContractCall> {
    let to: Address = yeeter_id.parse()?;
    let value: Wei = min_tribute.parse()?;

    Ok(ContractCall {
        abi: contribute_abi(),
        function_name: CONTRIBUTE_FUNCTION.to_string(),
        chain_id: CHAIN_ID.to_string(),
        to,
        value,
        arg: CONTRIBUTION_MESSAGE.to_string(),
    })
}

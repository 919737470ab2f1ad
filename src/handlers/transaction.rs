//! Contribution transaction route

use crate::error::Result;
use axum::{extract::Path, Json};
use chain::TransactionResponse;
use yeet_core::contribution_call;

/// Transaction the wallet signs when "BANG IT" is pressed
pub async fn yeet_transaction(
    Path((yeeter_id, min_tribute)): Path<(String, String)>,
) -> Result<Json<TransactionResponse>> {
    let call = contribution_call(&yeeter_id, &min_tribute)?;
    tracing::info!(to = %call.to, value = %call.value, "contribution transaction requested");
    Ok(Json(call.to_response()?))
}

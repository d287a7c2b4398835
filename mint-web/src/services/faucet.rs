//! Devnet faucet client
//!
//! One request shape: ask the faucet to send a fixed amount of test coins to
//! an address. Errors are collapsed into strings at this boundary; the page
//! only needs to know whether the request worked.

use gloo_net::http::Request;
use shared::dto::faucet::{FaucetRequest, FaucetResponse};

use crate::utils::constants::FAUCET_URL;

/// Request test coins for `address` from the devnet faucet.
pub async fn request_devnet_gas(address: &str) -> Result<FaucetResponse, String> {
    let body = FaucetRequest::fixed_amount(address);

    let response = Request::post(FAUCET_URL)
        .json(&body)
        .map_err(|e| format!("Failed to encode faucet request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Faucet request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Faucet returned status {}", response.status()));
    }

    let parsed: FaucetResponse = response
        .json()
        .await
        .map_err(|e| format!("Malformed faucet response: {}", e))?;

    // The faucet reports some failures with a 200 and an error field
    if let Some(error) = &parsed.error {
        return Err(format!("Faucet error: {}", error));
    }

    Ok(parsed)
}

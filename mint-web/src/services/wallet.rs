//! Sui Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected browser wallet (`window.suiWallet`).
//! The extension owns keys, accounts, and signing; this module only calls
//! into it and converts results/errors into Rust types.

use js_sys::Reflect;
use shared::dto::transaction::{MoveCallTransaction, TransactionResponse};
use wasm_bindgen::prelude::*;

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasSuiWallet() {
    return typeof window.suiWallet !== 'undefined';
}

export async function connectSuiWallet() {
    const wallet = window.suiWallet;
    if (!wallet) {
        throw new Error('No Sui wallet extension found. Please install one and reload the page.');
    }

    if (typeof wallet.requestPermissions === 'function') {
        await wallet.requestPermissions();
    }

    let address = null;
    if (typeof wallet.getAccounts === 'function') {
        const accounts = await wallet.getAccounts();
        if (accounts && accounts.length > 0) {
            address = accounts[0];
        }
    }
    if (!address && wallet.address) {
        address = wallet.address;
    }
    if (!address) {
        throw new Error('Wallet connected but no account is available');
    }

    return { address: String(address) };
}

export function getSuiBalance() {
    const wallet = window.suiWallet;
    if (wallet && wallet.contents && wallet.contents.suiBalance !== undefined) {
        return String(wallet.contents.suiBalance);
    }
    return null;
}

export async function signAndExecuteSuiTransaction(tx) {
    const wallet = window.suiWallet;
    if (!wallet) {
        throw new Error('No Sui wallet connected');
    }
    return await wallet.signAndExecuteTransaction(tx);
}

export function disconnectSuiWallet() {
    const wallet = window.suiWallet;
    if (wallet && typeof wallet.disconnect === 'function') {
        wallet.disconnect();
    }
}
")]
extern "C" {
    /// Check whether a Sui wallet extension is injected
    pub fn hasSuiWallet() -> bool;

    /// Connect to the wallet; resolves to `{ address }`
    #[wasm_bindgen(catch)]
    pub async fn connectSuiWallet() -> Result<JsValue, JsValue>;

    /// Balance snapshot from the connector, in MIST (returns null when unknown)
    pub fn getSuiBalance() -> Option<String>;

    /// Submit a transaction descriptor for signing and execution
    #[wasm_bindgen(catch)]
    pub async fn signAndExecuteSuiTransaction(tx: &JsValue) -> Result<JsValue, JsValue>;

    /// Tear down the session; no-op when nothing is connected
    pub fn disconnectSuiWallet();
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state
#[derive(Clone, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected {
        address: String,
        balance_mist: Option<String>,
    },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn balance_mist(&self) -> Option<&str> {
        match self {
            WalletState::Connected { balance_mist, .. } => balance_mist.as_deref(),
            _ => None,
        }
    }

    /// Status label shown in the page header.
    pub fn label(&self) -> &'static str {
        match self {
            WalletState::Disconnected => "disconnected",
            WalletState::Connecting => "connecting",
            WalletState::Connected { .. } => "connected",
            WalletState::Error(_) => "error",
        }
    }
}

fn js_error_string(error: JsValue, context: &str) -> String {
    if let Some(message) = error.as_string() {
        message
    } else {
        format!("{}: {:?}", context, error)
    }
}

/// Connect to the injected wallet and return the account address.
pub async fn connect_wallet() -> Result<String, String> {
    match connectSuiWallet().await {
        Ok(result) => {
            let address_val = Reflect::get(&result, &JsValue::from_str("address"))
                .map_err(|_| "Failed to read address from connector response".to_string())?;
            address_val
                .as_string()
                .ok_or_else(|| "Connector address is not a string".to_string())
        }
        Err(e) => Err(js_error_string(e, "Connection error")),
    }
}

/// Read the connector's balance snapshot, in MIST.
pub fn balance_snapshot() -> Option<String> {
    getSuiBalance()
}

/// Sign and execute a `moveCall` transaction through the wallet.
pub async fn sign_and_execute(tx: &MoveCallTransaction) -> Result<TransactionResponse, String> {
    let tx_js = serde_wasm_bindgen::to_value(tx)
        .map_err(|e| format!("Failed to serialize transaction: {}", e))?;

    let response = signAndExecuteSuiTransaction(&tx_js)
        .await
        .map_err(|e| js_error_string(e, "Sign error"))?;

    serde_wasm_bindgen::from_value(response)
        .map_err(|e| format!("Malformed transaction response: {}", e))
}

/// Ask the connector to tear down the session. Safe to call when nothing is
/// connected: the optional-call guard lives in the JS binding.
pub fn disconnect_wallet() {
    disconnectSuiWallet();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_state_exposes_address_and_balance() {
        let state = WalletState::Connected {
            address: "0xabc".to_string(),
            balance_mist: Some("10000000".to_string()),
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("0xabc"));
        assert_eq!(state.balance_mist(), Some("10000000"));
        assert_eq!(state.label(), "connected");
    }

    #[test]
    fn other_states_expose_nothing() {
        for state in [
            WalletState::Disconnected,
            WalletState::Connecting,
            WalletState::Error("boom".to_string()),
        ] {
            assert!(!state.is_connected());
            assert_eq!(state.address(), None);
            assert_eq!(state.balance_mist(), None);
        }
    }
}

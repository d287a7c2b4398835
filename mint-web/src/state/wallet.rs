//! Wallet state management

use crate::services::wallet::WalletState;
use leptos::prelude::*;

/// Wallet context, provided at the app root and consumed by pages.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet
            .with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn balance_mist(&self) -> Option<String> {
        self.wallet
            .with(|state| state.balance_mist().map(|s| s.to_string()))
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, balance_mist: Option<String>) {
        self.wallet.set(WalletState::Connected {
            address,
            balance_mist,
        });
    }

    /// Refresh the balance snapshot; no-op unless connected.
    pub fn set_balance(&self, balance_mist: Option<String>) {
        self.wallet.update(|state| {
            if let WalletState::Connected {
                balance_mist: balance,
                ..
            } = state
            {
                *balance = balance_mist;
            }
        });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

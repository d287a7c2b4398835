//! Wallet onboarding page
//!
//! Connect the injected wallet, fund it from the devnet faucet, and mint a
//! sample NFT. The page only orchestrates external calls and renders their
//! results; signing and execution happen in the wallet and on chain.

use leptos::prelude::*;
use shared::dto::transaction::{MoveCallData, MoveCallTransaction};
use shared::utils::{explorer_object_url, truncate_address};

use crate::components::Banner;
use crate::services::faucet::request_devnet_gas;
use crate::services::wallet::{
    balance_snapshot, connect_wallet, disconnect_wallet, sign_and_execute, WalletState,
};
use crate::state::funding::FundingStatus;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{
    MINT_GAS_BUDGET, NFT_DESCRIPTION, NFT_IMAGE_URL, NFT_MINT_FUNCTION, NFT_MODULE, NFT_NAME,
    NFT_PACKAGE_ID,
};
use crate::utils::format::format_mist_to_sui;

/// The fixed `moveCall` descriptor for minting the sample NFT.
fn mint_transaction() -> MoveCallTransaction {
    MoveCallTransaction::move_call(MoveCallData {
        package_object_id: NFT_PACKAGE_ID.to_string(),
        module: NFT_MODULE.to_string(),
        function: NFT_MINT_FUNCTION.to_string(),
        type_arguments: vec![],
        arguments: vec![
            NFT_NAME.to_string(),
            NFT_DESCRIPTION.to_string(),
            NFT_IMAGE_URL.to_string(),
        ],
        gas_budget: MINT_GAS_BUDGET,
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (funding, set_funding) = signal(FundingStatus::default());
    let (nft_object_id, set_nft_object_id) = signal(None::<String>);

    let reset = move || {
        set_funding.update(|f| f.reset());
        set_nft_object_id.set(None);
    };

    let connect = move |_| {
        wallet_ctx.set_connecting();
        leptos::task::spawn_local(async move {
            match connect_wallet().await {
                Ok(address) => {
                    let balance = balance_snapshot();
                    log::info!("wallet connected: {}", address);
                    wallet_ctx.set_connected(address, balance);
                }
                Err(e) => {
                    log::warn!("wallet connection failed: {}", e);
                    wallet_ctx.set_error(e);
                }
            }
        });
    };

    let fund = move |_| {
        let Some(address) = wallet_ctx.address() else {
            return;
        };
        if funding.get_untracked().in_flight {
            return;
        }

        set_funding.update(|f| f.begin());
        leptos::task::spawn_local(async move {
            match request_devnet_gas(&address).await {
                Ok(_) => {
                    set_funding.update(|f| f.succeed());
                    // The connector's balance snapshot reflects the dispense
                    wallet_ctx.set_balance(balance_snapshot());
                }
                Err(e) => {
                    log::warn!("faucet request failed: {}", e);
                    set_funding.update(|f| f.fail());
                }
            }
        });
    };

    let mint = move |_| {
        if !wallet_ctx.is_connected() {
            return;
        }

        leptos::task::spawn_local(async move {
            let tx = mint_transaction();
            match sign_and_execute(&tx).await {
                Ok(response) => match response.created_object_id() {
                    Some(object_id) => {
                        log::info!("minted object {}", object_id);
                        set_nft_object_id.set(Some(object_id.to_string()));
                    }
                    None => {
                        log::warn!("mint response contained no creation event");
                    }
                },
                // Mint failures are logged only; the page stays interactive
                Err(e) => log::error!("mint failed: {}", e),
            }
        });
    };

    let disconnect = move |_| {
        reset();
        disconnect_wallet();
        wallet_ctx.disconnect();
    };

    view! {
        <div class="content-wrapper">
            <div class="status-line">
                "Status: " {move || wallet_ctx.wallet.with(|state| state.label())}
            </div>

            <div class="panel">
                {move || match wallet_ctx.wallet.get() {
                    WalletState::Connected { address, balance_mist } => {
                        let balance_display = balance_mist
                            .clone()
                            .unwrap_or_else(|| "unknown".to_string());
                        let balance_hint = balance_mist
                            .as_deref()
                            .and_then(|mist| mist.parse::<u64>().ok())
                            .map(|mist| format!("({} SUI)", format_mist_to_sui(mist)));

                        view! {
                            <div class="connected">
                                <h2>"Connected to wallet"</h2>
                                <code title=address.clone()>{truncate_address(&address)}</code>
                                <div class="balance">
                                    "Wallet balance: " <code>{balance_display}</code> " MIST "
                                    {balance_hint}
                                </div>
                                <div class="balance-hint">"(1 SUI is 10^9 MIST)"</div>

                                {move || funding.get().error.then(|| view! {
                                    <Banner tone="error" on_dismiss=Callback::new(move |_| reset())>
                                        "The faucet did not work. Please try again in a little bit."
                                    </Banner>
                                })}

                                <p>"First, fund this wallet from the devnet faucet:"</p>

                                {move || funding.get().success.then(|| view! {
                                    <Banner tone="success" on_dismiss=Callback::new(move |_| reset())>
                                        <b>"Success!"</b>
                                        " Your new balance is "
                                        {wallet_ctx.balance_mist().unwrap_or_else(|| "unknown".to_string())}
                                        " MIST!"
                                    </Banner>
                                })}

                                <button class="btn" on:click=fund>
                                    {move || if funding.get().in_flight { "Funding..." } else { "Fund" }}
                                </button>

                                <p>"then"</p>

                                {move || nft_object_id.get().map(|object_id| view! {
                                    <Banner tone="success" on_dismiss=Callback::new(move |_| reset())>
                                        <b>"Success!"</b>
                                        " "
                                        <a
                                            href=explorer_object_url(&object_id)
                                            target="_blank"
                                            rel="noreferrer"
                                        >
                                            "View your NFT on the devnet explorer"
                                        </a>
                                    </Banner>
                                })}

                                <button class="btn" on:click=mint>"Mint an NFT"</button>

                                <p>"or"</p>

                                <button class="btn" on:click=disconnect>"Sign Out"</button>
                            </div>
                        }.into_any()
                    }
                    WalletState::Connecting => view! {
                        <p>"Connecting wallet..."</p>
                    }.into_any(),
                    WalletState::Error(error) => view! {
                        <div>
                            <div class="banner banner-error">{error}</div>
                            <button class="btn" on:click=connect>"Connect"</button>
                        </div>
                    }.into_any(),
                    WalletState::Disconnected => view! {
                        <button class="btn" on:click=connect>"Connect"</button>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_descriptor_targets_the_sample_contract() {
        let tx = mint_transaction();
        assert_eq!(tx.kind, "moveCall");
        assert_eq!(tx.data.package_object_id, NFT_PACKAGE_ID);
        assert_eq!(tx.data.module, "devnet_nft");
        assert_eq!(tx.data.function, "mint");
        assert!(tx.data.type_arguments.is_empty());
        assert_eq!(tx.data.arguments.len(), 3);
        assert_eq!(tx.data.gas_budget, MINT_GAS_BUDGET);
    }
}

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::services::wallet_service;

#[derive(Clone, PartialEq)]
pub struct WalletState {
    pub balance: f64,
}

impl WalletState {
    pub fn empty() -> Self {
        Self { balance: 0.0 }
    }
}

pub struct UseWalletHandle {
    pub state: UseStateHandle<WalletState>,
    /// Fetch the balance for the given username
    pub fetch: Callback<String>,
    /// Add funds: (username, raw amount string as typed)
    pub add_funds: Callback<(String, String)>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_wallet() -> UseWalletHandle {
    let state = use_state(WalletState::empty);

    let fetch = {
        let state = state.clone();
        Callback::from(move |username: String| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wallet_service::fetch_wallet(&username).await {
                    Ok(response) => {
                        log::info!("💰 Balance de {}: {}", username, response.wallet_balance);
                        state.set(WalletState {
                            balance: response.wallet_balance,
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Error obteniendo balance: {}", e);
                    }
                }
            });
        })
    };

    // The amount goes to the backend as typed; it enforces > 0
    let add_funds = {
        let state = state.clone();
        Callback::from(move |(username, amount): (String, String)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wallet_service::add_funds(&username, &amount).await {
                    Ok(response) => {
                        state.set(WalletState {
                            balance: response.wallet_balance,
                        });
                        clear_amount_input();
                        if let Some(win) = window() {
                            let message = response
                                .message
                                .unwrap_or_else(|| "Wallet updated".to_string());
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error agregando fondos: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Failed to add funds");
                        }
                    }
                }
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(WalletState::empty());
        })
    };

    UseWalletHandle {
        state,
        fetch,
        add_funds,
        reset,
    }
}

fn clear_amount_input() {
    if let Some(input) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("add-funds-amount"))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

use web_sys::window;
use yew::prelude::*;

use crate::components::{LoginScreen, ReservedModal, SpotList, WalletPanel};
use crate::hooks::{use_auth, use_spots, use_wallet, WalletState};
use crate::models::{check_reservation, ReservedSpot};
use crate::services::{parking_service, wallet_service};

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();
    let spots = use_spots();
    let wallet = use_wallet();

    let reserved_spots = use_state(Vec::<ReservedSpot>::new);
    let show_reserved = use_state(|| false);

    // Initial board load
    {
        let refresh = spots.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // After login: reload the board and fetch the wallet (admin has none)
    {
        let refresh = spots.refresh.clone();
        let fetch_wallet = wallet.fetch.clone();
        use_effect_with((*auth.state).session.clone(), move |session| {
            if let Some(session) = session {
                refresh.emit(());
                if !session.is_admin {
                    fetch_wallet.emit(session.username.clone());
                }
            }
            || ()
        });
    }

    // Reserve flow: guard, reserve, optimistic flip, debit. A failed debit
    // leaves backend and UI diverged, so we reconcile by refetching both.
    let on_reserve = {
        let auth_state = auth.state.clone();
        let spots_state = spots.state.clone();
        let wallet_state = wallet.state.clone();
        let refresh = spots.refresh.clone();
        let fetch_wallet = wallet.fetch.clone();

        Callback::from(move |spot_id: i64| {
            let session = (*auth_state).session.clone();
            let Some(spot) = (*spots_state).spots.iter().find(|s| s.id == spot_id).cloned()
            else {
                return;
            };
            let pending = (*spots_state).pending.contains(&spot_id);
            let balance = (*wallet_state).balance;

            if let Err(denial) = check_reservation(session.as_ref(), &spot, balance, pending) {
                log::info!("🚫 Reserva rechazada: {}", denial);
                if let Some(win) = window() {
                    let _ = win.alert_with_message(&denial.to_string());
                }
                return;
            }
            let Some(session) = session else { return };
            let username = session.username;

            // Guard this spot until the request settles
            let mut current_state = (*spots_state).clone();
            current_state.pending.insert(spot_id);
            spots_state.set(current_state);

            let spots_state = spots_state.clone();
            let wallet_state = wallet_state.clone();
            let refresh = refresh.clone();
            let fetch_wallet = fetch_wallet.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match parking_service::reserve_spot(spot_id, &username).await {
                    Ok(_) => {
                        // Optimistic flip; the debit below is not acknowledged yet
                        let mut current_state = (*spots_state).clone();
                        current_state.pending.remove(&spot_id);
                        for s in current_state.spots.iter_mut() {
                            if s.id == spot_id {
                                s.reserved = true;
                                s.user = Some(username.clone());
                            }
                        }
                        spots_state.set(current_state);

                        match wallet_service::debit_funds(&username, spot.current_price).await {
                            Ok(response) => {
                                wallet_state.set(WalletState {
                                    balance: response.wallet_balance,
                                });
                                if let Some(win) = window() {
                                    let _ = win.alert_with_message(&format!(
                                        "Spot reserved successfully! Your new balance is ${}",
                                        response.wallet_balance
                                    ));
                                }
                            }
                            Err(e) => {
                                log::error!("❌ Error debitando wallet: {}", e);
                                if let Some(win) = window() {
                                    let _ = win.alert_with_message(
                                        "Spot reserved but the wallet charge failed. Reloading data.",
                                    );
                                }
                                // Converge to authoritative backend state
                                refresh.emit(());
                                fetch_wallet.emit(username.clone());
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error reservando spot {}: {}", spot_id, e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Failed to reserve spot");
                        }
                        let mut current_state = (*spots_state).clone();
                        current_state.pending.remove(&spot_id);
                        spots_state.set(current_state);
                    }
                }
            });
        })
    };

    // Reserved-spots check: empty list never opens the modal
    let on_check_reserved = {
        let auth_state = auth.state.clone();
        let reserved_spots = reserved_spots.clone();
        let show_reserved = show_reserved.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(session) = (*auth_state).session.clone() else {
                return;
            };
            let reserved_spots = reserved_spots.clone();
            let show_reserved = show_reserved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match parking_service::fetch_reserved_spots(&session.username).await {
                    Ok(spots) if spots.is_empty() => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("You have no reserved spots.");
                        }
                    }
                    Ok(spots) => {
                        reserved_spots.set(spots);
                        show_reserved.set(true);
                    }
                    Err(e) => {
                        log::error!("❌ Error obteniendo reservas: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Failed to fetch reserved spots.");
                        }
                    }
                }
            });
        })
    };

    let on_close_reserved = {
        let show_reserved = show_reserved.clone();
        Callback::from(move |_| show_reserved.set(false))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        let reset_wallet = wallet.reset.clone();
        let show_reserved = show_reserved.clone();
        Callback::from(move |_: MouseEvent| {
            show_reserved.set(false);
            reset_wallet.emit(());
            logout.emit(());
        })
    };

    let on_refresh = {
        let refresh = spots.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let on_add_spot = {
        let add_spot = spots.add_spot.clone();
        Callback::from(move |_: MouseEvent| add_spot.emit(()))
    };

    let on_add_funds = {
        let auth_state = auth.state.clone();
        let add_funds = wallet.add_funds.clone();
        Callback::from(move |amount: String| {
            if let Some(session) = (*auth_state).session.clone() {
                add_funds.emit((session.username, amount));
            }
        })
    };

    let spots_state = (*spots.state).clone();
    let auth_state = (*auth.state).clone();

    let Some(session) = auth_state.session else {
        return html! {
            <>
                <h1>{"Smart Parking"}</h1>
                <p class="peak-banner">{spots_state.banner.clone()}</p>
                <LoginScreen
                    on_login={auth.login.clone()}
                    on_create_account={auth.create_account.clone()}
                    error={auth_state.error}
                />
            </>
        };
    };

    let is_admin = session.is_admin;

    html! {
        <>
            <h1>{"Smart Parking"}</h1>
            <p class="peak-banner">{spots_state.banner.clone()}</p>

            {
                if !is_admin {
                    html! {
                        <WalletPanel
                            username={session.username.clone()}
                            balance={(*wallet.state).balance}
                            on_add_funds={on_add_funds}
                        />
                    }
                } else {
                    html! {
                        <div>
                            <button onclick={on_add_spot}>{"Add Parking Spot"}</button>
                        </div>
                    }
                }
            }

            <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
            {
                if !is_admin {
                    html! {
                        <button onclick={on_check_reserved}>{"Check Reserved"}</button>
                    }
                } else {
                    html! {}
                }
            }

            {
                if *show_reserved {
                    html! {
                        <ReservedModal
                            spots={(*reserved_spots).clone()}
                            on_close={on_close_reserved}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <div class="dashboard-header">
                <h2>{if is_admin { "Admin Dashboard" } else { "User Dashboard" }}</h2>
                <button class="btn-refresh" onclick={on_refresh}>{"Refresh"}</button>
            </div>

            <SpotList
                spots={spots_state.spots}
                is_admin={is_admin}
                pending={spots_state.pending}
                on_reserve={on_reserve}
                on_release={spots.release.clone()}
                on_delete={spots.delete_spot.clone()}
            />
        </>
    }
}

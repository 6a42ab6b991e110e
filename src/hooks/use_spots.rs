use std::collections::HashSet;

use web_sys::window;
use yew::prelude::*;

use crate::models::{NewSpotRequest, PricedSpot};
use crate::services::parking_service;
use crate::utils::pricing::PriceRegime;

#[derive(Clone, PartialEq)]
pub struct SpotsState {
    pub spots: Vec<PricedSpot>,
    pub banner: String,
    /// Spot ids with a reservation request in flight
    pub pending: HashSet<i64>,
}

impl SpotsState {
    pub fn empty() -> Self {
        Self {
            spots: Vec::new(),
            banner: String::new(),
            pending: HashSet::new(),
        }
    }
}

pub struct UseSpotsHandle {
    pub state: UseStateHandle<SpotsState>,
    pub refresh: Callback<()>,
    pub release: Callback<i64>,
    pub add_spot: Callback<()>,
    pub delete_spot: Callback<i64>,
}

#[hook]
pub fn use_spots() -> UseSpotsHandle {
    let state = use_state(SpotsState::empty);

    // Refresh callback: full replace, multiplier recomputed on every fetch.
    // Fetch errors keep the previous board instead of flashing it empty.
    let refresh = {
        let state = state.clone();
        Callback::from(move |_| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_spots(state).await;
            });
        })
    };

    // Release callback (admin): optimistic local flip to available
    let release = {
        let state = state.clone();
        Callback::from(move |spot_id: i64| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match parking_service::release_spot(spot_id).await {
                    Ok(_) => {
                        log::info!("🅿️ Spot {} liberado", spot_id);
                        let mut current_state = (*state).clone();
                        for spot in current_state.spots.iter_mut() {
                            if spot.id == spot_id {
                                spot.reserved = false;
                                spot.user = None;
                            }
                        }
                        state.set(current_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error liberando spot {}: {}", spot_id, e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Failed to release spot");
                        }
                    }
                }
            });
        })
    };

    // Add spot callback (admin): price via prompt, validated client-side
    let add_spot = {
        let state = state.clone();
        Callback::from(move |_| {
            let input = window()
                .and_then(|w| w.prompt_with_message("Enter the price for the new spot:").ok())
                .flatten()
                .unwrap_or_default();

            let Some(price) = NewSpotRequest::parse_price(&input) else {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Please enter a valid price greater than 0.");
                }
                return;
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match parking_service::create_spot(&NewSpotRequest::new(price)).await {
                    Ok(response) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&response.message);
                        }
                        load_spots(state).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error creando spot: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Error adding parking spot");
                        }
                    }
                }
            });
        })
    };

    // Delete spot callback (admin)
    let delete_spot = {
        let state = state.clone();
        Callback::from(move |spot_id: i64| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match parking_service::delete_spot(spot_id).await {
                    Ok(response) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&response.message);
                        }
                        load_spots(state).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando spot {}: {}", spot_id, e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Error deleting parking spot");
                        }
                    }
                }
            });
        })
    };

    UseSpotsHandle {
        state,
        refresh,
        release,
        add_spot,
        delete_spot,
    }
}

/// Fetch the inventory and replace the board, pricing every spot with the
/// regime of the current hour. In-flight reservation guards survive the
/// replace.
async fn load_spots(state: UseStateHandle<SpotsState>) {
    match parking_service::fetch_spots().await {
        Ok(records) => {
            let regime = PriceRegime::current();
            let multiplier = regime.multiplier();
            let spots: Vec<PricedSpot> = records
                .iter()
                .map(|record| PricedSpot::from_record(record, multiplier))
                .collect();

            log::info!("🅿️ {} spots cargados (x{})", spots.len(), multiplier);

            let mut current_state = (*state).clone();
            current_state.spots = spots;
            current_state.banner = regime.banner().to_string();
            state.set(current_state);
        }
        Err(e) => {
            // Stale board beats an empty one on transient errors
            log::error!("❌ Error obteniendo spots: {}", e);
        }
    }
}

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::models::Session;
use crate::services::{auth_service, dev_credentials};

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self {
            session: None,
            error: None,
        }
    }
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub create_account: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthState::logged_out);

    // Login callback
    let login = {
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Built-in credentials short-circuit the backend
                if dev_credentials::matches(&username, &password) {
                    log::info!("✅ Login via built-in credentials: {}", username);
                    state.set(AuthState {
                        session: Some(Session::new(&username)),
                        error: None,
                    });
                    return;
                }

                match auth_service::login(&username, &password).await {
                    Ok(response) if response.is_successful() => {
                        log::info!("✅ Login exitoso: {}", username);
                        state.set(AuthState {
                            session: Some(Session::new(&username)),
                            error: None,
                        });
                    }
                    Ok(response) => {
                        log::error!("❌ Login rechazado: {}", response.login);
                        let mut current_state = (*state).clone();
                        current_state.error = Some("Invalid credentials".to_string());
                        state.set(current_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        let mut current_state = (*state).clone();
                        current_state.error = Some("Invalid credentials".to_string());
                        state.set(current_state);
                    }
                }
            });
        })
    };

    // Create account callback
    let create_account = {
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::create_account(&username, &password).await {
                    Ok(()) => {
                        log::info!("✅ Cuenta creada: {}", username);
                        clear_login_inputs();
                        let mut current_state = (*state).clone();
                        current_state.error = None;
                        state.set(current_state);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Account created successfully!");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error creando cuenta: {}", e);
                        let mut current_state = (*state).clone();
                        current_state.error = Some("Username already exists.".to_string());
                        state.set(current_state);
                    }
                }
            });
        })
    };

    // Logout callback: unconditional, no server round-trip
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            clear_login_inputs();
            state.set(AuthState::logged_out());
        })
    };

    UseAuthHandle {
        state,
        login,
        create_account,
        logout,
    }
}

fn clear_login_inputs() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    for id in ["username", "password"] {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_state_has_no_session_and_no_error() {
        let state = AuthState::logged_out();
        assert!(state.session.is_none());
        assert!(state.error.is_none());
    }
}

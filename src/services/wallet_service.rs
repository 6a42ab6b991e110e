use gloo_net::http::Request;

use crate::models::WalletResponse;
use crate::utils::BACKEND_URL;

/// Fetch the wallet balance for a user
pub async fn fetch_wallet(username: &str) -> Result<WalletResponse, String> {
    let url = format!("{}/user/{}/getWallet", BACKEND_URL, username);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<WalletResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Add funds to a user's wallet. The amount is forwarded as the raw input
/// string; the backend rejects non-positive values.
pub async fn add_funds(username: &str, amount: &str) -> Result<WalletResponse, String> {
    let url = format!(
        "{}/user/{}/updateWallet?amount={}",
        BACKEND_URL, username, amount
    );
    let response = Request::put(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<WalletResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Debit a reservation charge from a user's wallet
pub async fn debit_funds(username: &str, amount: f64) -> Result<WalletResponse, String> {
    let url = format!(
        "{}/user/{}/minusFunds?amount={}",
        BACKEND_URL, username, amount
    );
    let response = Request::put(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<WalletResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

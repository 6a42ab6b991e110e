use gloo_net::http::Request;

use crate::models::LoginResponse;
use crate::utils::BACKEND_URL;

/// Authenticate against the backend
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    let url = format!(
        "{}/user/login?username={}&pswd={}",
        BACKEND_URL, username, password
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new user account
pub async fn create_account(username: &str, password: &str) -> Result<(), String> {
    let url = format!(
        "{}/user/create?username={}&password={}",
        BACKEND_URL, username, password
    );
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

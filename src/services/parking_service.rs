use gloo_net::http::Request;

use crate::models::{MessageResponse, NewSpotRequest, ReservedSpot, ReservedSpotsResponse, SpotRecord, SpotsResponse};
use crate::utils::BACKEND_URL;

/// Fetch the full spot inventory
pub async fn fetch_spots() -> Result<Vec<SpotRecord>, String> {
    let url = format!("{}/parking", BACKEND_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let spots_response = response
        .json::<SpotsResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(spots_response.spots)
}

/// Reserve a spot for the given user
pub async fn reserve_spot(spot_id: i64, username: &str) -> Result<MessageResponse, String> {
    let url = format!(
        "{}/parking/reserve/{}?username={}",
        BACKEND_URL, spot_id, username
    );
    let response = Request::put(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Release a reserved spot (admin action)
pub async fn release_spot(spot_id: i64) -> Result<MessageResponse, String> {
    let url = format!("{}/parking/release/{}", BACKEND_URL, spot_id);
    let response = Request::put(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new spot (admin action); the backend assigns the spot id
pub async fn create_spot(request: &NewSpotRequest) -> Result<MessageResponse, String> {
    let url = format!("{}/parking/create", BACKEND_URL);
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a spot (admin action)
pub async fn delete_spot(spot_id: i64) -> Result<MessageResponse, String> {
    let url = format!("{}/parking/delete/{}", BACKEND_URL, spot_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the spots reserved by the given user
pub async fn fetch_reserved_spots(username: &str) -> Result<Vec<ReservedSpot>, String> {
    let url = format!("{}/user/{}/parking_spots", BACKEND_URL, username);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let reserved_response = response
        .json::<ReservedSpotsResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(reserved_response.spots)
}

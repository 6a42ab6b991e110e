use serde::{Deserialize, Serialize};

use crate::utils::pricing::round2;

/// Parking spot document as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRecord {
    pub spot_id: i64,
    pub price: f64,
    pub availability: bool,
    #[serde(default)]
    pub user_spot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotsResponse {
    #[serde(rename = "Parking Spots")]
    pub spots: Vec<SpotRecord>,
}

/// Spot as shown on the board, with the time-of-day multiplier applied
#[derive(Debug, Clone, PartialEq)]
pub struct PricedSpot {
    pub id: i64,
    pub base_price: f64,
    pub current_price: f64,
    pub reserved: bool,
    pub user: Option<String>,
}

impl PricedSpot {
    pub fn from_record(record: &SpotRecord, multiplier: f64) -> Self {
        Self {
            id: record.spot_id,
            base_price: record.price,
            current_price: round2(record.price * multiplier),
            reserved: !record.availability,
            // The backend stores "" for spots nobody ever reserved
            user: record.user_spot.clone().filter(|u| !u.is_empty()),
        }
    }
}

/// Body of POST /parking/create; the backend assigns the real spot id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSpotRequest {
    pub spot_id: i64,
    pub price: f64,
    pub availability: bool,
    pub user_spot: String,
}

impl NewSpotRequest {
    pub fn new(price: f64) -> Self {
        Self {
            spot_id: 0,
            price,
            availability: true,
            user_spot: String::new(),
        }
    }

    /// Parse the admin's price input; only finite numbers > 0 are accepted
    pub fn parse_price(input: &str) -> Option<f64> {
        let price: f64 = input.trim().parse().ok()?;
        if price.is_finite() && price > 0.0 {
            Some(price)
        } else {
            None
        }
    }
}

/// Row of the "my reservations" listing; extra backend fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReservedSpot {
    pub spot_id: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReservedSpotsResponse {
    #[serde(rename = "Reserved Parking Spots")]
    pub spots: Vec<ReservedSpot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priced_spot_applies_multiplier_and_rounds() {
        let record = SpotRecord {
            spot_id: 1,
            price: 10.0,
            availability: true,
            user_spot: None,
        };

        // hour 9 is peak, so 10.00 becomes 15.00
        let spot = PricedSpot::from_record(&record, 1.5);
        assert_eq!(spot.id, 1);
        assert_eq!(spot.base_price, 10.0);
        assert_eq!(spot.current_price, 15.0);
        assert!(!spot.reserved);
        assert_eq!(spot.user, None);

        let spot = PricedSpot::from_record(&record, 1.0);
        assert_eq!(spot.current_price, 10.0);
    }

    #[test]
    fn priced_spot_rounds_to_two_decimals() {
        let record = SpotRecord {
            spot_id: 7,
            price: 12.34,
            availability: true,
            user_spot: None,
        };
        let spot = PricedSpot::from_record(&record, 1.5);
        assert_eq!(spot.current_price, 18.51);
    }

    #[test]
    fn priced_spot_takes_reservation_verbatim() {
        let record = SpotRecord {
            spot_id: 2,
            price: 8.0,
            availability: false,
            user_spot: Some("alice".to_string()),
        };
        let spot = PricedSpot::from_record(&record, 1.0);
        assert!(spot.reserved);
        assert_eq!(spot.user.as_deref(), Some("alice"));
    }

    #[test]
    fn empty_owner_string_means_no_owner() {
        let record = SpotRecord {
            spot_id: 3,
            price: 8.0,
            availability: true,
            user_spot: Some(String::new()),
        };
        assert_eq!(PricedSpot::from_record(&record, 1.0).user, None);
    }

    #[test]
    fn spots_response_deserializes_backend_payload() {
        let json = r#"{"Parking Spots": [
            {"spot_id": 1, "price": 10.0, "availability": true, "user_spot": null},
            {"spot_id": 2, "price": 12.5, "availability": false, "user_spot": "bob"}
        ]}"#;
        let response: SpotsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.spots.len(), 2);
        assert_eq!(response.spots[0].user_spot, None);
        assert_eq!(response.spots[1].user_spot.as_deref(), Some("bob"));
    }

    #[test]
    fn new_spot_request_payload() {
        let request = NewSpotRequest::new(20.0);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "spot_id": 0,
                "price": 20.0,
                "availability": true,
                "user_spot": ""
            })
        );
    }

    #[test]
    fn parse_price_rejects_invalid_input() {
        assert_eq!(NewSpotRequest::parse_price("20"), Some(20.0));
        assert_eq!(NewSpotRequest::parse_price(" 12.50 "), Some(12.5));
        assert_eq!(NewSpotRequest::parse_price("0"), None);
        assert_eq!(NewSpotRequest::parse_price("-5"), None);
        assert_eq!(NewSpotRequest::parse_price("abc"), None);
        assert_eq!(NewSpotRequest::parse_price(""), None);
        assert_eq!(NewSpotRequest::parse_price("inf"), None);
        assert_eq!(NewSpotRequest::parse_price("NaN"), None);
    }

    #[test]
    fn reserved_spots_response_ignores_extra_fields() {
        // GET /user/{username}/parking_spots returns full spot documents
        let json = r#"{"Reserved Parking Spots": [
            {"spot_id": 4, "price": 15.0, "availability": false, "user_spot": "alice"}
        ]}"#;
        let response: ReservedSpotsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.spots, vec![ReservedSpot { spot_id: 4, price: 15.0 }]);
    }
}

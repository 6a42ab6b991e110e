use std::fmt;

use crate::models::auth::Session;
use crate::models::spot::PricedSpot;

/// Why a reservation attempt was rejected before reaching the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveDenial {
    NotLoggedIn,
    AlreadyReserved,
    RequestPending,
    InsufficientFunds,
}

impl fmt::Display for ReserveDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ReserveDenial::NotLoggedIn => "User must be logged in to reserve a spot",
            ReserveDenial::AlreadyReserved => "This spot is already reserved",
            ReserveDenial::RequestPending => "A reservation for this spot is already in progress",
            ReserveDenial::InsufficientFunds => "Insufficient funds to reserve this spot",
        };
        write!(f, "{}", message)
    }
}

/// Client-side reservation guard. Checked before any network call; a denial
/// means no request is issued and no state changes.
pub fn check_reservation(
    session: Option<&Session>,
    spot: &PricedSpot,
    balance: f64,
    pending: bool,
) -> Result<(), ReserveDenial> {
    if session.is_none() {
        return Err(ReserveDenial::NotLoggedIn);
    }
    if spot.reserved {
        return Err(ReserveDenial::AlreadyReserved);
    }
    if pending {
        return Err(ReserveDenial::RequestPending);
    }
    if balance < spot.current_price {
        return Err(ReserveDenial::InsufficientFunds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(price: f64, reserved: bool) -> PricedSpot {
        PricedSpot {
            id: 1,
            base_price: price,
            current_price: price,
            reserved,
            user: None,
        }
    }

    #[test]
    fn rejects_without_session() {
        let result = check_reservation(None, &spot(10.0, false), 100.0, false);
        assert_eq!(result, Err(ReserveDenial::NotLoggedIn));
    }

    #[test]
    fn rejects_reserved_spot() {
        let session = Session::new("alice");
        let result = check_reservation(Some(&session), &spot(10.0, true), 100.0, false);
        assert_eq!(result, Err(ReserveDenial::AlreadyReserved));
    }

    #[test]
    fn rejects_while_request_in_flight() {
        let session = Session::new("alice");
        let result = check_reservation(Some(&session), &spot(10.0, false), 100.0, true);
        assert_eq!(result, Err(ReserveDenial::RequestPending));
    }

    #[test]
    fn rejects_insufficient_funds() {
        let session = Session::new("alice");
        let result = check_reservation(Some(&session), &spot(15.0, false), 10.0, false);
        assert_eq!(result, Err(ReserveDenial::InsufficientFunds));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Insufficient funds to reserve this spot"
        );
    }

    #[test]
    fn accepted_reservation_never_overdraws() {
        let session = Session::new("alice");
        for balance in [15.0, 15.01, 20.0, 1000.0] {
            let spot = spot(15.0, false);
            assert!(check_reservation(Some(&session), &spot, balance, false).is_ok());
            assert!(balance - spot.current_price >= 0.0);
        }
    }

    #[test]
    fn exact_balance_is_enough() {
        let session = Session::new("alice");
        assert!(check_reservation(Some(&session), &spot(15.0, false), 15.0, false).is_ok());
    }
}

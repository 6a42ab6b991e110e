pub mod auth;
pub mod reservation;
pub mod spot;
pub mod wallet;

pub use auth::{LoginResponse, Session};
pub use reservation::{check_reservation, ReserveDenial};
pub use spot::{MessageResponse, NewSpotRequest, PricedSpot, ReservedSpot, ReservedSpotsResponse, SpotRecord, SpotsResponse};
pub use wallet::WalletResponse;

pub mod use_auth;
pub mod use_spots;
pub mod use_wallet;

pub use use_auth::{use_auth, AuthState, UseAuthHandle};
pub use use_spots::{use_spots, SpotsState, UseSpotsHandle};
pub use use_wallet::{use_wallet, UseWalletHandle, WalletState};

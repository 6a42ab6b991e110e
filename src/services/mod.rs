pub mod auth_service;
pub mod dev_credentials;
pub mod parking_service;
pub mod wallet_service;

pub use auth_service::*;
pub use parking_service::*;
pub use wallet_service::*;

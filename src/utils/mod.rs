pub mod constants;
pub mod pricing;

pub use constants::*;

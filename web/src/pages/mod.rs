//! Top-level routed screens.

pub mod community;
pub mod insights;
pub mod login;
pub mod map;
pub mod reports;

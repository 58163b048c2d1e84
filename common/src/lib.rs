//! Shared model and state for the VanMitra FRA claims dashboard.
//!
//! Everything here is plain Rust with no browser dependency, so the same
//! types drive the server-rendered HTML, the hydrated WASM client and the
//! unit tests.

pub mod chart;
pub mod community;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filters;
pub mod format;
pub mod insight;
pub mod layers;
pub mod map_data;
pub mod projection;
pub mod recorder;
pub mod report;
pub mod session;
pub mod upload;
pub mod village;

pub use config::DashboardConfig;
pub use dataset::Dataset;
pub use error::{ConfigError, DataError, LoginError};

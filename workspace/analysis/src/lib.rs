//! Domain computation for the portal: sentiment polarity scoring, the
//! static stock catalog, and the toy price projection.
//!
//! Everything in this crate is pure and synchronous so it can run both in
//! the backend and in the WASM frontend.

pub mod projection;
pub mod sentiment;
pub mod stocks;

pub use projection::{project_prices, PROJECTION_DAYS, VOLATILITY_RATIO};
pub use sentiment::PolarityAnalyzer;
pub use stocks::{search, Stock, CATALOG};

//! Toy 7-day price projection.
//!
//! This is a random walk around a fixed snapshot price, not a forecast:
//! each step draws a direction and a jitter from a seeded PRNG. Callers
//! pass the seed explicitly, so a series can be reproduced under test
//! while the UI draws a fresh seed per selection.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Number of projected days.
pub const PROJECTION_DAYS: usize = 7;

/// Per-step volatility as a fraction of the base price.
pub const VOLATILITY_RATIO: f64 = 0.02;

/// Project a price series from a base price.
///
/// For step `i` the value is
/// `base + sign * volatility * (i + 1) + jitter`, where `sign` is a fair
/// coin flip, `volatility` is [`VOLATILITY_RATIO`] of the base price and
/// `jitter` is uniform in `[-0.5, 0.5] * volatility`. Every point is
/// therefore within `base ± volatility * (i + 1.5)`.
pub fn project_prices(base_price: f64, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let volatility = base_price * VOLATILITY_RATIO;

    let series: Vec<f64> = (0..PROJECTION_DAYS)
        .map(|i| {
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let jitter = (rng.r#gen::<f64>() - 0.5) * volatility;
            base_price + sign * volatility * (i as f64 + 1.0) + jitter
        })
        .collect();

    debug!(base_price, seed, "generated projection series");
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::CATALOG;

    #[test]
    fn every_catalog_stock_projects_seven_points_within_bounds() {
        for (index, stock) in CATALOG.iter().enumerate() {
            let series = project_prices(stock.current_price, index as u64);
            assert_eq!(series.len(), PROJECTION_DAYS, "{}", stock.symbol);

            let volatility = stock.current_price * VOLATILITY_RATIO;
            for (i, value) in series.iter().enumerate() {
                let reach = volatility * (i as f64 + 1.5);
                assert!(
                    (value - stock.current_price).abs() <= reach,
                    "{} day {} out of range: {}",
                    stock.symbol,
                    i,
                    value
                );
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let a = project_prices(1687.10, 42);
        let b = project_prices(1687.10, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = project_prices(1687.10, 1);
        let b = project_prices(1687.10, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn series_depends_only_on_the_given_base_price() {
        // Two stocks sharing a base price produce identical series for the
        // same seed; nothing else about the catalog leaks in.
        let a = project_prices(1000.0, 7);
        let b = project_prices(1000.0, 7);
        assert_eq!(a, b);

        let other = project_prices(7000.0, 7);
        assert_ne!(a, other);
    }

    #[test]
    fn zero_base_price_degenerates_to_zero_series() {
        let series = project_prices(0.0, 3);
        assert!(series.iter().all(|v| *v == 0.0));
    }
}

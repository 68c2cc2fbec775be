//! Curve configuration constants. All monetary values in whole tokens.

/// Cost of the very first collection (index 0), before any decay.
///
/// Fixed for an interactive session; only the minimum cost and the decay
/// factor are tunable.
pub const INITIAL_COST: f64 = 20_000.0;

/// Default asymptotic cost floor.
pub const DEFAULT_MIN_COST: f64 = 100.0;
/// Lowest selectable minimum cost.
pub const MIN_COST_MIN: f64 = 50.0;
/// Highest selectable minimum cost.
pub const MIN_COST_MAX: f64 = 1000.0;
/// Slider step for the minimum cost.
pub const MIN_COST_STEP: f64 = 50.0;

/// Default decay factor.
pub const DEFAULT_DECAY_FACTOR: f64 = 0.1;
/// Lowest selectable decay factor.
pub const DECAY_FACTOR_MIN: f64 = 0.01;
/// Highest selectable decay factor.
pub const DECAY_FACTOR_MAX: f64 = 0.3;
/// Slider step for the decay factor.
pub const DECAY_FACTOR_STEP: f64 = 0.01;

/// Highest collection index in the generated series (inclusive).
pub const MAX_COLLECTIONS: u32 = 50;

/// Number of points in a generated series: indices `0..=MAX_COLLECTIONS`.
pub const SERIES_LEN: usize = MAX_COLLECTIONS as usize + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_len_covers_inclusive_range() {
        assert_eq!(SERIES_LEN, 51);
    }

    #[test]
    fn defaults_within_bounds() {
        assert!(DEFAULT_MIN_COST >= MIN_COST_MIN && DEFAULT_MIN_COST <= MIN_COST_MAX);
        assert!(
            DEFAULT_DECAY_FACTOR >= DECAY_FACTOR_MIN && DEFAULT_DECAY_FACTOR <= DECAY_FACTOR_MAX
        );
    }

    #[test]
    fn min_cost_never_exceeds_initial() {
        // The formula tolerates min > initial, but the configured slider
        // range keeps the variable portion positive.
        assert!(MIN_COST_MAX <= INITIAL_COST);
    }

    #[test]
    fn steps_divide_ranges_evenly() {
        let min_cost_steps = (MIN_COST_MAX - MIN_COST_MIN) / MIN_COST_STEP;
        assert!((min_cost_steps - min_cost_steps.round()).abs() < 1e-9);

        let factor_steps = (DECAY_FACTOR_MAX - DECAY_FACTOR_MIN) / DECAY_FACTOR_STEP;
        assert!((factor_steps - factor_steps.round()).abs() < 1e-9);
    }
}

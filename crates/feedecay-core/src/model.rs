//! The cost model: exponential decay from the initial cost toward the floor.
//!
//! `cost(n) = round((initial − min) · e^(−factor · n) + min)`
//!
//! Total over all finite inputs, pure, and validation-free: callers that take
//! user input clamp or validate before reaching this function. For
//! `decay_factor ≥ 0` and `initial ≥ min` the result never drops below
//! `round(min)`, and a decay factor of exactly 0 yields a constant
//! `round(initial)` — the variable portion simply never decays.

use crate::params::CurveParams;

/// Cost in whole tokens of the collection at index `collections`.
///
/// Ties round away from zero; every cost in the configured domain is
/// positive, so this matches rounding half-up.
pub fn collection_cost(
    collections: u32,
    initial_cost: f64,
    min_cost: f64,
    decay_factor: f64,
) -> i64 {
    let decay = (-decay_factor * collections as f64).exp();
    let variable_portion = initial_cost - min_cost;
    (variable_portion * decay + min_cost).round() as i64
}

/// [`collection_cost`] with the parameters taken from a [`CurveParams`].
pub fn cost_at(collections: u32, params: &CurveParams) -> i64 {
    collection_cost(
        collections,
        params.initial_cost,
        params.min_cost,
        params.decay_factor,
    )
}

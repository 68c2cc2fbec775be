//! Curve parameters.
//!
//! [`CurveParams`] is an immutable value struct: interactive surfaces build a
//! fresh copy on every change and hand it to the pure recompute path. Nothing
//! in the core mutates parameters in place.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DECAY_FACTOR_MAX, DECAY_FACTOR_MIN, DEFAULT_DECAY_FACTOR, DEFAULT_MIN_COST, INITIAL_COST,
    MIN_COST_MAX, MIN_COST_MIN,
};
use crate::error::ParamsError;

/// The three inputs of the cost model.
///
/// `initial_cost` is fixed per session; `min_cost` and `decay_factor` are the
/// tunables exposed by the sliders. The model assumes `min_cost ≤ initial_cost`
/// and `decay_factor ≥ 0` but does not enforce either — enforcement belongs to
/// the boundary that accepts user input ([`CurveParams::clamped`] or
/// [`CurveParams::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    pub initial_cost: f64,
    pub min_cost: f64,
    pub decay_factor: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            initial_cost: INITIAL_COST,
            min_cost: DEFAULT_MIN_COST,
            decay_factor: DEFAULT_DECAY_FACTOR,
        }
    }
}

impl CurveParams {
    /// Parameters with the given tunables and the fixed initial cost.
    pub fn new(min_cost: f64, decay_factor: f64) -> Self {
        Self {
            initial_cost: INITIAL_COST,
            min_cost,
            decay_factor,
        }
    }

    /// Copy with both tunables clamped into their configured ranges.
    ///
    /// This is what a slider does to out-of-range input: pull it to the
    /// nearest bound. NaN tunables clamp to the lower bound so the result is
    /// always usable. `initial_cost` has no tunable range and passes through.
    pub fn clamped(self) -> Self {
        Self {
            initial_cost: self.initial_cost,
            min_cost: clamp_or_min(self.min_cost, MIN_COST_MIN, MIN_COST_MAX),
            decay_factor: clamp_or_min(self.decay_factor, DECAY_FACTOR_MIN, DECAY_FACTOR_MAX),
        }
    }

    /// Reject tunables outside their configured ranges.
    ///
    /// Used where silent clamping would hide a caller mistake (the CLI).
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_range("min_cost", self.min_cost, MIN_COST_MIN, MIN_COST_MAX)?;
        check_range(
            "decay_factor",
            self.decay_factor,
            DECAY_FACTOR_MIN,
            DECAY_FACTOR_MAX,
        )?;
        if !self.initial_cost.is_finite() {
            return Err(ParamsError::NotFinite {
                field: "initial_cost",
            });
        }
        Ok(())
    }
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ParamsError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters() {
        let p = CurveParams::default();
        assert_eq!(p.initial_cost, 20_000.0);
        assert_eq!(p.min_cost, 100.0);
        assert_eq!(p.decay_factor, 0.1);
    }

    #[test]
    fn default_validates() {
        CurveParams::default().validate().unwrap();
    }

    #[test]
    fn clamp_pulls_tunables_to_bounds() {
        let p = CurveParams::new(10_000.0, 5.0).clamped();
        assert_eq!(p.min_cost, MIN_COST_MAX);
        assert_eq!(p.decay_factor, DECAY_FACTOR_MAX);

        let p = CurveParams::new(0.0, -1.0).clamped();
        assert_eq!(p.min_cost, MIN_COST_MIN);
        assert_eq!(p.decay_factor, DECAY_FACTOR_MIN);
    }

    #[test]
    fn clamp_leaves_in_range_values_alone() {
        let p = CurveParams::new(250.0, 0.05);
        assert_eq!(p.clamped(), p);
    }

    #[test]
    fn clamp_maps_nan_to_lower_bound() {
        let p = CurveParams::new(f64::NAN, f64::NAN).clamped();
        assert_eq!(p.min_cost, MIN_COST_MIN);
        assert_eq!(p.decay_factor, DECAY_FACTOR_MIN);
    }

    #[test]
    fn validate_rejects_out_of_range_min_cost() {
        let err = CurveParams::new(49.0, 0.1).validate().unwrap_err();
        assert!(matches!(
            err,
            ParamsError::OutOfRange {
                field: "min_cost",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_decay_factor() {
        let err = CurveParams::new(100.0, 0.31).validate().unwrap_err();
        assert!(matches!(
            err,
            ParamsError::OutOfRange {
                field: "decay_factor",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_non_finite() {
        let err = CurveParams::new(f64::INFINITY, 0.1).validate().unwrap_err();
        assert!(matches!(err, ParamsError::NotFinite { field: "min_cost" }));

        let mut p = CurveParams::default();
        p.initial_cost = f64::NAN;
        let err = p.validate().unwrap_err();
        assert!(matches!(
            err,
            ParamsError::NotFinite {
                field: "initial_cost"
            }
        ));
    }

    #[test]
    fn validate_accepts_range_endpoints() {
        CurveParams::new(MIN_COST_MIN, DECAY_FACTOR_MIN)
            .validate()
            .unwrap();
        CurveParams::new(MIN_COST_MAX, DECAY_FACTOR_MAX)
            .validate()
            .unwrap();
    }

    #[test]
    fn serde_round_trip() {
        let p = CurveParams::new(350.0, 0.22);
        let json = serde_json::to_string(&p).unwrap();
        let back: CurveParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}

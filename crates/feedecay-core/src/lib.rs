//! # feedecay-core — Fee-collection cost decay model.
//!
//! This crate implements the cost curve behind the fee-collection decay
//! visualizer:
//! - **Cost model**: `cost(n) = round((initial − min) · e^(−factor·n) + min)`,
//!   a total pure function of the collection index and three parameters.
//! - **Series generation**: one pass over the fixed index range `0..=50`,
//!   producing the 51 ordered points the chart renders.
//! - **Parameter handling**: an immutable [`CurveParams`] value struct with
//!   boundary clamping and validation for the tunable fields.

pub mod constants;
pub mod error;
pub mod model;
pub mod params;
pub mod series;

pub use error::ParamsError;
pub use model::{collection_cost, cost_at};
pub use params::CurveParams;
pub use series::{generate_series, SeriesPoint};

//! Series generation: the 51 chart points for a given parameter set.
//!
//! A series is recomputed from scratch on every parameter change and owned by
//! the caller that asked for it. Nothing is cached or diffed; 51 evaluations
//! of a closed-form expression are cheap enough to run on every input event.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_COLLECTIONS, SERIES_LEN};
use crate::model::cost_at;
use crate::params::CurveParams;

/// One chart point. Field names are the wire format the renderer consumes:
/// `collections` on the x-axis, `cost` (whole tokens) on the y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub collections: u32,
    pub cost: i64,
}

/// Evaluate the cost model over `0..=MAX_COLLECTIONS`.
///
/// Always returns exactly [`SERIES_LEN`] points in ascending index order.
/// Pure function of its input: identical parameters yield identical output.
pub fn generate_series(params: &CurveParams) -> Vec<SeriesPoint> {
    let mut points = Vec::with_capacity(SERIES_LEN);
    for collections in 0..=MAX_COLLECTIONS {
        points.push(SeriesPoint {
            collections,
            cost: cost_at(collections, params),
        });
    }
    points
}

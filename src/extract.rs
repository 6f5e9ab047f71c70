//! Dimension extraction from box-like solids.
//!
//! A rectangular box has twelve boundary edges, four along each axis. The
//! extractor walks the first twelve, decides which axis each one runs along
//! and records its length (in millimeters) in that axis' slot.

use tracing::{debug, instrument};

use crate::error::{MassclassError, Result};
use crate::types::{Axis, EdgeGeometry, FeatureVector};
use crate::units::UnitConverter;

/// Number of boundary edges of a hexahedron.
pub const BOX_EDGE_COUNT: usize = 12;

/// Endpoint coordinates are compared at 1/100 of the internal unit.
const AXIS_COMPARE_SCALE: f64 = 100.0;

/// Axis an edge varies along.
///
/// X is checked first, then Y. An edge whose X and Y endpoints agree is
/// assumed to run along Z; this is a tie-break, not a geometric check.
pub fn edge_axis<E: EdgeGeometry + ?Sized>(edge: &E) -> Axis {
    let (start, end) = (edge.start(), edge.end());
    if quantize_coord(start.x) != quantize_coord(end.x) {
        Axis::X
    } else if quantize_coord(start.y) != quantize_coord(end.y) {
        Axis::Y
    } else {
        Axis::Z
    }
}

// Ties round to even, matching the host's default midpoint rounding.
fn quantize_coord(value: f64) -> f64 {
    (value * AXIS_COMPARE_SCALE).round_ties_even()
}

/// Extract the X, Y and Z lengths of a box-like solid from its boundary edges.
///
/// Only the first [`BOX_EDGE_COUNT`] edges are read; fewer is an
/// [`MassclassError::OutOfRange`] error. An axis no edge runs along stays 0.
#[instrument(skip_all, fields(edges = edges.len()))]
pub fn extract<E, C>(edges: &[E], converter: &C) -> Result<FeatureVector>
where
    E: EdgeGeometry,
    C: UnitConverter + ?Sized,
{
    if edges.len() < BOX_EDGE_COUNT {
        return Err(MassclassError::OutOfRange {
            required: BOX_EDGE_COUNT,
            actual: edges.len(),
        });
    }

    let mut lengths = [0.0_f64; 3];
    for (i, edge) in edges.iter().take(BOX_EDGE_COUNT).enumerate() {
        let length = converter.to_millimeters(edge.length());
        let axis = edge_axis(edge);
        // NOTE: a later parallel edge overwrites an earlier one, so only the last
        // edge per axis counts. Kept for compatibility with the trained model's
        // inputs; averaging the four parallel edges needs sign-off first.
        lengths[axis.index()] = length;
        debug!(edge = i, ?axis, length_mm = length, "edge measured");
    }

    Ok(FeatureVector::from(lengths))
}

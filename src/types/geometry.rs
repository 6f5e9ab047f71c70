//! Boundary geometry of a solid.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point in host model space, in the host's internal linear unit.
pub type Point3 = DVec3;

/// Coordinate axis an edge runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Slot of this axis in a [`FeatureVector`](super::FeatureVector).
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Read-only view of a boundary edge, as supplied by the host geometry kernel.
pub trait EdgeGeometry {
    /// Start point of the edge.
    fn start(&self) -> Point3;

    /// End point of the edge.
    fn end(&self) -> Point3;

    /// Curve length of the edge, in the host's internal unit.
    fn length(&self) -> f64;
}

impl<T: EdgeGeometry + ?Sized> EdgeGeometry for &T {
    fn start(&self) -> Point3 {
        (**self).start()
    }

    fn end(&self) -> Point3 {
        (**self).end()
    }

    fn length(&self) -> f64 {
        (**self).length()
    }
}

/// A straight boundary edge with its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Start point of the edge
    pub start: Point3,
    /// End point of the edge
    pub end: Point3,
    /// Length of the edge
    pub length: f64,
}

impl Edge {
    /// Create a straight edge; the length is the distance between the endpoints.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
        }
    }

    /// Create an edge whose curve length is reported separately by the host.
    pub fn with_length(start: Point3, end: Point3, length: f64) -> Self {
        Self { start, end, length }
    }
}

impl EdgeGeometry for Edge {
    fn start(&self) -> Point3 {
        self.start
    }

    fn end(&self) -> Point3 {
        self.end
    }

    fn length(&self) -> f64 {
        self.length
    }
}

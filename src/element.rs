//! Element geometry as exported by the host application.
//!
//! An element carries a category name and the solids of its fine-detail
//! geometry. JSON layout:
//!
//! ```json
//! {
//!   "category": "Mass",
//!   "solids": [
//!     { "edges": [ { "start": [0, 0, 0], "end": [10, 0, 0], "length": 10 } ] }
//!   ]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{MassclassError, Result};
use crate::types::{Edge, Point3};

/// Category accepted when none is configured.
pub const DEFAULT_CATEGORY: &str = "Mass";

/// A solid and its boundary edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Geometry of one selected element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementGeometry {
    /// Host category name (e.g. "Mass").
    pub category: String,
    #[serde(default)]
    pub solids: Vec<Solid>,
}

impl ElementGeometry {
    pub fn new(category: impl Into<String>, solids: Vec<Solid>) -> Self {
        Self {
            category: category.into(),
            solids,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Axis-aligned box with its minimum corner at `origin`, as twelve edges.
    ///
    /// Edge order: four bottom edges, four top edges, four verticals.
    pub fn box_from_dimensions(
        category: impl Into<String>,
        origin: Point3,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Self {
        let corner = |x: f64, y: f64, z: f64| origin + Point3::new(x, y, z);
        let ring = |z: f64| {
            [
                corner(0.0, 0.0, z),
                corner(dx, 0.0, z),
                corner(dx, dy, z),
                corner(0.0, dy, z),
            ]
        };
        let (bottom, top) = (ring(0.0), ring(dz));

        let mut edges = Vec::with_capacity(12);
        for face in [bottom, top] {
            for i in 0..4 {
                edges.push(Edge::new(face[i], face[(i + 1) % 4]));
            }
        }
        for i in 0..4 {
            edges.push(Edge::new(bottom[i], top[i]));
        }

        Self::new(category, vec![Solid { edges }])
    }

    /// Boundary edges of the element.
    ///
    /// When several solids have edges the last one is used; solids without
    /// edges are skipped. Empty if no solid has edges.
    pub fn boundary_edges(&self) -> &[Edge] {
        self.solids
            .iter()
            .rev()
            .find(|s| !s.edges.is_empty())
            .map(|s| s.edges.as_slice())
            .unwrap_or(&[])
    }

    /// Fail unless the element's category is one of `accepted`.
    pub fn ensure_category<S: AsRef<str>>(&self, accepted: &[S]) -> Result<()> {
        if accepted.iter().any(|c| c.as_ref() == self.category) {
            Ok(())
        } else {
            Err(MassclassError::UnsupportedCategory(self.category.clone()))
        }
    }
}

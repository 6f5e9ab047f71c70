//! Structural element categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category predicted for a structural element.
///
/// The discriminant is the index of the category in the model's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Wall = 0,
    Floor = 1,
    Column = 2,
    Beam = 3,
}

impl ElementCategory {
    /// All categories in model output order.
    pub const ALL: [ElementCategory; 4] = [Self::Wall, Self::Floor, Self::Column, Self::Beam];

    /// Number of categories the model scores.
    pub const COUNT: usize = Self::ALL.len();

    /// Category at the given model output index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Model output index of this category.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Column => "column",
            Self::Beam => "beam",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

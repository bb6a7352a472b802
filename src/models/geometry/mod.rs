// Geometry model
// Horizontal pixel placement of blocks on the grid

use serde::{Deserialize, Serialize};

/// Left offset and width of a block, in pixels from the start of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub offset: f64,
    pub width: f64,
}

impl Geometry {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    pub fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.width.is_finite()
    }
}

/// Pixels trimmed from each side of a block so neighbouring blocks show a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockInset {
    pub left: f64,
    pub right: f64,
}

impl BlockInset {
    pub const NONE: BlockInset = BlockInset { left: 0.0, right: 0.0 };

    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

impl Default for BlockInset {
    fn default() -> Self {
        Self { left: 3.0, right: 6.0 }
    }
}

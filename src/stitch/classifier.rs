//! Coordinate-to-part classification for the 6x6 output grid
//!
//! Maps every cell of a frame's output tiling onto one of 20 canonical part
//! identities. The mapping is symmetric by design: interior cells always draw
//! edgeless art, edge cells draw the matching border art, and corners keep the
//! plain texture's own corners, so a repeating 3x3 tiling of virtual blocks
//! reads as seamlessly connected.

use crate::io::configuration::GRID_DIM;
use crate::io::error::{Result, StitchError};
use ndarray::Array2;

/// Highest valid cell coordinate on either axis
const MAX_CELL: u32 = GRID_DIM - 1;

/// Which source band a part is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartCategory {
    /// Quadrant of the plain block texture, used at the grid corners
    Regular,
    /// Interior variant carrying no edge art
    Edgeless,
    /// Left/right edge variant
    Vertical,
    /// Top/bottom edge variant
    Horizontal,
    /// Variant carrying only corner art
    CornerOnly,
}

impl PartCategory {
    /// All categories in part-buffer order
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::Edgeless,
        Self::Vertical,
        Self::Horizontal,
        Self::CornerOnly,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Regular => 0,
            Self::Edgeless => 1,
            Self::Vertical => 2,
            Self::Horizontal => 3,
            Self::CornerOnly => 4,
        }
    }
}

/// Upper or lower half of a quadrant pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalHalf {
    /// Upper quadrant row
    Top,
    /// Lower quadrant row
    Bottom,
}

impl VerticalHalf {
    /// Pixel offset of this half within its quadrant pair
    pub const fn offset(self, part_size: u32) -> u32 {
        match self {
            Self::Top => 0,
            Self::Bottom => part_size,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }
}

/// Left or right half of a quadrant pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalHalf {
    /// Left quadrant column
    Left,
    /// Right quadrant column
    Right,
}

impl HorizontalHalf {
    /// Pixel offset of this half within its quadrant pair
    pub const fn offset(self, part_size: u32) -> u32 {
        match self {
            Self::Left => 0,
            Self::Right => part_size,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Identity of one extracted part: source band plus quadrant halves
///
/// The three axes are orthogonal, giving 5 x 2 x 2 = 20 concrete identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartIdentity {
    /// Source band the part is cut from
    pub category: PartCategory,
    /// Upper or lower quadrant row
    pub vertical: VerticalHalf,
    /// Left or right quadrant column
    pub horizontal: HorizontalHalf,
}

impl PartIdentity {
    /// Number of distinct part identities
    pub const COUNT: usize = 20;

    /// Dense index of this identity in `0..COUNT`
    ///
    /// Collision-free: each (category, vertical, horizontal) triple maps to
    /// its own slot in the part arena.
    pub const fn index(self) -> usize {
        self.category.index() * 4 + self.vertical.index() * 2 + self.horizontal.index()
    }

    /// Iterate all identities in index order
    pub fn all() -> impl Iterator<Item = Self> {
        PartCategory::ALL.into_iter().flat_map(|category| {
            [VerticalHalf::Top, VerticalHalf::Bottom]
                .into_iter()
                .flat_map(move |vertical| {
                    [HorizontalHalf::Left, HorizontalHalf::Right]
                        .into_iter()
                        .map(move |horizontal| Self {
                            category,
                            vertical,
                            horizontal,
                        })
                })
        })
    }
}

/// Classify one cell of the 6x6 output grid
///
/// Corners take the plain texture's own quadrants, non-corner edge cells take
/// the vertical or horizontal border variants, and the interior takes the
/// edgeless variant. Half parity follows the cell coordinates so neighboring
/// cells continue each other's art.
///
/// # Errors
///
/// Returns [`StitchError::OutOfRangeCoordinate`] when either coordinate is
/// outside `[0, 5]`.
pub const fn classify(x: u32, y: u32) -> Result<PartIdentity> {
    if x > MAX_CELL || y > MAX_CELL {
        return Err(StitchError::OutOfRangeCoordinate { x, y });
    }
    Ok(classify_in_range(x, y))
}

const fn classify_in_range(x: u32, y: u32) -> PartIdentity {
    let edge_x = x == 0 || x == MAX_CELL;
    let edge_y = y == 0 || y == MAX_CELL;

    let category = match (edge_x, edge_y) {
        (true, true) => PartCategory::Regular,
        (true, false) => PartCategory::Vertical,
        (false, true) => PartCategory::Horizontal,
        (false, false) => PartCategory::Edgeless,
    };

    let vertical = if y % 2 == 0 {
        VerticalHalf::Top
    } else {
        VerticalHalf::Bottom
    };

    let horizontal = if x % 2 == 0 {
        HorizontalHalf::Left
    } else {
        HorizontalHalf::Right
    };

    PartIdentity {
        category,
        vertical,
        horizontal,
    }
}

/// Part identities for the full 6x6 grid, indexed `(row, col)`
///
/// Computed once per stitch and reused for every animation frame, since
/// classification doesn't depend on the frame index.
pub fn layout() -> Array2<PartIdentity> {
    Array2::from_shape_fn((GRID_DIM as usize, GRID_DIM as usize), |(row, col)| {
        classify_in_range(col as u32, row as u32)
    })
}

//! Core value types: tiles, grid cells, orientations, chain ends.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// An immutable domino tile. `id` is the caller's stable identity used for
/// duplicate detection; the standard set numbers tiles `0..28`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: u8,
    pub top_pip: u8,
    pub bottom_pip: u8,
}

impl Tile {
    pub fn new(id: u8, top_pip: u8, bottom_pip: u8) -> Self {
        debug_assert!(top_pip <= MAX_PIP && bottom_pip <= MAX_PIP);
        Self {
            id,
            top_pip,
            bottom_pip,
        }
    }

    /// A double lies perpendicular to the direction of travel.
    #[inline]
    pub fn is_double(self) -> bool {
        self.top_pip == self.bottom_pip
    }

    /// Whether either pip equals `value`.
    #[inline]
    pub fn has_pip(self, value: u8) -> bool {
        self.top_pip == value || self.bottom_pip == value
    }
}

/// The full double-six set (28 tiles), ids assigned in catalog order.
pub static STANDARD_SET: Lazy<Vec<Tile>> = Lazy::new(|| {
    let mut tiles = Vec::with_capacity(28);
    let mut id = 0u8;
    for top in 0..=MAX_PIP {
        for bottom in top..=MAX_PIP {
            tiles.push(Tile::new(id, top, bottom));
            id += 1;
        }
    }
    tiles
});

/// Discrete position on the table grid. Rows grow downward, columns
/// rightward (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn neighbor(self, heading: Heading) -> Self {
        match heading {
            Heading::North => Self::new(self.row - 1, self.col),
            Heading::East => Self::new(self.row, self.col + 1),
            Heading::South => Self::new(self.row + 1, self.col),
            Heading::West => Self::new(self.row, self.col - 1),
        }
    }

    /// Unit-step heading from `self` to an adjacent cell, or `None` if the
    /// cells are not 4-neighbors.
    pub fn heading_to(self, other: GridCell) -> Option<Heading> {
        match (other.row - self.row, other.col - self.col) {
            (-1, 0) => Some(Heading::North),
            (0, 1) => Some(Heading::East),
            (1, 0) => Some(Heading::South),
            (0, -1) => Some(Heading::West),
            _ => None,
        }
    }
}

/// Direction of travel between adjacent grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Whether travel moves along the horizontal (column) axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::East | Heading::West)
    }
}

/// The long-axis family of a tile footprint. A vertical tile occupies
/// `short × long` pixels, a horizontal one `long × short`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationFamily {
    Vertical,
    Horizontal,
}

impl OrientationFamily {
    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            OrientationFamily::Vertical => OrientationFamily::Horizontal,
            OrientationFamily::Horizontal => OrientationFamily::Vertical,
        }
    }
}

/// One of the four rotation states of a placed tile.
///
/// `Vertical` (0°) renders `top_pip` in the upper half. `Horizontal` is a
/// 90° clockwise rotation, so `top_pip` lands in the right half; the flipped
/// variants are the respective 180° rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
    VerticalFlipped,
    HorizontalFlipped,
}

impl Orientation {
    #[inline]
    pub fn family(self) -> OrientationFamily {
        match self {
            Orientation::Vertical | Orientation::VerticalFlipped => OrientationFamily::Vertical,
            Orientation::Horizontal | Orientation::HorizontalFlipped => {
                OrientationFamily::Horizontal
            }
        }
    }

    /// Clockwise rotation in degrees, for renderers.
    #[inline]
    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Vertical => 0,
            Orientation::Horizontal => 90,
            Orientation::VerticalFlipped => 180,
            Orientation::HorizontalFlipped => 270,
        }
    }

    /// The unflipped orientation of a family — what a double takes.
    #[inline]
    pub fn upright(family: OrientationFamily) -> Self {
        match family {
            OrientationFamily::Vertical => Orientation::Vertical,
            OrientationFamily::Horizontal => Orientation::Horizontal,
        }
    }
}

/// Which open end of the chain a play targets, and equally which direction
/// along the track loop that end grows (`Right` walks clockwise from the
/// anchor, `Left` counterclockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A tile fixed on the board. Created exactly once per play, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: Tile,
    pub cell: GridCell,
    pub orientation: Orientation,
}

/// Descriptor of one open end of the chain: where the last tile of that arm
/// sits and which pip value is available for matching there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEnd {
    pub cell: GridCell,
    pub orientation: Orientation,
    pub exposed_value: u8,
}

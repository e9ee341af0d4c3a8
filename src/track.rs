//! Track Model: the closed rectangular border loop the chain may occupy,
//! defined as data and queried by cell instead of branching on literal
//! row/column numbers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::{GridCell, OrientationFamily, Side};

/// Geometry of the track rectangle. The border of a `width × height` cell
/// grid is the loop; the anchor sits on the top row at `anchor_col`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_anchor_col")]
    pub anchor_col: i32,
}

fn default_width() -> i32 {
    12
}

fn default_height() -> i32 {
    7
}

fn default_anchor_col() -> i32 {
    5
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            anchor_col: default_anchor_col(),
        }
    }
}

/// One cell of the track loop. `base` is the orientation family a double
/// takes there (perpendicular to the direction of travel); `is_turn` marks
/// the four corners, where the acting family flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCell {
    pub cell: GridCell,
    pub base: OrientationFamily,
    pub is_turn: bool,
}

/// The precomputed loop. Immutable after construction and safely shared by
/// any number of readers.
#[derive(Debug, Clone)]
pub struct TrackPath {
    cells: Vec<TrackCell>,
    index: HashMap<GridCell, usize>,
    anchor_idx: usize,
    width: i32,
    height: i32,
}

impl TrackPath {
    /// Build the loop from a config. Walks the border clockwise starting at
    /// the top-left corner: top row eastward, right column southward, bottom
    /// row westward, left column northward.
    pub fn from_config(config: &TrackConfig) -> Result<Self, String> {
        let TrackConfig {
            width: w,
            height: h,
            anchor_col,
        } = *config;
        if w < 3 || h < 3 {
            return Err(format!("track must be at least 3x3, got {}x{}", w, h));
        }
        if anchor_col <= 0 || anchor_col >= w - 1 {
            return Err(format!(
                "anchor_col {} must sit on the top row strictly between the corners (1..{})",
                anchor_col,
                w - 1
            ));
        }

        let corner = |row: i32, col: i32| (row == 0 || row == h - 1) && (col == 0 || col == w - 1);
        let mut cells = Vec::with_capacity((2 * (w + h) - 4) as usize);
        let mut push = |row: i32, col: i32| {
            let is_turn = corner(row, col);
            // Corners belong to the side-column family: the flip to the new
            // segment's family happens exactly at the turn cell.
            let base = if is_turn || (col == 0 || col == w - 1) {
                OrientationFamily::Horizontal
            } else {
                OrientationFamily::Vertical
            };
            cells.push(TrackCell {
                cell: GridCell::new(row, col),
                base,
                is_turn,
            });
        };

        for col in 0..w {
            push(0, col);
        }
        for row in 1..h {
            push(row, w - 1);
        }
        for col in (0..w - 1).rev() {
            push(h - 1, col);
        }
        for row in (1..h - 1).rev() {
            push(row, 0);
        }

        let index: HashMap<GridCell, usize> =
            cells.iter().enumerate().map(|(i, tc)| (tc.cell, i)).collect();
        let anchor_idx = index[&GridCell::new(0, anchor_col)];

        Ok(Self {
            cells,
            index,
            anchor_idx,
            width: w,
            height: h,
        })
    }

    /// Number of cells in the loop.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell the first tile of a round occupies.
    pub fn anchor(&self) -> &TrackCell {
        &self.cells[self.anchor_idx]
    }

    /// Track metadata for a cell, or `None` for off-track cells.
    pub fn cell_info(&self, cell: GridCell) -> Option<&TrackCell> {
        self.index.get(&cell).map(|&i| &self.cells[i])
    }

    /// The next track cell after `cell` walking toward `side` (`Right` is
    /// clockwise from the anchor, `Left` counterclockwise). Returns `None`
    /// when `cell` is off the track or the walk would re-enter the anchor
    /// cell — the track is exhausted.
    pub fn next_along(&self, cell: GridCell, side: Side) -> Option<&TrackCell> {
        let idx = *self.index.get(&cell)?;
        let len = self.cells.len();
        let next = match side {
            Side::Right => (idx + 1) % len,
            Side::Left => (idx + len - 1) % len,
        };
        if next == self.anchor_idx {
            return None;
        }
        Some(&self.cells[next])
    }

    /// Sign of the loop's outer border along one axis at `cell`: which way a
    /// tile edge must shift to stay flush with the outside of the rectangle.
    /// For the vertical axis the top row is outside-negative (north) and the
    /// bottom row outside-positive (south); for the horizontal axis the left
    /// column is negative (west) and the right column positive (east).
    pub fn outer_sign(&self, cell: GridCell, horizontal_axis: bool) -> f64 {
        if horizontal_axis {
            if cell.col == 0 {
                -1.0
            } else {
                1.0
            }
        } else if cell.row == 0 {
            -1.0
        } else {
            1.0
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Process-wide default track, sized for the full double-six set.
pub static DEFAULT_TRACK: Lazy<TrackPath> = Lazy::new(|| {
    TrackPath::from_config(&TrackConfig::default()).expect("default track config is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_length_and_anchor() {
        let track = TrackPath::from_config(&TrackConfig::default()).unwrap();
        // 12x7 border: 2*(12+7) - 4 cells.
        assert_eq!(track.len(), 34);
        assert_eq!(track.anchor().cell, GridCell::new(0, 5));
        assert_eq!(track.anchor().base, OrientationFamily::Vertical);
        assert!(!track.anchor().is_turn);
    }

    #[test]
    fn test_rejects_degenerate_configs() {
        assert!(TrackPath::from_config(&TrackConfig {
            width: 2,
            height: 7,
            anchor_col: 1
        })
        .is_err());
        assert!(TrackPath::from_config(&TrackConfig {
            width: 12,
            height: 7,
            anchor_col: 0
        })
        .is_err());
        assert!(TrackPath::from_config(&TrackConfig {
            width: 12,
            height: 7,
            anchor_col: 11
        })
        .is_err());
    }

    #[test]
    fn test_corner_cells_marked_and_horizontal() {
        let track = TrackPath::from_config(&TrackConfig::default()).unwrap();
        for (row, col) in [(0, 0), (0, 11), (6, 11), (6, 0)] {
            let tc = track.cell_info(GridCell::new(row, col)).unwrap();
            assert!(tc.is_turn, "({row},{col}) should be a turn cell");
            assert_eq!(tc.base, OrientationFamily::Horizontal);
        }
    }

    #[test]
    fn test_segment_families() {
        let track = TrackPath::from_config(&TrackConfig::default()).unwrap();
        // Top/bottom rows away from corners: doubles stand vertical.
        assert_eq!(
            track.cell_info(GridCell::new(0, 4)).unwrap().base,
            OrientationFamily::Vertical
        );
        assert_eq!(
            track.cell_info(GridCell::new(6, 4)).unwrap().base,
            OrientationFamily::Vertical
        );
        // Side columns: doubles lie horizontal.
        assert_eq!(
            track.cell_info(GridCell::new(3, 0)).unwrap().base,
            OrientationFamily::Horizontal
        );
        assert_eq!(
            track.cell_info(GridCell::new(3, 11)).unwrap().base,
            OrientationFamily::Horizontal
        );
    }

    #[test]
    fn test_next_along_directions() {
        let track = TrackPath::from_config(&TrackConfig::default()).unwrap();
        let anchor = track.anchor().cell;
        // Rightward is clockwise: east along the top row.
        assert_eq!(
            track.next_along(anchor, Side::Right).unwrap().cell,
            GridCell::new(0, 6)
        );
        // Leftward is counterclockwise: west along the top row.
        assert_eq!(
            track.next_along(anchor, Side::Left).unwrap().cell,
            GridCell::new(0, 4)
        );
        // Clockwise turns south at the top-right corner.
        assert_eq!(
            track
                .next_along(GridCell::new(0, 11), Side::Right)
                .unwrap()
                .cell,
            GridCell::new(1, 11)
        );
        // Counterclockwise turns south at the top-left corner.
        assert_eq!(
            track
                .next_along(GridCell::new(0, 0), Side::Left)
                .unwrap()
                .cell,
            GridCell::new(1, 0)
        );
    }

    #[test]
    fn test_next_along_off_track() {
        let track = TrackPath::from_config(&TrackConfig::default()).unwrap();
        assert!(track.next_along(GridCell::new(3, 3), Side::Right).is_none());
    }

    #[test]
    fn test_track_exhausts_at_anchor() {
        let track = TrackPath::from_config(&TrackConfig::default()).unwrap();
        // Walk the full loop clockwise; the step back onto the anchor is None.
        let mut cell = track.anchor().cell;
        let mut steps = 0;
        while let Some(next) = track.next_along(cell, Side::Right) {
            cell = next.cell;
            steps += 1;
            assert!(steps <= track.len(), "walk failed to terminate");
        }
        assert_eq!(steps, track.len() - 1);
    }
}

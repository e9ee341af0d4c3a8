//! Coordinate Projector: maps the discrete chain onto continuous canvas
//! coordinates by walking both arms outward from the anchor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::track::TrackPath;
use crate::types::{GridCell, Heading, Orientation, OrientationFamily, PlacedTile, Side};

/// Canvas geometry for projection. All values in pixels; the anchor tile is
/// pinned at the canvas center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasSpec {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_tile_long")]
    pub tile_long_px: f64,
    #[serde(default = "default_tile_short")]
    pub tile_short_px: f64,
}

fn default_canvas_width() -> f64 {
    960.0
}

fn default_canvas_height() -> f64 {
    640.0
}

fn default_tile_long() -> f64 {
    64.0
}

fn default_tile_short() -> f64 {
    32.0
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            tile_long_px: default_tile_long(),
            tile_short_px: default_tile_short(),
        }
    }
}

impl CanvasSpec {
    /// Footprint of a tile in this canvas: `(width, height)` by orientation
    /// family.
    fn extents(&self, orientation: Orientation) -> (f64, f64) {
        match orientation.family() {
            OrientationFamily::Vertical => (self.tile_short_px, self.tile_long_px),
            OrientationFamily::Horizontal => (self.tile_long_px, self.tile_short_px),
        }
    }
}

/// Center of one placed tile on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Projection failures are always programmer errors: the chain handed in is
/// corrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ProjectionError {
    /// An arm tile does not sit on the track cell following its neighbor.
    #[display("tile at {cell:?} is not track-adjacent to its neighbor")]
    DisconnectedTile { cell: GridCell },
}

impl std::error::Error for ProjectionError {}

/// Compute canvas centers for every placed tile. Pure and stateless: the same
/// chain always projects to the same map. An empty chain projects to an
/// empty map.
pub fn project_coordinates(
    track: &TrackPath,
    chain: &Chain,
    canvas: &CanvasSpec,
) -> Result<HashMap<GridCell, ProjectedPoint>, ProjectionError> {
    let mut points = HashMap::with_capacity(chain.len());
    let Some(anchor) = chain.anchor else {
        return Ok(points);
    };

    let anchor_point = ProjectedPoint {
        x: canvas.canvas_width / 2.0,
        y: canvas.canvas_height / 2.0,
    };
    points.insert(anchor.cell, anchor_point);

    for side in [Side::Left, Side::Right] {
        let mut prev = anchor;
        let mut prev_point = anchor_point;
        for placed in chain.arm(side) {
            let point = step_point(track, canvas, &prev, prev_point, placed, side)?;
            points.insert(placed.cell, point);
            prev = *placed;
            prev_point = point;
        }
    }

    Ok(points)
}

/// Center of `placed` given its already-positioned neighbor: offset along the
/// travel axis by the two half-extents, plus a lateral correction at turn
/// cells that keeps the loop's outer edges flush across the bend.
fn step_point(
    track: &TrackPath,
    canvas: &CanvasSpec,
    prev: &PlacedTile,
    prev_point: ProjectedPoint,
    placed: &PlacedTile,
    side: Side,
) -> Result<ProjectedPoint, ProjectionError> {
    let on_track = track
        .next_along(prev.cell, side)
        .map(|tc| tc.cell == placed.cell)
        .unwrap_or(false);
    let Some(heading) = prev.cell.heading_to(placed.cell).filter(|_| on_track) else {
        tracing::error!(cell = ?placed.cell, prev = ?prev.cell, "chain arm is not contiguous on the track");
        return Err(ProjectionError::DisconnectedTile { cell: placed.cell });
    };

    let (prev_w, prev_h) = canvas.extents(prev.orientation);
    let (cur_w, cur_h) = canvas.extents(placed.orientation);
    let mut x = prev_point.x;
    let mut y = prev_point.y;

    match heading {
        Heading::East => x += (prev_w + cur_w) / 2.0,
        Heading::West => x -= (prev_w + cur_w) / 2.0,
        Heading::South => y += (prev_h + cur_h) / 2.0,
        Heading::North => y -= (prev_h + cur_h) / 2.0,
    }

    // Straight runs share the centerline (doubles overhang symmetrically).
    // Around a corner the footprints change family, so align the outer
    // border of the loop instead.
    let at_turn = |cell: GridCell| track.cell_info(cell).map_or(false, |tc| tc.is_turn);
    if at_turn(prev.cell) || at_turn(placed.cell) {
        if heading.is_horizontal() {
            let sign = track.outer_sign(placed.cell, false);
            y += sign * (prev_h - cur_h) / 2.0;
        } else {
            let sign = track.outer_sign(placed.cell, true);
            x += sign * (prev_w - cur_w) / 2.0;
        }
    }

    Ok(ProjectedPoint { x, y })
}

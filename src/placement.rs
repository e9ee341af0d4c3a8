//! Placement Resolver: turns (chain state, tile, chosen end) into a discrete
//! placement by consulting the track instead of hard-coded geometry.

use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::track::TrackPath;
use crate::types::{ChainEnd, Heading, Orientation, PlacedTile, Side, Tile};

/// Result of a successful play: the tile as placed plus the advanced end
/// descriptor (for the anchor, the right end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub placed_tile: PlacedTile,
    pub updated_end: ChainEnd,
}

/// Why a play was rejected. `NoMatch` and `WrongEndForTie` are ordinary
/// rejected moves; `DuplicateTile` and `TrackExhausted` signal a bug in the
/// caller and are logged before being returned. The chain is never mutated
/// on any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// Neither pip of the tile matches the chosen end's exposed value.
    #[display("tile {tile_id} has no pip matching exposed value {exposed}")]
    NoMatch { tile_id: u8, exposed: u8 },

    /// Both ends expose the same value; only the shorter arm accepts.
    #[display("both ends expose the same value; play the {required:?} end, not {side:?}")]
    WrongEndForTie { side: Side, required: Side },

    /// The tile is already on the chain.
    #[display("tile {tile_id} is already placed on the chain")]
    DuplicateTile { tile_id: u8 },

    /// Extending the end ran off the track or into the opposite arm.
    #[display("track exhausted extending the {side:?} end")]
    TrackExhausted { side: Side },
}

impl std::error::Error for PlacementError {}

/// Orientation of a non-double lying along the chain: long axis along the
/// continued direction of travel, flipped so the connecting pip faces back
/// toward the existing chain.
fn oriented_for_connection(travel: Heading, connects_with_top: bool) -> Orientation {
    match (travel, connects_with_top) {
        (Heading::East, true) => Orientation::HorizontalFlipped,
        (Heading::East, false) => Orientation::Horizontal,
        (Heading::West, true) => Orientation::Horizontal,
        (Heading::West, false) => Orientation::HorizontalFlipped,
        (Heading::South, true) => Orientation::Vertical,
        (Heading::South, false) => Orientation::VerticalFlipped,
        (Heading::North, true) => Orientation::VerticalFlipped,
        (Heading::North, false) => Orientation::Vertical,
    }
}

/// Place `tile` on the chosen end of the chain.
///
/// An empty chain ignores `side` and places the anchor at the track's anchor
/// cell: doubles take the cell's base family, non-doubles the perpendicular
/// with `top_pip` facing the right end. Otherwise the new cell comes from
/// `TrackPath::next_along`, doubles take the new cell's base family, and
/// non-doubles connect per `oriented_for_connection`.
pub fn resolve_placement(
    track: &TrackPath,
    chain: &mut Chain,
    tile: Tile,
    side: Side,
) -> Result<PlacementOutcome, PlacementError> {
    if chain.contains_tile(tile.id) {
        tracing::error!(tile_id = tile.id, "duplicate tile offered to resolver");
        return Err(PlacementError::DuplicateTile { tile_id: tile.id });
    }

    if chain.is_empty() {
        return Ok(place_anchor(track, chain, tile));
    }

    let end = *chain
        .end(side)
        .expect("chain with an anchor has both end descriptors");

    if !tile.has_pip(end.exposed_value) {
        return Err(PlacementError::NoMatch {
            tile_id: tile.id,
            exposed: end.exposed_value,
        });
    }

    // Equal-ends tie break: fill the shorter branch first. Equal lengths
    // favor the right end.
    if let (Some(left), Some(right)) = (&chain.left_end, &chain.right_end) {
        if left.exposed_value == right.exposed_value {
            let required = if chain.left_arm.len() < chain.right_arm.len() {
                Side::Left
            } else {
                Side::Right
            };
            if side != required {
                return Err(PlacementError::WrongEndForTie { side, required });
            }
        }
    }

    let Some(next) = track.next_along(end.cell, side) else {
        tracing::error!(?side, cell = ?end.cell, "track exhausted; tile set exceeds track capacity");
        return Err(PlacementError::TrackExhausted { side });
    };
    // The two arms met: the loop is full.
    if chain.tiles().any(|p| p.cell == next.cell) {
        tracing::error!(?side, cell = ?next.cell, "track cell already occupied by the other arm");
        return Err(PlacementError::TrackExhausted { side });
    }

    let orientation = if tile.is_double() {
        Orientation::upright(next.base)
    } else {
        // On a turn cell the tile lies along the outgoing leg; elsewhere the
        // continued direction equals the incoming one.
        let travel = track
            .next_along(next.cell, side)
            .and_then(|after| next.cell.heading_to(after.cell))
            .or_else(|| end.cell.heading_to(next.cell))
            .expect("consecutive track cells are grid neighbors");
        oriented_for_connection(travel, tile.top_pip == end.exposed_value)
    };

    let exposed_value = if tile.is_double() || tile.bottom_pip == end.exposed_value {
        tile.top_pip
    } else {
        tile.bottom_pip
    };

    let placed_tile = PlacedTile {
        tile,
        cell: next.cell,
        orientation,
    };
    let updated_end = ChainEnd {
        cell: next.cell,
        orientation,
        exposed_value,
    };
    chain.push_arm(side, placed_tile, updated_end);

    Ok(PlacementOutcome {
        placed_tile,
        updated_end,
    })
}

fn place_anchor(track: &TrackPath, chain: &mut Chain, tile: Tile) -> PlacementOutcome {
    let anchor_cell = track.anchor();
    let orientation = if tile.is_double() {
        Orientation::upright(anchor_cell.base)
    } else {
        Orientation::upright(anchor_cell.base.perpendicular())
    };

    // A horizontal anchor has top_pip in its right half, so the right end
    // exposes top_pip and the left end bottom_pip. A double exposes its
    // shared value on both ends.
    let (left_value, right_value) = if tile.is_double() {
        (tile.top_pip, tile.top_pip)
    } else {
        (tile.bottom_pip, tile.top_pip)
    };

    let placed_tile = PlacedTile {
        tile,
        cell: anchor_cell.cell,
        orientation,
    };
    let right_end = ChainEnd {
        cell: anchor_cell.cell,
        orientation,
        exposed_value: right_value,
    };
    chain.anchor = Some(placed_tile);
    chain.left_end = Some(ChainEnd {
        cell: anchor_cell.cell,
        orientation,
        exposed_value: left_value,
    });
    chain.right_end = Some(right_end);

    PlacementOutcome {
        placed_tile,
        updated_end: right_end,
    }
}

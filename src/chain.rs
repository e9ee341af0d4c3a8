//! The chain aggregate: anchor tile plus two arms growing along the track.

use serde::{Deserialize, Serialize};

use crate::types::{ChainEnd, PlacedTile, Side};

/// Chain state for one round at one table. Arms are ordered
/// nearest-to-anchor first; every placed cell is unique across the chain and
/// each end descriptor points at the extremity of its arm (or the anchor when
/// that arm is empty).
///
/// One writer at a time: the surrounding turn authority serializes plays, so
/// the engine mutates a `Chain` without internal locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chain {
    pub anchor: Option<PlacedTile>,
    pub left_arm: Vec<PlacedTile>,
    pub right_arm: Vec<PlacedTile>,
    pub left_end: Option<ChainEnd>,
    pub right_end: Option<ChainEnd>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor.is_none()
    }

    /// Total number of placed tiles.
    pub fn len(&self) -> usize {
        usize::from(self.anchor.is_some()) + self.left_arm.len() + self.right_arm.len()
    }

    /// All placed tiles: anchor first, then the left arm outward, then the
    /// right arm outward.
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.anchor
            .iter()
            .chain(self.left_arm.iter())
            .chain(self.right_arm.iter())
    }

    pub fn contains_tile(&self, tile_id: u8) -> bool {
        self.tiles().any(|p| p.tile.id == tile_id)
    }

    pub fn arm(&self, side: Side) -> &[PlacedTile] {
        match side {
            Side::Left => &self.left_arm,
            Side::Right => &self.right_arm,
        }
    }

    pub fn end(&self, side: Side) -> Option<&ChainEnd> {
        match side {
            Side::Left => self.left_end.as_ref(),
            Side::Right => self.right_end.as_ref(),
        }
    }

    pub(crate) fn push_arm(&mut self, side: Side, placed: PlacedTile, end: ChainEnd) {
        match side {
            Side::Left => {
                self.left_arm.push(placed);
                self.left_end = Some(end);
            }
            Side::Right => {
                self.right_arm.push(placed);
                self.right_end = Some(end);
            }
        }
    }
}

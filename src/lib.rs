//! Domino chain layout engine.
//!
//! Given a chain of placed tiles on a bounded rectangular "snake" track and a
//! newly played tile, the engine computes the tile's grid cell, its rotation,
//! and its canvas coordinates relative to the anchor tile. The track is
//! modeled as data (a closed loop of cells with per-segment orientation
//! families and marked corners) rather than as per-cell special cases.
//!
//! The engine is pure and synchronous: no I/O, no locking, no retries. Turn
//! order, hands, scoring, persistence, and rendering belong to the caller.

pub mod chain;
pub mod config;
pub mod placement;
pub mod projector;
pub mod track;
pub mod types;

pub use chain::Chain;
pub use placement::{resolve_placement, PlacementError, PlacementOutcome};
pub use projector::{project_coordinates, CanvasSpec, ProjectedPoint, ProjectionError};
pub use track::{TrackConfig, TrackPath, DEFAULT_TRACK};
pub use types::{ChainEnd, GridCell, Orientation, PlacedTile, Side, Tile};

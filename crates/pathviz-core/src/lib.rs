//! **pathviz-core** — board model and shared types for the pathviz engine.
//!
//! This crate provides the foundational types used across the *pathviz*
//! workspace: geometry primitives, the tile/board model the traversal and
//! reveal phases operate on, the per-run context object, and the event
//! vocabulary crossing the engine boundary.

pub mod board;
pub mod events;
pub mod geom;
pub mod run;
pub mod tile;

pub use board::{Board, BoardError};
pub use events::{PathStep, RunEvent, VisitEvent};
pub use geom::{Orientation, Point};
pub use run::{Phase, RunContext, RunGeneration, RunSequence};
pub use tile::{Tile, TileKind, VisitState};

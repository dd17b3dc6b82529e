//! **pathviz-search** — exploration and shortest-path search on a tile board.
//!
//! This crate implements the algorithmic half of the pathviz engine:
//!
//! - **Traversal**: a depth-first exploration of the board from the start
//!   tile, driven as a worklist of small resumable units so a host can
//!   interleave it with other work ([`Traversal`]).
//! - **Shortest path**: a Dijkstra search over the same wall layout with a
//!   reusable node cache ([`PathField`]).
//! - **Orchestration**: [`Engine`] runs one full explore-then-find cycle
//!   and hands the resulting event data to the playback layer.
//!
//! Both algorithms see the board through the [`SearchGrid`] trait and scan
//! neighbors in the engine's fixed up/down/left/right order.

mod dijkstra;
mod distance;
mod engine;
mod traits;
mod traverse;

pub use dijkstra::{PathField, UNREACHABLE};
pub use distance::manhattan;
pub use engine::{Engine, RunOutcome};
pub use traits::SearchGrid;
pub use traverse::{Traversal, TraversalResult};

//! **pathviz-maze** — randomized wall layouts for the pathviz engine.
//!
//! [`MazeGen`] carves a maze with the randomized Prim's frontier algorithm
//! and returns a pure 0/1 [`MazeLayout`]; the layout knows how to merge
//! itself onto a live [`Board`](pathviz_core::Board) without overwriting
//! the start and target tiles.

mod layout;
mod prim;

pub use layout::{MazeError, MazeLayout, OPEN, WALL};
pub use prim::MazeGen;

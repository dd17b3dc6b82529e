//! The tile board: a fixed-size rectangular matrix of [`Tile`]s.
//!
//! The board is owned by the host and lent to the engine for the duration
//! of a run. Tile `kind` is edited only through [`Board::set_kind`]; the
//! run fields (`visit`, `on_path`, `arrow_active`) are written only through
//! the phase-checked methods taking a [`RunContext`].

use thiserror::Error;

use crate::geom::Point;
use crate::run::{Phase, RunContext};
use crate::tile::{Tile, TileKind, VisitState};

/// Errors from board construction and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No tile of the requested kind exists. Callers must place a start and
    /// a target before invoking the engine.
    #[error("no {0:?} tile on the board")]
    NotFound(TileKind),

    /// Board dimensions must both be positive.
    #[error("invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
}

/// A `rows × cols` matrix of tiles, row-major, with immutable dimensions.
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board of all-[`Empty`](TileKind::Empty) tiles.
    pub fn new(rows: i32, cols: i32) -> Result<Self, BoardError> {
        if rows <= 0 || cols <= 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            tiles: vec![Tile::default(); (rows * cols) as usize],
        })
    }

    /// Number of rows (the `y` extent).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns (the `x` extent).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.cols && p.y >= 0 && p.y < self.rows
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.cols + p.x) as usize
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<&Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(&self.tiles[self.index(p)])
    }

    /// The kind of the tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<TileKind> {
        self.tile(p).map(|t| t.kind)
    }

    /// Whether the tile at `p` is a wall. Out-of-bounds positions are not
    /// walls; they are simply never scanned.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.kind(p).is_some_and(|k| !k.passable())
    }

    /// Set the kind of the tile at `p`. Does nothing if out of bounds.
    ///
    /// This is the host's editing door (wall placement, start/target drag);
    /// the engine never changes kinds. Start/target uniqueness during edits
    /// is the host's responsibility.
    pub fn set_kind(&mut self, p: Point, kind: TileKind) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx].kind = kind;
    }

    /// Locate the unique tile of the given kind.
    pub fn locate(&self, kind: TileKind) -> Result<Point, BoardError> {
        self.iter()
            .find(|(_, t)| t.kind == kind)
            .map(|(p, _)| p)
            .ok_or(BoardError::NotFound(kind))
    }

    /// Clear `visit`, `on_path` and `arrow_active` on every tile, leaving
    /// kinds untouched. Runs before every traversal.
    pub fn reset_run_state(&mut self) {
        for t in &mut self.tiles {
            t.clear_run_state();
        }
    }

    /// Row-major iterator over `(Point, &Tile)`.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile)> {
        self.tiles.iter().enumerate().map(|(i, t)| {
            let p = Point::new(i as i32 % self.cols, i as i32 / self.cols);
            (p, t)
        })
    }

    // -----------------------------------------------------------------------
    // Phase-checked run-state mutation
    // -----------------------------------------------------------------------

    /// Mark the tile at `p` visited (explore phase only).
    ///
    /// Returns `true` iff the tile exists and transitioned
    /// `Unvisited -> Visited` by this call.
    pub fn mark_visited(&mut self, ctx: &RunContext, p: Point) -> bool {
        debug_assert_eq!(ctx.phase(), Phase::Explore);
        if !self.contains(p) {
            return false;
        }
        let idx = self.index(p);
        let tile = &mut self.tiles[idx];
        if tile.visit == VisitState::Visited {
            return false;
        }
        tile.visit = VisitState::Visited;
        true
    }

    /// Whether the tile at `p` has been visited this run.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.tile(p).map(|t| t.visit) == Some(VisitState::Visited)
    }

    /// Mark the tile at `p` as part of the revealed path (reveal phase
    /// only). Does nothing if out of bounds.
    pub fn mark_on_path(&mut self, ctx: &RunContext, p: Point) {
        debug_assert_eq!(ctx.phase(), Phase::Reveal);
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx].on_path = true;
    }

    /// Set or clear the transient arrow highlight at `p` (reveal phase
    /// only). Does nothing if out of bounds.
    pub fn set_arrow(&mut self, ctx: &RunContext, p: Point, active: bool) {
        debug_assert_eq!(ctx.phase(), Phase::Reveal);
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx].arrow_active = active;
    }
}

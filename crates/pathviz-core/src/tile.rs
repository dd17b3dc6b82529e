//! Per-cell state: [`TileKind`], [`VisitState`], [`Tile`].

/// What a tile *is*. Exactly one `Start` and one `Target` exist on a board
/// whenever the engine is invoked; the editing host maintains that
/// invariant between runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Start,
    Target,
}

impl TileKind {
    /// Whether the traversal and path finder may pass through this kind.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Exploration state, written only during the traversal phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitState {
    #[default]
    Unvisited,
    Visited,
}

/// One board cell.
///
/// `kind` persists across runs and is edited by the host; the three run
/// fields are cleared by [`Board::reset_run_state`](crate::Board) before
/// every traversal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub visit: VisitState,
    /// Whether the tile belongs to the last computed shortest path.
    pub on_path: bool,
    /// Transient highlight while path playback passes over the tile.
    pub arrow_active: bool,
}

impl Tile {
    /// A fresh tile of the given kind with cleared run state.
    pub const fn of(kind: TileKind) -> Self {
        Self {
            kind,
            visit: VisitState::Unvisited,
            on_path: false,
            arrow_active: false,
        }
    }

    /// Clear `visit`, `on_path` and `arrow_active`, leaving `kind` untouched.
    #[inline]
    pub fn clear_run_state(&mut self) {
        self.visit = VisitState::Unvisited;
        self.on_path = false;
        self.arrow_active = false;
    }
}

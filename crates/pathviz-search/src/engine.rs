//! One-call orchestration of a full explore-then-find run.

use pathviz_core::{Board, BoardError, Point, RunContext, RunSequence, TileKind, VisitEvent};

use crate::dijkstra::PathField;
use crate::traverse::Traversal;

/// Everything one run produced, ready for the playback layer.
#[derive(Debug)]
pub struct RunOutcome {
    /// The run's context, in the reveal phase when a path was found and
    /// finished otherwise.
    pub ctx: RunContext,
    /// Visit events in exploration order.
    pub visits: Vec<VisitEvent>,
    /// Whether the target was detected.
    pub found: bool,
    /// Shortest path start → target inclusive; empty when unreachable.
    pub path: Vec<Point>,
}

/// Runs traversals against host-owned boards, assigning run generations
/// and reusing the path finder's caches across runs.
#[derive(Default)]
pub struct Engine {
    runs: RunSequence,
    field: PathField,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            runs: RunSequence::new(),
            field: PathField::new(),
        }
    }

    /// Explore `board` and, if the target is detected, compute the reveal
    /// path. The path is computed exactly once per run, however many
    /// sibling branches re-detected the target.
    ///
    /// The previous run's state on the board is cleared before exploring;
    /// any units still pending from it are superseded by the new
    /// generation.
    pub fn run(&mut self, board: &mut Board) -> Result<RunOutcome, BoardError> {
        let generation = self.runs.begin();
        let start = board.locate(TileKind::Start)?;
        let target = board.locate(TileKind::Target)?;

        let mut visits = Vec::new();
        let mut ctx = {
            let mut traversal = Traversal::new(board, generation)?;
            while let Some(ev) = traversal.tick() {
                visits.push(ev);
            }
            traversal.into_context()
        };

        let found = ctx.target_found();
        let path = if found {
            ctx.begin_reveal();
            self.field.shortest_path(board, start, target)
        } else {
            ctx.finish();
            Vec::new()
        };

        log::debug!(
            "run {generation:?}: {} tiles visited, found={found}, path len {}",
            visits.len(),
            path.len()
        );
        Ok(RunOutcome {
            ctx,
            visits,
            found,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use pathviz_core::Phase;

    fn board_with(rows: i32, cols: i32, start: Point, target: Point) -> Board {
        let mut b = Board::new(rows, cols).unwrap();
        b.set_kind(start, TileKind::Start);
        b.set_kind(target, TileKind::Target);
        b
    }

    #[test]
    fn open_board_run_finds_manhattan_path() {
        let mut board = board_with(5, 5, Point::new(0, 0), Point::new(4, 4));
        let mut engine = Engine::new();
        let outcome = engine.run(&mut board).unwrap();
        assert!(outcome.found);
        assert_eq!(outcome.path.len() as i32, manhattan(Point::new(0, 0), Point::new(4, 4)) + 1);
        assert_eq!(outcome.ctx.phase(), Phase::Reveal);
        assert!(!outcome.visits.is_empty());
    }

    #[test]
    fn separated_target_reports_unreachable_and_empty_path() {
        let mut board = board_with(3, 3, Point::new(0, 0), Point::new(0, 2));
        for x in 0..3 {
            board.set_kind(Point::new(x, 1), TileKind::Wall);
        }
        let mut engine = Engine::new();
        let outcome = engine.run(&mut board).unwrap();
        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.ctx.phase(), Phase::Done);
    }

    #[test]
    fn missing_target_is_a_precondition_error() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_kind(Point::new(0, 0), TileKind::Start);
        let mut engine = Engine::new();
        assert_eq!(
            engine.run(&mut board).err(),
            Some(BoardError::NotFound(TileKind::Target))
        );
    }

    #[test]
    fn consecutive_runs_get_fresh_generations_and_clean_state() {
        let mut board = board_with(4, 4, Point::new(0, 0), Point::new(3, 3));
        let mut engine = Engine::new();
        let first = engine.run(&mut board).unwrap();
        let second = engine.run(&mut board).unwrap();
        assert_ne!(first.ctx.generation(), second.ctx.generation());
        // Same board, same wall layout: identical exploration and path.
        assert_eq!(first.visits, second.visits);
        assert_eq!(first.path, second.path);
    }

    #[test]
    fn wall_edits_between_runs_change_the_path() {
        let mut board = board_with(3, 3, Point::new(0, 0), Point::new(0, 2));
        let mut engine = Engine::new();
        let straight = engine.run(&mut board).unwrap();
        assert_eq!(straight.path.len(), 3);

        board.set_kind(Point::new(0, 1), TileKind::Wall);
        board.set_kind(Point::new(1, 1), TileKind::Wall);
        let detour = engine.run(&mut board).unwrap();
        assert!(detour.found);
        assert_eq!(detour.path.len(), 7);
        assert!(detour.path.contains(&Point::new(2, 1)));
    }
}

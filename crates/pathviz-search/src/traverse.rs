//! Depth-first exploration of the board, driven as a worklist of small
//! resumable units.
//!
//! Each scheduled unit is "scan the next neighbor of tile `p`". Popping a
//! unit examines one neighbor, re-queues the remainder of the scan, and,
//! when the neighbor is newly explored, pushes that neighbor's own scan on
//! top of the worklist. The emission order is exactly the pre-order
//! depth-first walk with the fixed up/down/left/right neighbor order, while
//! the call stack stays flat on arbitrarily large boards.
//!
//! Target detection sets the run context's found flag. Units already on the
//! worklist still finish their scans (and may emit further visit events),
//! but no new expansion is scheduled once the flag is set. When the
//! outstanding-unit counter drains to zero without a detection, the run is
//! exhausted and the target reported unreachable.

use pathviz_core::{Board, BoardError, Point, RunContext, RunGeneration, TileKind, VisitEvent};

/// Terminal outcome of a traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalResult {
    /// Whether the target was detected during exploration.
    pub found: bool,
}

/// One scheduled unit of work: scan neighbor `dir` (0..4, in up/down/left/
/// right order) of `pos`. Stamped with the generation it was scheduled
/// under; stale units fire as no-ops.
#[derive(Copy, Clone, Debug)]
struct Unit {
    pos: Point,
    dir: u8,
    generation: RunGeneration,
}

/// A lazy, restartable exploration of the board from its start tile.
///
/// Construction resets the board's run state and validates that a start
/// and a target exist. [`tick`](Self::tick) (or the `Iterator` impl)
/// advances the exploration; once it returns `None`,
/// [`result`](Self::result) reports the terminal outcome.
pub struct Traversal<'b> {
    board: &'b mut Board,
    ctx: RunContext,
    worklist: Vec<Unit>,
    start: Point,
    order: usize,
    started: bool,
    result: Option<TraversalResult>,
}

impl<'b> Traversal<'b> {
    /// Begin a new run over `board` under the given generation.
    ///
    /// Fails with [`BoardError::NotFound`] when the board is missing its
    /// start or target tile.
    pub fn new(board: &'b mut Board, generation: RunGeneration) -> Result<Self, BoardError> {
        let start = board.locate(TileKind::Start)?;
        board.locate(TileKind::Target)?;
        board.reset_run_state();
        log::debug!("traversal {generation:?}: exploring from {start}");
        Ok(Self {
            board,
            ctx: RunContext::new(generation),
            worklist: Vec::new(),
            start,
            order: 0,
            started: false,
            result: None,
        })
    }

    /// Abandon the current run and begin a fresh one under `generation`.
    ///
    /// The board's run state and the outstanding-unit counter are reset.
    /// Units still queued from the superseded run are not eagerly removed;
    /// they fire later and no-op against the new generation.
    pub fn restart(&mut self, generation: RunGeneration) {
        self.board.reset_run_state();
        self.ctx = RunContext::new(generation);
        self.order = 0;
        self.started = false;
        self.result = None;
        log::debug!("traversal {generation:?}: restarted");
    }

    /// Terminal outcome, available once the event sequence has ended.
    pub fn result(&self) -> Option<TraversalResult> {
        self.result
    }

    /// Consume the traversal, releasing the board and handing the run
    /// context to the reveal phase.
    pub fn into_context(self) -> RunContext {
        self.ctx
    }

    /// Advance the exploration until the next visit event.
    ///
    /// Processes scheduled units in worklist order; returns the next
    /// [`VisitEvent`], or `None` once the run has reached a terminal state
    /// (target found, or exhaustion).
    pub fn tick(&mut self) -> Option<VisitEvent> {
        if self.result.is_some() {
            return None;
        }

        if !self.started {
            self.started = true;
            self.board.mark_visited(&self.ctx, self.start);
            self.worklist.push(Unit {
                pos: self.start,
                dir: 0,
                generation: self.ctx.generation(),
            });
            self.ctx.unit_scheduled();
            return Some(self.emit(self.start));
        }

        while let Some(unit) = self.worklist.pop() {
            if !self.ctx.accepts(unit.generation) {
                // Scheduled under a superseded run: fires, but no-ops.
                continue;
            }

            // Re-queue the remainder of this tile's scan before descending,
            // so a newly explored neighbor's scan lands on top of it.
            if unit.dir + 1 < 4 {
                self.worklist.push(Unit {
                    dir: unit.dir + 1,
                    ..unit
                });
            }

            let neighbor = unit.pos.scan_neighbors()[unit.dir as usize];
            let emitted = self.scan(neighbor, unit.generation);

            if unit.dir + 1 == 4 {
                self.ctx.unit_completed();
            }
            if emitted.is_some() {
                return emitted;
            }
        }

        // Worklist drained: first terminal state reached wins.
        debug_assert_eq!(self.ctx.in_flight(), 0);
        let found = self.ctx.target_found();
        if !found && self.ctx.exhausted() && self.ctx.report_unreachable() {
            log::debug!("traversal {:?}: exhausted, target unreachable", self.ctx.generation());
        }
        self.result = Some(TraversalResult { found });
        None
    }

    /// Examine one neighbor, returning a visit event if it was newly
    /// explored.
    fn scan(&mut self, neighbor: Point, generation: RunGeneration) -> Option<VisitEvent> {
        match self.board.kind(neighbor) {
            Some(TileKind::Target) => {
                // First detection wins; re-detections from sibling branches
                // are deduplicated by the context.
                if self.ctx.mark_found() {
                    log::debug!(
                        "traversal {:?}: target detected at {neighbor}",
                        self.ctx.generation()
                    );
                }
                None
            }
            Some(TileKind::Wall) | None => None,
            Some(_) => {
                if !self.board.mark_visited(&self.ctx, neighbor) {
                    return None;
                }
                // Once the target is found, branches already in flight
                // finish their scans but start no new expansion.
                if !self.ctx.target_found() {
                    self.worklist.push(Unit {
                        pos: neighbor,
                        dir: 0,
                        generation,
                    });
                    self.ctx.unit_scheduled();
                }
                Some(self.emit(neighbor))
            }
        }
    }

    fn emit(&mut self, pos: Point) -> VisitEvent {
        let ev = VisitEvent {
            pos,
            order: self.order,
        };
        self.order += 1;
        ev
    }
}

impl Iterator for Traversal<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{RunSequence, VisitState};

    fn board_with(rows: i32, cols: i32, start: Point, target: Point) -> Board {
        let mut b = Board::new(rows, cols).unwrap();
        b.set_kind(start, TileKind::Start);
        b.set_kind(target, TileKind::Target);
        b
    }

    fn run_all(board: &mut Board) -> (Vec<VisitEvent>, TraversalResult) {
        let mut seq = RunSequence::new();
        let mut traversal = Traversal::new(board, seq.begin()).unwrap();
        let visits: Vec<VisitEvent> = traversal.by_ref().collect();
        let result = traversal.result().unwrap();
        (visits, result)
    }

    #[test]
    fn requires_start_and_target() {
        let mut b = Board::new(3, 3).unwrap();
        let mut seq = RunSequence::new();
        assert_eq!(
            Traversal::new(&mut b, seq.begin()).err(),
            Some(BoardError::NotFound(TileKind::Start))
        );
        b.set_kind(Point::new(0, 0), TileKind::Start);
        assert_eq!(
            Traversal::new(&mut b, seq.begin()).err(),
            Some(BoardError::NotFound(TileKind::Target))
        );
    }

    #[test]
    fn start_tile_is_visited_first() {
        let mut b = board_with(3, 3, Point::new(1, 1), Point::new(2, 2));
        let (visits, result) = run_all(&mut b);
        assert_eq!(visits[0].pos, Point::new(1, 1));
        assert_eq!(visits[0].order, 0);
        assert!(result.found);
    }

    #[test]
    fn expansion_is_depth_first_in_scan_order() {
        // Center start on an open 3x3 with the target in the corner. The
        // up-branch is explored to its own completion before the start
        // tile's later neighbors, and after the target is detected the
        // in-flight scans still mark their remaining neighbors without
        // expanding them.
        let mut b = board_with(3, 3, Point::new(1, 1), Point::new(2, 2));
        let (visits, result) = run_all(&mut b);
        let order: Vec<Point> = visits.iter().map(|v| v.pos).collect();
        assert_eq!(
            order,
            vec![
                Point::new(1, 1), // start
                Point::new(1, 0), // up
                Point::new(0, 0), // up-branch, left
                Point::new(0, 1), // down from (0,0)
                Point::new(0, 2),
                Point::new(1, 2), // right from (0,2); detects target at (2,2)
                Point::new(2, 0), // (1,0) resumes: right neighbor, no expansion
                Point::new(2, 1), // (1,1) resumes: right neighbor, no expansion
            ]
        );
        assert!(result.found);
    }

    #[test]
    fn visit_orders_are_sequential() {
        let mut b = board_with(4, 6, Point::new(0, 0), Point::new(5, 3));
        let (visits, _) = run_all(&mut b);
        for (i, v) in visits.iter().enumerate() {
            assert_eq!(v.order, i);
        }
    }

    #[test]
    fn no_tile_is_visited_twice() {
        let mut b = board_with(5, 5, Point::new(2, 2), Point::new(4, 4));
        let (visits, _) = run_all(&mut b);
        let mut seen = std::collections::HashSet::new();
        for v in &visits {
            assert!(seen.insert(v.pos), "{} visited twice", v.pos);
        }
    }

    #[test]
    fn adjacent_target_found_on_first_round() {
        // Target directly below the start: detected while scanning the
        // start tile's own neighbors. The right-hand neighbor is still
        // marked by the in-flight scan, but is never expanded.
        let mut b = board_with(2, 2, Point::new(0, 0), Point::new(0, 1));
        let (visits, result) = run_all(&mut b);
        assert!(result.found);
        assert_eq!(
            visits.iter().map(|v| v.pos).collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(1, 0)]
        );
    }

    #[test]
    fn walled_off_target_exhausts() {
        // Target in the corner behind a full diagonal wall.
        let mut b = board_with(3, 3, Point::new(0, 0), Point::new(2, 2));
        b.set_kind(Point::new(2, 1), TileKind::Wall);
        b.set_kind(Point::new(1, 2), TileKind::Wall);
        let (visits, result) = run_all(&mut b);
        assert!(!result.found);
        // Every reachable non-wall tile was explored exactly once.
        let reachable = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(0, 2),
        ];
        assert_eq!(visits.len(), reachable.len());
        for p in reachable {
            assert!(visits.iter().any(|v| v.pos == p), "{p} never visited");
        }
    }

    #[test]
    fn visit_state_matches_emitted_events() {
        let mut b = board_with(4, 4, Point::new(0, 0), Point::new(3, 3));
        let (visits, _) = run_all(&mut b);
        let visited: Vec<Point> = b
            .iter()
            .filter(|(_, t)| t.visit == VisitState::Visited)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(visited.len(), visits.len());
        for v in &visits {
            assert!(b.is_visited(v.pos));
        }
    }

    #[test]
    fn restart_supersedes_pending_units() {
        let mut b = board_with(4, 4, Point::new(0, 0), Point::new(3, 3));
        let mut seq = RunSequence::new();
        let mut traversal = Traversal::new(&mut b, seq.begin()).unwrap();

        // Consume a few events, leaving units of the first run queued.
        for _ in 0..3 {
            traversal.tick().unwrap();
        }

        traversal.restart(seq.begin());
        let visits: Vec<VisitEvent> = traversal.by_ref().collect();
        let result = traversal.result().unwrap();

        // The stale units no-oped; the new run is complete and well-formed.
        assert!(result.found);
        assert_eq!(visits[0].pos, Point::new(0, 0));
        assert_eq!(visits[0].order, 0);
        let mut seen = std::collections::HashSet::new();
        for v in &visits {
            assert!(seen.insert(v.pos), "{} visited twice after restart", v.pos);
        }
    }

    #[test]
    fn finished_traversal_stays_finished() {
        let mut b = board_with(2, 3, Point::new(0, 0), Point::new(2, 1));
        let mut seq = RunSequence::new();
        let mut traversal = Traversal::new(&mut b, seq.begin()).unwrap();
        while traversal.tick().is_some() {}
        assert!(traversal.result().is_some());
        assert_eq!(traversal.tick(), None);
        assert_eq!(traversal.tick(), None);
    }
}

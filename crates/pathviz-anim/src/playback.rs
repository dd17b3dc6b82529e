//! Timed playback of one run's event stream.

use pathviz_core::{Board, Orientation, PathStep, Point, RunContext, RunEvent, VisitEvent};

use crate::speed::StepDelays;
use crate::timeline::Timeline;

/// Build the ordered reveal steps for a path, deriving each step's
/// orientation from the delta towards its successor. The terminal step
/// keeps the direction it was entered with.
fn path_steps(path: &[Point]) -> Vec<PathStep> {
    let mut steps = Vec::with_capacity(path.len());
    let mut orientation = Orientation::Down;
    for (i, &pos) in path.iter().enumerate() {
        if let Some(&next) = path.get(i + 1) {
            orientation = Orientation::between(pos, next).unwrap_or(orientation);
        }
        steps.push(PathStep {
            pos,
            orientation,
            is_terminal: i + 1 == path.len(),
        });
    }
    steps
}

/// The timed playback of one run.
///
/// Scheduling uses cumulative offsets (visit `i` at `i * visit_ms`, path
/// step `j` at `visits_end + j * path_ms`) rather than chained callbacks,
/// so every entry stands alone and cancellation supersedes them wholesale.
/// The host drives playback with its own clock via
/// [`advance_to`](Self::advance_to); applying a path step moves the
/// transient arrow highlight along the board and marks `on_path`.
pub struct Playback {
    timeline: Timeline<RunEvent>,
    ctx: RunContext,
    prev_arrow: Option<Point>,
}

impl Playback {
    /// Schedule a whole run for playback.
    ///
    /// `visits`, `found` and `path` are the traversal's outputs; the run
    /// context must be the one the exploration ran under, already advanced
    /// to the reveal phase when a path was found. When the target was not
    /// found, a single [`RunEvent::TargetUnreachable`] is scheduled after
    /// the final visit.
    pub fn new(
        ctx: RunContext,
        visits: Vec<VisitEvent>,
        found: bool,
        path: Vec<Point>,
        delays: StepDelays,
    ) -> Self {
        let mut timeline = Timeline::new();
        let reveal_start = visits.len() as u64 * delays.visit_ms;

        for (i, visit) in visits.into_iter().enumerate() {
            timeline.schedule(RunEvent::Visit(visit), i as u64 * delays.visit_ms);
        }
        if found {
            for (j, step) in path_steps(&path).into_iter().enumerate() {
                timeline.schedule(
                    RunEvent::PathStep(step),
                    reveal_start + j as u64 * delays.path_ms,
                );
            }
        } else {
            timeline.schedule(RunEvent::TargetUnreachable, reveal_start);
        }

        log::debug!(
            "playback {:?}: scheduled through {reveal_start}ms, found={found}",
            ctx.generation()
        );
        Self {
            timeline,
            ctx,
            prev_arrow: None,
        }
    }

    /// Surface every event due at or before `now_ms`, in due-time order,
    /// applying reveal state to `board` as path steps pass.
    pub fn advance_to(&mut self, now_ms: u64, board: &mut Board) -> Vec<RunEvent> {
        let mut due = Vec::new();
        while let Some((event, _)) = self.timeline.pop_due(now_ms) {
            self.apply(event, board);
            due.push(event);
        }
        due
    }

    /// Due time of the next pending event, if playback is not finished.
    pub fn next_due(&mut self) -> Option<u64> {
        self.timeline.next_due()
    }

    /// Whether every scheduled event has surfaced or been superseded.
    pub fn is_finished(&mut self) -> bool {
        self.timeline.is_drained()
    }

    /// Abandon the remainder of the playback. Pending entries are
    /// superseded and never surface; board state is left to the next run's
    /// reset.
    pub fn cancel(&mut self) {
        log::debug!("playback {:?}: cancelled", self.ctx.generation());
        self.timeline.cancel();
        self.ctx.finish();
    }

    fn apply(&mut self, event: RunEvent, board: &mut Board) {
        match event {
            // Visit state was already stamped during exploration; the event
            // is purely presentational here.
            RunEvent::Visit(_) => {}
            RunEvent::TargetUnreachable => {
                self.ctx.finish();
            }
            RunEvent::PathStep(step) => {
                board.mark_on_path(&self.ctx, step.pos);
                board.set_arrow(&self.ctx, step.pos, true);
                if let Some(prev) = self.prev_arrow.take() {
                    board.set_arrow(&self.ctx, prev, false);
                }
                if step.is_terminal {
                    // The highlight window is bounded: the terminal step
                    // clears its own arrow and ends the run.
                    board.set_arrow(&self.ctx, step.pos, false);
                    self.ctx.finish();
                } else {
                    self.prev_arrow = Some(step.pos);
                }
            }
        }
    }
}

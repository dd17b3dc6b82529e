//! The event vocabulary crossing the engine boundary.
//!
//! A run surfaces an ordered stream of [`RunEvent`]s: one
//! [`VisitEvent`] per newly-explored tile, then either the path reveal as
//! ordered [`PathStep`]s (last one flagged terminal) or a single
//! [`RunEvent::TargetUnreachable`].

use crate::geom::{Orientation, Point};

/// One tile entering the visited set, with its global visitation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitEvent {
    pub pos: Point,
    /// Zero-based index in the run's visitation sequence.
    pub order: usize,
}

/// One step of the revealed shortest path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub pos: Point,
    /// Direction towards the next path coordinate. The terminal step keeps
    /// the direction it was entered with.
    pub orientation: Orientation,
    /// Set on the final step; applying it ends the run.
    pub is_terminal: bool,
}

/// An item of the run's ordered playback stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunEvent {
    Visit(VisitEvent),
    /// Exploration exhausted every reachable tile without detecting the
    /// target. Emitted at most once per run.
    TargetUnreachable,
    PathStep(PathStep),
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn run_event_round_trip() {
        let events = [
            RunEvent::Visit(VisitEvent {
                pos: Point::new(1, 2),
                order: 7,
            }),
            RunEvent::TargetUnreachable,
            RunEvent::PathStep(PathStep {
                pos: Point::new(4, 4),
                orientation: Orientation::Down,
                is_terminal: true,
            }),
        ];
        for ev in events {
            let json = serde_json::to_string(&ev).unwrap();
            let back: RunEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(ev, back);
        }
    }
}

//! **pathviz-anim** — playback timing for the pathviz engine.
//!
//! Turns the raw results of a run (visit events, the revealed path) into a
//! time-ordered stream a renderer can consume at its own pace:
//!
//! - [`Speed`] / [`StepDelays`]: the recognized pacing presets and the
//!   per-step delays behind them.
//! - [`Timeline`]: a due-time-ordered queue of generation-stamped entries;
//!   cancellation supersedes pending entries instead of chasing them down.
//! - [`Playback`]: schedules a whole run at cumulative offsets and applies
//!   reveal state to the board as path steps surface.
//!
//! Nothing here sleeps or spawns: the host advances playback with its own
//! clock, so the engine stays directly unit-testable.

mod playback;
mod speed;
mod timeline;

pub use playback::Playback;
pub use speed::{Speed, StepDelays};
pub use timeline::Timeline;

//! Per-run state: [`RunGeneration`], [`Phase`], [`RunContext`].
//!
//! Every traversal/reveal run owns a `RunContext`, handed a fresh
//! generation id from the host's [`RunSequence`]. Scheduled units carry the
//! generation they were created under and no-op when it no longer matches,
//! which is how superseded runs are cancelled without tracking the units
//! themselves.

/// Monotonically-assigned identifier of one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunGeneration(u64);

impl RunGeneration {
    /// Generation of the first run of a session.
    pub const FIRST: Self = Self(0);

    /// The generation after this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Hands out run generations, latest first.
#[derive(Debug, Default)]
pub struct RunSequence {
    current: Option<RunGeneration>,
}

impl RunSequence {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Start a new run: assign and return the next generation.
    pub fn begin(&mut self) -> RunGeneration {
        let next = match self.current {
            Some(g) => g.next(),
            None => RunGeneration::FIRST,
        };
        self.current = Some(next);
        next
    }

    /// Whether `generation` is the most recently assigned one.
    #[inline]
    pub fn is_current(&self, generation: RunGeneration) -> bool {
        self.current == Some(generation)
    }
}

/// Which component currently owns write access to the board's run state.
///
/// The traversal phase writes `visit`; the reveal phase writes `on_path`
/// and `arrow_active`. The phases never overlap within one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Explore,
    Reveal,
    Done,
}

/// State isolating one run from the next.
///
/// Holds the run's generation id, the outstanding-unit counter used to
/// detect exhaustion, the target-found flag, and the phase tag gating board
/// mutation.
#[derive(Debug)]
pub struct RunContext {
    generation: RunGeneration,
    phase: Phase,
    in_flight: usize,
    found: bool,
    unreachable_reported: bool,
}

impl RunContext {
    /// Create the context for a new run, starting in the explore phase.
    pub fn new(generation: RunGeneration) -> Self {
        Self {
            generation,
            phase: Phase::Explore,
            in_flight: 0,
            found: false,
            unreachable_reported: false,
        }
    }

    #[inline]
    pub fn generation(&self) -> RunGeneration {
        self.generation
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a unit stamped with `generation` belongs to this run.
    #[inline]
    pub fn accepts(&self, generation: RunGeneration) -> bool {
        self.generation == generation
    }

    // -----------------------------------------------------------------------
    // Outstanding-unit accounting
    // -----------------------------------------------------------------------

    /// Record that one expansion unit has been scheduled.
    #[inline]
    pub fn unit_scheduled(&mut self) {
        self.in_flight += 1;
    }

    /// Record that one scheduled unit ran to completion.
    ///
    /// The counter never goes negative; completing a unit that was never
    /// scheduled is a bug in the caller.
    #[inline]
    pub fn unit_completed(&mut self) {
        debug_assert!(self.in_flight > 0, "unit completed but none in flight");
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Number of scheduled-but-unfinished expansion units.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // -----------------------------------------------------------------------
    // Terminal-state flags
    // -----------------------------------------------------------------------

    /// Whether the target has been detected this run.
    #[inline]
    pub fn target_found(&self) -> bool {
        self.found
    }

    /// Record a target detection. Returns `true` only for the first
    /// detection of the run; sibling branches re-detecting the target get
    /// `false` and must not trigger another path computation.
    pub fn mark_found(&mut self) -> bool {
        let first = !self.found;
        self.found = true;
        first
    }

    /// Whether the run has explored everything without finding the target.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.in_flight == 0 && !self.found
    }

    /// Record that exhaustion has been surfaced to the host. Returns `true`
    /// only the first time, so the terminal event fires once per run.
    pub fn report_unreachable(&mut self) -> bool {
        let first = !self.unreachable_reported;
        self.unreachable_reported = true;
        first
    }

    // -----------------------------------------------------------------------
    // Phase transitions
    // -----------------------------------------------------------------------

    /// Hand board ownership from exploration to the reveal phase.
    pub fn begin_reveal(&mut self) {
        debug_assert_eq!(self.phase, Phase::Explore);
        self.phase = Phase::Reveal;
    }

    /// Mark the run finished; no further board mutation is allowed.
    pub fn finish(&mut self) {
        self.phase = Phase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let mut seq = RunSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert_ne!(a, b);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
        assert_eq!(a.next(), b);
    }

    #[test]
    fn found_flag_dedups_detections() {
        let mut ctx = RunContext::new(RunGeneration::FIRST);
        assert!(!ctx.target_found());
        assert!(ctx.mark_found());
        assert!(!ctx.mark_found());
        assert!(ctx.target_found());
    }

    #[test]
    fn unreachable_reported_once() {
        let mut ctx = RunContext::new(RunGeneration::FIRST);
        assert!(ctx.report_unreachable());
        assert!(!ctx.report_unreachable());
    }

    #[test]
    fn exhaustion_requires_zero_in_flight_and_no_target() {
        let mut ctx = RunContext::new(RunGeneration::FIRST);
        assert!(ctx.exhausted());
        ctx.unit_scheduled();
        assert!(!ctx.exhausted());
        ctx.unit_completed();
        assert!(ctx.exhausted());
        ctx.mark_found();
        assert!(!ctx.exhausted());
    }

    #[test]
    fn stale_generation_rejected() {
        let mut seq = RunSequence::new();
        let old = seq.begin();
        let ctx = RunContext::new(seq.begin());
        assert!(!ctx.accepts(old));
        assert!(ctx.accepts(ctx.generation()));
    }
}

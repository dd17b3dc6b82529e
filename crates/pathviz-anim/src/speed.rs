//! Playback pacing: [`Speed`] presets and [`StepDelays`].

/// Per-step playback delays, in milliseconds. Exploration and path reveal
/// are paced independently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepDelays {
    /// Delay between consecutive visit events.
    pub visit_ms: u64,
    /// Delay between consecutive path-reveal steps.
    pub path_ms: u64,
}

impl Default for StepDelays {
    fn default() -> Self {
        Speed::Normal.delays()
    }
}

/// The recognized playback speed settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    /// The fixed per-step delays this setting maps to.
    pub const fn delays(self) -> StepDelays {
        match self {
            Self::Slow => StepDelays {
                visit_ms: 80,
                path_ms: 150,
            },
            Self::Normal => StepDelays {
                visit_ms: 30,
                path_ms: 60,
            },
            Self::Fast => StepDelays {
                visit_ms: 8,
                path_ms: 25,
            },
        }
    }
}

use zxyt_core::SimulationResult;

/// Indicates how the engine terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Produced every requested frame.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The outcome of an observed run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the engine terminated.
    pub status: Status,

    /// Every frame emitted, including the one the observer stopped on.
    pub result: SimulationResult,

    /// Number of feedback iterations completed.
    pub steps: usize,
}

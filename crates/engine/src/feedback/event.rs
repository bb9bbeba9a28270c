use zxyt_core::Frame;

/// Event emitted by the feedback engine for each frame.
///
/// Step 0 is the initial frame, emitted before any feedback is applied.
/// Steps 1..N are emitted after each feedback iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The frame index, which doubles as the timestep.
    pub step: usize,

    /// The frame produced at this step.
    pub frame: Frame,
}

/// Control actions supported by the feedback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and return the frames produced so far.
    StopEarly,
}

use crate::Direction;

/// One timestep's snapshot of the feedback process.
///
/// `z` is the feedback term that was applied to reach this timestep, so it is
/// zero for the initial frame. `direction` is always consistent with `x` and
/// `y` when the frame is built with [`Frame::new`] or [`Frame::initial`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub direction: Direction,
}

impl Frame {
    /// Creates a frame, deriving `direction` from `x` and `y`.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            direction: Direction::between(x, y),
        }
    }

    /// Creates the frame at timestep zero, where no feedback has been applied.
    #[must_use]
    pub fn initial(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Returns `x - y`.
    #[must_use]
    pub fn imbalance(&self) -> f64 {
        self.x - self.y
    }
}

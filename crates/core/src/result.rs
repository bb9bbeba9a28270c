use std::{ops::Index, slice};

use crate::Frame;

/// The ordered frames produced by one simulation run.
///
/// Index order is time order: `result[i]` is the frame at timestep `i`, and a
/// completed run holds exactly `timesteps` frames. The result is read-only
/// once built. Changing parameters means running again, not patching.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimulationResult {
    frames: Vec<Frame>,
}

impl SimulationResult {
    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the result holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the frame at `timestep`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, timestep: usize) -> Option<&Frame> {
        self.frames.get(timestep)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Iterates over frames in time order.
    pub fn iter(&self) -> slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns a contiguous window of frames for display.
    ///
    /// See [`window_bounds`] for how `start` and `size` are clamped. The
    /// returned slice is empty only when the result itself is empty.
    #[must_use]
    pub fn window(&self, start: usize, size: usize) -> &[Frame] {
        let (start, end) = window_bounds(self.len(), start, size);
        &self.frames[start..end]
    }
}

/// Clamps a viewing window over `len` frames, returning `(start, end)`.
///
/// The size is clamped to `1..=len` and the start to `0..=len - size`, so the
/// window always fits and is never empty unless `len` is zero.
#[must_use]
pub fn window_bounds(len: usize, start: usize, size: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let size = size.clamp(1, len);
    let start = start.min(len - size);
    (start, start + size)
}

impl From<Vec<Frame>> for SimulationResult {
    fn from(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl FromIterator<Frame> for SimulationResult {
    fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Frame]> for SimulationResult {
    fn as_ref(&self) -> &[Frame] {
        &self.frames
    }
}

impl Index<usize> for SimulationResult {
    type Output = Frame;

    fn index(&self, timestep: usize) -> &Frame {
        &self.frames[timestep]
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a Frame;
    type IntoIter = slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl IntoIterator for SimulationResult {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

use std::fmt;

/// The state variable the observer currently points at.
///
/// The observer favors whichever variable is behind: [`Direction::Y`] when X
/// leads, [`Direction::X`] when Y leads or the two are tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    X,
    Y,
}

impl Direction {
    /// Returns the direction for an imbalance `x - y`.
    ///
    /// Only a strictly positive imbalance points at `Y`. Zero (and NaN) point
    /// at `X`.
    #[must_use]
    pub fn from_imbalance(imbalance: f64) -> Self {
        if imbalance > 0.0 { Self::Y } else { Self::X }
    }

    /// Returns the direction favored by the pair `(x, y)`.
    #[must_use]
    pub fn between(x: f64, y: f64) -> Self {
        Self::from_imbalance(x - y)
    }

    /// Returns the label used in exports and charts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

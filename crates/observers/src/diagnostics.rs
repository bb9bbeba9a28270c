//! Running statistics for checking a simulation's behavior.
//!
//! [`Diagnostics`] separates each step into its deterministic and random
//! parts:
//!
//! ```text
//! x noise = x_n - x_{n-1} - z_n
//! y noise = y_n - y_{n-1} + z_n
//! ```
//!
//! For a healthy run both noise residuals have mean ≈ 0 and a standard
//! deviation close to the configured noise intensity, while `z_n` is exactly
//! `-strength` whenever the previous imbalance was positive and `+strength`
//! otherwise.
//!
//! Diagnostics can span several runs. A step-0 event starts a new run, so no
//! residual is ever computed across a run boundary.

use std::fmt;

use zxyt_core::{Direction, Frame, Observer};

use crate::traits::HasFrame;

/// Count, mean, and spread of a stream of values (Welford's algorithm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Adds a value.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        #[allow(clippy::cast_precision_loss)]
        let n = self.count as f64;
        let delta = value - self.mean;
        self.mean += delta / n;
        self.m2 += delta * (value - self.mean);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the mean, or NaN if no values were pushed.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.mean }
    }

    /// Returns the sample variance, or NaN with fewer than two values.
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return f64::NAN;
        }
        #[allow(clippy::cast_precision_loss)]
        let denominator = (self.count - 1) as f64;
        self.m2 / denominator
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Returns the smallest value, or NaN if no values were pushed.
    #[must_use]
    pub fn min(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.min }
    }

    /// Returns the largest value, or NaN if no values were pushed.
    #[must_use]
    pub fn max(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.max }
    }
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:+.6} sd={:.6} min={:+.6} max={:+.6}",
            self.count,
            self.mean(),
            self.std_dev(),
            self.min(),
            self.max(),
        )
    }
}

/// A snapshot of everything [`Diagnostics`] has accumulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of runs observed.
    pub runs: usize,

    /// Number of frames observed across all runs.
    pub frames: usize,

    /// `x_n - x_{n-1} - z_n` for every step.
    pub x_noise: RunningStats,

    /// `y_n - y_{n-1} + z_n` for every step.
    pub y_noise: RunningStats,

    /// `z_n` for steps whose previous imbalance was positive.
    pub z_when_x_leads: RunningStats,

    /// `z_n` for steps whose previous imbalance was zero or negative.
    pub z_otherwise: RunningStats,

    /// Frames pointing at X.
    pub toward_x: usize,

    /// Frames pointing at Y.
    pub toward_y: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "runs:            {}", self.runs)?;
        writeln!(f, "frames:          {}", self.frames)?;
        writeln!(f, "x noise:         {}", self.x_noise)?;
        writeln!(f, "y noise:         {}", self.y_noise)?;
        writeln!(f, "z | x leads:     {}", self.z_when_x_leads)?;
        writeln!(f, "z | otherwise:   {}", self.z_otherwise)?;
        write!(
            f,
            "direction:       X={} Y={}",
            self.toward_x, self.toward_y
        )
    }
}

/// An observer that accumulates [`Summary`] statistics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    previous: Option<Frame>,
    summary: Summary,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            runs: 0,
            frames: 0,
            x_noise: RunningStats::new(),
            y_noise: RunningStats::new(),
            z_when_x_leads: RunningStats::new(),
            z_otherwise: RunningStats::new(),
            toward_x: 0,
            toward_y: 0,
        }
    }
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistics gathered so far.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Adds an already computed run, treating `frames[0]` as step 0.
    pub fn record_run(&mut self, frames: &[Frame]) {
        for (step, frame) in frames.iter().enumerate() {
            self.record(step, frame);
        }
    }

    fn record(&mut self, step: usize, frame: &Frame) {
        if step == 0 {
            self.summary.runs += 1;
            self.previous = None;
        }

        if let Some(prev) = self.previous {
            let summary = &mut self.summary;
            summary.x_noise.push(frame.x - prev.x - frame.z);
            summary.y_noise.push(frame.y - prev.y + frame.z);
            if prev.imbalance() > 0.0 {
                summary.z_when_x_leads.push(frame.z);
            } else {
                summary.z_otherwise.push(frame.z);
            }
        }

        self.summary.frames += 1;
        match frame.direction {
            Direction::X => self.summary.toward_x += 1,
            Direction::Y => self.summary.toward_y += 1,
        }
        self.previous = Some(*frame);
    }
}

impl<E: HasFrame, A> Observer<E, A> for Diagnostics {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.step(), event.frame());
        None
    }
}

/// Allows `&mut Diagnostics` to be passed to engines that take an observer by
/// value, so it can be reused across runs.
impl<E: HasFrame, A> Observer<E, A> for &mut Diagnostics {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

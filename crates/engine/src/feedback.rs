//! The stochastic feedback engine.
//!
//! A run starts from `(initial_x, initial_y)` and, for each later timestep,
//! applies a feedback term whose sign opposes the previous imbalance plus
//! independent Gaussian noise on each variable:
//!
//! ```text
//! z_n = -strength if x_{n-1} - y_{n-1} > 0 else +strength
//! x_n = x_{n-1} + noise * g1 + z_n
//! y_n = y_{n-1} + noise * g2 - z_n
//! ```
//!
//! Ties (an imbalance of exactly zero) resolve to `+strength`. With noise
//! disabled the process oscillates with period 2 rather than settling.
//!
//! # Example
//!
//! ```
//! use zxyt_core::Direction;
//! use zxyt_engine::{BoxMuller, SimulationConfig, feedback};
//!
//! let config = SimulationConfig { timesteps: 50, ..SimulationConfig::default() };
//! let mut noise = BoxMuller::seeded(11);
//!
//! let solution = feedback::solve(&config, &mut noise, |event: &feedback::Event| {
//!     (event.frame.direction == Direction::X && event.step > 10)
//!         .then_some(feedback::Action::StopEarly)
//! })?;
//!
//! assert!(solution.result.len() <= 50);
//! # Ok::<(), feedback::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use zxyt_core::{Frame, GaussianSource, Observer, SimulationResult};

use crate::{BoxMuller, SimulationConfig};

/// Upper bound on the frames reserved up front.
///
/// Longer runs grow the buffer as frames arrive, so a huge `timesteps` that an
/// observer cuts short never requests its full allocation.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Runs the engine, reporting each frame to an observer.
///
/// # Algorithm
///
/// 1. Validate the config.
/// 2. Emit the initial frame `(initial_x, initial_y, 0)` as step 0.
/// 3. For each step `1..timesteps`:
///    - Pick the feedback term from the previous frame's imbalance.
///    - Draw noise for X, then a fresh draw for Y.
///    - Build the next frame and emit it.
///    - If the observer returns `StopEarly`, terminate.
/// 4. Return every frame produced.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if the config fails validation. In
/// that case no frame is computed and the observer is never called.
pub fn solve<G, Obs>(
    config: &SimulationConfig,
    noise: &mut G,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: GaussianSource + ?Sized,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    log::debug!(
        "running {} timesteps (strength={}, noise={}, x0={}, y0={})",
        config.timesteps,
        config.observer_strength,
        config.noise_intensity,
        config.initial_x,
        config.initial_y,
    );

    let mut frames = Vec::with_capacity(config.timesteps.min(PREALLOC_LIMIT));
    let mut current = Frame::initial(config.initial_x, config.initial_y);
    frames.push(current);

    let event = Event {
        step: 0,
        frame: current,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(frames, 0));
    }

    for step in 1..config.timesteps {
        current = advance(&current, config, noise);
        frames.push(current);

        log::trace!(
            "step {step}: x={} y={} z={} -> {}",
            current.x,
            current.y,
            current.z,
            current.direction,
        );

        let event = Event {
            step,
            frame: current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(frames, step));
        }
    }

    log::debug!(
        "run complete: final x={} y={} ({})",
        current.x,
        current.y,
        current.direction,
    );

    Ok(Solution {
        status: Status::Complete,
        result: frames.into(),
        steps: config.timesteps - 1,
    })
}

/// Runs the engine without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the config fails validation.
pub fn solve_unobserved<G>(config: &SimulationConfig, noise: &mut G) -> Result<Solution, Error>
where
    G: GaussianSource + ?Sized,
{
    solve(config, noise, ())
}

/// Runs the engine with the calling thread's random generator.
///
/// The result holds exactly `config.timesteps` frames.
///
/// # Errors
///
/// Returns an error if the config fails validation.
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, Error> {
    solve_unobserved(config, &mut BoxMuller::thread_local()).map(|solution| solution.result)
}

/// Runs the engine with a reproducible generator seeded with `seed`.
///
/// # Errors
///
/// Returns an error if the config fails validation.
pub fn run_seeded(config: &SimulationConfig, seed: u64) -> Result<SimulationResult, Error> {
    solve_unobserved(config, &mut BoxMuller::seeded(seed)).map(|solution| solution.result)
}

/// Returns the feedback term for an imbalance `x - y`.
///
/// The term opposes a positive imbalance. Zero and negative imbalances both
/// get `+strength`.
#[must_use]
pub fn feedback_term(imbalance: f64, strength: f64) -> f64 {
    if imbalance > 0.0 { -strength } else { strength }
}

/// Computes the frame that follows `prev`.
fn advance<G>(prev: &Frame, config: &SimulationConfig, noise: &mut G) -> Frame
where
    G: GaussianSource + ?Sized,
{
    let z = feedback_term(prev.imbalance(), config.observer_strength);
    let x = prev.x + config.noise_intensity * noise.sample() + z;
    let y = prev.y + config.noise_intensity * noise.sample() - z;
    Frame::new(x, y, z)
}

fn stopped(frames: Vec<Frame>, steps: usize) -> Solution {
    log::debug!("run stopped by observer after {steps} steps");
    Solution {
        status: Status::StoppedByObserver,
        result: frames.into(),
        steps,
    }
}

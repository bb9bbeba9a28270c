//! Standard normal sampling via the Box–Muller transform.
//!
//! Each draw consumes two uniforms `u, v` from the open interval (0, 1) and
//! returns
//!
//! ```text
//! sqrt(-2 ln u) * cos(2π v)
//! ```
//!
//! The companion sine value is discarded, so every call is independent of
//! every other call.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, distributions::Open01, rngs::ThreadRng};
use rand_chacha::ChaCha8Rng;
use zxyt_core::GaussianSource;

/// A [`GaussianSource`] built on any `rand` generator.
#[derive(Debug, Clone)]
pub struct BoxMuller<R> {
    rng: R,
}

impl<R: Rng> BoxMuller<R> {
    /// Wraps a uniform generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns one standard normal draw.
    pub fn draw(&mut self) -> f64 {
        // Open01 excludes zero, so the logarithm is always finite.
        let u: f64 = self.rng.sample(Open01);
        let v: f64 = self.rng.sample(Open01);
        (-2.0 * u.ln()).sqrt() * (TAU * v).cos()
    }
}

impl BoxMuller<ThreadRng> {
    /// A sampler over the calling thread's generator.
    ///
    /// The generator is seeded from the operating system and local to the
    /// thread, so concurrent runs on different threads share nothing.
    #[must_use]
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl BoxMuller<ChaCha8Rng> {
    /// A reproducible sampler seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianSource for BoxMuller<R> {
    fn sample(&mut self) -> f64 {
        self.draw()
    }
}

//! Stochastic X/Y feedback simulation.
//!
//! The engine evolves two coupled state variables under independent Gaussian
//! noise and a feedback term that pulls their imbalance back toward zero:
//!
//! ```text
//! z_{n+1} = -strength if x_n - y_n > 0 else +strength
//! x_{n+1} = x_n + noise * g1 + z_{n+1}
//! y_{n+1} = y_n + noise * g2 - z_{n+1}
//! ```
//!
//! # Modules
//!
//! - [`feedback`] — the engine itself, with observed and unobserved entry points
//! - [`gaussian`] — the Box–Muller standard normal sampler
//!
//! # Example
//!
//! ```
//! use zxyt_engine::{SimulationConfig, run_seeded};
//!
//! let config = SimulationConfig::default();
//! let result = run_seeded(&config, 7)?;
//!
//! assert_eq!(result.len(), config.timesteps);
//! assert_eq!(result[0].z, 0.0);
//! # Ok::<(), zxyt_engine::feedback::Error>(())
//! ```

mod config;

pub mod feedback;
pub mod gaussian;

pub use config::{ConfigError, SimulationConfig};
pub use feedback::{run, run_seeded};
pub use gaussian::BoxMuller;

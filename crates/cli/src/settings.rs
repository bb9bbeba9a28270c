//! Simulation parameters from a TOML file and command-line overrides.
//!
//! Precedence is flags, then the file, then [`SimulationConfig::default`].
//! Every key in the file is optional:
//!
//! ```toml
//! timesteps = 1000
//! observer_strength = 0.2
//! noise_intensity = 0.05
//! initial_x = 0.6
//! initial_y = 0.4
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args;
use zxyt_core::GaussianSource;
use zxyt_engine::{BoxMuller, SimulationConfig};

/// Simulation parameters shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SimArgs {
    /// TOML file with simulation parameters
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of frames to produce
    #[arg(long)]
    pub timesteps: Option<usize>,

    /// Magnitude of the feedback term Z
    #[arg(long)]
    pub observer_strength: Option<f64>,

    /// Standard deviation of the noise on X and Y
    #[arg(long)]
    pub noise_intensity: Option<f64>,

    /// Starting value of X
    #[arg(long, allow_hyphen_values = true)]
    pub initial_x: Option<f64>,

    /// Starting value of Y
    #[arg(long, allow_hyphen_values = true)]
    pub initial_y: Option<f64>,

    /// Seed for a reproducible run (unseeded if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimArgs {
    /// Builds the validated config for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if
    /// the merged parameters are invalid.
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(timesteps) = self.timesteps {
            config.timesteps = timesteps;
        }
        if let Some(strength) = self.observer_strength {
            config.observer_strength = strength;
        }
        if let Some(noise) = self.noise_intensity {
            config.noise_intensity = noise;
        }
        if let Some(x) = self.initial_x {
            config.initial_x = x;
        }
        if let Some(y) = self.initial_y {
            config.initial_y = y;
        }

        config
            .validate()
            .context("invalid simulation parameters")?;
        log::debug!("resolved config: {config:?}");
        Ok(config)
    }

    /// Returns the noise source for this invocation.
    pub fn noise_source(&self) -> Box<dyn GaussianSource> {
        match self.seed {
            Some(seed) => Box::new(BoxMuller::seeded(seed)),
            None => Box::new(BoxMuller::thread_local()),
        }
    }
}

/// Reads a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid config.
pub fn load_config(path: &Path) -> Result<SimulationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parse config file {}", path.display()))
}

/// Parses config TOML. Missing keys take their defaults.
///
/// # Errors
///
/// Returns an error for malformed TOML, wrong value types, or unknown keys.
pub fn parse_config(text: &str) -> Result<SimulationConfig, toml::de::Error> {
    toml::from_str(text)
}

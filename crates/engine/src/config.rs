use thiserror::Error;

/// Parameters for a single simulation run.
///
/// Fields are public so callers can build a config with struct update syntax
/// over [`Default`]. Every run validates the config before computing any
/// frame, so an invalid config never produces a partial result.
///
/// ```
/// use zxyt_engine::SimulationConfig;
///
/// let config = SimulationConfig {
///     noise_intensity: 0.0,
///     ..SimulationConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimulationConfig {
    /// Number of frames to produce, including the initial frame.
    pub timesteps: usize,

    /// Magnitude of the feedback term Z.
    pub observer_strength: f64,

    /// Standard deviation of the additive noise on X and Y.
    pub noise_intensity: f64,

    /// Starting value of X.
    pub initial_x: f64,

    /// Starting value of Y.
    pub initial_y: f64,
}

/// Reasons a [`SimulationConfig`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timesteps must be at least 1")]
    Timesteps,

    #[error("observer_strength must be finite and positive")]
    ObserverStrength,

    #[error("noise_intensity must be finite and non-negative")]
    NoiseIntensity,

    #[error("initial_x must be finite")]
    InitialX,

    #[error("initial_y must be finite")]
    InitialY,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timesteps: 500,
            observer_strength: 0.1,
            noise_intensity: 0.05,
            initial_x: 0.6,
            initial_y: 0.4,
        }
    }
}

impl SimulationConfig {
    /// Checks every field against its constraint.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, checked in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timesteps == 0 {
            return Err(ConfigError::Timesteps);
        }
        if !self.observer_strength.is_finite() || self.observer_strength <= 0.0 {
            return Err(ConfigError::ObserverStrength);
        }
        if !self.noise_intensity.is_finite() || self.noise_intensity < 0.0 {
            return Err(ConfigError::NoiseIntensity);
        }
        if !self.initial_x.is_finite() {
            return Err(ConfigError::InitialX);
        }
        if !self.initial_y.is_finite() {
            return Err(ConfigError::InitialY);
        }
        Ok(())
    }

    /// Returns `true` if the run is fully deterministic.
    #[must_use]
    pub fn is_noiseless(&self) -> bool {
        self.noise_intensity == 0.0
    }
}

use crate::ConfigError;

/// Errors that can occur when running the feedback engine.
///
/// The update rule itself cannot fail for finite inputs, so configuration is
/// the only thing checked. It is checked before any frame is produced.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

//! Error types for collection operations.

use thiserror::Error;

/// Result type for fallible collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in collection operations.
///
/// Membership and mutation operations report through their boolean results;
/// only snapshot copies, drains and option handling can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Destination slice cannot hold every element.
    #[error("destination too small: {required} elements required, {available} available")]
    InsufficientCapacity { required: usize, available: usize },

    /// Drain options failed validation.
    #[error("invalid drain options: {0}")]
    InvalidOptions(String),

    /// No drain producer thread could be started.
    #[error("failed to start drain producer: {0}")]
    ProducerSpawn(#[source] std::io::Error),

    /// Drain options document could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

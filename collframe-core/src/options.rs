//! Configuration for channel draining.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Channel capacity used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 64;

/// Options for [`IterableColl::ch_with`](crate::IterableColl::ch_with).
///
/// Missing fields take their defaults when deserialized, so `{}` and
/// `{"workers": 4}` are both valid documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrainOptions {
    /// Capacity of the bounded channel.
    pub buffer_size: usize,
    /// Number of producer threads. One keeps iteration order.
    pub workers: usize,
}

impl Default for DrainOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            workers: 1,
        }
    }
}

impl DrainOptions {
    /// Single producer, iteration order preserved.
    #[must_use]
    pub fn ordered(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            workers: 1,
        }
    }

    /// `workers` producers, no ordering guarantee across them.
    #[must_use]
    pub fn parallel(buffer_size: usize, workers: usize) -> Self {
        Self {
            buffer_size,
            workers,
        }
    }

    /// Returns true if draining fans out over more than one producer.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }

    /// Checks that both sizes are non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::InvalidOptions(
                "buffer_size must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(Error::InvalidOptions(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses options from a JSON document and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ordered() {
        let options = DrainOptions::default();
        assert_eq!(options.buffer_size, DEFAULT_BUFFER_SIZE);
        assert!(!options.is_parallel());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let options = DrainOptions::from_json(r#"{"workers": 4}"#).unwrap();
        assert_eq!(options, DrainOptions::parallel(DEFAULT_BUFFER_SIZE, 4));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(matches!(
            DrainOptions::ordered(0).validate(),
            Err(Error::InvalidOptions(_))
        ));
        assert!(matches!(
            DrainOptions::from_json(r#"{"workers": 0}"#),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn malformed_document_is_a_serialization_error() {
        assert!(matches!(
            DrainOptions::from_json("{workers: many}"),
            Err(Error::Serialization(_))
        ));
    }
}

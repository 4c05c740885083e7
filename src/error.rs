//! Error types for the cache tooling
//!
//! Cache operations themselves never fail; these cover configuration and
//! command scripts.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for configuration and script handling.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Policy name not recognised
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Capacity missing, unparsable or zero
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Malformed script line
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Reading the script or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache tooling.
pub type Result<T> = std::result::Result<T, CacheError>;

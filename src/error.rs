//! Error type for rejected simulation configuration.

use thiserror::Error;

/// Errors raised when steering parameters or world bounds cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlockError {
    /// A single parameter is non-finite or outside its allowed range.
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    /// Separation is evaluated among perceived neighbors only, so it cannot reach further.
    #[error("separation radius {separation} exceeds perception radius {perception}")]
    RadiusOrder { perception: f32, separation: f32 },
    #[error("invalid world bounds {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, FlockError>;

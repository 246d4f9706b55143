use thiserror::Error;

/// Errors originating from the core fractal math.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid scale: {0} (must be positive and finite)")]
    InvalidScale(f64),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}

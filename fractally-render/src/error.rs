use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid image dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to allocate a {width}×{height} pixel buffer")]
    Allocation { width: u32, height: u32 },

    #[error(transparent)]
    Core(#[from] fractally_core::CoreError),
}

pub mod buffer;
pub mod error;
pub mod renderer;

pub use buffer::{DirtyRect, PixelBuffer};
pub use error::RenderError;
pub use renderer::{render, RenderStats};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;

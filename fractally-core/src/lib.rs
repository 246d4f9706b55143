pub mod color;
pub mod complex;
pub mod error;
pub mod mandelbrot;
pub mod view;
pub mod viewport;

// Re-export primary types for convenience.
pub use color::Color;
pub use complex::Complex;
pub use error::CoreError;
pub use mandelbrot::{escape_time, iterate, max_iterations, IterationResult};
pub use view::ViewState;
pub use viewport::{to_plane, Viewport};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;

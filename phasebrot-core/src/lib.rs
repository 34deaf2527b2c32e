pub mod color;
pub mod complex;
pub mod controller;
pub mod error;
pub mod input;
pub mod kernel;
pub mod viewport;

// Re-export primary types for convenience.
pub use color::Argb;
pub use complex::Complex;
pub use controller::{Outcome, ViewportController};
pub use error::CoreError;
pub use input::{Action, ButtonMask, InputEvent, KeyBindings};
pub use kernel::{compute_pixel, Kernel, MAX_ITERATIONS};
pub use viewport::ViewportState;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;

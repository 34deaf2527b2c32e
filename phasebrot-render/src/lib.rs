pub mod band;
pub mod buffer;
pub mod error;
pub mod export;
pub mod renderer;

pub use band::BAND_ROWS;
pub use buffer::FrameBuffer;
pub use error::RenderError;
pub use export::{export_png, save_snapshot};
pub use renderer::{fill, FrameRenderer, FrameStats};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;

use thiserror::Error;

/// Errors originating from the core viewport model.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid viewport dimensions: {width}×{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },
}

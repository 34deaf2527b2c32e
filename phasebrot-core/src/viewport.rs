use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;

/// Navigation and animation state for one view.
///
/// `scale` is the width of the plane window mapped across the buffer; the
/// same width-relative factor is applied on the vertical axis (divided by
/// the buffer height), so the mapping is deliberately non-square.
///
/// All fields are mutated only through the transition methods below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Centre of the view on the mapped plane.
    pub center: Complex,

    /// Plane units spanned across the buffer. Kept in `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,

    /// Elapsed animation steps. Perturbs the initial iterate.
    pub phase: u64,

    /// When set, [`advance_frame`](Self::advance_frame) leaves `phase` alone.
    pub paused: bool,

    /// Buffer width in pixels.
    pub width: u32,

    /// Buffer height in pixels.
    pub height: u32,
}

impl ViewportState {
    pub const DEFAULT_CENTER: Complex = Complex { re: -0.5, im: 0.0 };
    pub const DEFAULT_SCALE: f64 = 3.0;

    /// Zoom factor for one scroll step towards the plane.
    pub const ZOOM_IN_FACTOR: f64 = 0.8;
    /// Zoom factor for one scroll step away from the plane.
    pub const ZOOM_OUT_FACTOR: f64 = 1.2;

    /// Below this, neighbouring pixels collapse onto the same `f64`.
    pub const MIN_SCALE: f64 = 1e-12;
    /// Beyond this, the whole escape disc is a few pixels wide.
    pub const MAX_SCALE: f64 = 64.0;

    /// Create the startup state for a `width`×`height` buffer.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            center: Self::DEFAULT_CENTER,
            scale: Self::DEFAULT_SCALE,
            phase: 0,
            paused: false,
            width,
            height,
        })
    }

    /// Number of pixels a buffer for this state must hold.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    // -- Zoom ---------------------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.zoom_by(Self::ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(Self::ZOOM_OUT_FACTOR);
    }

    /// Multiply `scale` by `factor`, clamped to the supported range.
    pub fn zoom_by(&mut self, factor: f64) {
        let scaled = self.scale * factor;
        self.scale = if scaled.is_finite() {
            scaled.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
        } else {
            Self::MAX_SCALE
        };
    }

    // -- Pan ----------------------------------------------------------------

    /// Move the view opposite to a pointer drag of `(dx, dy)` pixels.
    ///
    /// The step is proportional to `scale`, so a drag covers the same share
    /// of the screen at every zoom level.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.re -= dx * self.scale / self.width as f64;
        self.center.im -= dy * self.scale / self.height as f64;
    }

    pub fn reset_view(&mut self) {
        self.center = Self::DEFAULT_CENTER;
        self.scale = Self::DEFAULT_SCALE;
    }

    // -- Animation ----------------------------------------------------------

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, phase = self.phase, "Toggled pause");
    }

    pub fn step_back(&mut self) {
        self.phase = self.phase.saturating_sub(1);
    }

    pub fn step_forward(&mut self) {
        self.phase = self.phase.saturating_add(1);
    }

    /// Called once per rendered frame, after the fill that used `phase`.
    pub fn advance_frame(&mut self) {
        if !self.paused {
            self.phase = self.phase.saturating_add(1);
        }
    }

    // -- Resize -------------------------------------------------------------

    /// Adopt new buffer dimensions. Returns `false` (and changes nothing)
    /// when either dimension is zero or the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}

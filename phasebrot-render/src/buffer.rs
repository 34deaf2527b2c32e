use phasebrot_core::{Argb, ViewportState};

use crate::error::RenderError;

/// A dense, row-major raster of packed [`Argb`] pixels.
///
/// Pixel `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        let mut buf = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        buf.resize(width, height)?;
        Ok(buf)
    }

    /// Allocate a buffer matching `state`'s dimensions.
    pub fn for_viewport(state: &ViewportState) -> crate::Result<Self> {
        Self::new(state.width, state.height)
    }

    /// Reallocate to `width`×`height`. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> crate::Result<()> {
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|source| RenderError::Allocation {
                width,
                height,
                source,
            })?;
        pixels.resize(len, Argb::TRANSPARENT);
        self.pixels = pixels;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` when the buffer can be filled for `state` as-is.
    pub fn matches(&self, state: &ViewportState) -> bool {
        self.width == state.width && self.height == state.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// RGBA bytes with alpha forced to 255, 4 bytes per pixel.
    ///
    /// The packed alpha channel mirrors the gray level; surfaces that
    /// alpha-blend would fade dark regions out, so presentation and PNG
    /// snapshots use this opaque form.
    pub fn to_rgba_opaque(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba_opaque());
        }
        out
    }
}

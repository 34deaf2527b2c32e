use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use phasebrot_core::{Argb, Kernel, ViewportState};

use crate::band::{bands, Band, BAND_ROWS};
use crate::buffer::FrameBuffer;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Timing and partitioning figures for one completed fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub elapsed: Duration,
    pub bands: usize,
    pub phase: u64,
}

// ---------------------------------------------------------------------------
// Per-band work
// ---------------------------------------------------------------------------

/// Write every pixel of one band. `out` is exactly the band's slice.
fn fill_band(kernel: &Kernel, band: Band, width: u32, out: &mut [Argb]) {
    debug_assert_eq!(out.len(), band.pixel_count(width));
    for (row, line) in out.chunks_exact_mut(width as usize).enumerate() {
        let y = band.y + row as u32;
        for (x, px) in line.iter_mut().enumerate() {
            *px = kernel.pixel(x as u32, y);
        }
    }
}

/// Fan the bands out over the current rayon pool and wait for all of them.
/// Returns the number of bands written.
fn fill_parallel(buffer: &mut FrameBuffer, state: &ViewportState) -> usize {
    let kernel = Kernel::new(state);
    let width = state.width;
    let grid = bands(state.height);
    let chunk = BAND_ROWS as usize * width as usize;

    buffer
        .pixels_mut()
        .par_chunks_mut(chunk.max(1))
        .zip(grid.par_iter())
        .for_each(|(out, &band)| fill_band(&kernel, band, width, out));
    grid.len()
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Fills frame buffers in parallel, on the global rayon pool or a private one.
#[derive(Debug)]
pub struct FrameRenderer {
    pool: Option<rayon::ThreadPool>,
}

impl FrameRenderer {
    /// `workers == 0` uses the global pool, sized to the available cores.
    /// Any other value builds a dedicated pool with exactly that many threads.
    pub fn new(workers: usize) -> crate::Result<Self> {
        if workers == 0 {
            info!(
                workers = rayon::current_num_threads(),
                "Using global render pool"
            );
            return Ok(Self { pool: None });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("phasebrot-fill-{i}"))
            .build()
            .map_err(|source| RenderError::ThreadPool { workers, source })?;
        info!(workers, "Built dedicated render pool");
        Ok(Self { pool: Some(pool) })
    }

    /// Number of threads a fill fans out to.
    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Write the kernel's color for every pixel of `state` into `buffer`.
    ///
    /// Returns only once every band is written. `state` is read-only for the
    /// duration, so every pixel sees the same phase.
    ///
    /// # Panics
    ///
    /// If `buffer` was not resized to `state`'s dimensions first.
    pub fn fill(&self, buffer: &mut FrameBuffer, state: &ViewportState) -> FrameStats {
        assert!(
            buffer.matches(state),
            "frame buffer is {}×{} but viewport is {}×{}",
            buffer.width(),
            buffer.height(),
            state.width,
            state.height,
        );

        let start = Instant::now();
        let bands = match &self.pool {
            Some(pool) => pool.install(|| fill_parallel(buffer, state)),
            None => fill_parallel(buffer, state),
        };
        let elapsed = start.elapsed();
        debug!(
            elapsed_us = elapsed.as_micros() as u64,
            bands,
            phase = state.phase,
            width = state.width,
            height = state.height,
            "Frame filled"
        );

        FrameStats {
            elapsed,
            bands,
            phase: state.phase,
        }
    }
}

/// Fill `buffer` on the global pool.
pub fn fill(buffer: &mut FrameBuffer, state: &ViewportState) -> FrameStats {
    FrameRenderer { pool: None }.fill(buffer, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasebrot_core::compute_pixel;

    #[test]
    fn fill_matches_kernel_everywhere() {
        let mut state = ViewportState::new(37, 29).unwrap();
        state.phase = 77;
        let mut buffer = FrameBuffer::for_viewport(&state).unwrap();

        let stats = fill(&mut buffer, &state);

        assert_eq!(stats.bands, 4);
        assert_eq!(stats.phase, 77);
        for y in 0..29 {
            for x in 0..37 {
                assert_eq!(buffer.get(x, y), Some(compute_pixel(x, y, &state)));
            }
        }
    }

    #[test]
    fn fill_writes_every_index_once() {
        // The kernel only emits gray values, so this can never be a fill result.
        let sentinel = Argb(0xDEAD_BEEF);
        let mut state = ViewportState::new(123, 45).unwrap();
        state.phase = 31;

        for workers in [1, 4] {
            let mut buffer = FrameBuffer::for_viewport(&state).unwrap();
            buffer.pixels_mut().fill(sentinel);

            FrameRenderer::new(workers).unwrap().fill(&mut buffer, &state);

            assert!(!buffer.pixels().contains(&sentinel), "{workers} workers");
            for (i, px) in buffer.pixels().iter().enumerate() {
                let x = (i % 123) as u32;
                let y = (i / 123) as u32;
                assert_eq!(*px, compute_pixel(x, y, &state), "index {i}");
            }
        }
    }

    #[test]
    fn dedicated_pool_reports_its_size() {
        let renderer = FrameRenderer::new(3).unwrap();
        assert_eq!(renderer.workers(), 3);
    }

    #[test]
    #[should_panic(expected = "frame buffer is")]
    fn stale_buffer_is_a_programming_error() {
        let mut state = ViewportState::new(16, 16).unwrap();
        let mut buffer = FrameBuffer::for_viewport(&state).unwrap();
        state.resize(32, 16);
        fill(&mut buffer, &state);
    }
}

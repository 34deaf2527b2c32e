//! The per-pixel escape-time computation.
//!
//! Everything here is a pure function of its arguments, so the renderer can
//! call it from any number of threads for distinct pixels.

use crate::color::Argb;
use crate::complex::Complex;
use crate::viewport::ViewportState;

/// Iteration cap. Points that survive this many steps get full intensity.
pub const MAX_ITERATIONS: u32 = 256;

/// `|z|² > 4` means `|z| > 2`: the orbit has escaped.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Radians of initial-iterate phase per animation step.
pub const PHASE_RATE: f64 = 0.01;

/// Per-frame constants derived from a [`ViewportState`].
///
/// Building one hoists the `sin` of the animation phase and the buffer
/// half-extents out of the per-pixel path. [`Kernel::pixel`] performs the
/// same arithmetic, in the same order, as [`compute_pixel`].
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    center: Complex,
    scale: f64,
    width: f64,
    height: f64,
    half_w: f64,
    half_h: f64,
    z0: Complex,
}

impl Kernel {
    pub fn new(state: &ViewportState) -> Self {
        let width = state.width as f64;
        let height = state.height as f64;
        Self {
            center: state.center,
            scale: state.scale,
            width,
            height,
            half_w: width / 2.0,
            half_h: height / 2.0,
            z0: initial_orbit(state.phase),
        }
    }

    /// Map a buffer coordinate onto the plane.
    ///
    /// Both axes divide by their own buffer extent but share `scale`, so
    /// `(width/2, height/2)` lands exactly on `center`.
    #[inline]
    pub fn pixel_to_plane(&self, x: u32, y: u32) -> Complex {
        Complex::new(
            self.center.re + (x as f64 - self.half_w) * self.scale / self.width,
            self.center.im + (y as f64 - self.half_h) * self.scale / self.height,
        )
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Argb {
        let c = self.pixel_to_plane(x, y);
        Argb::gray(intensity(escape_count(c, self.z0)))
    }
}

/// Color of the pixel at `(x, y)` for `state`.
///
/// `x` must lie in `[0, width)` and `y` in `[0, height)`; this is not checked.
pub fn compute_pixel(x: u32, y: u32, state: &ViewportState) -> Argb {
    Kernel::new(state).pixel(x, y)
}

/// The starting iterate for a given animation phase: `0 + sin(phase·0.01)i`.
#[inline]
pub fn initial_orbit(phase: u64) -> Complex {
    Complex::new(0.0, (phase as f64 * PHASE_RATE).sin())
}

/// Iterate `z ← z² + c` from `z0`, returning the number of steps taken.
///
/// The step whose result escapes is counted, so the result lies in
/// `1..=MAX_ITERATIONS`.
#[inline]
pub fn escape_count(c: Complex, z0: Complex) -> u32 {
    let mut z = z0;
    let mut n = 0;
    while n < MAX_ITERATIONS {
        z = z * z + c;
        n += 1;
        if z.norm_sq() > ESCAPE_RADIUS_SQ {
            break;
        }
    }
    n
}

/// `⌊255·n / 256⌋`, in integer arithmetic.
#[inline]
pub fn intensity(n: u32) -> u8 {
    (255 * n.min(MAX_ITERATIONS) / MAX_ITERATIONS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(width: u32, height: u32, center: Complex, scale: f64) -> ViewportState {
        let mut s = ViewportState::new(width, height).unwrap();
        s.center = center;
        s.scale = scale;
        s
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_count(Complex::ZERO, Complex::ZERO), MAX_ITERATIONS);
        assert_eq!(intensity(MAX_ITERATIONS), 255);
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        assert_eq!(escape_count(Complex::new(10.0, 0.0), Complex::ZERO), 1);
        assert_eq!(intensity(1), 0);
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z = 1 (|z|²=1), 2 (|z|²=4, not > 4), 5 (escaped) → 3 steps.
        assert_eq!(escape_count(Complex::new(1.0, 0.0), Complex::ZERO), 3);
        assert_eq!(intensity(3), 2);
    }

    #[test]
    fn buffer_centre_maps_to_view_centre() {
        let s = view(200, 100, Complex::ZERO, 2.0);
        let k = Kernel::new(&s);
        assert_eq!(k.pixel_to_plane(100, 50), Complex::ZERO);
        assert_eq!(k.pixel_to_plane(0, 50), Complex::new(-1.0, 0.0));
        // Vertical axis divides by height: (0 - 50) * 2 / 100.
        assert_eq!(k.pixel_to_plane(100, 0), Complex::new(0.0, -1.0));
    }

    #[test]
    fn centre_pixel_on_origin_is_full_intensity() {
        let s = view(200, 100, Complex::ZERO, 2.0);
        assert_eq!(compute_pixel(100, 50, &s), Argb::gray(255));
    }

    #[test]
    fn phase_perturbs_initial_orbit() {
        assert_eq!(initial_orbit(0), Complex::ZERO);
        let z = initial_orbit(157);
        assert_eq!(z.re, 0.0);
        assert!((z.im - 1.57f64.sin()).abs() < 1e-15);
    }

    #[test]
    fn pixel_is_deterministic() {
        let mut s = view(320, 240, Complex::new(-0.75, 0.1), 2.5);
        s.phase = 42;
        for &(x, y) in &[(0, 0), (17, 200), (160, 120), (319, 239)] {
            assert_eq!(compute_pixel(x, y, &s), compute_pixel(x, y, &s));
        }
    }

    #[test]
    fn output_is_grayscale() {
        let mut s = view(64, 48, Complex::new(-0.5, 0.0), 3.0);
        s.phase = 90;
        let k = Kernel::new(&s);
        for y in 0..48 {
            for x in 0..64 {
                let c = k.pixel(x, y);
                assert_eq!(c.red(), c.green());
                assert_eq!(c.green(), c.blue());
                assert_eq!(c.blue(), c.alpha());
            }
        }
    }

    #[test]
    fn kernel_matches_compute_pixel() {
        let mut s = view(97, 31, Complex::new(0.3, -0.2), 0.7);
        s.phase = 1234;
        let k = Kernel::new(&s);
        for y in 0..31 {
            for x in 0..97 {
                assert_eq!(k.pixel(x, y), compute_pixel(x, y, &s));
            }
        }
    }
}

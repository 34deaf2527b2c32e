/// A packed 32-bit color with alpha in the most significant byte,
/// followed by red, green and blue.
///
/// This is the exact layout the presentation surface expects, so the
/// frame buffer stores these values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Self = Self(0);

    #[inline]
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Equal intensity on every channel, alpha included.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::from_channels(v, v, v, v)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Bytes in memory order `[a, r, g, b]`.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// RGBA bytes with alpha forced opaque, for surfaces that blend.
    #[inline]
    pub const fn to_rgba_opaque(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_order_is_alpha_red_green_blue() {
        let c = Argb::from_channels(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.0, 0x1122_3344);
        assert_eq!(c.to_be_bytes(), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(c.alpha(), 0x11);
        assert_eq!(c.red(), 0x22);
        assert_eq!(c.green(), 0x33);
        assert_eq!(c.blue(), 0x44);
    }

    #[test]
    fn gray_fills_every_channel() {
        assert_eq!(Argb::gray(255).0, 0xFFFF_FFFF);
        assert_eq!(Argb::gray(0), Argb::TRANSPARENT);
        assert_eq!(Argb::gray(0x80).0, 0x8080_8080);
    }

    #[test]
    fn opaque_rgba_drops_alpha() {
        let c = Argb::from_channels(0, 10, 20, 30);
        assert_eq!(c.to_rgba_opaque(), [10, 20, 30, 255]);
    }
}

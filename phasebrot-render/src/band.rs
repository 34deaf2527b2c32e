/// Rows per work unit. A 1920-pixel band is 60 KB of output.
pub const BAND_ROWS: u32 = 8;

/// A contiguous run of full-width rows handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row covered.
    pub y: u32,
    /// Number of rows (may be fewer than `BAND_ROWS` at the bottom edge).
    pub rows: u32,
}

impl Band {
    /// The `index`-th band of a buffer `height` rows tall.
    pub fn nth(index: usize, height: u32) -> Self {
        let y = index as u32 * BAND_ROWS;
        Self {
            y,
            rows: BAND_ROWS.min(height.saturating_sub(y)),
        }
    }

    /// Pixel count for a buffer `width` pixels wide.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.rows as usize * width as usize
    }
}

/// Number of bands needed to cover `height` rows.
pub fn band_count(height: u32) -> usize {
    height.div_ceil(BAND_ROWS) as usize
}

/// All bands for a `height`-row buffer, top to bottom.
pub fn bands(height: u32) -> Vec<Band> {
    (0..band_count(height))
        .map(|i| Band::nth(i, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_every_row_once() {
        for height in [1, 7, 8, 9, 100, 1080] {
            let mut covered = vec![0u8; height as usize];
            for band in bands(height) {
                for row in band.y..band.y + band.rows {
                    covered[row as usize] += 1;
                }
            }
            assert!(covered.iter().all(|&c| c == 1), "height {height}");
        }
    }

    #[test]
    fn last_band_is_truncated() {
        let all = bands(20);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], Band { y: 16, rows: 4 });
        assert_eq!(all[2].pixel_count(10), 40);
    }

    #[test]
    fn empty_buffer_has_no_bands() {
        assert_eq!(band_count(0), 0);
        assert!(bands(0).is_empty());
    }
}

//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 pixel blocks produced by the BC1, BC2 and BC3 block decoders.
//!
//! ## Usage
//!
//! ```
//! use dxt_decode_common::color_8888::Color8888;
//! use dxt_decode_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let mut block = Decoded4x4Block::new(red_pixel);
//! block.set_pixel(3, 0, Color8888::TRANSPARENT_BLACK);
//!
//! assert_eq!(block.get_pixel(0, 0), red_pixel);
//! assert_eq!(block.row(0)[3], Color8888::TRANSPARENT_BLACK);
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order, the same order in which the block's
//! indices are stored:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    pub fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Gets the pixel at the specified coordinates.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not in `0..4`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Sets the pixel at the specified coordinates.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not in `0..4`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x] = pixel;
    }

    /// Returns the 4 pixels of row `y` (0-3).
    #[inline]
    pub fn row(&self, y: usize) -> &[Color8888] {
        &self.pixels[y * 4..y * 4 + 4]
    }

    /// Returns the block as 64 bytes of RGBA8 in row-major order.
    pub fn to_rgba8(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        for (dst, pixel) in bytes.chunks_exact_mut(4).zip(self.pixels.iter()) {
            dst.copy_from_slice(&pixel.to_array());
        }
        bytes
    }
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::TRANSPARENT_BLACK)
    }
}

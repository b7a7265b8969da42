//! Placement of decoded 4x4 tiles into an RGBA8 raster.
//!
//! The raster is row-major, 4 bytes per pixel (R, G, B, A), with no row padding.
//! Images whose dimensions are not multiples of 4 are covered by a grid of whole blocks;
//! the pixels of edge blocks that fall outside the image are dropped when blitting.

use crate::decoded_4x4_block::Decoded4x4Block;
use crate::error::{DecodeError, DecodeResult};

/// Bytes per decoded pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// The grid of 4x4 blocks covering a `width` x `height` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Number of block columns, `ceil(width / 4)`
    pub blocks_x: usize,
    /// Number of block rows, `ceil(height / 4)`
    pub blocks_y: usize,
}

impl BlockGrid {
    /// Creates the block grid for an image.
    ///
    /// # Errors
    ///
    /// [`DecodeError::DimensionsTooLarge`] if the decoded raster size would not fit in `usize`.
    pub fn new(width: u32, height: u32) -> DecodeResult<Self> {
        let too_large = DecodeError::DimensionsTooLarge { width, height };
        let w = usize::try_from(width).map_err(|_| too_large.clone())?;
        let h = usize::try_from(height).map_err(|_| too_large.clone())?;

        // Reject up front anything whose raster size would overflow.
        w.checked_mul(h)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(too_large)?;

        Ok(Self {
            width: w,
            height: h,
            blocks_x: w.div_ceil(4),
            blocks_y: h.div_ceil(4),
        })
    }

    /// Total number of blocks in the grid.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    /// Size of the decoded raster in bytes, `width * height * 4`.
    #[inline]
    pub fn decoded_len(&self) -> usize {
        self.width * self.height * BYTES_PER_PIXEL
    }

    /// Bytes of raster covered by one full row of blocks (4 pixel rows).
    #[inline]
    pub fn band_len(&self) -> usize {
        self.width * BYTES_PER_PIXEL * 4
    }

    /// Number of compressed bytes the grid needs with `block_size` bytes per block.
    ///
    /// Returns [`None`] if that number does not fit in `usize`.
    #[inline]
    pub fn required_input_len(&self, block_size: usize) -> Option<usize> {
        self.block_count().checked_mul(block_size)
    }

    /// Number of pixel columns of block column `block_x` that lie inside the image.
    ///
    /// Every column has 4, except the last one when the width is not a multiple of 4,
    /// which has `((width + 3) % 4) + 1`.
    #[inline]
    pub fn valid_columns(&self, block_x: usize) -> usize {
        if block_x + 1 == self.blocks_x {
            ((self.width + 3) % 4) + 1
        } else {
            4
        }
    }

    /// Number of pixel rows of block row `block_y` that lie inside the image.
    #[inline]
    pub fn valid_rows(&self, block_y: usize) -> usize {
        self.height.saturating_sub(block_y * 4).min(4)
    }
}

/// Copies the visible part of `block` into `band`.
///
/// `band` is the slice of the raster that starts at the first pixel row of the block's
/// block row, and holds at most 4 pixel rows (fewer for the last block row of an image
/// whose height is not a multiple of 4). Tile rows past the end of `band` are skipped;
/// tile columns past the image width are clipped.
///
/// # Panics
///
/// If `band` is not a whole number of raster rows, or `block_x` is outside the grid.
#[inline]
pub fn blit_block(band: &mut [u8], grid: &BlockGrid, block_x: usize, block: &Decoded4x4Block) {
    let stride = grid.width * BYTES_PER_PIXEL;
    let columns = grid.valid_columns(block_x);
    let x_offset = block_x * 4 * BYTES_PER_PIXEL;

    for (row, dst_row) in band.chunks_exact_mut(stride).take(4).enumerate() {
        let dst = &mut dst_row[x_offset..x_offset + columns * BYTES_PER_PIXEL];
        for (dst_pixel, pixel) in dst.chunks_exact_mut(BYTES_PER_PIXEL).zip(block.row(row)) {
            dst_pixel.copy_from_slice(&pixel.to_array());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_8888::Color8888;
    use alloc::vec;
    use rstest::rstest;

    /// A tile whose pixel (x, y) is `(x, y, 0xAB, 0xCD)`.
    fn coordinate_block() -> Decoded4x4Block {
        let mut block = Decoded4x4Block::default();
        for y in 0..4 {
            for x in 0..4 {
                block.set_pixel(x, y, Color8888::new(x as u8, y as u8, 0xAB, 0xCD));
            }
        }
        block
    }

    #[rstest]
    #[case(4, 4, 1, 1)]
    #[case(5, 5, 2, 2)]
    #[case(1, 9, 1, 3)]
    #[case(0, 7, 0, 2)]
    #[case(16, 0, 4, 0)]
    fn computes_block_counts(
        #[case] width: u32,
        #[case] height: u32,
        #[case] blocks_x: usize,
        #[case] blocks_y: usize,
    ) {
        let grid = BlockGrid::new(width, height).unwrap();
        assert_eq!(grid.blocks_x, blocks_x);
        assert_eq!(grid.blocks_y, blocks_y);
        assert_eq!(grid.decoded_len(), (width * height * 4) as usize);
    }

    #[rstest]
    #[case(8, 4)]
    #[case(5, 1)]
    #[case(6, 2)]
    #[case(7, 3)]
    #[case(1, 1)]
    fn clips_last_column(#[case] width: u32, #[case] last_columns: usize) {
        let grid = BlockGrid::new(width, 4).unwrap();
        assert_eq!(grid.valid_columns(grid.blocks_x - 1), last_columns);
        if grid.blocks_x > 1 {
            assert_eq!(grid.valid_columns(0), 4);
        }
    }

    #[rstest]
    #[case(8, 1, 4)]
    #[case(5, 1, 1)]
    #[case(7, 1, 3)]
    #[case(2, 0, 2)]
    fn clips_last_row(#[case] height: u32, #[case] block_y: usize, #[case] rows: usize) {
        let grid = BlockGrid::new(4, height).unwrap();
        assert_eq!(grid.valid_rows(block_y), rows);
    }

    #[test]
    fn required_input_len_scales_with_block_size() {
        let grid = BlockGrid::new(5, 5).unwrap();
        assert_eq!(grid.required_input_len(8), Some(32));
        assert_eq!(grid.required_input_len(16), Some(64));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_raster_size_overflow() {
        // u32::MAX * u32::MAX * 4 overflows a 64-bit usize.
        assert_eq!(
            BlockGrid::new(u32::MAX, u32::MAX),
            Err(DecodeError::DimensionsTooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn blits_full_block() {
        let grid = BlockGrid::new(8, 4).unwrap();
        let mut raster = vec![0u8; grid.decoded_len()];
        blit_block(&mut raster, &grid, 1, &coordinate_block());

        // Left block untouched.
        assert!(raster[..16].iter().all(|&b| b == 0));
        // Pixel (4, 0) is tile (0, 0); pixel (7, 3) is tile (3, 3).
        let stride = 8 * 4;
        assert_eq!(&raster[16..20], &[0, 0, 0xAB, 0xCD]);
        assert_eq!(&raster[3 * stride + 28..3 * stride + 32], &[3, 3, 0xAB, 0xCD]);
    }

    #[test]
    fn blit_clips_edge_block_of_5x5_image() {
        let grid = BlockGrid::new(5, 5).unwrap();
        let mut raster = vec![0u8; grid.decoded_len()];
        let stride = 5 * 4;

        // Bottom-right block: its band is only the last raster row.
        let band = &mut raster[grid.band_len()..];
        assert_eq!(band.len(), stride);
        blit_block(band, &grid, 1, &coordinate_block());

        // Only pixel (4, 4) was written, with the tile's (0, 0) value.
        assert_eq!(&raster[4 * stride + 16..4 * stride + 20], &[0, 0, 0xAB, 0xCD]);
        assert_eq!(raster.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn blit_writes_only_valid_columns() {
        let grid = BlockGrid::new(6, 4).unwrap();
        let mut raster = vec![0u8; grid.decoded_len()];
        blit_block(&mut raster, &grid, 1, &coordinate_block());

        let stride = 6 * 4;
        for row in 0..4 {
            let line = &raster[row * stride..(row + 1) * stride];
            assert!(line[..16].iter().all(|&b| b == 0));
            assert_eq!(&line[16..20], &[0, row as u8, 0xAB, 0xCD]);
            assert_eq!(&line[20..24], &[1, row as u8, 0xAB, 0xCD]);
        }
    }
}

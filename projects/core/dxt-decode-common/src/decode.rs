//! Block-grid decode driver shared by the BC1, BC2 and BC3 crates.
//!
//! A block stream is a headerless sequence of fixed-size blocks in row-major grid order.
//! The driver validates the stream length against the grid, then decodes each block with
//! the format's block decoder and blits the resulting tile into the raster.
//!
//! Each row of blocks writes a disjoint band of 4 raster rows, so with the `multithreaded`
//! feature the bands can be decoded independently on the rayon thread pool.

use crate::decoded_4x4_block::Decoded4x4Block;
use crate::error::{DecodeError, DecodeResult};
use crate::raster::{blit_block, BlockGrid};
use alloc::vec;
use alloc::vec::Vec;
use tracing::{debug, warn};

/// Decodes a block stream into a newly allocated `width * height * 4` byte RGBA8 raster.
///
/// # Parameters
///
/// - `format`: Name of the format, used in log events
/// - `input`: The compressed blocks, `N` bytes each, with no header
/// - `width`, `height`: Image dimensions in pixels; need not be multiples of 4
/// - `decode_block`: Decodes a single block into a 4x4 tile
///
/// # Errors
///
/// - [`DecodeError::InputTooShort`] if `input` holds fewer blocks than the grid needs.
/// - [`DecodeError::DimensionsTooLarge`] if the raster size overflows `usize`.
///
/// No raster is returned on failure.
pub fn decode_blocks<const N: usize, F>(
    format: &'static str,
    input: &[u8],
    width: u32,
    height: u32,
    decode_block: F,
) -> DecodeResult<Vec<u8>>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block,
{
    let grid = BlockGrid::new(width, height)?;
    validate_input::<N>(format, input, &grid)?;

    let mut raster = vec![0u8; grid.decoded_len()];
    decode_grid(input, &grid, &mut raster, &decode_block)?;
    Ok(raster)
}

/// Decodes a block stream into the first `width * height * 4` bytes of `output`.
///
/// Bytes of `output` past the raster are left untouched. On error, nothing is written.
///
/// # Errors
///
/// As [`decode_blocks`], plus [`DecodeError::OutputBufferTooSmall`] if `output` is shorter
/// than the raster.
pub fn decode_blocks_into<const N: usize, F>(
    format: &'static str,
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
    decode_block: F,
) -> DecodeResult<()>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block,
{
    let grid = BlockGrid::new(width, height)?;
    let raster = raster_slice(output, &grid)?;
    validate_input::<N>(format, input, &grid)?;
    decode_grid(input, &grid, raster, &decode_block)
}

/// Parallel version of [`decode_blocks`]; each row of blocks is decoded as one rayon task.
///
/// The output is identical to [`decode_blocks`].
#[cfg(feature = "multithreaded")]
pub fn decode_blocks_par<const N: usize, F>(
    format: &'static str,
    input: &[u8],
    width: u32,
    height: u32,
    decode_block: F,
) -> DecodeResult<Vec<u8>>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block + Sync,
{
    let grid = BlockGrid::new(width, height)?;
    validate_input::<N>(format, input, &grid)?;

    let mut raster = vec![0u8; grid.decoded_len()];
    decode_grid_par(input, &grid, &mut raster, &decode_block)?;
    Ok(raster)
}

/// Parallel version of [`decode_blocks_into`].
#[cfg(feature = "multithreaded")]
pub fn decode_blocks_par_into<const N: usize, F>(
    format: &'static str,
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
    decode_block: F,
) -> DecodeResult<()>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block + Sync,
{
    let grid = BlockGrid::new(width, height)?;
    let raster = raster_slice(output, &grid)?;
    validate_input::<N>(format, input, &grid)?;
    decode_grid_par(input, &grid, raster, &decode_block)
}

/// Returns the number of input bytes a `width` x `height` image needs with `block_size`
/// bytes per block.
pub fn required_input_len(width: u32, height: u32, block_size: usize) -> DecodeResult<usize> {
    BlockGrid::new(width, height)?
        .required_input_len(block_size)
        .ok_or(DecodeError::DimensionsTooLarge { width, height })
}

fn raster_slice<'a>(output: &'a mut [u8], grid: &BlockGrid) -> DecodeResult<&'a mut [u8]> {
    let needed = grid.decoded_len();
    let actual = output.len();
    output
        .get_mut(..needed)
        .ok_or(DecodeError::OutputBufferTooSmall { needed, actual })
}

fn validate_input<const N: usize>(
    format: &'static str,
    input: &[u8],
    grid: &BlockGrid,
) -> DecodeResult<()> {
    let required = grid
        .required_input_len(N)
        .ok_or(DecodeError::DimensionsTooLarge {
            width: grid.width as u32,
            height: grid.height as u32,
        })?;

    debug!(
        format,
        width = grid.width,
        height = grid.height,
        blocks_x = grid.blocks_x,
        blocks_y = grid.blocks_y,
        input_len = input.len(),
        "decoding block stream"
    );

    if input.len() < required {
        let offset = input.len() / N * N;
        warn!(
            format,
            offset,
            required,
            actual = input.len(),
            "block stream is truncated"
        );
        return Err(DecodeError::InputTooShort {
            offset,
            required,
            actual: input.len(),
        });
    }

    Ok(())
}

fn decode_grid<const N: usize, F>(
    input: &[u8],
    grid: &BlockGrid,
    raster: &mut [u8],
    decode_block: &F,
) -> DecodeResult<()>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block,
{
    if raster.is_empty() {
        return Ok(());
    }

    for (block_y, band) in raster.chunks_mut(grid.band_len()).enumerate() {
        decode_band(input, grid, block_y, band, decode_block)?;
    }
    Ok(())
}

#[cfg(feature = "multithreaded")]
fn decode_grid_par<const N: usize, F>(
    input: &[u8],
    grid: &BlockGrid,
    raster: &mut [u8],
    decode_block: &F,
) -> DecodeResult<()>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block + Sync,
{
    use rayon::prelude::*;

    if raster.is_empty() {
        return Ok(());
    }

    raster
        .par_chunks_mut(grid.band_len())
        .enumerate()
        .try_for_each(|(block_y, band)| decode_band(input, grid, block_y, band, decode_block))
}

/// Decodes one row of blocks into its band of 4 (or fewer) raster rows.
#[inline]
fn decode_band<const N: usize, F>(
    input: &[u8],
    grid: &BlockGrid,
    block_y: usize,
    band: &mut [u8],
    decode_block: &F,
) -> DecodeResult<()>
where
    F: Fn(&[u8; N]) -> Decoded4x4Block,
{
    let mut offset = block_y * grid.blocks_x * N;
    for block_x in 0..grid.blocks_x {
        let block = read_block::<N>(input, offset)?;
        blit_block(band, grid, block_x, &decode_block(block));
        offset += N;
    }
    Ok(())
}

#[inline]
fn read_block<const N: usize>(input: &[u8], offset: usize) -> DecodeResult<&[u8; N]> {
    input
        .get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::InputTooShort {
            offset,
            required: offset + N,
            actual: input.len(),
        })
}

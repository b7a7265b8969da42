#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use dxt_decode_common::decode::{decode_blocks, decode_blocks_into};
pub use dxt_decode_common::{DecodeError, DecodeResult};
pub mod util;
pub use util::decode_bc1_block;

/// Size of a single BC1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// Decodes a BC1 block stream into a `width * height * 4` byte RGBA8 raster.
///
/// # Parameters
///
/// - `input`: The BC1 blocks in row-major order, with no header
/// - `width`: Width of the image in pixels; need not be a multiple of 4
/// - `height`: Height of the image in pixels; need not be a multiple of 4
///
/// # Returns
///
/// The decoded raster, row-major with 4 bytes (R, G, B, A) per pixel.
///
/// # Errors
///
/// [`DecodeError::InputTooShort`] if `input` is shorter than
/// `ceil(width / 4) * ceil(height / 4) * 8` bytes.
#[inline]
pub fn decode_bc1(input: &[u8], width: u32, height: u32) -> DecodeResult<Vec<u8>> {
    decode_blocks::<BC1_BLOCK_SIZE, _>("BC1", input, width, height, decode_bc1_block)
}

/// Decodes a BC1 block stream into the first `width * height * 4` bytes of `output`.
///
/// On error, `output` is left untouched.
///
/// # Errors
///
/// As [`decode_bc1`], plus [`DecodeError::OutputBufferTooSmall`].
#[inline]
pub fn decode_bc1_into(
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> DecodeResult<()> {
    decode_blocks_into::<BC1_BLOCK_SIZE, _>("BC1", input, width, height, output, decode_bc1_block)
}

/// Multithreaded version of [`decode_bc1`].
#[cfg(feature = "multithreaded")]
#[inline]
pub fn decode_bc1_par(input: &[u8], width: u32, height: u32) -> DecodeResult<Vec<u8>> {
    dxt_decode_common::decode::decode_blocks_par::<BC1_BLOCK_SIZE, _>(
        "BC1",
        input,
        width,
        height,
        decode_bc1_block,
    )
}

/// Multithreaded version of [`decode_bc1_into`].
#[cfg(feature = "multithreaded")]
#[inline]
pub fn decode_bc1_par_into(
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> DecodeResult<()> {
    dxt_decode_common::decode::decode_blocks_par_into::<BC1_BLOCK_SIZE, _>(
        "BC1",
        input,
        width,
        height,
        output,
        decode_bc1_block,
    )
}

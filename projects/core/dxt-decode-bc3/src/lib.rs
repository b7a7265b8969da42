#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use dxt_decode_common::decode::{decode_blocks, decode_blocks_into};
pub use dxt_decode_common::{DecodeError, DecodeResult};
pub mod util;
pub use util::decode_bc3_block;

/// Size of a single BC3 block in bytes.
pub const BC3_BLOCK_SIZE: usize = 16;

/// Decodes a BC3 block stream into a `width * height * 4` byte RGBA8 raster.
///
/// # Parameters
///
/// - `input`: The BC3 blocks in row-major order, with no header
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
/// `ceil(width / 4) * ceil(height / 4) * 16` bytes.
#[inline]
pub fn decode_bc3(input: &[u8], width: u32, height: u32) -> DecodeResult<Vec<u8>> {
    decode_blocks::<BC3_BLOCK_SIZE, _>("BC3", input, width, height, decode_bc3_block)
}

/// Decodes a BC3 block stream into the first `width * height * 4` bytes of `output`.
///
/// On error, `output` is left untouched.
///
/// # Errors
///
/// As [`decode_bc3`], plus [`DecodeError::OutputBufferTooSmall`].
#[inline]
pub fn decode_bc3_into(
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> DecodeResult<()> {
    decode_blocks_into::<BC3_BLOCK_SIZE, _>("BC3", input, width, height, output, decode_bc3_block)
}

/// Multithreaded version of [`decode_bc3`].
#[cfg(feature = "multithreaded")]
#[inline]
pub fn decode_bc3_par(input: &[u8], width: u32, height: u32) -> DecodeResult<Vec<u8>> {
    dxt_decode_common::decode::decode_blocks_par::<BC3_BLOCK_SIZE, _>(
        "BC3",
        input,
        width,
        height,
        decode_bc3_block,
    )
}

/// Multithreaded version of [`decode_bc3_into`].
#[cfg(feature = "multithreaded")]
#[inline]
pub fn decode_bc3_par_into(
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> DecodeResult<()> {
    dxt_decode_common::decode::decode_blocks_par_into::<BC3_BLOCK_SIZE, _>(
        "BC3",
        input,
        width,
        height,
        output,
        decode_bc3_block,
    )
}

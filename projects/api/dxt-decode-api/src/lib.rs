#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod error;
pub mod format;

pub use dxt_decode_common::{DecodeError, DecodeResult};
pub use error::UnknownFormatError;
pub use format::DxtFormat;

use alloc::vec::Vec;
use dxt_decode_common::raster::BlockGrid;

/// Decodes a block stream of the given `format` into a `width * height * 4` byte RGBA8 raster.
///
/// # Errors
///
/// [`DecodeError::InputTooShort`] if `input` holds fewer than
/// [`required_input_len`] bytes.
pub fn decode(format: DxtFormat, input: &[u8], width: u32, height: u32) -> DecodeResult<Vec<u8>> {
    match format {
        DxtFormat::Bc1 => dxt_decode_bc1::decode_bc1(input, width, height),
        DxtFormat::Bc2 => dxt_decode_bc2::decode_bc2(input, width, height),
        DxtFormat::Bc3 => dxt_decode_bc3::decode_bc3(input, width, height),
    }
}

/// Decodes a block stream of the given `format` into the start of `output`.
///
/// On error, `output` is left untouched.
///
/// # Errors
///
/// As [`decode`], plus [`DecodeError::OutputBufferTooSmall`] if `output` is shorter than
/// [`decoded_len`].
pub fn decode_into(
    format: DxtFormat,
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> DecodeResult<()> {
    match format {
        DxtFormat::Bc1 => dxt_decode_bc1::decode_bc1_into(input, width, height, output),
        DxtFormat::Bc2 => dxt_decode_bc2::decode_bc2_into(input, width, height, output),
        DxtFormat::Bc3 => dxt_decode_bc3::decode_bc3_into(input, width, height, output),
    }
}

/// Multithreaded version of [`decode`].
#[cfg(feature = "multithreaded")]
#[cfg_attr(docsrs, doc(cfg(feature = "multithreaded")))]
pub fn decode_par(
    format: DxtFormat,
    input: &[u8],
    width: u32,
    height: u32,
) -> DecodeResult<Vec<u8>> {
    match format {
        DxtFormat::Bc1 => dxt_decode_bc1::decode_bc1_par(input, width, height),
        DxtFormat::Bc2 => dxt_decode_bc2::decode_bc2_par(input, width, height),
        DxtFormat::Bc3 => dxt_decode_bc3::decode_bc3_par(input, width, height),
    }
}

/// Multithreaded version of [`decode_into`].
#[cfg(feature = "multithreaded")]
#[cfg_attr(docsrs, doc(cfg(feature = "multithreaded")))]
pub fn decode_par_into(
    format: DxtFormat,
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> DecodeResult<()> {
    match format {
        DxtFormat::Bc1 => dxt_decode_bc1::decode_bc1_par_into(input, width, height, output),
        DxtFormat::Bc2 => dxt_decode_bc2::decode_bc2_par_into(input, width, height, output),
        DxtFormat::Bc3 => dxt_decode_bc3::decode_bc3_par_into(input, width, height, output),
    }
}

/// Size in bytes of the RGBA8 raster decoded from a `width` x `height` image.
///
/// # Errors
///
/// [`DecodeError::DimensionsTooLarge`] if the size does not fit in `usize`.
#[inline]
pub fn decoded_len(width: u32, height: u32) -> DecodeResult<usize> {
    Ok(BlockGrid::new(width, height)?.decoded_len())
}

/// Number of compressed bytes needed to decode a `width` x `height` image of `format`.
///
/// # Errors
///
/// [`DecodeError::DimensionsTooLarge`] if the size does not fit in `usize`.
#[inline]
pub fn required_input_len(format: DxtFormat, width: u32, height: u32) -> DecodeResult<usize> {
    dxt_decode_common::decode::required_input_len(width, height, format.block_size())
}

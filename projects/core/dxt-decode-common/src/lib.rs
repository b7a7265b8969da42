#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alpha;
pub mod color_565;
pub mod color_8888;
pub mod decode;
pub mod decoded_4x4_block;
pub mod error;
pub mod index_stream;
pub mod palette;
pub mod raster;

pub use error::{DecodeError, DecodeResult};

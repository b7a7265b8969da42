#![no_main]

// This fuzz test compares our BC1 decoder against rgbcx-sys implementation using the Ideal method.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use dxt_decode_bc1::util::decode_bc1_block;
use dxt_decode_common::color_565::Color565;
use dxt_decode_common::color_8888::Color8888;
use dxt_decode_common::decoded_4x4_block::Decoded4x4Block;
use dxt_decode_common::index_stream::IndexStream;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let bc1_block = &block.bytes;
    let our_decoded = decode_bc1_block(bc1_block);
    let rgbcx_decoded = rgbcx_decode_bc1_to_block(bc1_block);

    let c0 = Color565::from_le_bytes([bc1_block[0], bc1_block[1]]);
    let c1 = Color565::from_le_bytes([bc1_block[2], bc1_block[3]]);
    if c0.greater_than(&c1) {
        assert_eq!(our_decoded, rgbcx_decoded, "Decoded blocks don't match");
        return;
    }

    // Three-colour mode: endpoints must agree, and index 3 must be transparent black.
    let indices = u32::from_le_bytes([bc1_block[4], bc1_block[5], bc1_block[6], bc1_block[7]]);
    for ((ours, theirs), index) in our_decoded
        .pixels
        .iter()
        .zip(rgbcx_decoded.pixels.iter())
        .zip(IndexStream::colour(indices))
    {
        match index {
            0 | 1 => assert_eq!(ours, theirs, "Endpoint colours don't match"),
            3 => assert_eq!(*ours, Color8888::TRANSPARENT_BLACK),
            _ => assert_eq!(ours.a, 255),
        }
    }
});

/// Decode BC1 block using rgbcx-sys with Ideal method and return it as Decoded4x4Block
fn rgbcx_decode_bc1_to_block(bc1_block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16]; // 4 bytes per pixel * 16 pixels

    unsafe {
        rgbcx::unpack_bc1(
            bc1_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    let mut block = Decoded4x4Block::default();
    for (pixel, bytes) in block.pixels.iter_mut().zip(rgba_buffer.chunks_exact(4)) {
        *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], bytes[3]);
    }
    block
}

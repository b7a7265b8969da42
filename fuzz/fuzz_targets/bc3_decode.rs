#![no_main]

// This fuzz test compares our BC3 decoder against rgbcx-sys.
// BC3 uses BC1 format for color data and BC4 compression for alpha.

use dxt_decode_bc3::util::decode_bc3_block;
use dxt_decode_common::decoded_4x4_block::Decoded4x4Block;
use dxt_decode_common::{color_565::Color565, color_8888::Color8888};
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc3Block| {
    // Skip if c0 <= c1; rgbcx decodes that as BC1's 3-colour mode, BC3 never does.
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let bc3_block = &block.bytes;
    let our_decoded = decode_bc3_block(bc3_block);
    let reference_decoded = rgbcx_decode_bc3_to_block(bc3_block);

    // Exact match required, no tolerance.
    assert_eq!(our_decoded, reference_decoded, "Decoded blocks don't match");
});

/// Decode BC3 block using rgbcx-sys for color (with Ideal method) and alpha
fn rgbcx_decode_bc3_to_block(bc3_block: &[u8; 16]) -> Decoded4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16]; // 4 bytes per pixel * 16 pixels

    unsafe {
        rgbcx::unpack_bc3(
            bc3_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    let mut block = Decoded4x4Block::default();
    for (pixel, bytes) in block.pixels.iter_mut().zip(rgba_buffer.chunks_exact(4)) {
        *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], bytes[3]);
    }
    block
}

#![no_main]

// This fuzz test compares our BC2 decoder against rgbcx-sys for colors and bcdec_rs for alpha.

use dxt_decode_bc2::util::decode_bc2_block;
use dxt_decode_common::decoded_4x4_block::Decoded4x4Block;
use dxt_decode_common::{color_565::Color565, color_8888::Color8888};
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc2Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc2Block| {
    let bc2_block = &block.bytes;
    let our_decoded = decode_bc2_block(bc2_block);

    // Alpha never depends on the colour endpoints.
    let mut bcdec_buffer = [0u8; 4 * 16];
    bcdec_rs::bc2(bc2_block, &mut bcdec_buffer, 4 * 4);
    for (pixel, bytes) in our_decoded.pixels.iter().zip(bcdec_buffer.chunks_exact(4)) {
        assert_eq!(pixel.a, bytes[3], "Alpha doesn't match");
    }

    // Skip the colour comparison if c0 <= c1; BC1's 3-colour mode differs from BC2's palette.
    let c0 = Color565::from_le_bytes([bc2_block[8], bc2_block[9]]);
    let c1 = Color565::from_le_bytes([bc2_block[10], bc2_block[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let hybrid_decoded = hybrid_decode_bc2_to_block(bc2_block, &bcdec_buffer);
    assert_eq!(our_decoded, hybrid_decoded, "Decoded blocks don't match");
});

/// Decode BC2 colour using rgbcx-sys (Ideal method), taking alpha from the bcdec_rs output
fn hybrid_decode_bc2_to_block(bc2_block: &[u8; 16], bcdec_rgba: &[u8; 64]) -> Decoded4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16]; // 4 bytes per pixel * 16 pixels

    unsafe {
        // The colour half of a BC2 block has the same layout as a BC1 block.
        rgbcx::unpack_bc1(
            bc2_block.as_ptr().add(8) as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    let mut block = Decoded4x4Block::default();
    for ((pixel, color), alpha) in block
        .pixels
        .iter_mut()
        .zip(rgba_buffer.chunks_exact(4))
        .zip(bcdec_rgba.chunks_exact(4))
    {
        *pixel = Color8888::new(color[0], color[1], color[2], alpha[3]);
    }
    block
}

//! BC1 (DXT1) block decoding; see MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>
//!
//! Uses the 'ideal' truncating interpolation described in the DX9 docs.

use dxt_decode_common::{
    color_565::Color565, decoded_4x4_block::Decoded4x4Block, index_stream::read_u32_le,
    index_stream::IndexStream, palette::build_bc1_palette,
};

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `block`: The source BC1 block (8 bytes)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels
///
/// # Example
///
/// ```
/// use dxt_decode_bc1::util::decode_bc1_block;
///
/// let bc1_block = [0u8; 8]; // Compressed BC1 block
///
/// // Both endpoints are black, so this is a 3-colour block of opaque black.
/// let decoded = decode_bc1_block(&bc1_block);
/// assert_eq!(decoded.get_pixel(0, 0).a, 255);
/// ```
#[inline]
pub fn decode_bc1_block(block: &[u8; 8]) -> Decoded4x4Block {
    // Extract color endpoints and index data
    let c0 = Color565::from_le_bytes([block[0], block[1]]);
    let c1 = Color565::from_le_bytes([block[2], block[3]]);
    let indices = read_u32_le(&[block[4], block[5], block[6], block[7]]);

    let palette = build_bc1_palette(c0, c1);

    let mut result = Decoded4x4Block::default();
    for (pixel, index) in result.pixels.iter_mut().zip(IndexStream::colour(indices)) {
        *pixel = palette[index];
    }
    result
}

//! BC3 (DXT4/DXT5) block decoding; see MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>

use dxt_decode_common::{
    alpha::build_interpolated_alpha_table,
    color_565::Color565,
    color_8888::Color8888,
    decoded_4x4_block::Decoded4x4Block,
    index_stream::{read_u32_le, read_u48_le, IndexStream},
    palette::build_bc3_palette,
};

/// Decodes a BC3 block into a structured representation of pixels
///
/// # Parameters
///
/// - `block`: The source BC3 block (16 bytes)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels with alpha
///
/// # Example
///
/// ```
/// use dxt_decode_bc3::util::decode_bc3_block;
///
/// let mut bc3_block = [0u8; 16]; // Compressed BC3 block
/// bc3_block[1] = 0xFF; // a0 = 0, a1 = 255; 6-value alpha mode
///
/// let decoded = decode_bc3_block(&bc3_block);
/// assert_eq!(decoded.get_pixel(0, 0).a, 0);
/// ```
#[inline]
pub fn decode_bc3_block(block: &[u8; 16]) -> Decoded4x4Block {
    let [a0, a1, ai0, ai1, ai2, ai3, ai4, ai5, c0_lo, c0_hi, c1_lo, c1_hi, i0, i1, i2, i3] =
        *block;

    // Alpha endpoints, then 48 bits of 3-bit alpha indices
    let alpha_table = build_interpolated_alpha_table(a0, a1);
    let alpha_indices = read_u48_le(&[ai0, ai1, ai2, ai3, ai4, ai5]);

    // Color block, same layout as BC1 but never in 3-colour mode
    let c0 = Color565::from_le_bytes([c0_lo, c0_hi]);
    let c1 = Color565::from_le_bytes([c1_lo, c1_hi]);
    let indices = read_u32_le(&[i0, i1, i2, i3]);
    let palette = build_bc3_palette(c0, c1);

    let mut result = Decoded4x4Block::default();
    for ((pixel, color_index), alpha_index) in result
        .pixels
        .iter_mut()
        .zip(IndexStream::colour(indices))
        .zip(IndexStream::alpha(alpha_indices))
    {
        *pixel = Color8888::from_packed(
            (alpha_table[alpha_index] as u32) << 24 | palette[color_index].to_packed(),
        );
    }
    result
}

//! BC2 (DXT2/DXT3) block decoding; see MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>
//!
//! The colour half is decoded with truncating interpolation. Unlike BC1, entry 2 of the
//! palette falls back to the endpoint average when `c0 <= c1`, but entry 3 is always the
//! 2/3 blend and there is no transparent entry; transparency comes from the alpha half only.

use dxt_decode_common::{
    alpha::expand_explicit_alpha, color_565::Color565, color_8888::Color8888,
    decoded_4x4_block::Decoded4x4Block, index_stream::read_u32_le, index_stream::IndexStream,
    palette::build_bc2_palette,
};

/// Decodes a BC2 block into a structured representation of pixels
///
/// # Parameters
///
/// - `block`: The source BC2 block (16 bytes)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels with alpha
///
/// # Example
///
/// ```
/// use dxt_decode_bc2::util::decode_bc2_block;
///
/// let mut bc2_block = [0u8; 16]; // Compressed BC2 block
/// bc2_block[0] = 0xF0; // Pixel 1 is fully opaque, pixel 0 fully transparent
///
/// let decoded = decode_bc2_block(&bc2_block);
/// assert_eq!(decoded.get_pixel(0, 0).a, 0);
/// assert_eq!(decoded.get_pixel(1, 0).a, 255);
/// ```
#[inline]
pub fn decode_bc2_block(block: &[u8; 16]) -> Decoded4x4Block {
    let [a0, a1, a2, a3, a4, a5, a6, a7, c0_lo, c0_hi, c1_lo, c1_hi, i0, i1, i2, i3] = *block;

    // First 8 bytes contain the explicit alpha values (4 bits per pixel)
    let alpha = expand_explicit_alpha(&[a0, a1, a2, a3, a4, a5, a6, a7]);

    // Last 8 bytes contain the color data (same layout as BC1)
    let c0 = Color565::from_le_bytes([c0_lo, c0_hi]);
    let c1 = Color565::from_le_bytes([c1_lo, c1_hi]);
    let indices = read_u32_le(&[i0, i1, i2, i3]);
    let palette = build_bc2_palette(c0, c1);

    // Palette alpha is 0, so the alpha value can be OR-ed straight into the packed colour.
    let mut result = Decoded4x4Block::default();
    for ((pixel, index), alpha) in result
        .pixels
        .iter_mut()
        .zip(IndexStream::colour(indices))
        .zip(alpha)
    {
        *pixel = Color8888::from_packed(palette[index].to_packed() | (alpha as u32) << 24);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Builds a block from its alpha bytes, endpoints and colour index word.
    fn block(alpha: [u8; 8], c0: u16, c1: u16, indices: u32) -> [u8; 16] {
        let mut block = [0u8; 16];
        block[..8].copy_from_slice(&alpha);
        block[8..10].copy_from_slice(&c0.to_le_bytes());
        block[10..12].copy_from_slice(&c1.to_le_bytes());
        block[12..].copy_from_slice(&indices.to_le_bytes());
        block
    }

    #[rstest]
    #[case(0x00, 0)]
    #[case(0x77, 119)]
    #[case(0xFF, 255)]
    fn expands_explicit_alpha_for_every_pixel(#[case] alpha_byte: u8, #[case] expected: u8) {
        let decoded = decode_bc2_block(&block([alpha_byte; 8], 0xF800, 0x001F, 0));
        for pixel in decoded.pixels.iter() {
            assert_eq!(*pixel, Color8888::new(255, 0, 0, expected));
        }
    }

    #[test]
    fn alpha_is_independent_of_colour_index() {
        // Every pixel selects index 3; alpha ramps 0, 17, 34, ... across the block.
        let alpha = [0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE];
        let decoded = decode_bc2_block(&block(alpha, 0xF800, 0x001F, u32::MAX));

        for (i, pixel) in decoded.pixels.iter().enumerate() {
            assert_eq!(*pixel, Color8888::new(85, 0, 170, i as u8 * 17));
        }
    }

    #[test]
    fn has_no_transparent_palette_entry() {
        // c0 <= c1 would be BC1's 3-colour mode; in BC2 index 3 is still a colour.
        let decoded = decode_bc2_block(&block([0xFF; 8], 0x001F, 0xF800, u32::MAX));
        assert_eq!(decoded.get_pixel(0, 0), Color8888::new(170, 0, 85, 255));
    }

    #[test]
    fn averages_entry_2_when_c0_not_greater() {
        let decoded = decode_bc2_block(&block([0xFF; 8], 0x001F, 0xF800, 0xAAAA_AAAA));
        assert_eq!(decoded.get_pixel(2, 1), Color8888::new(127, 0, 127, 255));
    }
}

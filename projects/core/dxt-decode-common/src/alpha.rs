//! Alpha reconstruction for BC2 (explicit 4-bit alpha) and BC3 (interpolated 8-bit alpha).

use crate::index_stream::IndexStream;

/// The 8 candidate alpha values of a BC3 block, indexed by its 3-bit alpha indices.
pub type AlphaTable = [u8; 8];

/// One alpha value per pixel of a BC2 block, in raster order.
pub type ExplicitAlpha = [u8; 16];

/// Expands the 8 alpha bytes of a BC2 block into 16 8-bit alpha values.
///
/// The bytes are 4 little-endian 16-bit words (one per row), each holding 4 nibbles with the
/// leftmost pixel in the lowest nibble. Each nibble is scaled to 8 bits by multiplying by 17,
/// which replicates it into both halves of the byte.
///
/// # Examples
///
/// ```
/// use dxt_decode_common::alpha::expand_explicit_alpha;
///
/// let alpha = expand_explicit_alpha(&[0x0F, 0, 0, 0, 0, 0, 0, 0xF0]);
/// assert_eq!(alpha[0], 255);
/// assert_eq!(alpha[1], 0);
/// assert_eq!(alpha[15], 255);
/// ```
#[inline]
pub fn expand_explicit_alpha(bytes: &[u8; 8]) -> ExplicitAlpha {
    let mut alpha = [0u8; 16];
    for (dst, nibble) in alpha.iter_mut().zip(IndexStream::nibbles(u64::from_le_bytes(*bytes))) {
        *dst = nibble as u8 * 0x11;
    }
    alpha
}

/// Builds the 8-entry alpha table of a BC3 block from its two endpoints.
///
/// If `a0 > a1` the table is an 8-step gradient from `a0` to `a1`. Otherwise it's a 6-step
/// gradient followed by fully transparent (0) and fully opaque (255).
///
/// # Examples
///
/// ```
/// use dxt_decode_common::alpha::build_interpolated_alpha_table;
///
/// assert_eq!(
///     build_interpolated_alpha_table(100, 200),
///     [100, 200, 120, 140, 160, 180, 0, 255]
/// );
/// ```
#[inline]
pub fn build_interpolated_alpha_table(a0: u8, a1: u8) -> AlphaTable {
    let (a0w, a1w) = (a0 as u32, a1 as u32);
    let mut table = [0u8; 8];
    table[0] = a0;
    table[1] = a1;

    if a0 > a1 {
        // 8 interpolated alpha values
        for k in 1..=6u32 {
            table[k as usize + 1] = ((a0w * (7 - k) + a1w * k) / 7) as u8;
        }
    } else {
        // 6 interpolated alpha values + transparent and opaque
        for k in 1..=4u32 {
            table[k as usize + 1] = ((a0w * (5 - k) + a1w * k) / 5) as u8;
        }
        table[6] = 0;
        table[7] = 255;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x0, 0)]
    #[case(0x1, 17)]
    #[case(0x8, 136)]
    #[case(0xF, 255)]
    fn expands_every_nibble_by_replication(#[case] nibble: u8, #[case] expected: u8) {
        let byte = nibble | (nibble << 4);
        let alpha = expand_explicit_alpha(&[byte; 8]);
        assert!(alpha.iter().all(|&a| a == expected));
    }

    #[test]
    fn explicit_alpha_is_in_raster_order() {
        // Row 1 (second word) is 0x3210: pixels 4..8 get nibbles 0, 1, 2, 3.
        let alpha = expand_explicit_alpha(&[0, 0, 0x10, 0x32, 0, 0, 0, 0]);
        assert_eq!(&alpha[4..8], &[0, 17, 34, 51]);
        assert!(alpha[..4].iter().chain(alpha[8..].iter()).all(|&a| a == 0));
    }

    #[rstest]
    #[case(255, 0, [255, 0, 218, 182, 145, 109, 72, 36])]
    #[case(100, 200, [100, 200, 120, 140, 160, 180, 0, 255])]
    #[case(0, 255, [0, 255, 51, 102, 153, 204, 0, 255])]
    #[case(128, 128, [128, 128, 128, 128, 128, 128, 0, 255])]
    #[case(1, 0, [1, 0, 0, 0, 0, 0, 0, 0])]
    fn builds_interpolated_alpha_table(
        #[case] a0: u8,
        #[case] a1: u8,
        #[case] expected: AlphaTable,
    ) {
        assert_eq!(build_interpolated_alpha_table(a0, a1), expected);
    }
}

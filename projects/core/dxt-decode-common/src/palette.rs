//! Colour palette construction for the colour half of BC1, BC2 and BC3 blocks.
//!
//! Each block carries two [`Color565`] endpoints; the 2-bit per-pixel indices select one of
//! 4 palette entries derived from them. Entries 0 and 1 are always the endpoints themselves.
//! How entries 2 and 3 are derived differs per format:
//!
//! | Format | `c0 > c1`                   | `c0 <= c1`                            |
//! |--------|-----------------------------|---------------------------------------|
//! | BC1    | 1/3 and 2/3 blends, opaque  | average, then transparent black       |
//! | BC2    | 1/3 and 2/3 blends          | average, then 2/3 blend               |
//! | BC3    | 1/3 and 2/3 blends          | 1/3 and 2/3 blends                    |
//!
//! BC2 and BC3 palettes have their alpha cleared; alpha is OR-ed in per pixel afterwards.
//! All arithmetic truncates.

use crate::color_565::Color565;
use crate::color_8888::Color8888;

/// The 4 candidate colours of a block, indexed by the block's 2-bit colour indices.
pub type ColorPalette = [Color8888; 4];

/// `(2 * c0 + c1) / 3` per channel.
#[inline]
fn blend_one_third(c0: Color8888, c1: Color8888, alpha: u8) -> Color8888 {
    let mix = |a: u8, b: u8| ((2 * a as u32 + b as u32) / 3) as u8;
    Color8888::new(mix(c0.r, c1.r), mix(c0.g, c1.g), mix(c0.b, c1.b), alpha)
}

/// `(c0 + 2 * c1) / 3` per channel.
#[inline]
fn blend_two_thirds(c0: Color8888, c1: Color8888, alpha: u8) -> Color8888 {
    let mix = |a: u8, b: u8| ((a as u32 + 2 * b as u32) / 3) as u8;
    Color8888::new(mix(c0.r, c1.r), mix(c0.g, c1.g), mix(c0.b, c1.b), alpha)
}

/// `(c0 + c1) / 2` per channel.
#[inline]
fn average(c0: Color8888, c1: Color8888, alpha: u8) -> Color8888 {
    let mix = |a: u8, b: u8| ((a as u32 + b as u32) / 2) as u8;
    Color8888::new(mix(c0.r, c1.r), mix(c0.g, c1.g), mix(c0.b, c1.b), alpha)
}

/// Builds the palette of a BC1 block.
///
/// When `c0 > c1` the block has 4 opaque colours. Otherwise it has 3 opaque colours, and
/// index 3 decodes to transparent black (the 1-bit alpha 'cutout' mode).
///
/// # Examples
///
/// ```
/// use dxt_decode_common::color_565::Color565;
/// use dxt_decode_common::color_8888::Color8888;
/// use dxt_decode_common::palette::build_bc1_palette;
///
/// let red = Color565::from_raw(0xF800);
/// let palette = build_bc1_palette(red, red);
/// assert_eq!(palette[2], Color8888::new(255, 0, 0, 255));
/// assert_eq!(palette[3], Color8888::TRANSPARENT_BLACK);
/// ```
#[inline]
pub fn build_bc1_palette(c0: Color565, c1: Color565) -> ColorPalette {
    let e0 = c0.to_color_8888_with_alpha(255);
    let e1 = c1.to_color_8888_with_alpha(255);

    if c0.greater_than(&c1) {
        // Four-color block
        [
            e0,
            e1,
            blend_one_third(e0, e1, 255),
            blend_two_thirds(e0, e1, 255),
        ]
    } else {
        // Three-color block
        [e0, e1, average(e0, e1, 255), Color8888::TRANSPARENT_BLACK]
    }
}

/// Builds the palette of a BC2 block, with alpha left at 0.
///
/// Only entry 2 depends on the endpoint comparison; entry 3 is always the 2/3 blend.
#[inline]
pub fn build_bc2_palette(c0: Color565, c1: Color565) -> ColorPalette {
    let e0 = c0.to_color_8888_with_alpha(0);
    let e1 = c1.to_color_8888_with_alpha(0);

    let e2 = if c0.greater_than(&c1) {
        blend_one_third(e0, e1, 0)
    } else {
        average(e0, e1, 0)
    };

    [e0, e1, e2, blend_two_thirds(e0, e1, 0)]
}

/// Builds the palette of a BC3 block, with alpha left at 0.
///
/// BC3 colour blocks are always in 4-colour mode, regardless of how the endpoints compare.
#[inline]
pub fn build_bc3_palette(c0: Color565, c1: Color565) -> ColorPalette {
    let e0 = c0.to_color_8888_with_alpha(0);
    let e1 = c1.to_color_8888_with_alpha(0);

    [
        e0,
        e1,
        blend_one_third(e0, e1, 0),
        blend_two_thirds(e0, e1, 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // 0xF800 = (255, 0, 0), 0x001F = (0, 0, 255)
    const RED: u16 = 0xF800;
    const BLUE: u16 = 0x001F;

    #[test]
    fn bc1_four_colour_mode_when_c0_greater() {
        let palette = build_bc1_palette(Color565::from_raw(RED), Color565::from_raw(BLUE));

        assert_eq!(palette[0], Color8888::new(255, 0, 0, 255));
        assert_eq!(palette[1], Color8888::new(0, 0, 255, 255));
        assert_eq!(palette[2], Color8888::new(170, 0, 85, 255));
        assert_eq!(palette[3], Color8888::new(85, 0, 170, 255));
    }

    #[test]
    fn bc1_three_colour_mode_when_c0_not_greater() {
        let palette = build_bc1_palette(Color565::from_raw(BLUE), Color565::from_raw(RED));

        assert_eq!(palette[0], Color8888::new(0, 0, 255, 255));
        assert_eq!(palette[1], Color8888::new(255, 0, 0, 255));
        assert_eq!(palette[2], Color8888::new(127, 0, 127, 255));
        assert_eq!(palette[3], Color8888::TRANSPARENT_BLACK);
    }

    #[rstest]
    #[case(0x0000)]
    #[case(0x1234)]
    #[case(0xFFFF)]
    fn bc1_equal_endpoints_give_one_colour_plus_cutout(#[case] raw: u16) {
        let c = Color565::from_raw(raw);
        let palette = build_bc1_palette(c, c);
        let expected = c.to_color_8888_with_alpha(255);

        assert_eq!(palette[0], expected);
        assert_eq!(palette[1], expected);
        assert_eq!(palette[2], expected);
        assert_eq!(palette[3], Color8888::TRANSPARENT_BLACK);
    }

    #[test]
    fn bc2_entry_3_ignores_endpoint_order() {
        let palette = build_bc2_palette(Color565::from_raw(BLUE), Color565::from_raw(RED));

        assert_eq!(palette[0], Color8888::new(0, 0, 255, 0));
        assert_eq!(palette[1], Color8888::new(255, 0, 0, 0));
        // Average for entry 2, 2/3 blend for entry 3.
        assert_eq!(palette[2], Color8888::new(127, 0, 127, 0));
        assert_eq!(palette[3], Color8888::new(170, 0, 85, 0));
    }

    #[test]
    fn bc2_matches_bc3_when_c0_greater() {
        let c0 = Color565::from_raw(RED);
        let c1 = Color565::from_raw(BLUE);
        assert_eq!(build_bc2_palette(c0, c1), build_bc3_palette(c0, c1));
    }

    #[test]
    fn bc3_has_no_three_colour_mode() {
        let palette = build_bc3_palette(Color565::from_raw(BLUE), Color565::from_raw(RED));

        assert_eq!(palette[2], Color8888::new(85, 0, 170, 0));
        assert_eq!(palette[3], Color8888::new(170, 0, 85, 0));
    }

    #[rstest]
    #[case(RED, BLUE)]
    #[case(BLUE, RED)]
    #[case(RED, RED)]
    fn bc2_and_bc3_palettes_have_zero_alpha(#[case] c0: u16, #[case] c1: u16) {
        let c0 = Color565::from_raw(c0);
        let c1 = Color565::from_raw(c1);
        assert!(build_bc2_palette(c0, c1).iter().all(|c| c.a == 0));
        assert!(build_bc3_palette(c0, c1).iter().all(|c| c.a == 0));
    }
}

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the endpoints of BC1, BC2 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Reads a little-endian [`Color565`] from the first two bytes of `bytes`.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    // NOTE: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/
    // The endpoint values are expanded from 5 or 6 bits to 8 bits by replicating the top bits
    // into the bottom ones. This is not the same as `x * 255 / 31`, which differs for some inputs.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Unpacks this colour into its expanded `(r, g, b)` channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_decode_common::color_565::Color565;
    ///
    /// assert_eq!(Color565::from_raw(0xFFFF).unpack(), (255, 255, 255));
    /// assert_eq!(Color565::from_raw(0xF800).unpack(), (255, 0, 0));
    /// assert_eq!(Color565::from_raw(0x0000).unpack(), (0, 0, 0));
    /// ```
    #[inline]
    pub fn unpack(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Compares two [`Color565`] values.
    ///
    /// This compares the packed 16-bit words, not the decoded channels; it's the
    /// comparison the block formats use to select a palette mode.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_decode_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_raw(0xF800).to_color_8888_with_alpha(128);
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 128);
    /// ```
    #[inline]
    pub fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0b00000, 0)]
    #[case(0b00001, 8)]
    #[case(0b00100, 33)]
    #[case(0b01111, 123)]
    #[case(0b10000, 132)]
    #[case(0b11110, 247)]
    #[case(0b11111, 255)]
    fn expands_5_bit_channels_by_replication(#[case] value: u16, #[case] expected: u8) {
        assert_eq!(Color565::from_raw(value << 11).red(), expected);
        assert_eq!(Color565::from_raw(value).blue(), expected);
    }

    #[rstest]
    #[case(0b000000, 0)]
    #[case(0b000001, 4)]
    #[case(0b010000, 65)]
    #[case(0b011111, 125)]
    #[case(0b100000, 130)]
    #[case(0b111111, 255)]
    fn expands_6_bit_green_by_replication(#[case] value: u16, #[case] expected: u8) {
        assert_eq!(Color565::from_raw(value << 5).green(), expected);
    }

    #[test]
    fn replication_differs_from_naive_scaling() {
        // 0b00100 => 33 by replication, but 4 * 255 / 31 == 32.
        let naive = (4u32 * 255 / 31) as u8;
        assert_ne!(Color565::from_raw(4).blue(), naive);
    }

    #[test]
    fn channels_do_not_bleed_into_each_other() {
        let red = Color565::from_raw(0xF800);
        let green = Color565::from_raw(0x07E0);
        let blue = Color565::from_raw(0x001F);

        assert_eq!(red.unpack(), (255, 0, 0));
        assert_eq!(green.unpack(), (0, 255, 0));
        assert_eq!(blue.unpack(), (0, 0, 255));
    }

    #[test]
    fn compares_packed_words_not_channels() {
        // Pure green (0x07E0) is numerically smaller than the darkest non-zero red (0x0800),
        // even though its decoded channels are much brighter.
        let green = Color565::from_raw(0x07E0);
        let dark_red = Color565::from_raw(0x0800);
        assert!(dark_red.greater_than(&green));
        assert!(!green.greater_than(&dark_red));
        assert!(!green.greater_than(&green));
    }
}

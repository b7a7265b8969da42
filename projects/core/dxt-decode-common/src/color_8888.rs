/// Represents a single RGBA8888 pixel color from a decoded block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Fully transparent black, used by BC1's 3-colour mode.
    pub const TRANSPARENT_BLACK: Self = Self::new(0, 0, 0, 0);

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_decode_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs this colour into a single word laid out as `b | g << 8 | r << 16 | a << 24`.
    ///
    /// Palette entries with an alpha of zero can have an alpha value OR-ed into the top byte
    /// of this word, which is how BC2 and BC3 pixels are assembled.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_decode_common::color_8888::Color8888;
    ///
    /// assert_eq!(Color8888::new(0x11, 0x22, 0x33, 0x44).to_packed(), 0x44112233);
    /// ```
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (self.b as u32) | (self.g as u32) << 8 | (self.r as u32) << 16 | (self.a as u32) << 24
    }

    /// Unpacks a word produced by [`Color8888::to_packed`].
    #[inline]
    pub const fn from_packed(word: u32) -> Self {
        Self {
            r: ((word >> 16) & 0xFF) as u8,
            g: ((word >> 8) & 0xFF) as u8,
            b: (word & 0xFF) as u8,
            a: ((word >> 24) & 0xFF) as u8,
        }
    }

    /// Returns the channels in raster byte order (R, G, B, A).
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

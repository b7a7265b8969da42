//! Per-pixel index extraction from the packed index fields of a block.
//!
//! All three formats store one fixed-width field per pixel, least significant bits first,
//! in raster order within the 4x4 tile. The fields are read from a little-endian integer
//! assembled from consecutive block bytes.

/// Iterator over the 16 fixed-width fields packed into a little-endian integer.
///
/// # Examples
///
/// ```
/// use dxt_decode_common::index_stream::IndexStream;
///
/// // Pixel 0 uses index 1, pixel 1 uses index 2, pixel 2 uses index 3, the rest use 0.
/// let indices: Vec<usize> = IndexStream::colour(0b11_10_01).collect();
/// assert_eq!(&indices[..4], &[1, 2, 3, 0]);
/// assert_eq!(indices.len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct IndexStream {
    bits: u64,
    width: u32,
    remaining: u8,
}

impl IndexStream {
    /// Creates a stream of 16 fields of `width` bits each, starting at the lowest bits of `bits`.
    ///
    /// `width` must be at most 4 so that all 16 fields fit in the 64-bit source.
    #[inline]
    pub const fn new(bits: u64, width: u32) -> Self {
        debug_assert!(width > 0 && width <= 4);
        Self {
            bits,
            width,
            remaining: 16,
        }
    }

    /// 2-bit colour indices, as stored in the last 4 bytes of every BC1/BC2/BC3 colour block.
    #[inline]
    pub const fn colour(bits: u32) -> Self {
        Self::new(bits as u64, 2)
    }

    /// 3-bit alpha indices, as stored in bytes 2-7 of a BC3 block.
    #[inline]
    pub const fn alpha(bits: u64) -> Self {
        Self::new(bits, 3)
    }

    /// 4-bit explicit alpha values, as stored in bytes 0-7 of a BC2 block.
    #[inline]
    pub const fn nibbles(bits: u64) -> Self {
        Self::new(bits, 4)
    }
}

impl Iterator for IndexStream {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let mask = (1u64 << self.width) - 1;
        let value = (self.bits & mask) as usize;
        self.bits >>= self.width;
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for IndexStream {}

/// Reads a little-endian `u32` from `bytes`.
#[inline]
pub fn read_u32_le(bytes: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bytes)
}

/// Reads a little-endian 48-bit integer from 6 bytes, zero-extended to `u64`.
#[inline]
pub fn read_u48_le(bytes: &[u8; 6]) -> u64 {
    let [b0, b1, b2, b3, b4, b5] = *bytes;
    u64::from_le_bytes([b0, b1, b2, b3, b4, b5, 0, 0])
}

//! Block-compressed format enumeration.

use crate::error::UnknownFormatError;
use core::fmt;
use core::str::FromStr;

/// The block-compressed formats that can be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DxtFormat {
    /// BC1 (DXT1): 8 bytes per block, opaque or 1-bit alpha
    Bc1,
    /// BC2 (DXT3): 16 bytes per block, explicit 4-bit alpha
    Bc2,
    /// BC3 (DXT5): 16 bytes per block, interpolated 8-bit alpha
    Bc3,
}

impl DxtFormat {
    /// All supported formats.
    pub const ALL: [DxtFormat; 3] = [DxtFormat::Bc1, DxtFormat::Bc2, DxtFormat::Bc3];

    /// Size of a single compressed 4x4 block in bytes.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            DxtFormat::Bc1 => dxt_decode_bc1::BC1_BLOCK_SIZE,
            DxtFormat::Bc2 => dxt_decode_bc2::BC2_BLOCK_SIZE,
            DxtFormat::Bc3 => dxt_decode_bc3::BC3_BLOCK_SIZE,
        }
    }

    /// The format's BCn name, as used in log output.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            DxtFormat::Bc1 => "BC1",
            DxtFormat::Bc2 => "BC2",
            DxtFormat::Bc3 => "BC3",
        }
    }
}

impl fmt::Display for DxtFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DxtFormat {
    type Err = UnknownFormatError;

    /// Parses a format from its BCn or DXTn name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, DxtFormat); 6] = [
            ("bc1", DxtFormat::Bc1),
            ("dxt1", DxtFormat::Bc1),
            ("bc2", DxtFormat::Bc2),
            ("dxt3", DxtFormat::Bc2),
            ("bc3", DxtFormat::Bc3),
            ("dxt5", DxtFormat::Bc3),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, format)| format)
            .ok_or(UnknownFormatError)
    }
}

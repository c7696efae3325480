//! Binary vs ASCII classification.

use super::{HEADER_SIZE, PREAMBLE_SIZE, TRIANGLE_SIZE};

/// The two STL encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlEncoding {
    /// Fixed 50-byte records after an 80-byte header and a triangle count.
    Binary,
    /// Line-oriented `solid`/`facet`/`vertex` text.
    Ascii,
}

impl StlEncoding {
    /// Classify a buffer.
    ///
    /// Binary if and only if the buffer holds at least the 84-byte preamble
    /// and `84 + count * 50` equals its length, `count` being the
    /// little-endian `u32` at offset 80. Anything else is ASCII.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_io::StlEncoding;
    ///
    /// let mut empty_solid = vec![0u8; 84];
    /// assert_eq!(StlEncoding::detect(&empty_solid), StlEncoding::Binary);
    ///
    /// empty_solid.push(0);
    /// assert_eq!(StlEncoding::detect(&empty_solid), StlEncoding::Ascii);
    /// assert_eq!(StlEncoding::detect(b"solid cube"), StlEncoding::Ascii);
    /// ```
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        match declared_triangle_count(bytes) {
            Some(count) if expected_binary_len(count) == bytes.len() as u64 => Self::Binary,
            _ => Self::Ascii,
        }
    }

    /// Whether this is the binary encoding.
    #[inline]
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Ascii => "ascii",
        }
    }
}

/// The triangle count stored at offset 80, if the preamble is present.
pub(crate) fn declared_triangle_count(bytes: &[u8]) -> Option<u32> {
    let count = bytes.get(HEADER_SIZE..PREAMBLE_SIZE)?;
    Some(u32::from_le_bytes([count[0], count[1], count[2], count[3]]))
}

/// Total byte length a binary STL with `count` triangles must have.
pub(crate) fn expected_binary_len(count: u32) -> u64 {
    PREAMBLE_SIZE as u64 + u64::from(count) * TRIANGLE_SIZE as u64
}

/// For a buffer classified as ASCII that is clearly not text, the length
/// its binary header claims.
///
/// A NUL byte marks binary data. Other invalid UTF-8 (a Latin-1 solid name,
/// say) still counts as text and is decoded lossily.
pub(crate) fn unreconciled_binary_len(bytes: &[u8]) -> Option<u64> {
    let count = declared_triangle_count(bytes)?;
    bytes.contains(&0).then(|| expected_binary_len(count))
}

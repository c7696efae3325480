//! STL (Stereolithography) decoding.
//!
//! Supports both binary and ASCII STL. Decoding streams triangles into a
//! [`TriangleSink`]; no indexed mesh is built.
//!
//! # Format Detection
//!
//! The buffer is binary when the triangle count at offset 80 accounts for
//! the buffer length exactly. Everything else is read as ASCII. A leading
//! `solid` keyword is never consulted: plenty of binary exporters write it
//! into the header.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, often contains file info)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

mod ascii;
mod binary;
mod detect;

pub use ascii::read_stl_ascii;
pub use binary::read_stl_binary;
pub use detect::StlEncoding;

use mesh_types::TriangleSink;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
pub(crate) const HEADER_SIZE: usize = 80;

/// Header plus the 4-byte triangle count.
pub(crate) const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
pub(crate) const TRIANGLE_SIZE: usize = 50;

/// Decode an STL buffer of either encoding into `sink`.
///
/// Returns the encoding that was used.
///
/// # Errors
///
/// - [`IoError::InvalidInput`] if `bytes` is empty
/// - [`IoError::MalformedBinary`] if the buffer is binary data whose declared
///   triangle count does not match its length
/// - [`IoError::MalformedText`] if an ASCII `vertex` line cannot be parsed
///
/// # Example
///
/// ```
/// use mesh_io::{read_stl, StlEncoding};
/// use mesh_types::Triangle;
///
/// let text = b"solid t
///   facet normal 0 0 1
///     outer loop
///       vertex 0 0 0
///       vertex 1 0 0
///       vertex 0 1 0
///     endloop
///   endfacet
/// endsolid t";
///
/// let mut triangles: Vec<Triangle> = Vec::new();
/// let encoding = read_stl(text, &mut triangles).unwrap();
/// assert_eq!(encoding, StlEncoding::Ascii);
/// assert_eq!(triangles.len(), 1);
/// ```
pub fn read_stl<S: TriangleSink>(bytes: &[u8], sink: S) -> IoResult<StlEncoding> {
    if bytes.is_empty() {
        return Err(IoError::invalid_input("STL buffer is empty"));
    }

    let encoding = StlEncoding::detect(bytes);
    debug!(
        encoding = encoding.as_str(),
        bytes = bytes.len(),
        "Detected STL encoding"
    );

    match encoding {
        StlEncoding::Binary => {
            read_stl_binary(bytes, sink)?;
        }
        StlEncoding::Ascii => {
            // Binary data with a count that doesn't add up must not be read
            // as an empty ASCII solid.
            if let Some(expected) = detect::unreconciled_binary_len(bytes) {
                return Err(IoError::MalformedBinary {
                    expected,
                    available: bytes.len(),
                });
            }
            read_stl_ascii(bytes, sink)?;
        }
    }

    Ok(encoding)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub(crate) mod tests {
    use super::*;
    use mesh_types::Triangle;

    /// Encode triangles as binary STL with the given header text.
    pub(crate) fn encode_binary(header: &[u8], triangles: &[Triangle]) -> Vec<u8> {
        let mut out = vec![0u8; HEADER_SIZE];
        out[..header.len()].copy_from_slice(header);
        #[allow(clippy::cast_possible_truncation)]
        out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for tri in triangles {
            out.extend_from_slice(&[0u8; 12]);
            for p in tri.vertices() {
                for c in [p.x, p.y, p.z] {
                    #[allow(clippy::cast_possible_truncation)]
                    out.extend_from_slice(&(c as f32).to_le_bytes());
                }
            }
            out.extend_from_slice(&0u16.to_le_bytes());
        }
        out
    }

    fn unit_triangle() -> Triangle {
        Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    #[test]
    fn empty_buffer_is_invalid_input() {
        let mut tris: Vec<Triangle> = Vec::new();
        let err = read_stl(&[], &mut tris).unwrap_err();
        assert!(matches!(err, IoError::InvalidInput { .. }));
    }

    #[test]
    fn binary_with_solid_header_is_still_binary() {
        let bytes = encode_binary(b"solid exported-by-cad", &[unit_triangle()]);
        let mut tris: Vec<Triangle> = Vec::new();
        let encoding = read_stl(&bytes, &mut tris).unwrap();
        assert_eq!(encoding, StlEncoding::Binary);
        assert_eq!(tris.len(), 1);
    }

    #[test]
    fn binary_count_mismatch_is_malformed_binary() {
        let mut bytes = encode_binary(b"", &[unit_triangle(), unit_triangle()]);
        bytes[HEADER_SIZE..PREAMBLE_SIZE].copy_from_slice(&3u32.to_le_bytes());

        let mut tris: Vec<Triangle> = Vec::new();
        let err = read_stl(&bytes, &mut tris).unwrap_err();
        assert_eq!(
            err,
            IoError::MalformedBinary {
                expected: 84 + 3 * 50,
                available: 84 + 2 * 50,
            }
        );
        assert!(tris.is_empty());
    }

    #[test]
    fn non_utf8_text_is_decoded_lossily() {
        let text = b"solid W\xFCrfel
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid";
        assert!(text.len() >= PREAMBLE_SIZE);

        let mut tris: Vec<Triangle> = Vec::new();
        let encoding = read_stl(text, &mut tris).unwrap();
        assert_eq!(encoding, StlEncoding::Ascii);
        assert_eq!(tris, vec![unit_triangle()]);
    }

    #[test]
    fn short_text_is_read_as_ascii() {
        let mut tris: Vec<Triangle> = Vec::new();
        let encoding = read_stl(b"solid x\nendsolid x\n", &mut tris).unwrap();
        assert_eq!(encoding, StlEncoding::Ascii);
        assert!(tris.is_empty());
    }
}

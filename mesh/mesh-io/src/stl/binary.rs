//! Binary STL reader.

use mesh_types::{Triangle, TriangleSink, Vertex};
use tracing::debug;

use super::detect::{declared_triangle_count, expected_binary_len};
use super::{PREAMBLE_SIZE, TRIANGLE_SIZE};
use crate::error::{IoError, IoResult};

/// Decode a binary STL buffer into `sink`.
///
/// Records are read strictly in order. Each one is bounds-checked before it
/// is touched, so a short buffer fails at the first record that does not
/// fit and never reads past the end. Normals and attribute bytes are
/// skipped.
///
/// Returns the number of triangles decoded, which always equals the count
/// declared in the header.
///
/// # Errors
///
/// Returns [`IoError::MalformedBinary`] if the buffer is shorter than the
/// 84-byte preamble, if a record is truncated, or if bytes remain after the
/// last declared record.
///
/// # Example
///
/// ```
/// use mesh_io::read_stl_binary;
/// use mesh_types::Triangle;
///
/// // Header and count for an empty solid
/// let bytes = [0u8; 84];
/// let mut triangles: Vec<Triangle> = Vec::new();
/// assert_eq!(read_stl_binary(&bytes, &mut triangles).unwrap(), 0);
/// ```
pub fn read_stl_binary<S: TriangleSink>(bytes: &[u8], mut sink: S) -> IoResult<u32> {
    let face_count = declared_triangle_count(bytes).ok_or_else(|| IoError::MalformedBinary {
        expected: PREAMBLE_SIZE as u64,
        available: bytes.len(),
    })?;
    let malformed = || IoError::MalformedBinary {
        expected: expected_binary_len(face_count),
        available: bytes.len(),
    };

    let mut records = &bytes[PREAMBLE_SIZE..];
    for _ in 0..face_count {
        let (record, rest) = records
            .split_first_chunk::<TRIANGLE_SIZE>()
            .ok_or_else(malformed)?;

        // Skip normal (12 bytes), read 3 vertices (36 bytes total)
        let v0 = read_vertex(&record[12..24]);
        let v1 = read_vertex(&record[24..36]);
        let v2 = read_vertex(&record[36..48]);
        sink.push_triangle(Triangle::from_vertices([v0, v1, v2]));

        records = rest;
    }

    if !records.is_empty() {
        return Err(malformed());
    }

    debug!(triangles = face_count, "Decoded binary STL");
    Ok(face_count)
}

/// Read a vertex from 12 bytes (3 little-endian f32s).
fn read_vertex(buf: &[u8]) -> Vertex {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vertex::from_coords(f64::from(x), f64::from(y), f64::from(z))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::stl::tests::encode_binary;

    fn sample() -> Vec<Triangle> {
        vec![
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([0.5, -2.25, 8.0], [3.0, 4.0, 5.0], [-1.0, -1.0, -1.0]),
        ]
    }

    #[test]
    fn decodes_vertices_in_order() {
        let bytes = encode_binary(b"test", &sample());
        let mut tris: Vec<Triangle> = Vec::new();
        let count = read_stl_binary(&bytes, &mut tris).unwrap();

        assert_eq!(count, 2);
        assert_eq!(tris, sample());
    }

    #[test]
    fn normal_and_attribute_bytes_are_ignored() {
        let mut bytes = encode_binary(b"", &sample()[..1]);
        // Garbage normal and attribute count
        bytes[PREAMBLE_SIZE..PREAMBLE_SIZE + 12].copy_from_slice(&[0xAB; 12]);
        bytes[PREAMBLE_SIZE + 48..PREAMBLE_SIZE + 50].copy_from_slice(&[0xFF, 0xFF]);

        let mut tris: Vec<Triangle> = Vec::new();
        read_stl_binary(&bytes, &mut tris).unwrap();
        assert_eq!(tris, sample()[..1].to_vec());
    }

    #[test]
    fn truncated_record_fails_without_emitting_it() {
        let mut bytes = encode_binary(b"", &sample());
        bytes.truncate(bytes.len() - 10);

        let mut tris: Vec<Triangle> = Vec::new();
        let err = read_stl_binary(&bytes, &mut tris).unwrap_err();
        assert_eq!(
            err,
            IoError::MalformedBinary {
                expected: 184,
                available: 174,
            }
        );
        // The first, complete record was streamed before the failure.
        assert_eq!(tris.len(), 1);
    }

    #[test]
    fn trailing_bytes_fail() {
        let mut bytes = encode_binary(b"", &sample());
        bytes.extend_from_slice(&[0, 0]);

        let mut tris: Vec<Triangle> = Vec::new();
        let err = read_stl_binary(&bytes, &mut tris).unwrap_err();
        assert!(matches!(err, IoError::MalformedBinary { expected: 184, .. }));
    }

    #[test]
    fn short_preamble_fails() {
        let mut tris: Vec<Triangle> = Vec::new();
        let err = read_stl_binary(&[0u8; 40], &mut tris).unwrap_err();
        assert_eq!(
            err,
            IoError::MalformedBinary {
                expected: 84,
                available: 40,
            }
        );
    }

    #[test]
    fn f32_precision_is_widened_exactly() {
        let tri = Triangle::from_arrays([0.1, 0.2, 0.3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let bytes = encode_binary(b"", &[tri]);
        let mut tris: Vec<Triangle> = Vec::new();
        read_stl_binary(&bytes, &mut tris).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let expected = f64::from(0.1_f64 as f32);
        assert_eq!(tris[0].v0.x, expected);
    }
}

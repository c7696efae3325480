//! Conformance tests for the STL decoders.
//!
//! The fixtures mimic what real exporters produce: binary files whose
//! header begins with `solid`, ASCII files with irregular indentation and
//! CRLF endings, and multi-solid ASCII files. Each fixture is built in
//! both encodings so the two readers can be checked against each other.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_possible_truncation)]

use std::fmt::Write as _;

use approx::assert_relative_eq;
use mesh_io::{read_stl, IoError, StlEncoding};
use mesh_types::Triangle;

// =============================================================================
// Fixtures
// =============================================================================

/// Axis-aligned cube with outward CCW winding, 12 triangles.
fn cube(origin: [f64; 3], edge: f64) -> Vec<Triangle> {
    let corner = |i: usize| {
        let [x, y, z] = [(i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64];
        [
            x.mul_add(edge, origin[0]),
            y.mul_add(edge, origin[1]),
            z.mul_add(edge, origin[2]),
        ]
    };
    let faces: [[usize; 3]; 12] = [
        [0, 2, 3],
        [0, 3, 1],
        [4, 5, 7],
        [4, 7, 6],
        [0, 1, 5],
        [0, 5, 4],
        [2, 6, 7],
        [2, 7, 3],
        [0, 4, 6],
        [0, 6, 2],
        [1, 3, 7],
        [1, 7, 5],
    ];
    faces
        .iter()
        .map(|&[a, b, c]| Triangle::from_arrays(corner(a), corner(b), corner(c)))
        .collect()
}

fn encode_binary(header: &[u8], triangles: &[Triangle]) -> Vec<u8> {
    let mut out = vec![b' '; 80];
    out[..header.len()].copy_from_slice(header);
    out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        let n = tri.normal_unnormalized().normalize();
        for c in [n.x, n.y, n.z] {
            out.extend_from_slice(&(c as f32).to_le_bytes());
        }
        for p in tri.vertices() {
            for c in [p.x, p.y, p.z] {
                out.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }
    out
}

fn encode_ascii(name: &str, triangles: &[Triangle], newline: &str) -> String {
    let mut out = format!("solid {name}{newline}");
    for tri in triangles {
        let n = tri.normal_unnormalized().normalize();
        write!(out, "  facet normal {:e} {:e} {:e}{newline}", n.x, n.y, n.z).unwrap();
        write!(out, "    outer loop{newline}").unwrap();
        for p in tri.vertices() {
            write!(out, "      vertex {} {} {}{newline}", p.x, p.y, p.z).unwrap();
        }
        write!(out, "    endloop{newline}  endfacet{newline}").unwrap();
    }
    write!(out, "endsolid {name}{newline}").unwrap();
    out
}

fn decode(bytes: &[u8]) -> (StlEncoding, Vec<Triangle>) {
    let mut triangles = Vec::new();
    let encoding = read_stl(bytes, &mut triangles).expect("fixture decodes");
    (encoding, triangles)
}

// =============================================================================
// Cross-Encoding Tests
// =============================================================================

#[test]
fn binary_and_ascii_cube_decode_identically() {
    let cube = cube([0.0, 0.0, 0.0], 10.0);

    let (bin_encoding, from_binary) = decode(&encode_binary(b"solid cube", &cube));
    let (txt_encoding, from_ascii) = decode(encode_ascii("cube", &cube, "\n").as_bytes());

    assert_eq!(bin_encoding, StlEncoding::Binary);
    assert_eq!(txt_encoding, StlEncoding::Ascii);
    assert_eq!(from_binary.len(), 12);
    assert_eq!(from_binary, from_ascii);
}

#[test]
fn cube_area_and_volume_from_decoded_triangles() {
    let cube = cube([-3.5, 12.0, 100.25], 10.0);
    let (_, triangles) = decode(&encode_binary(b"", &cube));

    let area: f64 = triangles.iter().map(Triangle::area).sum();
    let volume: f64 = triangles.iter().map(Triangle::signed_volume).sum();

    assert_relative_eq!(area, 600.0, max_relative = 1e-3);
    assert_relative_eq!(volume, 1000.0, max_relative = 1e-3);
}

#[test]
fn crlf_ascii_decodes() {
    let cube = cube([0.0, 0.0, 0.0], 2.0);
    let (_, triangles) = decode(encode_ascii("crlf", &cube, "\r\n").as_bytes());
    assert_eq!(triangles.len(), 12);
}

#[test]
fn multiple_solids_in_one_ascii_file() {
    let mut text = encode_ascii("first", &cube([0.0, 0.0, 0.0], 1.0), "\n");
    text.push_str(&encode_ascii("second", &cube([5.0, 0.0, 0.0], 1.0), "\n"));

    let (_, triangles) = decode(text.as_bytes());
    assert_eq!(triangles.len(), 24);
}

#[test]
fn empty_binary_solid() {
    let (encoding, triangles) = decode(&encode_binary(b"solid empty", &[]));
    assert_eq!(encoding, StlEncoding::Binary);
    assert!(triangles.is_empty());
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn declared_count_too_high_never_truncates() {
    let mut bytes = encode_binary(b"", &cube([0.0, 0.0, 0.0], 1.0));
    bytes[80..84].copy_from_slice(&13u32.to_le_bytes());

    let mut triangles = Vec::new();
    let err = read_stl(&bytes, &mut triangles).unwrap_err();
    assert!(matches!(err, IoError::MalformedBinary { .. }));
    assert!(triangles.is_empty());
}

#[test]
fn declared_count_too_low_never_pads() {
    let mut bytes = encode_binary(b"", &cube([0.0, 0.0, 0.0], 1.0));
    bytes[80..84].copy_from_slice(&11u32.to_le_bytes());

    let mut triangles = Vec::new();
    let err = read_stl(&bytes, &mut triangles).unwrap_err();
    assert_eq!(
        err,
        IoError::MalformedBinary {
            expected: 84 + 11 * 50,
            available: 84 + 12 * 50,
        }
    );
}

#[test]
fn ascii_with_garbage_vertex_fails() {
    let text = encode_ascii("bad", &cube([0.0, 0.0, 0.0], 1.0), "\n")
        .replacen("vertex 0 0 0", "vertex 0 0 O", 1);

    let mut triangles = Vec::new();
    let err = read_stl(text.as_bytes(), &mut triangles).unwrap_err();
    match err {
        IoError::MalformedText { content, .. } => assert_eq!(content, "vertex 0 0 O"),
        other => panic!("expected MalformedText, got {other:?}"),
    }
}

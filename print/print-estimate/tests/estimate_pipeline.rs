//! End-to-end estimates from STL bytes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_possible_truncation)]

use std::fmt::Write as _;

use approx::assert_relative_eq;
use mesh_types::Triangle;
use print_estimate::{
    estimate, measure_stl, ErrorKind, Material, PrintSettings, VOLUME_EFFICIENCY,
};

/// Axis-aligned box from the origin with outward winding.
fn block(size: [f64; 3]) -> Vec<Triangle> {
    let corner = |i: usize| {
        [
            if i & 1 == 0 { 0.0 } else { size[0] },
            if i & 2 == 0 { 0.0 } else { size[1] },
            if i & 4 == 0 { 0.0 } else { size[2] },
        ]
    };
    [
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
    ]
    .iter()
    .map(|&[a, b, c]| Triangle::from_arrays(corner(a), corner(b), corner(c)))
    .collect()
}

fn binary(triangles: &[Triangle]) -> Vec<u8> {
    let mut out = vec![0u8; 80];
    out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        out.extend_from_slice(&[0u8; 12]);
        for p in tri.vertices() {
            for c in [p.x, p.y, p.z] {
                out.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        out.extend_from_slice(&[0u8; 2]);
    }
    out
}

fn ascii(triangles: &[Triangle]) -> String {
    let mut out = String::from("solid block\n");
    for tri in triangles {
        out.push_str("facet normal 0 0 0\nouter loop\n");
        for p in tri.vertices() {
            writeln!(out, "vertex {} {} {}", p.x, p.y, p.z).unwrap();
        }
        out.push_str("endloop\nendfacet\n");
    }
    out.push_str("endsolid block\n");
    out
}

#[test]
fn cube_metrics_match_across_encodings() {
    let cube = block([10.0, 10.0, 10.0]);
    let from_binary = measure_stl(&binary(&cube)).unwrap();
    let from_ascii = measure_stl(ascii(&cube).as_bytes()).unwrap();

    assert!(from_binary.encoding_was_binary);
    assert!(!from_ascii.encoding_was_binary);

    for metrics in [&from_binary, &from_ascii] {
        assert_eq!(metrics.triangle_count, 12);
        assert_eq!(metrics.vertex_count, 36);
        assert_relative_eq!(metrics.volume, 1000.0, max_relative = 1e-3);
        assert_relative_eq!(metrics.surface_area, 600.0, max_relative = 1e-3);
    }
    assert_relative_eq!(from_binary.volume, from_ascii.volume, max_relative = 1e-6);

    let dims = from_binary.dimensions().unwrap();
    assert_eq!(dims.to_string(), "10.0 × 10.0 × 10.0 mm");
}

#[test]
fn reference_block_reproduces_frozen_quote() {
    let bytes = binary(&block([100.0, 100.0, 100.0]));
    let result = estimate("block.stl", &bytes, &PrintSettings::default()).unwrap();

    assert_eq!(result.filename, "block.stl");
    assert_eq!(result.volume, 1_000_000);
    assert_relative_eq!(result.weight, 436.48);
    assert_relative_eq!(result.time_in_hours, 8.73);
    assert_eq!(result.material_cost, 96_026);
    assert_eq!(result.time_cost, 87_302);
    assert_eq!(result.total_cost, 183_328);
}

#[test]
fn petg_ignores_supplied_density() {
    let bytes = binary(&block([10.0, 10.0, 10.0]));
    let base = PrintSettings::default()
        .with_material(Material::Petg)
        .with_infill_percentage(100.0);

    let a = estimate("a.stl", &bytes, &base.clone().with_density(0.5)).unwrap();
    let b = estimate("b.stl", &bytes, &base.with_density(9.0)).unwrap();

    assert_relative_eq!(a.weight, 1000.0 * VOLUME_EFFICIENCY / 1000.0 * 1.27, epsilon = 0.005);
    assert_eq!(a.material_cost, b.material_cost);
    assert_eq!(a.material_cost, 356);
}

#[test]
fn inverted_winding_still_quotes_positive_volume() {
    let inverted: Vec<Triangle> = block([10.0, 10.0, 10.0])
        .into_iter()
        .map(|t| Triangle::new(t.v0, t.v2, t.v1))
        .collect();
    let metrics = measure_stl(&binary(&inverted)).unwrap();

    assert!(metrics.is_inside_out());
    assert_relative_eq!(metrics.volume, 1000.0, max_relative = 1e-6);
}

#[test]
fn truncated_binary_is_rejected() {
    let mut bytes = binary(&block([10.0, 10.0, 10.0]));
    bytes.truncate(bytes.len() - 7);

    let err = estimate("cut.stl", &bytes, &PrintSettings::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedBinary);
}

#[test]
fn bad_settings_short_circuit_garbage_bytes() {
    let garbage = vec![0xFFu8; 300];
    let settings = PrintSettings::default().with_wall_count(-1);

    let err = estimate("junk.stl", &garbage, &settings).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn oversized_part_quotes_saturated_costs() {
    let bytes = binary(&block([1.0e7, 1.0e7, 1.0e7]));
    let result = estimate("big.stl", &bytes, &PrintSettings::default()).unwrap();

    assert_eq!(result.material_cost, u64::MAX);
    assert_eq!(result.time_cost, u64::MAX);
    assert_eq!(result.total_cost, u64::MAX);
}

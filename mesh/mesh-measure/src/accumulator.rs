//! Streaming mesh metrics.

use mesh_types::{Aabb, Triangle, TriangleSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Dimensions;

/// Aggregate measurements of a decoded mesh.
///
/// `vertex_count` is always `3 * triangle_count`: STL stores every triangle
/// with its own three vertices and nothing here de-duplicates them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MeshMetrics {
    /// Number of triangles accumulated.
    pub triangle_count: usize,

    /// Number of vertices, three per triangle.
    pub vertex_count: usize,

    /// Axis-aligned bounds of every vertex, `None` for an empty mesh.
    pub bounds: Option<Aabb>,

    /// Total surface area in mm².
    pub surface_area: f64,

    /// Signed divergence-theorem volume in mm³.
    ///
    /// Negative when the surface is consistently wound inside-out.
    pub signed_volume: f64,

    /// Enclosed volume in mm³, the absolute value of `signed_volume`.
    pub volume: f64,

    /// Whether the source used the binary STL encoding.
    pub encoding_was_binary: bool,
}

impl MeshMetrics {
    /// Check if no triangles were accumulated.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }

    /// Check if the mesh appears to be inside-out.
    ///
    /// A mesh is considered inside-out if its signed volume is negative.
    #[inline]
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume < 0.0
    }

    /// Bounding box dimensions, `None` for an empty mesh.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.bounds.as_ref().map(Dimensions::from_bounds)
    }
}

/// Running totals over a triangle stream.
///
/// Triangles are folded in arrival order. The accumulator holds a constant
/// amount of state regardless of mesh size.
#[derive(Debug, Clone, Default)]
pub struct MeshAccumulator {
    triangle_count: usize,
    bounds: Aabb,
    surface_area: f64,
    signed_volume: f64,
}

impl MeshAccumulator {
    /// Create an accumulator with nothing accumulated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles accumulated so far.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Finish accumulation.
    ///
    /// The exported volume is the absolute value of the final signed sum,
    /// not a sum of per-triangle absolute values.
    #[must_use]
    pub fn finish(self, encoding_was_binary: bool) -> MeshMetrics {
        let bounds = (self.triangle_count > 0).then_some(self.bounds);
        MeshMetrics {
            triangle_count: self.triangle_count,
            vertex_count: self.triangle_count * 3,
            bounds,
            surface_area: self.surface_area,
            signed_volume: self.signed_volume,
            volume: self.signed_volume.abs(),
            encoding_was_binary,
        }
    }
}

impl TriangleSink for MeshAccumulator {
    fn push_triangle(&mut self, triangle: Triangle) {
        for vertex in &triangle.vertices() {
            self.bounds.expand_to_include(vertex);
        }
        self.surface_area += triangle.area();
        self.signed_volume += triangle.signed_volume();
        self.triangle_count += 1;
    }
}

//! Aggregate measurements of a triangle stream.
//!
//! [`MeshAccumulator`] consumes triangles one at a time (it is a
//! [`TriangleSink`](mesh_types::TriangleSink)) and keeps running totals, so
//! a decoder can feed it directly without an intermediate mesh:
//!
//! - **Bounds**: per-axis minimum and maximum over every vertex
//! - **Surface area**: sum of triangle areas
//! - **Volume**: signed divergence-theorem sum, reported as its absolute value
//!
//! [`Dimensions`] and [`format_volume`] render the results for display.
//!
//! # Example
//!
//! ```
//! use mesh_measure::MeshAccumulator;
//! use mesh_types::{Triangle, TriangleSink};
//!
//! let mut acc = MeshAccumulator::new();
//! acc.push_triangle(Triangle::from_arrays([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]));
//!
//! let metrics = acc.finish(false);
//! assert_eq!(metrics.triangle_count, 1);
//! assert_eq!(metrics.vertex_count, 3);
//! assert!((metrics.volume - 1.0 / 6.0).abs() < 1e-12);
//! ```
//!
//! # Volume Caveat
//!
//! The volume is only meaningful for closed surfaces with consistent
//! outward winding. Faces wound the other way subtract from the total
//! instead of adding, so a mesh with mixed winding reports less volume than
//! it encloses. No manifold or winding check is made.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod accumulator;
mod dimensions;

pub use accumulator::{MeshAccumulator, MeshMetrics};
pub use dimensions::{format_volume, Dimensions};

//! Core geometric types for STL mesh analysis.
//!
//! This crate provides the small set of value types the decoders and the
//! metrics accumulator exchange:
//!
//! - [`Vertex`] - A point in 3D space, in millimeters
//! - [`Triangle`] - Three vertices in the winding order of the source file
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`TriangleSink`] - The seam a decoder streams triangles into
//!
//! # Units
//!
//! All coordinates are `f64` millimeters. Binary STL stores `f32`; decoders
//! widen on read.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**, so a closed,
//! consistently wound surface has a positive signed volume.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Triangle, TriangleSink, Vertex};
//!
//! let mut triangles: Vec<Triangle> = Vec::new();
//! triangles.push_triangle(Triangle::from_vertices([
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.0, 1.0, 0.0),
//! ]));
//!
//! assert_eq!(triangles.len(), 1);
//! assert!((triangles[0].area() - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod traits;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use traits::TriangleSink;
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

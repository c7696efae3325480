//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-axis extent of a set of points.
///
/// Starts [`empty`](Self::empty) and grows one point at a time, which is how
/// the metrics accumulator tracks a triangle stream.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let mut bounds = Aabb::empty();
/// bounds.expand_to_include(&Point3::new(-1.0, 0.0, 2.0));
/// bounds.expand_to_include(&Point3::new(4.0, 3.0, 0.5));
///
/// assert_eq!(bounds.size(), Point3::new(5.0, 3.0, 1.5).coords);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Smallest coordinate seen on each axis.
    pub min: Point3<f64>,
    /// Largest coordinate seen on each axis.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Box spanning two opposite corners, given in any order.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Box containing nothing.
    ///
    /// `min` is `+inf` and `max` is `-inf`, so the first point included
    /// becomes both corners.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::from(Vector3::repeat(f64::INFINITY)),
            max: Point3::from(Vector3::repeat(f64::NEG_INFINITY)),
        }
    }

    /// Whether no point has been included.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extent along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Grow the box so it contains `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

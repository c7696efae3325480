//! Traits shared by mesh producers and consumers.

use crate::Triangle;

/// A consumer of a triangle stream.
///
/// Decoders push each triangle as soon as it is complete, so a consumer
/// can aggregate a mesh without the decoder ever building one in memory.
pub trait TriangleSink {
    /// Accept the next triangle, in source order.
    fn push_triangle(&mut self, triangle: Triangle);
}

impl TriangleSink for Vec<Triangle> {
    fn push_triangle(&mut self, triangle: Triangle) {
        self.push(triangle);
    }
}

impl<S: TriangleSink + ?Sized> TriangleSink for &mut S {
    fn push_triangle(&mut self, triangle: Triangle) {
        (**self).push_triangle(triangle);
    }
}

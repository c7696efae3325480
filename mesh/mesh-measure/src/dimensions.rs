//! Bounding box dimensions and display helpers.

use std::fmt;

use mesh_types::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cubic millimetres in one cubic centimetre.
const MM3_PER_CM3: f64 = 1000.0;

/// Extents of an axis-aligned bounding box in millimetres.
///
/// # Example
///
/// ```
/// use mesh_measure::Dimensions;
/// use mesh_types::{Aabb, Point3};
///
/// let bounds = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 10.0, 5.0));
/// let dims = Dimensions::from_bounds(&bounds);
///
/// assert_eq!(dims.to_string(), "20.0 × 10.0 × 5.0 mm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Width (X extent).
    pub width: f64,
    /// Depth (Y extent).
    pub depth: f64,
    /// Height (Z extent).
    pub height: f64,
}

impl Dimensions {
    /// Dimensions of a bounding box.
    #[must_use]
    pub fn from_bounds(bounds: &Aabb) -> Self {
        let size = bounds.size();
        Self {
            width: size.x,
            depth: size.y,
            height: size.z,
        }
    }

    /// Get the longest extent.
    #[must_use]
    pub const fn max_extent(&self) -> f64 {
        self.width.max(self.depth).max(self.height)
    }

    /// Volume of the bounding box in mm³.
    #[must_use]
    pub fn bounding_volume(&self) -> f64 {
        self.width * self.depth * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} × {:.1} × {:.1} mm",
            self.width, self.depth, self.height
        )
    }
}

/// Format a volume given in mm³ for display.
///
/// Volumes below one cubic centimetre stay in mm³, larger ones switch to
/// cm³. Both use two decimals.
///
/// # Example
///
/// ```
/// use mesh_measure::format_volume;
///
/// assert_eq!(format_volume(512.0), "512.00 mm³");
/// assert_eq!(format_volume(1_000_000.0), "1000.00 cm³");
/// ```
#[must_use]
pub fn format_volume(mm3: f64) -> String {
    if mm3 < MM3_PER_CM3 {
        format!("{mm3:.2} mm³")
    } else {
        format!("{:.2} cm³", mm3 / MM3_PER_CM3)
    }
}

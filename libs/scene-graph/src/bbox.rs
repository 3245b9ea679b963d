//! # Bounding Box
//!
//! Axis-aligned bounding box grown point by point.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    min: DVec3,
    max: DVec3,
}

impl BBox {
    /// Creates a box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates a degenerate box around a single point.
    pub fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest box holding every point, or `None` if empty.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use scene_graph::BBox;
    ///
    /// let bbox = BBox::from_points([DVec3::ZERO, DVec3::new(1.0, -2.0, 3.0)]).unwrap();
    /// assert_eq!(bbox.min(), DVec3::new(0.0, -2.0, 0.0));
    /// assert_eq!(bbox.max(), DVec3::new(1.0, 0.0, 3.0));
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bbox = Self::from_point(points.next()?);
        for point in points {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Grows the box to hold a point.
    #[inline]
    pub fn extend(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns the smallest box holding both boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns the box holding this box after transformation.
    pub fn transformed(&self, matrix: &DMat4) -> BBox {
        let corner = |i: usize| {
            DVec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        };
        let mut bbox = BBox::from_point(matrix.transform_point3(corner(0)));
        for i in 1..8 {
            bbox.extend(matrix.transform_point3(corner(i)));
        }
        bbox
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns true if the point lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

// =============================================================================
// TESTS
// =============================================================================

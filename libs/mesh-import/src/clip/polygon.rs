//! # Polygon Clipping
//!
//! Cuts a classified triangle against the near and far planes, producing a
//! convex polygon of 3 to 5 points in source winding order.

use super::classify::{ClipCode, TriangleClip};
use super::intersect::intersect_plane;
use super::ClipPlanes;
use config::constants::{MAX_CLIPPED_POINTS, VERTICES_PER_TRIANGLE};
use glam::DVec3;

// =============================================================================
// CLIPPED POLYGON
// =============================================================================

/// Convex polygon left after clipping a triangle.
///
/// Holds `triangle_count + 2` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedPolygon {
    points: [DVec3; MAX_CLIPPED_POINTS],
    len: usize,
}

impl Default for ClippedPolygon {
    fn default() -> Self {
        Self {
            points: [DVec3::ZERO; MAX_CLIPPED_POINTS],
            len: 0,
        }
    }
}

impl ClippedPolygon {
    /// Creates a polygon from up to five points.
    ///
    /// # Panics
    ///
    /// If `points` holds more than `MAX_CLIPPED_POINTS` points.
    pub fn from_points(points: &[DVec3]) -> Self {
        let mut polygon = Self::default();
        for &point in points {
            polygon.push(point);
        }
        polygon
    }

    #[inline]
    fn push(&mut self, point: DVec3) {
        self.points[self.len] = point;
        self.len += 1;
    }

    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of triangles in the fan of this polygon.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.len.saturating_sub(2)
    }
}

// =============================================================================
// CLIPPING
// =============================================================================

/// Clips a triangle into a polygon.
///
/// Walks the edges `(i, i + 1 mod 3)`:
/// - an unclipped start corner is kept, followed by the crossing at the end
///   corner's plane if the end corner is clipped;
/// - a clipped start corner that differs from the end corner yields the
///   crossing at its own plane, then the crossing at the end corner's plane
///   if the end corner is clipped too.
///
/// Returns `None` for a discarded triangle.
///
/// # Panics
///
/// If the point count disagrees with `clip.triangle_count`, which means the
/// classification and the clipping rules are out of sync.
pub fn clip_triangle(
    planes: &ClipPlanes,
    corners: &[DVec3; 3],
    clip: &TriangleClip,
) -> Option<ClippedPolygon> {
    if clip.is_discarded() {
        return None;
    }

    let codes = &clip.codes;
    let mut polygon = ClippedPolygon::default();

    for i in 0..VERTICES_PER_TRIANGLE {
        let j = (i + 1) % VERTICES_PER_TRIANGLE;
        let (start, end) = (corners[i], corners[j]);

        if codes[i] == ClipCode::NotClipped {
            polygon.push(start);
            if codes[j].is_clipped() {
                polygon.push(intersect_plane(start, end, planes.depth_of(codes[j])));
            }
        } else if codes[i] != codes[j] {
            polygon.push(intersect_plane(start, end, planes.depth_of(codes[i])));
            if codes[j].is_clipped() {
                polygon.push(intersect_plane(start, end, planes.depth_of(codes[j])));
            }
        }
    }

    assert_eq!(
        polygon.len(),
        2 + clip.triangle_count,
        "clipped polygon size does not match classification {:?}",
        codes
    );

    Some(polygon)
}

// =============================================================================
// TESTS
// =============================================================================

//! # Plane Intersection
//!
//! Where an edge crosses a clipping plane of known depth.

use glam::DVec3;

/// Returns the point of segment `v1 → v2` at depth `z`.
///
/// X and Y are interpolated; Z is set to `z` exactly rather than recomputed,
/// so the point lies on the plane bit for bit. The endpoints must differ in
/// depth.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_import::clip::intersect_plane;
///
/// let p = intersect_plane(DVec3::new(0.0, 0.0, -1.0), DVec3::new(4.0, 2.0, -5.0), -3.0);
/// assert_eq!(p, DVec3::new(2.0, 1.0, -3.0));
/// ```
#[inline]
pub fn intersect_plane(v1: DVec3, v2: DVec3, z: f64) -> DVec3 {
    let d = v2 - v1;
    let t = (z - v1.z) / d.z;
    DVec3::new(v1.x + t * d.x, v1.y + t * d.y, z)
}

//! # Triangle Fan Emitter
//!
//! Fans a clipped polygon from its first point into world-space triangles
//! appended to a [`LoaderState`].

use crate::clip::ClippedPolygon;
use crate::state::LoaderState;
use config::constants::MAX_CLIPPED_POINTS;
use glam::{DMat4, DVec3};

/// Corner indices of the fan over `point_count` points: `(0, i + 1, i + 2)`.
///
/// ## Example
///
/// ```rust
/// use mesh_import::fan::fan_indices;
///
/// let fan: Vec<_> = fan_indices(5).collect();
/// assert_eq!(fan, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
/// ```
pub fn fan_indices(point_count: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..point_count.saturating_sub(2)).map(|i| [0, i + 1, i + 2])
}

/// Emits the fan of `polygon` into `state`.
///
/// Every point is moved to world space with `world` before the triangles are
/// formed, so normals, bounding box and edge lengths are all post-transform.
/// Returns the number of triangles emitted.
pub fn emit_fan(state: &mut LoaderState, polygon: &ClippedPolygon, world: &DMat4) -> usize {
    let mut points = [DVec3::ZERO; MAX_CLIPPED_POINTS];
    for (dst, src) in points.iter_mut().zip(polygon.points()) {
        *dst = world.transform_point3(*src);
    }

    let mut emitted = 0;
    for [a, b, c] in fan_indices(polygon.len()) {
        state.add_triangle(points[a], points[b], points[c]);
        emitted += 1;
    }
    emitted
}

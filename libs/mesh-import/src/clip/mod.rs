//! # Near/Far Clipping
//!
//! Classifies triangles against the near and far planes and cuts the
//! partially visible ones into convex polygons.
//!
//! ## Module Structure
//!
//! - `classify` - Per-vertex clip codes and predicted triangle counts
//! - `intersect` - Edge/plane crossing at a known depth
//! - `polygon` - Edge walk producing the clipped polygon

pub mod classify;
pub mod intersect;
pub mod polygon;

pub use classify::{classify_depth, classify_triangle, ClipCode, TriangleClip};
pub use intersect::intersect_plane;
pub use polygon::{clip_triangle, ClippedPolygon};

use glam::DVec3;
use render_snapshot::{RenderFace, RenderMesh, ViewFrustum};

// =============================================================================
// CLIP PLANES
// =============================================================================

/// Depths of the near and far planes in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    pub near: f64,
    pub far: f64,
}

impl ClipPlanes {
    pub fn new(near: f64, far: f64) -> Self {
        Self { near, far }
    }

    /// Depth of the plane that clipped a vertex.
    ///
    /// Meant for clipped codes; anything but `Near` maps to the far plane.
    #[inline]
    pub fn depth_of(&self, code: ClipCode) -> f64 {
        if code == ClipCode::Near {
            self.near
        } else {
            self.far
        }
    }
}

impl From<&ViewFrustum> for ClipPlanes {
    fn from(frustum: &ViewFrustum) -> Self {
        Self::new(frustum.near(), frustum.far())
    }
}

// =============================================================================
// FACE CLASSIFICATION CACHE
// =============================================================================

/// A source triangle with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedTriangle {
    pub corners: [DVec3; 3],
    pub clip: TriangleClip,
}

impl ClassifiedTriangle {
    pub fn new(planes: &ClipPlanes, corners: [DVec3; 3]) -> Self {
        Self {
            clip: classify_triangle(planes, &corners),
            corners,
        }
    }

    /// Clips the triangle; `None` if it is discarded.
    pub fn clip(&self, planes: &ClipPlanes) -> Option<ClippedPolygon> {
        clip_triangle(planes, &self.corners, &self.clip)
    }
}

/// Classification of a face, computed once and reused for buffer sizing and
/// emission.
///
/// A quad holds both of its triangles, each classified independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceClip {
    pub first: ClassifiedTriangle,
    pub second: Option<ClassifiedTriangle>,
}

impl FaceClip {
    /// Classifies a face of `mesh`.
    ///
    /// The face's vertex indices must be valid for the mesh.
    pub fn classify(planes: &ClipPlanes, mesh: &RenderMesh, face: &RenderFace) -> Self {
        let corners = |[a, b, c]: [u32; 3]| [mesh.vertex(a), mesh.vertex(b), mesh.vertex(c)];
        let (first, second) = face.triangles();
        Self {
            first: ClassifiedTriangle::new(planes, corners(first)),
            second: second.map(|tri| ClassifiedTriangle::new(planes, corners(tri))),
        }
    }

    /// Total triangles this face contributes.
    pub fn triangle_count(&self) -> usize {
        self.halves().map(|half| half.clip.triangle_count).sum()
    }

    /// The face's triangles in source order.
    pub fn halves(&self) -> impl Iterator<Item = &ClassifiedTriangle> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planes_from_frustum() {
        let frustum = ViewFrustum::new(-0.1, -100.0).unwrap();
        let planes = ClipPlanes::from(&frustum);
        assert_eq!(planes, ClipPlanes::new(-0.1, -100.0));
    }

    #[test]
    fn test_depth_of() {
        let planes = ClipPlanes::new(-1.0, -10.0);
        assert_eq!(planes.depth_of(ClipCode::Near), -1.0);
        assert_eq!(planes.depth_of(ClipCode::Far), -10.0);
    }

    #[test]
    fn test_quad_halves_classified_independently() {
        let planes = ClipPlanes::new(-1.0, -10.0);
        let mesh = RenderMesh::new(
            "Quad",
            vec![
                DVec3::new(0.0, 0.0, -5.0),
                DVec3::new(1.0, 0.0, -5.0),
                DVec3::new(1.0, 1.0, -5.0),
                DVec3::new(0.0, 1.0, -20.0),
            ],
            vec![RenderFace::quad(0, 1, 2, 3)],
        );
        let clip = FaceClip::classify(&planes, &mesh, &mesh.faces[0]);
        assert_eq!(clip.first.clip.triangle_count, 1);
        assert_eq!(clip.second.map(|s| s.clip.triangle_count), Some(2));
        assert_eq!(clip.triangle_count(), 3);
        assert_eq!(clip.halves().count(), 2);
    }

    #[test]
    fn test_triangle_face_has_one_half() {
        let planes = ClipPlanes::new(-1.0, -10.0);
        let mesh = RenderMesh::new(
            "Tri",
            vec![DVec3::new(0.0, 0.0, -5.0), DVec3::new(1.0, 0.0, -5.0), DVec3::new(0.0, 1.0, -5.0)],
            vec![RenderFace::triangle(0, 1, 2)],
        );
        let clip = FaceClip::classify(&planes, &mesh, &mesh.faces[0]);
        assert!(clip.second.is_none());
        assert_eq!(clip.halves().count(), 1);
        assert_eq!(clip.triangle_count(), 1);
    }
}

//! # Clip Classification
//!
//! Per-vertex clip codes and the triangle count a clipped triangle fans into.

use super::ClipPlanes;
use config::constants::{CLIPPED_BY_FAR, CLIPPED_BY_NEAR, NOT_CLIPPED};
use glam::DVec3;

// =============================================================================
// CLIP CODE
// =============================================================================

/// Position of a vertex relative to the near and far planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ClipCode {
    /// In front of the near plane.
    Near = CLIPPED_BY_NEAR,
    /// Between the planes, inclusive.
    NotClipped = NOT_CLIPPED,
    /// Behind the far plane.
    Far = CLIPPED_BY_FAR,
}

impl ClipCode {
    /// All codes, in ascending value.
    pub const ALL: [ClipCode; 3] = [ClipCode::Near, ClipCode::NotClipped, ClipCode::Far];

    /// Signed value: near is -1, far is +1.
    #[inline]
    pub fn value(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn is_clipped(self) -> bool {
        self != ClipCode::NotClipped
    }
}

/// Classifies a depth against the planes.
///
/// A depth exactly on a plane is not clipped.
#[inline]
pub fn classify_depth(planes: &ClipPlanes, depth: f64) -> ClipCode {
    if depth > planes.near {
        ClipCode::Near
    } else if depth < planes.far {
        ClipCode::Far
    } else {
        ClipCode::NotClipped
    }
}

// =============================================================================
// TRIANGLE CLASSIFICATION
// =============================================================================

/// Clip codes of a triangle's corners and the number of triangles its
/// clipped polygon fans into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleClip {
    pub codes: [ClipCode; 3],
    pub triangle_count: usize,
}

impl TriangleClip {
    /// Builds the classification from corner codes.
    ///
    /// | clipped | signed sum | triangles |
    /// |---------|------------|-----------|
    /// | 0       | 0          | 1         |
    /// | 1       | ±1         | 2         |
    /// | 2       | 0          | 3         |
    /// | 2       | ±2         | 1         |
    /// | 3       | ±3         | 0         |
    /// | 3       | ±1         | 2         |
    pub fn from_codes(codes: [ClipCode; 3]) -> Self {
        let clipped = codes.iter().filter(|c| c.is_clipped()).count();
        let sum: i32 = codes.iter().map(|c| c.value()).sum();

        let triangle_count = match (clipped, sum) {
            (0, _) => 1,
            (1, _) => 2,
            (2, 0) => 3,
            (2, _) => 1,
            (_, 3) | (_, -3) => 0,
            // three clipped, mixed planes
            _ => 2,
        };

        Self {
            codes,
            triangle_count,
        }
    }

    /// Number of corners outside the planes.
    pub fn clipped_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_clipped()).count()
    }

    /// Returns true if nothing of the triangle survives.
    #[inline]
    pub fn is_discarded(&self) -> bool {
        self.triangle_count == 0
    }
}

/// Classifies the corners of a camera-space triangle.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_import::clip::{classify_triangle, ClipPlanes};
///
/// let planes = ClipPlanes::new(-1.0, -10.0);
/// let clip = classify_triangle(&planes, &[
///     DVec3::new(0.0, 0.0, -5.0),
///     DVec3::new(1.0, 0.0, -5.0),
///     DVec3::new(0.0, 1.0, -20.0),
/// ]);
/// assert_eq!(clip.triangle_count, 2);
/// ```
pub fn classify_triangle(planes: &ClipPlanes, corners: &[DVec3; 3]) -> TriangleClip {
    TriangleClip::from_codes(corners.map(|v| classify_depth(planes, v.z)))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PLANES: ClipPlanes = ClipPlanes {
        near: -1.0,
        far: -10.0,
    };

    fn depth_for(code: ClipCode) -> f64 {
        match code {
            ClipCode::Near => -0.5,
            ClipCode::NotClipped => -5.0,
            ClipCode::Far => -20.0,
        }
    }

    /// Reference table written out per case.
    fn expected_count(codes: [ClipCode; 3]) -> usize {
        let near = codes.iter().filter(|&&c| c == ClipCode::Near).count();
        let far = codes.iter().filter(|&&c| c == ClipCode::Far).count();
        match (near, far) {
            (0, 0) => 1,
            (1, 0) | (0, 1) => 2,
            (1, 1) => 3,
            (2, 0) | (0, 2) => 1,
            (3, 0) | (0, 3) => 0,
            (2, 1) | (1, 2) => 2,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_classify_depth() {
        assert_eq!(classify_depth(&PLANES, -0.5), ClipCode::Near);
        assert_eq!(classify_depth(&PLANES, -5.0), ClipCode::NotClipped);
        assert_eq!(classify_depth(&PLANES, -20.0), ClipCode::Far);
    }

    #[test]
    fn test_depth_on_plane_is_kept() {
        assert_eq!(classify_depth(&PLANES, -1.0), ClipCode::NotClipped);
        assert_eq!(classify_depth(&PLANES, -10.0), ClipCode::NotClipped);
    }

    #[test]
    fn test_code_values() {
        assert_eq!(ClipCode::Near.value(), -1);
        assert_eq!(ClipCode::NotClipped.value(), 0);
        assert_eq!(ClipCode::Far.value(), 1);
    }

    #[test]
    fn test_all_27_combinations() {
        for a in ClipCode::ALL {
            for b in ClipCode::ALL {
                for c in ClipCode::ALL {
                    let corners = [
                        DVec3::new(0.0, 0.0, depth_for(a)),
                        DVec3::new(1.0, 0.0, depth_for(b)),
                        DVec3::new(0.0, 1.0, depth_for(c)),
                    ];
                    let clip = classify_triangle(&PLANES, &corners);
                    assert_eq!(clip.codes, [a, b, c]);
                    assert_eq!(
                        clip.triangle_count,
                        expected_count([a, b, c]),
                        "codes {:?}",
                        [a, b, c]
                    );
                }
            }
        }
    }

    #[test]
    fn test_pentagon_case() {
        let clip = TriangleClip::from_codes([ClipCode::Near, ClipCode::Far, ClipCode::NotClipped]);
        assert_eq!(clip.clipped_count(), 2);
        assert_eq!(clip.triangle_count, 3);
    }

    #[test]
    fn test_same_plane_discard() {
        let near = TriangleClip::from_codes([ClipCode::Near; 3]);
        let far = TriangleClip::from_codes([ClipCode::Far; 3]);
        assert!(near.is_discarded());
        assert!(far.is_discarded());
    }

    #[test]
    fn test_three_clipped_mixed_is_kept() {
        let clip = TriangleClip::from_codes([ClipCode::Far, ClipCode::Near, ClipCode::Near]);
        assert_eq!(clip.triangle_count, 2);
        assert!(!clip.is_discarded());
    }
}

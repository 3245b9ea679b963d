//! # View Frustum
//!
//! Near/far depths and projection-plane extents shared by the import run.
//!
//! The camera looks down the negative Z axis, so both depths are `<= 0` and
//! the near depth is the larger of the two.

use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};

/// Projection-plane extents.
///
/// Part of the shared view context; the importer does not clip against them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewplane {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// View frustum parameters in camera space.
///
/// Deserialization goes through [`ViewFrustum::new`], so fixtures are held
/// to the same depth checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrustumFields")]
pub struct ViewFrustum {
    near: f64,
    far: f64,
    viewplane: Viewplane,
}

/// Unchecked serialized form of [`ViewFrustum`].
#[derive(Deserialize)]
struct FrustumFields {
    near: f64,
    far: f64,
    #[serde(default)]
    viewplane: Viewplane,
}

impl TryFrom<FrustumFields> for ViewFrustum {
    type Error = SnapshotError;

    fn try_from(fields: FrustumFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.near, fields.far)?.with_viewplane(fields.viewplane))
    }
}

impl ViewFrustum {
    /// Creates a frustum from camera-space depths.
    ///
    /// ## Parameters
    ///
    /// - `near`: depth of the near plane (`<= 0`)
    /// - `far`: depth of the far plane (strictly below `near`)
    ///
    /// ## Example
    ///
    /// ```rust
    /// use render_snapshot::ViewFrustum;
    ///
    /// let frustum = ViewFrustum::new(-0.1, -100.0).unwrap();
    /// assert_eq!(frustum.near(), -0.1);
    /// assert!(ViewFrustum::new(-100.0, -0.1).is_err());
    /// ```
    pub fn new(near: f64, far: f64) -> Result<Self, SnapshotError> {
        // Written so that NaN depths are rejected too.
        if !(near <= 0.0 && far < near) {
            return Err(SnapshotError::InvalidFrustum { near, far });
        }
        Ok(Self {
            near,
            far,
            viewplane: Viewplane::default(),
        })
    }

    /// Creates a frustum from positive clip distances.
    ///
    /// Renderers usually store `clip_start`/`clip_end` as distances from the
    /// eye; the depths are their negations.
    pub fn from_clip_distances(clip_start: f64, clip_end: f64) -> Result<Self, SnapshotError> {
        Self::new(-clip_start, -clip_end)
    }

    /// Attaches projection-plane extents.
    pub fn with_viewplane(mut self, viewplane: Viewplane) -> Self {
        self.viewplane = viewplane;
        self
    }

    /// Depth of the near plane.
    #[inline]
    pub fn near(&self) -> f64 {
        self.near
    }

    /// Depth of the far plane.
    #[inline]
    pub fn far(&self) -> f64 {
        self.far
    }

    /// Projection-plane extents.
    #[inline]
    pub fn viewplane(&self) -> &Viewplane {
        &self.viewplane
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Scene Visitors
//!
//! Depth-first traversal hooks, plus two visitors used by consumers of an
//! imported scene.

use crate::bbox::BBox;
use crate::face_set::IndexedFaceSet;
use crate::node::{NodeGroup, NodeShape, NodeTransform};
use glam::DMat4;

/// Callbacks invoked while walking a scene graph.
///
/// Every method defaults to a no-op.
pub trait SceneVisitor<'a> {
    fn visit_group(&mut self, _group: &'a NodeGroup) {}

    /// Called before the children of a transform.
    fn enter_transform(&mut self, _transform: &'a NodeTransform) {}

    /// Called after the children of a transform.
    fn leave_transform(&mut self, _transform: &'a NodeTransform) {}

    fn visit_shape(&mut self, _shape: &'a NodeShape) {}

    fn visit_face_set(&mut self, _face_set: &'a IndexedFaceSet) {}
}

// =============================================================================
// BOUNDING BOX
// =============================================================================

/// Accumulates the bounding box of every face set, in root coordinates.
///
/// # Example
///
/// ```rust
/// use scene_graph::{BBoxVisitor, NodeGroup};
///
/// let root = NodeGroup::new();
/// let mut visitor = BBoxVisitor::new();
/// root.accept(&mut visitor);
/// assert!(visitor.bbox().is_none());
/// ```
#[derive(Debug, Default)]
pub struct BBoxVisitor {
    matrices: Vec<DMat4>,
    bbox: Option<BBox>,
}

impl BBoxVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box over all visited face sets, or `None` if none had a box.
    pub fn bbox(&self) -> Option<BBox> {
        self.bbox
    }

    fn current(&self) -> DMat4 {
        self.matrices.last().copied().unwrap_or(DMat4::IDENTITY)
    }
}

impl<'a> SceneVisitor<'a> for BBoxVisitor {
    fn enter_transform(&mut self, transform: &'a NodeTransform) {
        let matrix = self.current() * *transform.matrix();
        self.matrices.push(matrix);
    }

    fn leave_transform(&mut self, _transform: &'a NodeTransform) {
        self.matrices.pop();
    }

    fn visit_face_set(&mut self, face_set: &'a IndexedFaceSet) {
        if let Some(local) = face_set.bbox() {
            let placed = local.transformed(&self.current());
            self.bbox = Some(match self.bbox {
                Some(bbox) => bbox.union(&placed),
                None => placed,
            });
        }
    }
}

// =============================================================================
// SHAPE COLLECTOR
// =============================================================================

/// Collects face sets in traversal order.
#[derive(Debug, Default)]
pub struct ShapeCollector<'a> {
    face_sets: Vec<&'a IndexedFaceSet>,
}

impl<'a> ShapeCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face_sets(&self) -> &[&'a IndexedFaceSet] {
        &self.face_sets
    }

    pub fn into_face_sets(self) -> Vec<&'a IndexedFaceSet> {
        self.face_sets
    }
}

impl<'a> SceneVisitor<'a> for ShapeCollector<'a> {
    fn visit_face_set(&mut self, face_set: &'a IndexedFaceSet) {
        self.face_sets.push(face_set);
    }
}

// =============================================================================
// TESTS
// =============================================================================

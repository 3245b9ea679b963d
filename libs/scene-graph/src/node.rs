//! # Scene Nodes
//!
//! Group, Transform and Shape nodes. A node owns its children.

use crate::face_set::IndexedFaceSet;
use crate::material::Material;
use crate::visitor::SceneVisitor;
use glam::{DMat4, DVec3};

/// A node of the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(NodeGroup),
    Transform(NodeTransform),
    Shape(NodeShape),
}

impl Node {
    /// Walks this node and its descendants depth-first.
    pub fn accept<'a, V: SceneVisitor<'a>>(&'a self, visitor: &mut V) {
        match self {
            Node::Group(group) => group.accept(visitor),
            Node::Transform(transform) => {
                visitor.enter_transform(transform);
                for child in &transform.children {
                    child.accept(visitor);
                }
                visitor.leave_transform(transform);
            }
            Node::Shape(shape) => {
                visitor.visit_shape(shape);
                for rep in &shape.reps {
                    visitor.visit_face_set(rep);
                }
            }
        }
    }
}

impl From<NodeGroup> for Node {
    fn from(group: NodeGroup) -> Self {
        Node::Group(group)
    }
}

impl From<NodeTransform> for Node {
    fn from(transform: NodeTransform) -> Self {
        Node::Transform(transform)
    }
}

impl From<NodeShape> for Node {
    fn from(shape: NodeShape) -> Self {
        Node::Shape(shape)
    }
}

// =============================================================================
// GROUP
// =============================================================================

/// A node grouping children; the scene root is a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeGroup {
    children: Vec<Node>,
}

impl NodeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Walks the group and its descendants depth-first.
    pub fn accept<'a, V: SceneVisitor<'a>>(&'a self, visitor: &mut V) {
        visitor.visit_group(self);
        for child in &self.children {
            child.accept(visitor);
        }
    }
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// A node placing its children with a matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTransform {
    matrix: DMat4,
    children: Vec<Node>,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl NodeTransform {
    pub fn new(matrix: DMat4) -> Self {
        Self {
            matrix,
            children: Vec::new(),
        }
    }

    /// Creates a transform that leaves its children in place.
    pub fn identity() -> Self {
        Self::new(DMat4::IDENTITY)
    }

    /// Post-multiplies a translation.
    pub fn translate(&mut self, offset: DVec3) {
        self.matrix *= DMat4::from_translation(offset);
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    #[inline]
    pub fn matrix(&self) -> &DMat4 {
        &self.matrix
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// A leaf node holding face sets and a material.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeShape {
    material: Material,
    reps: Vec<IndexedFaceSet>,
}

impl NodeShape {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            reps: Vec::new(),
        }
    }

    /// Appends a face set.
    pub fn add_rep(&mut self, rep: IndexedFaceSet) {
        self.reps.push(rep);
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[inline]
    pub fn reps(&self) -> &[IndexedFaceSet] {
        &self.reps
    }
}

// =============================================================================
// TESTS
// =============================================================================

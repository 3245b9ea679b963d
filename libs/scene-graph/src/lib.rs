//! # Scene Graph
//!
//! Output model of the face-set importer: a tree of Group, Transform and
//! Shape nodes whose shapes hold immutable indexed face sets.
//!
//! ## Architecture
//!
//! ```text
//! NodeGroup (root)
//!   └─ NodeTransform (identity)
//!        └─ NodeShape (material)
//!             └─ IndexedFaceSet (vertices, normals, index arrays, bbox, id)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use scene_graph::{NodeGroup, NodeShape, NodeTransform};
//!
//! let mut transform = NodeTransform::identity();
//! transform.add_child(NodeShape::default());
//!
//! let mut root = NodeGroup::new();
//! root.add_child(transform);
//! assert_eq!(root.child_count(), 1);
//! ```

pub mod bbox;
pub mod error;
pub mod face_set;
pub mod material;
pub mod node;
pub mod visitor;

pub use bbox::BBox;
pub use error::SceneError;
pub use face_set::{FaceStyle, Id, IndexedFaceSet};
pub use material::Material;
pub use node::{Node, NodeGroup, NodeShape, NodeTransform};
pub use visitor::{BBoxVisitor, SceneVisitor, ShapeCollector};

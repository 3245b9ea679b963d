//! # Render Snapshot
//!
//! Read-only input model for the face-set importer: what a renderer has
//! resolved for one frame, in camera space.
//!
//! ## Architecture
//!
//! ```text
//! renderer → render-snapshot (SceneSnapshot) → mesh-import → scene-graph
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use render_snapshot::{ObjectInstance, RenderFace, RenderMesh, SceneSnapshot};
//! use std::sync::Arc;
//!
//! let mesh = RenderMesh::new(
//!     "Tri",
//!     vec![DVec3::new(0.0, 0.0, -5.0), DVec3::new(1.0, 0.0, -5.0), DVec3::new(0.0, 1.0, -5.0)],
//!     vec![RenderFace::triangle(0, 1, 2)],
//! );
//! let mut snapshot = SceneSnapshot::new();
//! snapshot.add_instance(ObjectInstance::new(Arc::new(mesh)));
//! assert_eq!(snapshot.instances.len(), 1);
//! ```

pub mod error;
pub mod frustum;
pub mod material;
pub mod mesh;
pub mod snapshot;

pub use error::SnapshotError;
pub use frustum::{ViewFrustum, Viewplane};
pub use material::{MaterialId, RenderMaterial};
pub use mesh::{FaceVertices, RenderFace, RenderMesh};
pub use snapshot::{ObjectInstance, SceneSnapshot};

//! # Mesh Import
//!
//! Converts the camera-space render meshes of a scene snapshot into clipped,
//! deduplicated indexed face sets for silhouette extraction.
//!
//! ## Architecture
//!
//! ```text
//! render-snapshot (SceneSnapshot) → mesh-import → scene-graph (NodeGroup)
//! ```
//!
//! ## Algorithms
//!
//! - **Clipping**: per-vertex near/far codes, closed triangle-count table,
//!   edge walk producing 3 to 5 points
//! - **Triangulation**: fan from the first clipped point, flat normals
//! - **Materials**: per-mesh palette with value lookup
//! - **Dedup**: pluggable [`VertexCleaner`], exact by default
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_import::import_scene;
//! use render_snapshot::{ObjectInstance, RenderFace, RenderMesh, SceneSnapshot, ViewFrustum};
//! use std::sync::Arc;
//!
//! // A quad whose last corner lies behind the far plane
//! let mesh = RenderMesh::new(
//!     "Plane",
//!     vec![
//!         DVec3::new(0.0, 0.0, -5.0),
//!         DVec3::new(1.0, 0.0, -5.0),
//!         DVec3::new(1.0, 1.0, -5.0),
//!         DVec3::new(0.0, 1.0, -20.0),
//!     ],
//!     vec![RenderFace::quad(0, 1, 2, 3)],
//! );
//! let mut snapshot = SceneSnapshot::new();
//! snapshot.add_instance(ObjectInstance::new(Arc::new(mesh)));
//!
//! let scene = import_scene(&snapshot, ViewFrustum::new(-1.0, -10.0)?)?;
//! assert_eq!(scene.report.faces_read, 3);
//! # Ok::<(), mesh_import::ImportError>(())
//! ```

pub mod assemble;
pub mod clip;
pub mod dedup;
pub mod error;
pub mod fan;
pub mod loader;
pub mod palette;
pub mod state;

#[cfg(test)]
mod tests;

pub use assemble::assemble_shape;
pub use clip::{ClipCode, ClipPlanes, ClippedPolygon, FaceClip, TriangleClip};
pub use dedup::{CleanedArray, ExactVertexCleaner, VertexCleaner};
pub use error::ImportError;
pub use loader::{ImportReport, ImportedScene, LoaderOptions, SceneLoader};
pub use palette::MaterialPalette;
pub use state::LoaderState;

use render_snapshot::{SceneSnapshot, ViewFrustum};

/// Imports every visible mesh of `snapshot` with default options.
///
/// Shorthand for `SceneLoader::new(snapshot, frustum).load()`.
pub fn import_scene(
    snapshot: &SceneSnapshot,
    frustum: ViewFrustum,
) -> Result<ImportedScene, ImportError> {
    SceneLoader::new(snapshot, frustum).load()
}

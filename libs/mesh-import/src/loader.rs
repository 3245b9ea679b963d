//! # Scene Loader
//!
//! Walks a [`SceneSnapshot`] and adds one `Transform → Shape` subtree per
//! visible mesh that keeps at least one triangle after clipping.
//!
//! ## Pipeline per mesh
//!
//! ```text
//! validate → classify faces (cached) → size buffers → clip → fan → dedup → assemble
//! ```

use crate::assemble::assemble_shape;
use crate::clip::{ClipPlanes, FaceClip};
use crate::dedup::{ExactVertexCleaner, VertexCleaner};
use crate::error::ImportError;
use crate::fan::emit_fan;
use crate::palette::{material_from_render, MaterialPalette};
use crate::state::LoaderState;
use config::constants::{ALL_LAYERS, MAX_INDEXED_TRIANGLES, MAX_TRIANGLES};
use rayon::prelude::*;
use render_snapshot::{ObjectInstance, SceneSnapshot, ViewFrustum};
use scene_graph::{Id, NodeGroup, NodeTransform};
use serde::{Deserialize, Serialize};

// =============================================================================
// OPTIONS
// =============================================================================

/// Runtime options of an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderOptions {
    /// Layers rendered in this pass.
    pub render_layers: u32,
    /// Build meshes on the rayon pool.
    pub parallel: bool,
    /// Upper bound on the kept triangles of a single mesh, capped to
    /// `MAX_INDEXED_TRIANGLES` when applied.
    pub max_triangles: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            render_layers: ALL_LAYERS,
            parallel: false,
            max_triangles: MAX_TRIANGLES,
        }
    }
}

impl LoaderOptions {
    pub fn with_render_layers(mut self, layers: u32) -> Self {
        self.render_layers = layers;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_triangles(mut self, max: usize) -> Self {
        self.max_triangles = max;
        self
    }

    /// The per-mesh limit actually enforced.
    #[inline]
    pub fn triangle_limit(&self) -> usize {
        self.max_triangles.min(MAX_INDEXED_TRIANGLES)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Counters gathered over an import run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportReport {
    /// Triangles emitted across all shapes.
    pub faces_read: usize,
    /// Shortest emitted edge over the whole run, `f64::MAX` if none.
    pub min_edge_length: f64,
    pub shapes_added: usize,
    /// Instances outside the rendered layers.
    pub hidden_objects: usize,
    /// Visible instances whose mesh has no faces.
    pub faceless_objects: usize,
    /// Visible instances whose faces were all clipped away.
    pub clipped_objects: usize,
}

impl Default for ImportReport {
    fn default() -> Self {
        Self {
            faces_read: 0,
            min_edge_length: f64::MAX,
            shapes_added: 0,
            hidden_objects: 0,
            faceless_objects: 0,
            clipped_objects: 0,
        }
    }
}

/// Root of the imported scene and the run's counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedScene {
    pub root: NodeGroup,
    pub report: ImportReport,
}

/// A visible instance queued for building, with its identity.
struct MeshJob<'s> {
    instance: &'s ObjectInstance,
    id: Id,
}

/// What building one mesh produced.
struct MeshOutcome {
    node: Option<NodeTransform>,
    triangles: usize,
    min_edge_length: f64,
}

// =============================================================================
// LOADER
// =============================================================================

/// Imports the meshes of a snapshot as clipped indexed face sets.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_import::SceneLoader;
/// use render_snapshot::{ObjectInstance, RenderFace, RenderMesh, SceneSnapshot, ViewFrustum};
/// use std::sync::Arc;
///
/// let mesh = RenderMesh::new(
///     "Tri",
///     vec![DVec3::new(0.0, 0.0, -5.0), DVec3::new(1.0, 0.0, -5.0), DVec3::new(0.0, 1.0, -5.0)],
///     vec![RenderFace::triangle(0, 1, 2)],
/// );
/// let mut snapshot = SceneSnapshot::new();
/// snapshot.add_instance(ObjectInstance::new(Arc::new(mesh)));
///
/// let frustum = ViewFrustum::new(-1.0, -10.0).unwrap();
/// let scene = SceneLoader::new(&snapshot, frustum).load().unwrap();
/// assert_eq!(scene.root.child_count(), 1);
/// assert_eq!(scene.report.faces_read, 1);
/// ```
pub struct SceneLoader<'s, C = ExactVertexCleaner> {
    snapshot: &'s SceneSnapshot,
    frustum: ViewFrustum,
    options: LoaderOptions,
    cleaner: C,
}

impl<'s> SceneLoader<'s> {
    /// Creates a loader with default options and exact deduplication.
    pub fn new(snapshot: &'s SceneSnapshot, frustum: ViewFrustum) -> Self {
        Self {
            snapshot,
            frustum,
            options: LoaderOptions::default(),
            cleaner: ExactVertexCleaner,
        }
    }
}

impl<'s, C: VertexCleaner> SceneLoader<'s, C> {
    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the deduplication strategy.
    pub fn with_cleaner<D: VertexCleaner>(self, cleaner: D) -> SceneLoader<'s, D> {
        SceneLoader {
            snapshot: self.snapshot,
            frustum: self.frustum,
            options: self.options,
            cleaner,
        }
    }

    #[inline]
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Runs the import.
    ///
    /// Shapes are appended to the root in snapshot order. Identity values
    /// count visible instances with faces from 1; an instance whose faces are
    /// all clipped keeps its value but adds no node.
    ///
    /// ## Errors
    ///
    /// - [`ImportError::Snapshot`] if a face refers to a missing vertex or
    ///   material
    /// - [`ImportError::TooManyTriangles`] if a mesh exceeds
    ///   [`LoaderOptions::triangle_limit`]
    pub fn load(&self) -> Result<ImportedScene, ImportError> {
        log::info!("Importing triangular meshes into scene graph");
        log::debug!(
            "Frustum: near {} far {}",
            self.frustum.near(),
            self.frustum.far()
        );

        let mut report = ImportReport::default();
        let jobs = self.collect_jobs(&mut report);

        let outcomes = if self.options.parallel {
            jobs.par_iter()
                .map(|job| self.build_mesh(job))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            jobs.iter()
                .map(|job| self.build_mesh(job))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut root = NodeGroup::new();
        for outcome in outcomes {
            report.faces_read += outcome.triangles;
            report.min_edge_length = report.min_edge_length.min(outcome.min_edge_length);
            match outcome.node {
                Some(node) => {
                    root.add_child(node);
                    report.shapes_added += 1;
                }
                None => report.clipped_objects += 1,
            }
        }

        log::info!(
            "Imported {} shapes, {} faces read, minimum edge length {}",
            report.shapes_added,
            report.faces_read,
            report.min_edge_length
        );

        Ok(ImportedScene { root, report })
    }

    /// Filters instances and assigns identity values.
    fn collect_jobs(&self, report: &mut ImportReport) -> Vec<MeshJob<'s>> {
        let snapshot = self.snapshot;
        let mut jobs = Vec::with_capacity(snapshot.instances.len());
        let mut next_id = 0;

        for instance in &snapshot.instances {
            if !instance.is_visible(snapshot.layers, self.options.render_layers) {
                report.hidden_objects += 1;
                continue;
            }

            if instance.mesh.faces.is_empty() {
                log::info!(
                    "Object '{}' has no faces: only face-based shapes are supported",
                    instance.mesh.name
                );
                report.faceless_objects += 1;
                continue;
            }

            next_id += 1;
            jobs.push(MeshJob {
                instance,
                id: Id::new(next_id, 0),
            });
        }

        jobs
    }

    /// Clips, emits and assembles one mesh.
    fn build_mesh(&self, job: &MeshJob<'_>) -> Result<MeshOutcome, ImportError> {
        let mesh = job.instance.mesh.as_ref();
        mesh.validate(self.snapshot.materials.len())?;

        let planes = ClipPlanes::from(&self.frustum);
        let clips: Vec<FaceClip> = mesh
            .faces
            .iter()
            .map(|face| FaceClip::classify(&planes, mesh, face))
            .collect();

        let total: usize = clips.iter().map(FaceClip::triangle_count).sum();
        let limit = self.options.triangle_limit();
        if total > limit {
            return Err(ImportError::too_many_triangles(&mesh.name, total, limit));
        }
        if total == 0 {
            log::debug!("Object '{}' is entirely clipped", mesh.name);
            return Ok(MeshOutcome {
                node: None,
                triangles: 0,
                min_edge_length: f64::MAX,
            });
        }

        let world = job.instance.world_transform();
        let mut state = LoaderState::with_capacity(total);
        let mut palette = MaterialPalette::new();

        for (face, clip) in mesh.faces.iter().zip(&clips) {
            if clip.triangle_count() == 0 {
                continue;
            }

            let material =
                material_from_render(face.material.and_then(|id| self.snapshot.material(id)));
            state.set_current_material(palette.index_of(material));

            for half in clip.halves() {
                if let Some(polygon) = half.clip(&planes) {
                    emit_fan(&mut state, &polygon, &world);
                }
            }
        }

        let triangles = state.triangle_count();
        let min_edge_length = state.min_edge_length();
        debug_assert_eq!(triangles, total);

        Ok(MeshOutcome {
            node: assemble_shape(state, palette, job.id, &self.cleaner),
            triangles,
            min_edge_length,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

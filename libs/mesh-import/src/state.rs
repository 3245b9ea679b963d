//! # Loader State
//!
//! Per-mesh accumulator filled by the fan emitter: flat position and normal
//! buffers, the three index buffers, the running bounding box and the
//! shortest edge seen.

use config::constants::VERTICES_PER_TRIANGLE;
use glam::DVec3;
use scene_graph::BBox;

/// Accumulated output of one mesh.
///
/// Buffer lengths act as the write cursors: every emitted corner gets the
/// next free index, shared by its position and its normal.
#[derive(Debug, Clone)]
pub struct LoaderState {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    vertex_indices: Vec<u32>,
    normal_indices: Vec<u32>,
    material_indices: Vec<u32>,
    bbox: Option<BBox>,
    min_edge_length: f64,
    current_material: u32,
}

impl Default for LoaderState {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl LoaderState {
    /// Creates a state with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        let corners = triangle_count * VERTICES_PER_TRIANGLE;
        Self {
            vertices: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
            vertex_indices: Vec::with_capacity(corners),
            normal_indices: Vec::with_capacity(corners),
            material_indices: Vec::with_capacity(corners),
            bbox: None,
            min_edge_length: f64::MAX,
            current_material: 0,
        }
    }

    /// Sets the material index given to the following corners.
    #[inline]
    pub fn set_current_material(&mut self, index: u32) {
        self.current_material = index;
    }

    #[inline]
    pub fn current_material(&self) -> u32 {
        self.current_material
    }

    /// Appends a flat-shaded triangle given in world space.
    ///
    /// The normal is `normalize((p0 - p1) × (p0 - p2))`, shared by the three
    /// corners. Degenerate triangles give a non-finite normal.
    pub fn add_triangle(&mut self, p0: DVec3, p1: DVec3, p2: DVec3) {
        let normal = (p0 - p1).cross(p0 - p2).normalize();
        let corners = [p0, p1, p2];

        for (k, &corner) in corners.iter().enumerate() {
            // The loader caps a mesh at MAX_INDEXED_TRIANGLES
            let index = self.vertices.len() as u32;

            self.vertices.push(corner);
            self.normals.push(normal);

            self.bbox
                .get_or_insert_with(|| BBox::from_point(corner))
                .extend(corner);

            let next = corners[(k + 1) % VERTICES_PER_TRIANGLE];
            self.min_edge_length = self.min_edge_length.min(corner.distance(next));

            self.vertex_indices.push(index);
            self.normal_indices.push(index);
            self.material_indices.push(self.current_material);
        }
    }

    /// Number of triangles emitted so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_indices.len() / VERTICES_PER_TRIANGLE
    }

    /// Bounding box of every emitted corner, `None` before the first one.
    #[inline]
    pub fn bbox(&self) -> Option<BBox> {
        self.bbox
    }

    /// Shortest triangle edge emitted, `f64::MAX` before the first one.
    #[inline]
    pub fn min_edge_length(&self) -> f64 {
        self.min_edge_length
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    #[inline]
    pub fn vertex_indices(&self) -> &[u32] {
        &self.vertex_indices
    }

    #[inline]
    pub fn normal_indices(&self) -> &[u32] {
        &self.normal_indices
    }

    #[inline]
    pub fn material_indices(&self) -> &[u32] {
        &self.material_indices
    }

    /// Consumes the state, returning the material index buffer.
    pub fn into_material_indices(self) -> Vec<u32> {
        self.material_indices
    }
}

// =============================================================================
// TESTS
// =============================================================================

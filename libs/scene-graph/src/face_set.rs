//! # Indexed Face Set
//!
//! Immutable triangle mesh with separate vertex, normal and material index
//! arrays, as consumed by silhouette extraction.

use crate::bbox::BBox;
use crate::error::SceneError;
use crate::material::Material;
use config::constants::VERTICES_PER_TRIANGLE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Identity stamp of a face set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Id {
    pub first: u32,
    pub second: u32,
}

impl Id {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }
}

/// How the corners of a face are connected.
///
/// Imported face sets only hold independent triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceStyle {
    /// Independent triangles.
    Triangles,
}

/// A mesh described by index arrays into shared vertex, normal and
/// material arrays.
///
/// Every face is a triangle: corner `k` of face `f` uses
/// `vertex_indices[3 * f + k]`, `normal_indices[3 * f + k]` and
/// `material_indices[3 * f + k]`.
///
/// Once built the face set is read-only; the `with_*` setters consume it and
/// are meant for construction only.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use scene_graph::{IndexedFaceSet, Material};
///
/// let face_set = IndexedFaceSet::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z],
///     vec![Material::default()],
///     vec![0, 1, 2],
///     vec![0, 0, 0],
///     vec![0, 0, 0],
/// );
/// assert_eq!(face_set.face_count(), 1);
/// assert!(face_set.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedFaceSet {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    materials: Vec<Material>,
    num_vertex_per_face: Vec<u32>,
    face_styles: Vec<FaceStyle>,
    vertex_indices: Vec<u32>,
    normal_indices: Vec<u32>,
    material_indices: Vec<u32>,
    bbox: Option<BBox>,
    id: Id,
}

impl IndexedFaceSet {
    /// Creates a triangle face set.
    ///
    /// The face count is `vertex_indices.len() / 3`; the per-face vertex
    /// count and style tables are filled accordingly.
    pub fn new(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        materials: Vec<Material>,
        vertex_indices: Vec<u32>,
        normal_indices: Vec<u32>,
        material_indices: Vec<u32>,
    ) -> Self {
        let face_count = vertex_indices.len() / VERTICES_PER_TRIANGLE;
        Self {
            vertices,
            normals,
            materials,
            num_vertex_per_face: vec![VERTICES_PER_TRIANGLE as u32; face_count],
            face_styles: vec![FaceStyle::Triangles; face_count],
            vertex_indices,
            normal_indices,
            material_indices,
            bbox: None,
            id: Id::default(),
        }
    }

    /// Stamps the bounding box.
    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Stamps the identity.
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.num_vertex_per_face.len()
    }

    /// Returns the number of distinct vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
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
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn num_vertex_per_face(&self) -> &[u32] {
        &self.num_vertex_per_face
    }

    #[inline]
    pub fn face_styles(&self) -> &[FaceStyle] {
        &self.face_styles
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

    #[inline]
    pub fn bbox(&self) -> Option<&BBox> {
        self.bbox.as_ref()
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the corner positions of a face.
    ///
    /// The face set must be valid and `face < face_count()`.
    pub fn triangle(&self, face: usize) -> [DVec3; 3] {
        let base = face * VERTICES_PER_TRIANGLE;
        let corner = |k: usize| self.vertices[self.vertex_indices[base + k] as usize];
        [corner(0), corner(1), corner(2)]
    }

    /// Checks index array lengths and ranges.
    pub fn validate(&self) -> Result<(), SceneError> {
        let expected = self.face_count() * VERTICES_PER_TRIANGLE;

        let arrays: [(&'static str, &[u32], usize); 3] = [
            ("vertex", self.vertex_indices.as_slice(), self.vertices.len()),
            ("normal", self.normal_indices.as_slice(), self.normals.len()),
            ("material", self.material_indices.as_slice(), self.materials.len()),
        ];

        for (name, indices, len) in arrays {
            if indices.len() != expected {
                return Err(SceneError::length_mismatch(name, expected, indices.len()));
            }
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= len) {
                return Err(SceneError::index_out_of_range(name, index, len));
            }
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Render Meshes
//!
//! Camera-space meshes made of triangles and quads.

use crate::error::SnapshotError;
use crate::material::MaterialId;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Vertex references of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceVertices {
    /// Three vertex indices.
    Triangle([u32; 3]),
    /// Four vertex indices, split into (v1, v2, v3) and (v1, v3, v4).
    Quad([u32; 4]),
}

/// A triangle or quad face with an optional material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFace {
    pub vertices: FaceVertices,
    pub material: Option<MaterialId>,
}

impl RenderFace {
    /// Creates a triangle face without a material.
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self {
            vertices: FaceVertices::Triangle([a, b, c]),
            material: None,
        }
    }

    /// Creates a quad face without a material.
    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self {
            vertices: FaceVertices::Quad([a, b, c, d]),
            material: None,
        }
    }

    /// Sets the face material.
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    /// Returns true for quad faces.
    #[inline]
    pub fn is_quad(&self) -> bool {
        matches!(self.vertices, FaceVertices::Quad(_))
    }

    /// Returns the triangles making up this face.
    ///
    /// A quad `(v1, v2, v3, v4)` yields `(v1, v2, v3)` and `(v1, v3, v4)`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use render_snapshot::RenderFace;
    ///
    /// let (first, second) = RenderFace::quad(0, 1, 2, 3).triangles();
    /// assert_eq!(first, [0, 1, 2]);
    /// assert_eq!(second, Some([0, 2, 3]));
    /// ```
    pub fn triangles(&self) -> ([u32; 3], Option<[u32; 3]>) {
        match self.vertices {
            FaceVertices::Triangle(tri) => (tri, None),
            FaceVertices::Quad([a, b, c, d]) => ([a, b, c], Some([a, c, d])),
        }
    }

    /// Returns the vertex indices as a slice.
    pub fn indices(&self) -> &[u32] {
        match &self.vertices {
            FaceVertices::Triangle(tri) => tri,
            FaceVertices::Quad(quad) => quad,
        }
    }
}

/// A render mesh in camera space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Name used in diagnostics.
    pub name: String,
    /// Camera-space vertex positions.
    pub vertices: Vec<DVec3>,
    pub faces: Vec<RenderFace>,
}

impl RenderMesh {
    /// Creates a mesh from vertices and faces.
    pub fn new(name: impl Into<String>, vertices: Vec<DVec3>, faces: Vec<RenderFace>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
        }
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the position of a vertex.
    ///
    /// Indices must have been checked with [`RenderMesh::validate`].
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Checks every vertex and material reference.
    ///
    /// ## Parameters
    ///
    /// - `material_count`: size of the scene material table
    pub fn validate(&self, material_count: usize) -> Result<(), SnapshotError> {
        let vertex_count = self.vertices.len();

        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face
                .indices()
                .iter()
                .find(|&&index| index as usize >= vertex_count)
            {
                return Err(SnapshotError::VertexOutOfRange {
                    mesh: self.name.clone(),
                    face: face_index,
                    index,
                    vertex_count,
                });
            }

            if let Some(MaterialId(index)) = face.material {
                if index as usize >= material_count {
                    return Err(SnapshotError::MaterialOutOfRange {
                        mesh: self.name.clone(),
                        face: face_index,
                        index,
                        material_count,
                    });
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Material Palette
//!
//! Per-mesh list of distinct materials, looked up by value.

use config::constants::hardness_to_shininess;
use render_snapshot::RenderMaterial;
use scene_graph::Material;

/// Converts a face's render material into a palette candidate.
///
/// `None` gives the neutral material. Ambient and emission always keep their
/// neutral values.
///
/// ## Example
///
/// ```rust
/// use mesh_import::palette::material_from_render;
/// use render_snapshot::RenderMaterial;
/// use scene_graph::Material;
///
/// assert_eq!(material_from_render(None), Material::default());
///
/// let red = RenderMaterial::new([1.0, 0.0, 0.0, 1.0], [0.5, 0.5, 0.5, 1.0], 511);
/// assert_eq!(material_from_render(Some(&red)).shininess(), 128.0);
/// ```
pub fn material_from_render(material: Option<&RenderMaterial>) -> Material {
    match material {
        None => Material::default(),
        Some(m) => Material::default()
            .with_diffuse(m.diffuse)
            .with_specular(m.specular)
            .with_shininess(hardness_to_shininess(m.hardness)),
    }
}

/// Duplicate-free, insertion-ordered materials of one mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialPalette {
    materials: Vec<Material>,
}

impl MaterialPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `material`, appending it if no equal entry exists.
    pub fn index_of(&mut self, material: Material) -> u32 {
        match self.materials.iter().position(|m| *m == material) {
            Some(index) => index as u32,
            None => {
                self.materials.push(material);
                (self.materials.len() - 1) as u32
            }
        }
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// First entry, used as the shape's own material.
    #[inline]
    pub fn first(&self) -> Option<&Material> {
        self.materials.first()
    }

    pub fn into_materials(self) -> Vec<Material> {
        self.materials
    }
}

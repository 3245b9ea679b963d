//! # Render Materials
//!
//! Material values as stored by the renderer.

use serde::{Deserialize, Serialize};

/// Index of a material in [`SceneSnapshot::materials`](crate::SceneSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// Material properties read from the renderer.
///
/// Colors are RGBA in [0.0, 1.0]. The alpha of `specular` is the specular
/// transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderMaterial {
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// Specular hardness in the renderer's [1, 511] range.
    pub hardness: i32,
}

impl RenderMaterial {
    /// Creates a material from diffuse and specular colors and a hardness.
    pub fn new(diffuse: [f32; 4], specular: [f32; 4], hardness: i32) -> Self {
        Self {
            diffuse,
            specular,
            hardness,
        }
    }
}

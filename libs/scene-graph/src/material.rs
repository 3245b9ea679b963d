//! # Material
//!
//! Material values attached to face sets, compared by value.

use config::constants::{
    DEFAULT_AMBIENT, DEFAULT_DIFFUSE, DEFAULT_EMISSION, DEFAULT_SHININESS, DEFAULT_SPECULAR,
};
use serde::{Deserialize, Serialize};

/// Surface material of a face set.
///
/// Equality compares every component, so two materials built from the same
/// values are interchangeable in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    diffuse: [f32; 4],
    specular: [f32; 4],
    ambient: [f32; 4],
    emission: [f32; 4],
    shininess: f32,
}

impl Default for Material {
    /// The neutral material: light gray diffuse, no specular.
    fn default() -> Self {
        Self {
            diffuse: DEFAULT_DIFFUSE,
            specular: DEFAULT_SPECULAR,
            ambient: DEFAULT_AMBIENT,
            emission: DEFAULT_EMISSION,
            shininess: DEFAULT_SHININESS,
        }
    }
}

impl Material {
    /// Sets the diffuse color.
    pub fn with_diffuse(mut self, rgba: [f32; 4]) -> Self {
        self.diffuse = rgba;
        self
    }

    /// Sets the specular color.
    pub fn with_specular(mut self, rgba: [f32; 4]) -> Self {
        self.specular = rgba;
        self
    }

    /// Sets the ambient color.
    pub fn with_ambient(mut self, rgba: [f32; 4]) -> Self {
        self.ambient = rgba;
        self
    }

    /// Sets the emission color.
    pub fn with_emission(mut self, rgba: [f32; 4]) -> Self {
        self.emission = rgba;
        self
    }

    /// Sets the shininess.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    #[inline]
    pub fn diffuse(&self) -> [f32; 4] {
        self.diffuse
    }

    #[inline]
    pub fn specular(&self) -> [f32; 4] {
        self.specular
    }

    #[inline]
    pub fn ambient(&self) -> [f32; 4] {
        self.ambient
    }

    #[inline]
    pub fn emission(&self) -> [f32; 4] {
        self.emission
    }

    #[inline]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }
}

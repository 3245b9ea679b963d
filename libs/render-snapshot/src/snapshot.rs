//! # Scene Snapshot
//!
//! Ordered object instances plus the material table they refer to.

use crate::material::{MaterialId, RenderMaterial};
use crate::mesh::RenderMesh;
use config::constants::ALL_LAYERS;
use glam::DMat4;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A renderable object: a mesh placed in the scene.
///
/// Instances may share a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInstance {
    /// Visibility layer bitmask.
    pub layers: u32,
    pub mesh: Arc<RenderMesh>,
    /// Maps camera-space positions back into the object's local frame.
    pub camera_to_local: DMat4,
    /// Maps the object's local frame into world space.
    pub local_to_world: DMat4,
}

impl ObjectInstance {
    /// Creates an instance on every layer with identity transforms.
    pub fn new(mesh: Arc<RenderMesh>) -> Self {
        Self {
            layers: ALL_LAYERS,
            mesh,
            camera_to_local: DMat4::IDENTITY,
            local_to_world: DMat4::IDENTITY,
        }
    }

    /// Sets the layer mask.
    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Sets both transforms.
    pub fn with_transforms(mut self, camera_to_local: DMat4, local_to_world: DMat4) -> Self {
        self.camera_to_local = camera_to_local;
        self.local_to_world = local_to_world;
        self
    }

    /// Camera space to world space: `camera_to_local` applied first.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::{DMat4, DVec3};
    /// use render_snapshot::{ObjectInstance, RenderMesh};
    /// use std::sync::Arc;
    ///
    /// let instance = ObjectInstance::new(Arc::new(RenderMesh::default())).with_transforms(
    ///     DMat4::from_translation(DVec3::X),
    ///     DMat4::from_scale(DVec3::splat(2.0)),
    /// );
    /// let p = instance.world_transform().transform_point3(DVec3::ZERO);
    /// assert_eq!(p, DVec3::new(2.0, 0.0, 0.0));
    /// ```
    pub fn world_transform(&self) -> DMat4 {
        self.local_to_world * self.camera_to_local
    }

    /// Returns true if the instance shares a layer with both masks.
    #[inline]
    pub fn is_visible(&self, scene_layers: u32, render_layers: u32) -> bool {
        self.layers & scene_layers & render_layers != 0
    }
}

/// Read-only snapshot of a resolved scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Layers enabled for the scene.
    pub layers: u32,
    pub materials: Vec<RenderMaterial>,
    pub instances: Vec<ObjectInstance>,
}

impl Default for SceneSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSnapshot {
    /// Creates an empty snapshot with every layer enabled.
    pub fn new() -> Self {
        Self {
            layers: ALL_LAYERS,
            materials: Vec::new(),
            instances: Vec::new(),
        }
    }

    /// Adds a material and returns its id.
    pub fn add_material(&mut self, material: RenderMaterial) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    /// Adds an instance.
    pub fn add_instance(&mut self, instance: ObjectInstance) {
        self.instances.push(instance);
    }

    /// Looks up a material.
    #[inline]
    pub fn material(&self, id: MaterialId) -> Option<&RenderMaterial> {
        self.materials.get(id.0 as usize)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_world_transform_order() {
        // Translate first, then rotate a quarter turn about Z
        let instance = ObjectInstance::new(Arc::new(RenderMesh::default())).with_transforms(
            DMat4::from_translation(DVec3::X),
            DMat4::from_rotation_z(std::f64::consts::FRAC_PI_2),
        );
        let p = instance.world_transform().transform_point3(DVec3::ZERO);
        assert!((p - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_visibility_requires_all_masks() {
        let instance = ObjectInstance::new(Arc::new(RenderMesh::default())).with_layers(0b0110);
        assert!(instance.is_visible(0b0010, ALL_LAYERS));
        assert!(!instance.is_visible(0b0001, ALL_LAYERS));
        assert!(!instance.is_visible(0b0010, 0b0100));
        assert!(instance.is_visible(0b0110, 0b0100));
    }

    #[test]
    fn test_add_material_ids_are_sequential() {
        let mut snapshot = SceneSnapshot::new();
        let a = snapshot.add_material(RenderMaterial::new([1.0; 4], [0.0; 4], 50));
        let b = snapshot.add_material(RenderMaterial::new([0.5; 4], [0.0; 4], 50));
        assert_eq!(a, MaterialId(0));
        assert_eq!(b, MaterialId(1));
        assert_eq!(snapshot.material(b).map(|m| m.diffuse), Some([0.5; 4]));
        assert!(snapshot.material(MaterialId(2)).is_none());
    }

    #[test]
    fn test_shared_mesh() {
        let mesh = Arc::new(RenderMesh::default());
        let mut snapshot = SceneSnapshot::new();
        snapshot.add_instance(ObjectInstance::new(Arc::clone(&mesh)));
        snapshot.add_instance(ObjectInstance::new(Arc::clone(&mesh)));
        assert_eq!(Arc::strong_count(&mesh), 3);
    }
}

//! # Shape Assembler
//!
//! Turns a filled [`LoaderState`] into a `Transform → Shape → IndexedFaceSet`
//! subtree.

use crate::dedup::VertexCleaner;
use crate::palette::MaterialPalette;
use crate::state::LoaderState;
use glam::DVec3;
use scene_graph::{Id, IndexedFaceSet, NodeShape, NodeTransform};

/// Builds the subtree for one mesh.
///
/// Positions and normals are deduplicated separately by `cleaner`; material
/// indices are kept as emitted. The face set is stamped with the state's
/// bounding box and `id`, the shape takes the first palette entry as its
/// material, and the transform is the identity.
///
/// Returns `None` if the state holds no triangle.
pub fn assemble_shape<C>(
    state: LoaderState,
    palette: MaterialPalette,
    id: Id,
    cleaner: &C,
) -> Option<NodeTransform>
where
    C: VertexCleaner + ?Sized,
{
    let bbox = state.bbox()?;
    let triangle_count = state.triangle_count();

    let positions = cleaner.clean(state.vertices(), state.vertex_indices());
    let normals = cleaner.clean(state.normals(), state.normal_indices());

    log::debug!(
        "Built shape {:?}: {} triangles, {} vertices, {} normals, {} materials",
        id,
        triangle_count,
        positions.values.len(),
        normals.values.len(),
        palette.len()
    );

    let mut shape = NodeShape::new(palette.first().copied().unwrap_or_default());

    let face_set = IndexedFaceSet::new(
        positions.values,
        normals.values,
        palette.into_materials(),
        positions.indices,
        normals.indices,
        state.into_material_indices(),
    )
    .with_bbox(bbox)
    .with_id(id);
    shape.add_rep(face_set);

    let mut transform = NodeTransform::identity();
    transform.translate(DVec3::ZERO);
    transform.add_child(shape);

    Some(transform)
}

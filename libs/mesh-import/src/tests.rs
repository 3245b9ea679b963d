//! Pipeline tests: clipping scenarios through emission and assembly.

use crate::clip::{classify_triangle, clip_triangle, ClipPlanes};
use crate::fan::emit_fan;
use crate::loader::SceneLoader;
use crate::state::LoaderState;
use approx::assert_relative_eq;
use glam::{DMat4, DVec3};
use render_snapshot::{
    ObjectInstance, RenderFace, RenderMaterial, RenderMesh, SceneSnapshot, ViewFrustum,
};
use scene_graph::{IndexedFaceSet, Material, Node, NodeShape, ShapeCollector};
use std::sync::Arc;

const PLANES: ClipPlanes = ClipPlanes {
    near: -1.0,
    far: -10.0,
};

fn frustum() -> ViewFrustum {
    ViewFrustum::new(PLANES.near, PLANES.far).unwrap()
}

/// Clips and fans a single triangle, returning the polygon size and state.
fn run_triangle(corners: [DVec3; 3], world: &DMat4) -> (usize, usize, LoaderState) {
    let clip = classify_triangle(&PLANES, &corners);
    let mut state = LoaderState::default();
    let points = match clip_triangle(&PLANES, &corners, &clip) {
        Some(polygon) => {
            emit_fan(&mut state, &polygon, world);
            polygon.len()
        }
        None => 0,
    };
    (clip.triangle_count, points, state)
}

fn shapes(root: &scene_graph::NodeGroup) -> Vec<&NodeShape> {
    root.children()
        .iter()
        .filter_map(|child| match child {
            Node::Transform(t) => match &t.children()[0] {
                Node::Shape(shape) => Some(shape),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

fn face_sets(root: &scene_graph::NodeGroup) -> Vec<&IndexedFaceSet> {
    let mut collector = ShapeCollector::new();
    root.accept(&mut collector);
    collector.into_face_sets()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_scenario_a_fully_inside() {
    let corners = [
        DVec3::new(0.0, 0.0, -5.0),
        DVec3::new(2.0, 0.0, -5.0),
        DVec3::new(0.0, 2.0, -6.0),
    ];
    let world = DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0));
    let (count, points, state) = run_triangle(corners, &world);

    assert_eq!(count, 1);
    assert_eq!(points, 3);
    assert_eq!(state.triangle_count(), 1);
    for (emitted, source) in state.vertices().iter().zip(&corners) {
        assert_eq!(*emitted, world.transform_point3(*source));
    }
}

#[test]
fn test_scenario_b_one_far_corner() {
    let corners = [
        DVec3::new(0.0, 0.0, -5.0),
        DVec3::new(2.0, 0.0, -5.0),
        DVec3::new(0.0, 2.0, -20.0),
    ];
    let (count, points, state) = run_triangle(corners, &DMat4::IDENTITY);

    assert_eq!(count, 2);
    assert_eq!(points, 4);
    assert_eq!(state.triangle_count(), 2);
    let v = state.vertices();
    assert_eq!(v[0], v[3]);
    assert_eq!(v[0], corners[0]);
    for p in v {
        assert!(p.z >= PLANES.far);
    }
}

#[test]
fn test_scenario_c_opposite_planes() {
    let corners = [
        DVec3::new(0.0, 0.0, -0.5),
        DVec3::new(2.0, 0.0, -20.0),
        DVec3::new(0.0, 2.0, -5.0),
    ];
    let (count, points, state) = run_triangle(corners, &DMat4::IDENTITY);

    assert_eq!(count, 3);
    assert_eq!(points, 5);
    assert_eq!(state.triangle_count(), 3);
    for p in state.vertices() {
        assert!(p.z <= PLANES.near && p.z >= PLANES.far);
    }
}

#[test]
fn test_scenario_d_quad_halves() {
    let vertices = vec![
        DVec3::new(0.0, 0.0, -5.0),
        DVec3::new(2.0, 0.0, -0.5),
        DVec3::new(2.0, 2.0, -5.0),
        DVec3::new(0.0, 2.0, -20.0),
    ];
    let first = classify_triangle(&PLANES, &[vertices[0], vertices[1], vertices[2]]);
    let second = classify_triangle(&PLANES, &[vertices[0], vertices[2], vertices[3]]);

    let mut snapshot = SceneSnapshot::new();
    snapshot.add_instance(ObjectInstance::new(Arc::new(RenderMesh::new(
        "Quad",
        vertices,
        vec![RenderFace::quad(0, 1, 2, 3)],
    ))));
    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();

    let expected = first.triangle_count + second.triangle_count;
    assert_eq!(expected, 4);
    assert_eq!(scene.report.faces_read, expected);
    assert_eq!(face_sets(&scene.root)[0].face_count(), expected);
}

// =============================================================================
// MESH PROPERTIES
// =============================================================================

#[test]
fn test_bbox_matches_emitted_vertices() {
    let mesh = RenderMesh::new(
        "Wedge",
        vec![
            DVec3::new(-1.0, -2.0, -0.2),
            DVec3::new(3.0, 0.5, -4.0),
            DVec3::new(0.5, 4.0, -15.0),
            DVec3::new(-2.0, 1.0, -8.0),
        ],
        vec![RenderFace::triangle(0, 1, 2), RenderFace::triangle(0, 2, 3)],
    );
    let world = DMat4::from_rotation_y(0.7) * DMat4::from_translation(DVec3::new(4.0, -1.0, 2.0));
    let mut snapshot = SceneSnapshot::new();
    snapshot.add_instance(
        ObjectInstance::new(Arc::new(mesh)).with_transforms(DMat4::IDENTITY, world),
    );

    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();
    let set = face_sets(&scene.root)[0];
    let bbox = set.bbox().unwrap();

    let mut min = DVec3::splat(f64::MAX);
    let mut max = DVec3::splat(f64::MIN);
    for &v in set.vertices() {
        min = min.min(v);
        max = max.max(v);
    }
    assert_eq!(bbox.min(), min);
    assert_eq!(bbox.max(), max);
}

#[test]
fn test_uniform_materials_share_one_slot() {
    let mut snapshot = SceneSnapshot::new();
    let blue = RenderMaterial::new([0.0, 0.0, 1.0, 1.0], [0.2, 0.2, 0.2, 1.0], 20);
    let a = snapshot.add_material(blue.clone());
    // Same values under a second id
    let b = snapshot.add_material(blue);

    let mesh = RenderMesh::new(
        "Strip",
        vec![
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::new(1.0, 0.0, -5.0),
            DVec3::new(1.0, 1.0, -5.0),
            DVec3::new(0.0, 1.0, -5.0),
            DVec3::new(2.0, 1.0, -5.0),
        ],
        vec![
            RenderFace::triangle(0, 1, 2).with_material(a),
            RenderFace::triangle(0, 2, 3).with_material(b),
            RenderFace::triangle(1, 4, 2).with_material(a),
        ],
    );
    snapshot.add_instance(ObjectInstance::new(Arc::new(mesh)));

    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();
    let set = face_sets(&scene.root)[0];
    assert_eq!(set.materials().len(), 1);
    assert!(set.material_indices().iter().all(|&i| i == 0));
    assert_eq!(set.materials()[0].diffuse(), [0.0, 0.0, 1.0, 1.0]);
    assert_relative_eq!(set.materials()[0].shininess(), 5.25);
}

#[test]
fn test_missing_material_uses_neutral_value() {
    let mut snapshot = SceneSnapshot::new();
    let red = snapshot.add_material(RenderMaterial::new([1.0, 0.0, 0.0, 1.0], [0.0; 4], 1));
    let mesh = RenderMesh::new(
        "Mixed",
        vec![
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::new(1.0, 0.0, -5.0),
            DVec3::new(0.0, 1.0, -5.0),
        ],
        vec![
            RenderFace::triangle(0, 1, 2).with_material(red),
            RenderFace::triangle(0, 2, 1),
        ],
    );
    snapshot.add_instance(ObjectInstance::new(Arc::new(mesh)));

    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();
    let set = face_sets(&scene.root)[0];
    assert_eq!(set.materials().len(), 2);
    assert_eq!(set.materials()[1], Material::default());
    assert_eq!(set.material_indices(), &[0, 0, 0, 1, 1, 1]);

    // The shape carries the first palette entry
    assert_eq!(*shapes(&scene.root)[0].material(), set.materials()[0]);
}

#[test]
fn test_clipped_faces_do_not_touch_palette() {
    let mut snapshot = SceneSnapshot::new();
    let green = snapshot.add_material(RenderMaterial::new([0.0, 1.0, 0.0, 1.0], [0.0; 4], 1));
    let mesh = RenderMesh::new(
        "Half",
        vec![
            DVec3::new(0.0, 0.0, -50.0),
            DVec3::new(1.0, 0.0, -50.0),
            DVec3::new(0.0, 1.0, -50.0),
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::new(1.0, 0.0, -5.0),
            DVec3::new(0.0, 1.0, -5.0),
        ],
        vec![
            RenderFace::triangle(0, 1, 2).with_material(green),
            RenderFace::triangle(3, 4, 5),
        ],
    );
    snapshot.add_instance(ObjectInstance::new(Arc::new(mesh)));

    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();
    let set = face_sets(&scene.root)[0];
    assert_eq!(set.materials(), &[Material::default()]);
}

#[test]
fn test_zero_triangle_mesh_adds_no_child() {
    let mut snapshot = SceneSnapshot::new();
    snapshot.add_instance(ObjectInstance::new(Arc::new(RenderMesh::new(
        "TooClose",
        vec![
            DVec3::new(0.0, 0.0, -0.1),
            DVec3::new(1.0, 0.0, -0.2),
            DVec3::new(0.0, 1.0, -0.3),
        ],
        vec![RenderFace::triangle(0, 1, 2)],
    ))));

    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();
    assert_eq!(scene.root.child_count(), 0);
    assert_eq!(scene.report.faces_read, 0);
    assert_eq!(scene.report.min_edge_length, f64::MAX);
}

#[test]
fn test_face_set_is_valid_after_dedup() {
    let mut snapshot = SceneSnapshot::new();
    snapshot.add_instance(ObjectInstance::new(Arc::new(RenderMesh::new(
        "Fan",
        vec![
            DVec3::new(0.0, 0.0, -0.5),
            DVec3::new(2.0, 0.0, -20.0),
            DVec3::new(0.0, 2.0, -5.0),
            DVec3::new(-2.0, 0.0, -5.0),
        ],
        vec![RenderFace::quad(0, 1, 2, 3)],
    ))));

    let scene = SceneLoader::new(&snapshot, frustum()).load().unwrap();
    let set = face_sets(&scene.root)[0];
    assert!(set.validate().is_ok());
    assert!(set.vertex_count() < set.face_count() * 3);
    assert!(set.normal_count() <= set.face_count());
}

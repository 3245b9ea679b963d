//! # Vertex Dedup
//!
//! Collapses repeated entries of a flat value buffer and remaps its index
//! buffer. Positions and normals are cleaned independently.

use glam::DVec3;
use std::collections::HashMap;

/// A deduplicated buffer and its remapped indices.
///
/// `indices` has the length and order of the input indices; each entry points
/// at a value equal to the one it pointed at before.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanedArray {
    pub values: Vec<DVec3>,
    pub indices: Vec<u32>,
}

/// Strategy for collapsing duplicate vectors.
///
/// Implementations must be shareable across threads, since meshes may be
/// built in parallel.
pub trait VertexCleaner: Sync {
    /// Cleans `values` as referenced by `indices`.
    fn clean(&self, values: &[DVec3], indices: &[u32]) -> CleanedArray;
}

/// Merges vectors that are bit-for-bit equal, keeping first occurrences in
/// their original order.
///
/// `-0.0` and `0.0` are treated as equal.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_import::dedup::{ExactVertexCleaner, VertexCleaner};
///
/// let values = [DVec3::X, DVec3::Y, DVec3::X];
/// let cleaned = ExactVertexCleaner.clean(&values, &[0, 1, 2]);
/// assert_eq!(cleaned.values, vec![DVec3::X, DVec3::Y]);
/// assert_eq!(cleaned.indices, vec![0, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactVertexCleaner;

fn bit_key(v: DVec3) -> [u64; 3] {
    // Adding zero folds -0.0 into 0.0
    [(v.x + 0.0).to_bits(), (v.y + 0.0).to_bits(), (v.z + 0.0).to_bits()]
}

impl VertexCleaner for ExactVertexCleaner {
    fn clean(&self, values: &[DVec3], indices: &[u32]) -> CleanedArray {
        let mut seen: HashMap<[u64; 3], u32> = HashMap::with_capacity(values.len());
        let mut remap = Vec::with_capacity(values.len());
        let mut unique = Vec::new();

        for &value in values {
            let slot = *seen.entry(bit_key(value)).or_insert_with(|| {
                unique.push(value);
                (unique.len() - 1) as u32
            });
            remap.push(slot);
        }

        CleanedArray {
            values: unique,
            indices: indices.iter().map(|&i| remap[i as usize]).collect(),
        }
    }
}

//! Utilities useful for various generations tasks.

use glamx::Vec3;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Computes the unit normal of a counterclockwise triangle.
///
/// Degenerate triangles yield the zero vector.
///
/// # Panics
/// Panics if an index of `face` is out of bounds of `coordinates`.
#[inline]
pub fn face_normal(coordinates: &[Vec3], face: [u32; 3]) -> Vec3 {
    let a = coordinates[face[0] as usize];
    let edge1 = coordinates[face[1] as usize] - a;
    let edge2 = coordinates[face[2] as usize] - a;
    let cross = edge1.cross(edge2);

    if cross.length_squared() > 0.0 {
        cross.normalize()
    } else {
        cross
    }
}

/// Counts, for each vertex, the number of triangles it belongs to.
///
/// # Panics
/// Panics if a face references a vertex index not smaller than `nvertices`.
#[inline]
pub fn vertex_valences(nvertices: usize, faces: &[[u32; 3]]) -> Vec<u32> {
    let mut valences = vec![0; nvertices];

    for f in faces {
        for i in f {
            valences[*i as usize] += 1;
        }
    }

    valences
}

/// Counts, for each undirected edge, the number of triangles bordering it.
///
/// Keys are ordered so that `key[0] < key[1]`.
#[inline]
pub fn edge_face_counts(faces: &[[u32; 3]]) -> HashMap<[u32; 2], u32> {
    let mut counts = HashMap::with_capacity(faces.len() * 3 / 2);

    for f in faces {
        for k in 0..3 {
            let (a, b) = (f[k], f[(k + 1) % 3]);
            *counts.entry([a.min(b), a.max(b)]).or_insert(0) += 1;
        }
    }

    counts
}

/// Whether the triangles form a closed and consistently oriented surface.
///
/// Every directed edge must appear exactly once and its reverse exactly once.
pub fn is_closed_manifold(faces: &[[u32; 3]]) -> bool {
    let mut directed: HashMap<[u32; 2], u32> = HashMap::with_capacity(faces.len() * 3);

    for f in faces {
        for k in 0..3 {
            *directed.entry([f[k], f[(k + 1) % 3]]).or_insert(0) += 1;
        }
    }

    directed
        .iter()
        .all(|(e, n)| *n == 1 && directed.get(&[e[1], e[0]]) == Some(&1))
}

/// Splits each triangle into four, pushing the new vertices to `coords`.
///
/// Edge midpoints are shared between adjacent triangles and projected on the
/// unit sphere. Existing vertices keep their index.
///
/// # Panics
/// Panics if a face references a vertex out of bounds of `coords`, or if the
/// subdivided mesh would have more than `u32::MAX` vertices.
pub fn subdivide_on_unit_sphere(coords: &mut Vec<Vec3>, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    assert!(
        coords.len() + faces.len() * 3 <= u32::MAX as usize,
        "The subdivided mesh would not be indexable with u32."
    );

    let mut midpoints: HashMap<[u32; 2], u32> = HashMap::with_capacity(faces.len() * 3 / 2);
    let mut out = Vec::with_capacity(faces.len() * 4);

    fn resolve_midpoint(
        a: u32,
        b: u32,
        midpoints: &mut HashMap<[u32; 2], u32>,
        coords: &mut Vec<Vec3>,
    ) -> u32 {
        match midpoints.entry([a.min(b), a.max(b)]) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let mid = (coords[a as usize] + coords[b as usize]).normalize();
                let id = coords.len() as u32;
                coords.push(mid);
                *entry.insert(id)
            }
        }
    }

    for &[a, b, c] in faces {
        let ab = resolve_midpoint(a, b, &mut midpoints, coords);
        let bc = resolve_midpoint(b, c, &mut midpoints, coords);
        let ca = resolve_midpoint(c, a, &mut midpoints, coords);

        out.push([a, ab, ca]);
        out.push([b, bc, ab]);
        out.push([c, ca, bc]);
        out.push([ab, bc, ca]);
    }

    out
}

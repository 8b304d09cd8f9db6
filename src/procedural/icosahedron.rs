use super::RenderMesh;
use crate::error::{check_radius, ProceduralError};
use glamx::{Vec2, Vec3};

/// Number of vertices of an icosahedron.
pub const ICOSAHEDRON_NUM_VERTICES: usize = 12;

/// Triangles of the icosahedron built by [`icosahedron`].
///
/// Vertex 0 is the pole on `+X`, vertices 1 to 5 the upper ring, 6 to 10 the
/// lower ring and 11 the pole on `-X`. Every triangle is counterclockwise
/// when seen from outside.
pub const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    // Upper cap.
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 1],
    // Band between the two rings.
    [10, 2, 1],
    [10, 9, 2],
    [9, 3, 2],
    [9, 8, 3],
    [8, 4, 3],
    [8, 7, 4],
    [7, 5, 4],
    [7, 6, 5],
    [6, 1, 5],
    [6, 10, 1],
    // Lower cap.
    [6, 7, 11],
    [7, 8, 11],
    [8, 9, 11],
    [9, 10, 11],
    [10, 6, 11],
];

/// Generates a regular icosahedron centered at the origin.
///
/// Two opposite vertices lie on the `X` axis. Every vertex is at distance
/// `radius` from the origin and its normal points away from the origin.
/// Texture coordinates are all zero.
///
/// # Arguments
/// * `radius` - The distance from the center to each vertex
///
/// # Errors
/// Returns [`ProceduralError::InvalidRadius`] if `radius` is not a finite,
/// normal, strictly positive number.
///
/// # Example
/// ```
/// # use icoglobe::procedural::icosahedron;
/// let globe = icosahedron(2.0).unwrap();
/// assert_eq!(globe.num_vertices(), 12);
/// assert_eq!(globe.num_triangles(), 20);
/// assert!(icosahedron(0.0).is_err());
/// ```
pub fn icosahedron(radius: f32) -> Result<RenderMesh, ProceduralError> {
    let radius = check_radius(radius)?;
    unit_icosahedron().scaled(radius)
}

/// Generates an icosahedron of radius 1.
pub fn unit_icosahedron() -> RenderMesh {
    let coords = unit_icosahedron_coords();

    for (i, c) in coords.iter().enumerate() {
        log::trace!(target: "icoglobe::procedural", "icosahedron vertex {}: {:?}", i, c);
    }

    // Centered and convex: the normal is the direction of the vertex.
    let normals: Vec<Vec3> = coords.iter().map(|c| c.normalize()).collect();
    let uvs = vec![Vec2::ZERO; coords.len()];

    RenderMesh::from_parts(coords, normals, uvs, ICOSAHEDRON_FACES.to_vec())
}

/// The twelve vertices of the unit icosahedron, in [`ICOSAHEDRON_FACES`] order.
///
/// Each ring sits at `x = ±1/√5` with radius `2/√5`, and the lower ring is
/// rotated by 36° relative to the upper one.
pub(crate) fn unit_icosahedron_coords() -> Vec<Vec3> {
    let s = 1.0 / 5.0f32.sqrt();
    let ring_radius = 2.0 * s;
    let dtheta = std::f32::consts::TAU / 5.0;
    let mut coords = Vec::with_capacity(ICOSAHEDRON_NUM_VERTICES);

    coords.push(Vec3::X);

    for i in 0..5 {
        let theta = dtheta * i as f32;
        coords.push(Vec3::new(
            s,
            ring_radius * theta.cos(),
            ring_radius * theta.sin(),
        ));
    }

    for j in 0..5 {
        let theta = -dtheta / 2.0 - dtheta * j as f32;
        coords.push(Vec3::new(
            -s,
            ring_radius * theta.cos(),
            ring_radius * theta.sin(),
        ));
    }

    coords.push(Vec3::NEG_X);

    coords
}

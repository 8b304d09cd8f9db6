use super::icosahedron::{unit_icosahedron_coords, ICOSAHEDRON_FACES};
use super::utils;
use super::RenderMesh;
use crate::error::{check_radius, ProceduralError};
use glamx::Vec2;

/// Largest subdivision level accepted by [`icosphere`] (1 310 720 triangles).
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Generates a geodesic sphere by subdividing an icosahedron.
///
/// Each subdivision splits every triangle into four and pushes the new
/// vertices back on the sphere. The mesh has `10 * 4^n + 2` vertices and
/// `20 * 4^n` triangles; its first twelve vertices are the ones of
/// [`icosahedron`](super::icosahedron), so `subdivisions = 0` gives exactly
/// the icosahedron.
///
/// # Arguments
/// * `radius` - The radius of the sphere
/// * `subdivisions` - Number of subdivision passes, at most [`MAX_SUBDIVISIONS`]
///
/// # Example
/// ```
/// # use icoglobe::procedural::icosphere;
/// let sphere = icosphere(0.5, 2).unwrap();
/// assert_eq!(sphere.num_vertices(), 162);
/// assert_eq!(sphere.num_triangles(), 320);
/// ```
pub fn icosphere(radius: f32, subdivisions: u32) -> Result<RenderMesh, ProceduralError> {
    let radius = check_radius(radius)?;

    if subdivisions > MAX_SUBDIVISIONS {
        return Err(ProceduralError::TooManySubdivisions {
            requested: subdivisions,
            max: MAX_SUBDIVISIONS,
        });
    }

    let mut coords = unit_icosahedron_coords();
    let mut faces = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..subdivisions {
        faces = utils::subdivide_on_unit_sphere(&mut coords, &faces);
    }

    log::debug!(
        target: "icoglobe::procedural",
        "icosphere: {} subdivisions, {} vertices, {} triangles",
        subdivisions,
        coords.len(),
        faces.len()
    );

    let normals = coords.iter().map(|c| c.normalize()).collect();
    let uvs = vec![Vec2::ZERO; coords.len()];

    RenderMesh::from_parts(coords, normals, uvs, faces).scaled(radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::unit_icosahedron;
    use approx::assert_relative_eq;

    #[test]
    fn counts_follow_the_subdivision_level() {
        for n in 0..4u32 {
            let sphere = icosphere(1.0, n).unwrap();
            let factor = 4usize.pow(n);

            assert_eq!(sphere.num_vertices(), 10 * factor + 2);
            assert_eq!(sphere.num_triangles(), 20 * factor);
            assert_eq!(utils::edge_face_counts(sphere.indices()).len(), 30 * factor);
        }
    }

    #[test]
    fn zero_subdivisions_is_the_icosahedron() {
        assert_eq!(icosphere(1.0, 0).unwrap(), unit_icosahedron());
    }

    #[test]
    fn keeps_the_icosahedron_vertices_first() {
        let sphere = icosphere(1.0, 2).unwrap();
        let base = unit_icosahedron();

        assert_eq!(&sphere.coords()[..12], base.coords());
    }

    #[test]
    fn vertices_lie_on_the_sphere() {
        let radius = 3.5;
        let sphere = icosphere(radius, 3).unwrap();

        for (c, n) in sphere.coords().iter().zip(sphere.normals()) {
            assert_relative_eq!(c.length(), radius, max_relative = 1.0e-5);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(c.normalize().dot(*n), 1.0, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn stays_a_closed_oriented_surface() {
        let sphere = icosphere(1.0, 2).unwrap();

        assert!(utils::is_closed_manifold(sphere.indices()));
        for f in sphere.indices() {
            let c = sphere.coords()[f[0] as usize];
            assert!(utils::face_normal(sphere.coords(), *f).dot(c) > 0.0);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            icosphere(-1.0, 1).unwrap_err(),
            ProceduralError::InvalidRadius(-1.0)
        );
        assert_eq!(
            icosphere(1.0, MAX_SUBDIVISIONS + 1).unwrap_err(),
            ProceduralError::TooManySubdivisions {
                requested: MAX_SUBDIVISIONS + 1,
                max: MAX_SUBDIVISIONS
            }
        );
    }
}

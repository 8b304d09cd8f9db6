//! Procedural mesh generation.
//!
//! Every generator returns a [`RenderMesh`] centered at the origin, with
//! per-vertex normals and texture coordinates. Generators taking a radius
//! reject radii that are not finite, normal and strictly positive.

pub use self::icosahedron::{
    icosahedron, unit_icosahedron, ICOSAHEDRON_FACES, ICOSAHEDRON_NUM_VERTICES,
};
pub use self::icosphere::{icosphere, MAX_SUBDIVISIONS};
pub use self::render_mesh::{RenderMesh, Vertex};

mod icosahedron;
mod icosphere;
mod render_mesh;
pub mod utils;

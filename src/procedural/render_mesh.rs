use crate::error::{check_radius, ProceduralError};
use bytemuck::{Pod, Zeroable};
use glamx::{Vec2, Vec3};

/// Interleaved vertex data, laid out for direct upload to a vertex buffer.
///
/// Attribute offsets: position at 0, normal at 12, uv at 24 (stride 32).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position of the vertex.
    pub position: [f32; 3],
    /// Unit normal at the vertex.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// Geometric description of a triangle mesh.
///
/// Positions, normals and texture coordinates are parallel streams sharing
/// the same indices. A `RenderMesh` is never modified once built: transforms
/// such as [`RenderMesh::scaled`] return a new mesh.
///
/// With the `serde` feature, deserialization goes through [`RenderMesh::new`]
/// and fails on the same inputs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRenderMesh")
)]
pub struct RenderMesh {
    coords: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<[u32; 3]>,
}

/// Unchecked streams, as read from a serialized mesh.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRenderMesh {
    coords: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<[u32; 3]>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRenderMesh> for RenderMesh {
    type Error = ProceduralError;

    fn try_from(raw: RawRenderMesh) -> Result<Self, Self::Error> {
        RenderMesh::new(raw.coords, raw.normals, raw.uvs, raw.indices)
    }
}

impl RenderMesh {
    /// Creates a new mesh from its vertex streams and triangles.
    ///
    /// Fails if the three streams have different lengths or if a triangle
    /// references a vertex past the end of the streams.
    pub fn new(
        coords: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<[u32; 3]>,
    ) -> Result<RenderMesh, ProceduralError> {
        if coords.len() != normals.len() || coords.len() != uvs.len() {
            return Err(ProceduralError::MismatchedStreams {
                coords: coords.len(),
                normals: normals.len(),
                uvs: uvs.len(),
            });
        }

        if let Some(&index) = indices
            .iter()
            .flatten()
            .find(|&&i| i as usize >= coords.len())
        {
            return Err(ProceduralError::IndexOutOfBounds {
                index,
                len: coords.len(),
            });
        }

        Ok(RenderMesh {
            coords,
            normals,
            uvs,
            indices,
        })
    }

    /// Assembles a mesh whose streams are known to be consistent.
    pub(crate) fn from_parts(
        coords: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<[u32; 3]>,
    ) -> RenderMesh {
        debug_assert_eq!(coords.len(), normals.len());
        debug_assert_eq!(coords.len(), uvs.len());

        RenderMesh {
            coords,
            normals,
            uvs,
            indices,
        }
    }

    /// Coordinates of the mesh vertices.
    #[inline]
    pub fn coords(&self) -> &[Vec3] {
        &self.coords
    }

    /// Normals of the mesh vertices.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates of the mesh vertices.
    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Triangles of the mesh, as counterclockwise index triples.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of vertices on this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.coords.len()
    }

    /// The number of triangles on this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Returns the index buffer flattened, three entries per triangle.
    #[inline]
    pub fn flat_indices(&self) -> Vec<u32> {
        let mut res = Vec::with_capacity(self.num_triangles() * 3);

        for i in &self.indices {
            res.extend_from_slice(i);
        }

        res
    }

    /// Interleaves positions, normals and uvs into a single vertex stream.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.coords
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((c, n), uv)| Vertex {
                position: c.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Returns a copy of this mesh with every vertex scaled by `s`.
    ///
    /// Normals and triangles are kept as is.
    ///
    /// # Errors
    /// Returns [`ProceduralError::InvalidRadius`] if `s` is not a finite,
    /// normal, strictly positive number: such a factor would mirror the mesh
    /// inside out or collapse it.
    pub fn scaled(&self, s: f32) -> Result<RenderMesh, ProceduralError> {
        let s = check_radius(s)?;

        Ok(RenderMesh {
            coords: self.coords.iter().map(|c| *c * s).collect(),
            normals: self.normals.clone(),
            uvs: self.uvs.clone(),
            indices: self.indices.clone(),
        })
    }

    /// Splits the mesh into its positions, normals, uvs and triangles.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec2>, Vec<[u32; 3]>) {
        (self.coords, self.normals, self.uvs, self.indices)
    }
}

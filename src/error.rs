//! Errors raised while generating procedural meshes.

/// Failure to build a [`RenderMesh`](crate::procedural::RenderMesh).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProceduralError {
    /// The requested radius is zero, negative, subnormal or not finite.
    #[error("invalid radius {0}: expected a normal value greater than zero")]
    InvalidRadius(f32),

    /// The subdivision level would produce more triangles than supported.
    #[error("too many subdivisions: requested {requested}, at most {max} are supported")]
    TooManySubdivisions {
        /// The subdivision level passed by the caller.
        requested: u32,
        /// The largest accepted subdivision level.
        max: u32,
    },

    /// The per-vertex attribute streams do not have the same length.
    #[error("mismatched vertex streams: {coords} positions, {normals} normals, {uvs} uvs")]
    MismatchedStreams {
        /// Number of positions.
        coords: usize,
        /// Number of normals.
        normals: usize,
        /// Number of texture coordinates.
        uvs: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("vertex index {index} out of bounds for a mesh of {len} vertices")]
    IndexOutOfBounds {
        /// The offending index.
        index: u32,
        /// Number of vertices of the mesh.
        len: usize,
    },
}

/// Checks that `radius` can be used to scale a mesh.
///
/// Subnormal radii are rejected: unit coordinates scaled by them lose most of
/// their precision.
pub(crate) fn check_radius(radius: f32) -> Result<f32, ProceduralError> {
    if radius.is_normal() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ProceduralError::InvalidRadius(radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_radii() {
        assert_eq!(check_radius(1.0), Ok(1.0));
        assert_eq!(check_radius(1.0e-6), Ok(1.0e-6));
        assert_eq!(check_radius(f32::MIN_POSITIVE), Ok(f32::MIN_POSITIVE));
    }

    #[test]
    fn rejects_degenerate_radii() {
        assert_eq!(check_radius(0.0), Err(ProceduralError::InvalidRadius(0.0)));
        assert_eq!(check_radius(-1.0), Err(ProceduralError::InvalidRadius(-1.0)));
        assert!(check_radius(f32::INFINITY).is_err());
        assert!(check_radius(f32::NAN).is_err());
    }

    #[test]
    fn rejects_subnormal_radii() {
        assert_eq!(
            check_radius(1.0e-44),
            Err(ProceduralError::InvalidRadius(1.0e-44))
        );
        assert!(check_radius(f32::MIN_POSITIVE / 2.0).is_err());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = ProceduralError::InvalidRadius(-2.5);
        assert_eq!(
            err.to_string(),
            "invalid radius -2.5: expected a normal value greater than zero"
        );
    }
}

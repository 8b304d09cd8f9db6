use crate::color::Color;
use crate::light::Light;
use crate::procedural::RenderMesh;
use glamx::Vec3;

/// Handle to the engine that displays a scene.
///
/// Windowing, shading, camera controls and the render loop all live behind
/// this trait. A scene is pushed into a `Stage` explicitly, there is no
/// process-wide application object to reach for.
pub trait Stage {
    /// Engine-side reference to a mesh added with [`Stage::add_mesh`].
    type MeshHandle;

    /// Sets the color the frame is cleared with.
    fn set_background(&mut self, color: Color);

    /// Places the camera at `eye`, looking at `at`.
    ///
    /// The engine is expected to let the user orbit around `at`.
    fn set_camera(&mut self, eye: Vec3, at: Vec3);

    /// Adds a light at `position`. Ambient lights ignore the position.
    fn add_light(&mut self, light: Light, position: Vec3);

    /// Shows the X, Y and Z axes from the origin, each `length` long.
    fn add_axes(&mut self, length: f32);

    /// Adds a mesh drawn with a plain material of the given color.
    fn add_mesh(&mut self, mesh: RenderMesh, color: Color) -> Self::MeshHandle;

    /// Changes the material color of a mesh previously added.
    fn set_mesh_color(&mut self, mesh: &mut Self::MeshHandle, color: Color);
}

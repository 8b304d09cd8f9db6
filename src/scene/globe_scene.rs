use super::Stage;
use crate::color::{self, Color};
use crate::error::ProceduralError;
use crate::light::Light;
use crate::procedural;
use crate::ui::{ColorToggle, GlobeColor};
use glamx::Vec3;

/// Description of the globe viewer scene.
///
/// Defaults reproduce the classic setup: a unit globe seen from `(0, 0, 3)`,
/// a gray background, a strong white ambient light and 27 white point lights
/// on a 3x3x3 grid around the origin.
///
/// # Example
/// ```
/// # use icoglobe::scene::GlobeScene;
/// # use icoglobe::ui::GlobeColor;
/// let scene = GlobeScene::default()
///     .with_radius(0.75)
///     .with_initial_color(GlobeColor::Red);
/// assert_eq!(scene.point_light_positions().len(), 27);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobeScene {
    /// Radius of the icosahedron.
    pub radius: f32,
    /// Initial camera position.
    pub camera_eye: Vec3,
    /// Point the camera looks at and orbits around.
    pub camera_at: Vec3,
    /// Background color.
    pub background: Color,
    /// Ambient light.
    pub ambient: Light,
    /// Template of the light placed at each grid position.
    pub point_light: Light,
    /// Coordinates combined along each axis to place the point lights.
    pub light_grid: Vec<f32>,
    /// Length of the axes helper. `None` hides the axes.
    pub axes_length: Option<f32>,
    /// Color of the globe when the scene starts.
    pub initial_color: GlobeColor,
}

impl Default for GlobeScene {
    fn default() -> Self {
        Self {
            radius: 1.0,
            camera_eye: Vec3::new(0.0, 0.0, 3.0),
            camera_at: Vec3::ZERO,
            background: color::MID_GRAY,
            ambient: Light::ambient().with_color(color::WHITE).with_intensity(0.8),
            point_light: Light::point(100.0)
                .with_color(color::WHITE)
                .with_intensity(5.0),
            light_grid: vec![2.0, 0.0, -2.0],
            axes_length: Some(2.0),
            initial_color: GlobeColor::Blue,
        }
    }
}

impl GlobeScene {
    /// Sets the globe radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the initial camera position and target.
    pub fn with_camera(mut self, eye: Vec3, at: Vec3) -> Self {
        self.camera_eye = eye;
        self.camera_at = at;
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the ambient light.
    pub fn with_ambient(mut self, ambient: Light) -> Self {
        self.ambient = ambient;
        self
    }

    /// Sets the light placed at each grid position, and the grid coordinates.
    pub fn with_point_lights(mut self, light: Light, grid: Vec<f32>) -> Self {
        self.point_light = light;
        self.light_grid = grid;
        self
    }

    /// Sets the length of the axes helper, or hides it.
    pub fn with_axes(mut self, length: Option<f32>) -> Self {
        self.axes_length = length;
        self
    }

    /// Sets the color of the globe when the scene starts.
    pub fn with_initial_color(mut self, color: GlobeColor) -> Self {
        self.initial_color = color;
        self
    }

    /// Positions of the point lights: every combination of the grid
    /// coordinates, with `x` varying slowest.
    pub fn point_light_positions(&self) -> Vec<Vec3> {
        let grid = &self.light_grid;
        let mut positions = Vec::with_capacity(grid.len().pow(3));

        for x in grid {
            for y in grid {
                for z in grid {
                    positions.push(Vec3::new(*x, *y, *z));
                }
            }
        }

        positions
    }

    /// Builds the globe and pushes the whole scene into `stage`.
    ///
    /// The stage receives, in order: the background, the camera, the ambient
    /// light, the point lights, the axes and finally the globe mesh. Nothing
    /// is pushed if the globe cannot be built.
    pub fn install<S: Stage>(
        &self,
        stage: &mut S,
    ) -> Result<Globe<S::MeshHandle>, ProceduralError> {
        let mesh = procedural::icosahedron(self.radius)?;
        let toggle = ColorToggle::new(self.initial_color);
        let lights = self.point_light_positions();

        log::debug!(
            "installing globe scene: radius {}, {} point lights",
            self.radius,
            lights.len()
        );

        stage.set_background(self.background);
        stage.set_camera(self.camera_eye, self.camera_at);
        stage.add_light(self.ambient.clone(), Vec3::ZERO);

        for position in lights {
            stage.add_light(self.point_light.clone(), position);
        }

        if let Some(length) = self.axes_length {
            stage.add_axes(length);
        }

        let handle = stage.add_mesh(mesh, toggle.color());

        Ok(Globe { handle, toggle })
    }
}

/// A globe installed on a [`Stage`], together with its color toggle.
#[derive(Debug)]
pub struct Globe<H> {
    handle: H,
    toggle: ColorToggle,
}

impl<H> Globe<H> {
    /// The stage's handle to the globe mesh.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// The color toggle.
    pub fn toggle(&self) -> &ColorToggle {
        &self.toggle
    }

    /// Mutable access to the color toggle, e.g. to draw it.
    ///
    /// Call [`Globe::sync_color`] after changing its state.
    pub fn toggle_mut(&mut self) -> &mut ColorToggle {
        &mut self.toggle
    }

    /// Flips the globe color and updates its material on `stage`.
    pub fn toggle_color<S>(&mut self, stage: &mut S) -> Color
    where
        S: Stage<MeshHandle = H>,
    {
        let color = self.toggle.click();
        stage.set_mesh_color(&mut self.handle, color);
        color
    }

    /// Sends the toggle's current color to the globe material on `stage`.
    pub fn sync_color<S>(&mut self, stage: &mut S)
    where
        S: Stage<MeshHandle = H>,
    {
        stage.set_mesh_color(&mut self.handle, self.toggle.color());
    }
}

//! Interactive globe viewer.
//!
//! Left drag orbits the camera, the button switches the globe color.

use icoglobe::color::{Color, BLUE, LIME, RED};
use icoglobe::light::{Light, LightType};
use icoglobe::procedural::RenderMesh;
use icoglobe::scene::{GlobeScene, Stage};
use kiss3d::prelude::{OrbitCamera3d, SceneNode3d, Vec3, Window};
use kiss3d::procedural::IndexBuffer;

/// Stage backed by a kiss3d window.
struct KissStage {
    window: Window,
    scene: SceneNode3d,
    camera: OrbitCamera3d,
    axes_length: Option<f32>,
}

impl KissStage {
    fn draw_axes(&mut self) {
        if let Some(length) = self.axes_length {
            for (axis, color) in [(Vec3::X, RED), (Vec3::Y, LIME), (Vec3::Z, BLUE)] {
                self.window
                    .draw_line(Vec3::ZERO, axis * length, color, 2.0, false);
            }
        }
    }
}

/// kiss3d's ambient term is a white intensity: the light color is ignored.
fn ambient_intensity(light: &Light) -> f32 {
    if light.enabled {
        light.intensity
    } else {
        0.0
    }
}

impl Stage for KissStage {
    type MeshHandle = SceneNode3d;

    fn set_background(&mut self, color: Color) {
        self.window.set_background_color(color);
    }

    fn set_camera(&mut self, eye: Vec3, at: Vec3) {
        self.camera = OrbitCamera3d::new(eye, at);
    }

    fn add_light(&mut self, light: Light, position: Vec3) {
        match light.light_type {
            LightType::Ambient => self.window.set_ambient(ambient_intensity(&light)),
            LightType::Point { attenuation_radius } => {
                let light = kiss3d::light::Light::point(attenuation_radius)
                    .with_color(light.color)
                    .with_intensity(light.intensity)
                    .with_enabled(light.enabled);
                self.scene.add_light(light).set_position(position);
            }
        }
    }

    fn add_axes(&mut self, length: f32) {
        self.axes_length = Some(length);
    }

    fn add_mesh(&mut self, mesh: RenderMesh, color: Color) -> SceneNode3d {
        let (coords, normals, uvs, indices) = mesh.into_parts();
        let mesh = kiss3d::procedural::RenderMesh::new(
            coords,
            Some(normals),
            Some(uvs),
            Some(IndexBuffer::Unified(indices)),
        );

        self.scene
            .add_render_mesh(mesh, Vec3::splat(1.0))
            .set_color(color)
    }

    fn set_mesh_color(&mut self, mesh: &mut SceneNode3d, color: Color) {
        mesh.set_color(color);
    }
}

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let mut stage = KissStage {
        window: Window::new("icoglobe").await,
        scene: SceneNode3d::empty(),
        camera: OrbitCamera3d::default(),
        axes_length: None,
    };

    let mut globe = match GlobeScene::default().install(&mut stage) {
        Ok(globe) => globe,
        Err(e) => {
            log::error!("cannot build the globe: {}", e);
            return;
        }
    };

    while stage
        .window
        .render_3d(&mut stage.scene, &mut stage.camera)
        .await
    {
        stage.draw_axes();

        let mut clicked = false;
        stage.window.draw_ui(|ctx| {
            clicked = globe.toggle_mut().show(ctx).is_some();
        });

        if clicked {
            globe.sync_color(&mut stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_ambient_light_adds_nothing() {
        let light = Light::ambient().with_intensity(0.8);

        assert_eq!(ambient_intensity(&light), 0.8);
        assert_eq!(ambient_intensity(&light.with_enabled(false)), 0.0);
    }
}

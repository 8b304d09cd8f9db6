//! Lighting configuration for the globe scene.
//!
//! Lights are plain descriptions. Where they end up (and how they are
//! shaded) is up to the [`Stage`](crate::scene::Stage) they are installed on.

use crate::color::Color;

/// The type of light source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightType {
    /// Light reaching every surface equally, regardless of position or normal.
    Ambient,

    /// A point light that emits light equally in all directions from a point.
    Point {
        /// Maximum distance the light affects. Beyond this distance, the light
        /// contribution is zero.
        attenuation_radius: f32,
    },
}

impl Default for LightType {
    fn default() -> Self {
        LightType::Point {
            attenuation_radius: 100.0,
        }
    }
}

/// A light source.
///
/// # Examples
/// ```
/// # use icoglobe::light::Light;
/// # use icoglobe::color::WHITE;
/// let ambient = Light::ambient().with_intensity(0.8);
/// let bulb = Light::point(100.0).with_color(WHITE).with_intensity(5.0);
/// assert!(ambient.enabled && bulb.enabled);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    /// The type of light.
    pub light_type: LightType,
    /// The color of the light (RGBA, each component 0.0-1.0).
    pub color: Color,
    /// The intensity multiplier for the light.
    pub intensity: f32,
    /// Whether the light is enabled.
    pub enabled: bool,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::default(),
            color: crate::color::WHITE,
            intensity: 3.0,
            enabled: true,
        }
    }
}

impl Light {
    /// Creates a white ambient light.
    pub fn ambient() -> Self {
        Self {
            light_type: LightType::Ambient,
            ..Default::default()
        }
    }

    /// Creates a point light with the given attenuation radius.
    ///
    /// # Arguments
    /// * `attenuation_radius` - Maximum distance the light affects
    pub fn point(attenuation_radius: f32) -> Self {
        Self {
            light_type: LightType::Point { attenuation_radius },
            ..Default::default()
        }
    }

    /// Sets the light color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the light intensity.
    ///
    /// # Arguments
    /// * `intensity` - Intensity multiplier (default: 3.0)
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Sets whether the light is enabled.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether this light lights every surface regardless of its position.
    pub fn is_ambient(&self) -> bool {
        self.light_type == LightType::Ambient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DARK_RED, WHITE};

    #[test]
    fn builders_only_touch_their_field() {
        let light = Light::point(20.0)
            .with_color(DARK_RED)
            .with_intensity(5.0)
            .with_enabled(false);

        assert_eq!(
            light.light_type,
            LightType::Point {
                attenuation_radius: 20.0
            }
        );
        assert_eq!(light.color, DARK_RED);
        assert_eq!(light.intensity, 5.0);
        assert!(!light.enabled);
    }

    #[test]
    fn ambient_defaults_to_white() {
        let light = Light::ambient();

        assert!(light.is_ambient());
        assert_eq!(light.color, WHITE);
        assert!(!Light::point(1.0).is_ambient());
    }
}

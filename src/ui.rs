//! The globe's color toggle button.
//!
//! The toggle is a two-state machine owned by the UI layer. It never touches
//! a material itself: each click yields the color the globe should now have,
//! and the caller forwards it to whatever renders the globe.

use crate::color::{self, Color};
use glamx::Vec2;

/// The two colors the globe alternates between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlobeColor {
    /// Dark blue.
    #[default]
    Blue,
    /// Dark red.
    Red,
}

impl GlobeColor {
    /// The material color for this state.
    pub fn color(self) -> Color {
        match self {
            GlobeColor::Blue => color::DARK_BLUE,
            GlobeColor::Red => color::DARK_RED,
        }
    }

    /// The other state.
    pub fn toggled(self) -> GlobeColor {
        match self {
            GlobeColor::Blue => GlobeColor::Red,
            GlobeColor::Red => GlobeColor::Blue,
        }
    }

    /// Label of the button while the globe has this color.
    ///
    /// The label announces what a click does, so it names the other color.
    pub fn button_label(self) -> &'static str {
        match self {
            GlobeColor::Blue => "Make Red",
            GlobeColor::Red => "Make Blue",
        }
    }
}

/// A button switching the globe between its two colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorToggle {
    state: GlobeColor,
    /// Top-left corner of the button, in logical pixels.
    pub position: Vec2,
    /// Size of the button, in logical pixels.
    pub size: Vec2,
}

impl Default for ColorToggle {
    fn default() -> Self {
        Self::new(GlobeColor::default())
    }
}

impl ColorToggle {
    /// Creates a toggle in the given state, placed at (100, 40) with a 40x40 size.
    pub fn new(state: GlobeColor) -> Self {
        Self {
            state,
            position: Vec2::new(100.0, 40.0),
            size: Vec2::new(40.0, 40.0),
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> GlobeColor {
        self.state
    }

    /// Current globe color.
    #[inline]
    pub fn color(&self) -> Color {
        self.state.color()
    }

    /// Current button label.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.state.button_label()
    }

    /// Handles a click: flips the state and returns the new globe color.
    pub fn click(&mut self) -> Color {
        self.state = self.state.toggled();
        log::debug!("globe color toggled to {:?}", self.state);
        self.state.color()
    }

    /// Draws the button and handles a click on it.
    ///
    /// Returns the new globe color if the button was clicked this frame.
    #[cfg(feature = "egui")]
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Color> {
        let clicked = egui::Area::new(egui::Id::new("icoglobe_color_toggle"))
            .fixed_pos(egui::pos2(self.position.x, self.position.y))
            .show(ctx, |ui| {
                ui.add_sized(
                    [self.size.x, self.size.y],
                    egui::Button::new(self.label()),
                )
                .clicked()
            })
            .inner;

        clicked.then(|| self.click())
    }
}

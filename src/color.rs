//! Color type and the named colors used by the globe scene.
//!
//! Colors are RGBA with components in the range [0.0, 1.0]. Named values are
//! taken from the [SVG/CSS3 named colors](https://www.w3.org/TR/css-color-3/#svg-color).
//!
//! # Example
//! ```
//! # use icoglobe::color::{self, Color};
//! let half_red = Color::new(color::DARK_RED.r, 0.0, 0.0, 0.5);
//! assert_eq!(half_red.a, 0.5);
//! ```

pub use rgb::Rgba;

/// The color type used throughout icoglobe. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// <div style="margin:2px 0"><span style="background-color:rgb(255, 255, 255);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>White (255, 255, 255)</div>
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(255, 0, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Red (255, 0, 0)</div>
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 255, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Lime (0, 255, 0) - CSS "lime", pure green</div>
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 0, 255);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Blue (0, 0, 255)</div>
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(139, 0, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Dark red (139, 0, 0)</div>
pub const DARK_RED: Color = Color::new(0.54509807, 0.0, 0.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 0, 139);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Dark blue (0, 0, 139)</div>
pub const DARK_BLUE: Color = Color::new(0.0, 0.0, 0.54509807, 1.0);

/// Neutral mid gray, (0.5, 0.5, 0.5). Slightly darker than CSS "gray".
pub const MID_GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

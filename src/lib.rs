/*!
# icoglobe

Procedural icosahedron meshes, and the small lit scene that shows one.

The heart of the crate is [`procedural::icosahedron`]: it builds the 12
vertices and 20 triangles of a regular icosahedron of a given radius, with
outward unit normals and (zeroed) texture coordinates, as parallel attribute
streams ready to be uploaded to a renderer. [`procedural::icosphere`]
subdivides the same solid into a geodesic sphere.

Around it, [`scene::GlobeScene`] describes the viewer: camera placement,
lights, axes, background and a button toggling the globe between dark blue
and dark red. Rendering itself is not done here. The scene is pushed into
any engine implementing [`scene::Stage`].

```
use icoglobe::prelude::*;

let globe = icosahedron(1.0).unwrap();
assert_eq!(globe.coords()[0], Vec3::X);
assert_eq!(globe.normals()[0], Vec3::X);
assert_eq!(globe.indices()[0], [0, 1, 2]);

let mut toggle = ColorToggle::default();
assert_eq!(toggle.label(), "Make Red");
assert_eq!(toggle.click(), DARK_RED);
```

## Features

* `serde`: (de)serialization of meshes, lights and the scene description.
* `egui`: `ColorToggle::show` draws the toggle button with egui.

## Diagnostics

The crate logs through the [`log`] facade. Vertex positions of each built
icosahedron are emitted at `trace` level under the `icoglobe::procedural`
target.
*/
#[cfg(feature = "egui")]
pub extern crate egui;

pub use glamx;

pub mod color;
pub mod error;
pub mod light;
pub mod procedural;
pub mod scene;
pub mod ui;

pub mod prelude {
    pub use crate::color::*;
    pub use crate::error::ProceduralError;
    pub use crate::light::*;
    pub use crate::procedural::{icosahedron, icosphere, unit_icosahedron, RenderMesh, Vertex};
    pub use crate::scene::*;
    pub use crate::ui::*;
    pub use glamx::{Vec2, Vec3};
}

//! Scene description and the stage it is installed on.

pub use self::globe_scene::{Globe, GlobeScene};
pub use self::stage::Stage;

mod globe_scene;
mod stage;

mod camera;
mod scene;
mod shading;

pub use camera::*;
pub use scene::*;
pub use shading::*;

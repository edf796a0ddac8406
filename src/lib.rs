//! Transform-matrix builders and a first-person camera for OpenGL-style render loops.
//!
//! [`math`] holds the vector/matrix types and the `translate`/`rotate`/`scale`/`look_at`/
//! `ortho`/`frustum`/`perspective` builders. [`gfx`] has the camera, glTF scene-graph math and a
//! CPU Phong reference. [`engine`] turns window input into camera and model updates once per
//! frame.

pub mod engine;
pub mod gfx;
pub mod math;
pub mod util;

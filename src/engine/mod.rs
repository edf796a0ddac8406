mod context;
mod input;

pub use context::*;
pub use input::*;

/// Tunables for the input handlers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Controls {
    /// World units the camera moves per key press.
    pub camera_step: f32,
    /// World units the model moves per key press.
    pub model_step: f32,
    /// Degrees per second the model spins while animating.
    pub spin_rate: f32,
}

impl Default for Controls {
    #[inline]
    fn default() -> Controls {
        Controls {
            camera_step: 0.1,
            model_step: 0.1,
            spin_rate: 30.0,
        }
    }
}

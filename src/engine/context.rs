use crate::{
    engine::{Action, Controls, Direction, InputEvent, InputQueue, KeyState},
    gfx::Camera,
    math::{rotate, translate, wrap_degrees, Matrix4, Vector2, Vector3},
};
use bitflags::bitflags;
use log::{debug, trace, warn};

bitflags! {
    /// Which cached matrices need rebuilding before the next draw.
    pub struct Dirty: u8 {
        const VIEW = 0b001;
        const PROJECTION = 0b010;
        const MODEL = 0b100;
    }
}

/// Everything the render loop reads and the input handlers write, passed around explicitly.
#[derive(Debug)]
pub struct RenderContext {
    camera: Camera,
    controls: Controls,

    /// Framebuffer size in pixels.
    viewport: Vector2,
    model_offset: Vector3,
    /// Spin about +y in degrees.
    angle: f32,
    animating: bool,
    close_requested: bool,

    dirty: Dirty,
    view: Matrix4,
    projection: Matrix4,
    model: Matrix4,
}

impl RenderContext {
    pub fn new(camera: Camera, controls: Controls) -> RenderContext {
        RenderContext {
            camera,
            controls,
            viewport: Vector2::new(1.0, 1.0),
            model_offset: Vector3::splat(0.0),
            angle: 0.0,
            animating: false,
            close_requested: false,
            dirty: Dirty::all(),
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
            model: Matrix4::identity(),
        }
    }

    /// Apply a frame's worth of events in the order they arrived.
    pub fn drain(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.handle(event);
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
            } => self.apply(Action::for_key(key)),
            InputEvent::Key { .. } => {}
            InputEvent::Resized { width, height } => self.resize(width, height),
            InputEvent::CloseRequested => self.close_requested = true,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCamera(direction) => {
                let step = self.controls.camera_step;
                match direction {
                    Direction::Forward => self.camera.move_forward(step),
                    Direction::Backward => self.camera.move_backward(step),
                    Direction::Left => self.camera.move_left(step),
                    Direction::Right => self.camera.move_right(step),
                }
                self.dirty |= Dirty::VIEW;
            }
            Action::TranslateModel { x, y } => {
                let step = self.controls.model_step;
                self.model_offset += Vector3::new(f32::from(x) * step, f32::from(y) * step, 0.0);
                self.dirty |= Dirty::MODEL;
            }
            Action::ToggleProjection => {
                self.camera.toggle_mode();
                debug!("Projection mode: {:?}", self.camera.mode());
                self.dirty |= Dirty::PROJECTION;
            }
            Action::ToggleAnimation => {
                self.animating = !self.animating;
                debug!("{}", if self.animating { "animation" } else { "no animation" });
            }
            Action::Close => self.close_requested = true,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            // Minimized windows report a zero-height framebuffer
            warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.viewport = (width, height).into();
        self.dirty |= Dirty::PROJECTION;
    }

    /// Advance the spin animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.animating {
            self.angle = wrap_degrees(self.angle + self.controls.spin_rate * dt);
            self.dirty |= Dirty::MODEL;
        }
    }

    /// Rebuild whichever matrices changed since the last call.
    pub fn update_matrices(&mut self) {
        if self.dirty.contains(Dirty::VIEW) {
            self.view = self.camera.view_matrix();
        }
        if self.dirty.contains(Dirty::PROJECTION) {
            self.projection = self.camera.projection_matrix(self.aspect());
        }
        if self.dirty.contains(Dirty::MODEL) {
            let o = self.model_offset;
            self.model = translate(o.x(), o.y(), o.z()) * rotate(self.angle, 0.0, 1.0, 0.0);
        }
        if !self.dirty.is_empty() {
            trace!("Rebuilt {:?}", self.dirty);
        }
        self.dirty = Dirty::empty();
    }

    /// `Projection * View * Model` for this frame.
    pub fn pvm(&mut self) -> Matrix4 {
        self.update_matrices();
        self.projection * self.view * self.model
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access marks every camera-derived matrix dirty.
    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.dirty |= Dirty::VIEW | Dirty::PROJECTION;
        &mut self.camera
    }

    #[inline]
    pub fn viewport(&self) -> Vector2 {
        self.viewport
    }

    /// Viewport width / height.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.viewport.x() / self.viewport.y()
    }

    /// The model matrix as of the last [`RenderContext::update_matrices`].
    #[inline]
    pub fn model_matrix(&self) -> Matrix4 {
        self.model
    }

    #[inline]
    pub fn model_offset(&self) -> Vector3 {
        self.model_offset
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[inline]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    #[inline]
    pub fn dirty(&self) -> Dirty {
        self.dirty
    }
}

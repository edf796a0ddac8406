use crate::math::{look_at, ortho, perspective, scale, Matrix4, Vector3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerspectiveProjection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthographicProjection {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    Perspective(PerspectiveProjection),
    Orthographic(OrthographicProjection),
}

impl Projection {
    #[inline]
    pub fn mode(&self) -> ProjectionMode {
        match self {
            Projection::Perspective(_) => ProjectionMode::Perspective,
            Projection::Orthographic(_) => ProjectionMode::Ortho,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProjectionMode {
    Perspective,
    Ortho,
}

impl ProjectionMode {
    #[inline]
    pub fn toggled(self) -> ProjectionMode {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Ortho,
            ProjectionMode::Ortho => ProjectionMode::Perspective,
        }
    }
}

/// The active projection, carrying the parameters of the inactive one alongside it.
#[derive(Copy, Clone, Debug, PartialEq)]
enum ProjectionState {
    Perspective {
        active: PerspectiveProjection,
        saved: OrthographicProjection,
    },
    Orthographic {
        active: OrthographicProjection,
        saved: PerspectiveProjection,
    },
}

impl ProjectionState {
    #[inline]
    fn toggled(self) -> ProjectionState {
        match self {
            ProjectionState::Perspective { active, saved } => ProjectionState::Orthographic {
                active: saved,
                saved: active,
            },
            ProjectionState::Orthographic { active, saved } => ProjectionState::Perspective {
                active: saved,
                saved: active,
            },
        }
    }
}

/// A first-person camera.
///
/// Only one projection is active at a time, but the parameters of the other one are kept around
/// so switching modes back and forth is lossless. Nothing here validates the configuration; a
/// `near >= far` camera just renders garbage.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vector3,
    front: Vector3,
    up: Vector3,
    near: f32,
    far: f32,
    state: ProjectionState,
}

impl Default for Camera {
    /// At the origin looking down -z through a unit orthographic box.
    fn default() -> Camera {
        Camera {
            position: Vector3::splat(0.0),
            front: Vector3::forward(),
            up: Vector3::up(),
            near: 0.1,
            far: 100.0,
            state: ProjectionState::Orthographic {
                active: OrthographicProjection {
                    left: -1.0,
                    right: 1.0,
                    bottom: -1.0,
                    top: 1.0,
                },
                saved: PerspectiveProjection { fovy: 45.0 },
            },
        }
    }
}

impl Camera {
    #[inline]
    pub fn mode(&self) -> ProjectionMode {
        self.projection().mode()
    }

    /// Switch projection. Position and orientation are untouched.
    #[inline]
    pub fn set_mode(&mut self, mode: ProjectionMode) {
        if mode != self.mode() {
            self.state = self.state.toggled();
        }
    }

    #[inline]
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode().toggled());
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        match self.state {
            ProjectionState::Perspective { active, .. } => Projection::Perspective(active),
            ProjectionState::Orthographic { active, .. } => Projection::Orthographic(active),
        }
    }

    #[inline]
    pub fn move_forward(&mut self, delta: f32) {
        self.position += self.front * delta;
    }

    #[inline]
    pub fn move_backward(&mut self, delta: f32) {
        self.position -= self.front * delta;
    }

    #[inline]
    pub fn move_left(&mut self, delta: f32) {
        self.position -= self.right_direction() * delta;
    }

    #[inline]
    pub fn move_right(&mut self, delta: f32) {
        self.position += self.right_direction() * delta;
    }

    #[inline]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    #[inline]
    pub fn front_direction(&self) -> Vector3 {
        self.front
    }

    #[inline]
    pub fn up_direction(&self) -> Vector3 {
        self.up
    }

    /// `front x up`, normalized.
    #[inline]
    pub fn right_direction(&self) -> Vector3 {
        self.front.cross(self.up).normalized()
    }

    /// Both directions are normalized; they should not be parallel.
    #[inline]
    pub fn set_orientation(&mut self, front: Vector3, up: Vector3) {
        self.front = front.normalized();
        self.up = up.normalized();
    }

    #[inline]
    pub fn near(&self) -> f32 {
        self.near
    }

    #[inline]
    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    #[inline]
    pub fn far(&self) -> f32 {
        self.far
    }

    #[inline]
    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    #[inline]
    pub fn fovy(&self) -> f32 {
        self.perspective().fovy
    }

    #[inline]
    pub fn set_fovy(&mut self, fovy: f32) {
        self.perspective_mut().fovy = fovy;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.orthographic().left
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.orthographic().right
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.orthographic().bottom
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.orthographic().top
    }

    #[inline]
    pub fn set_extents(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        *self.orthographic_mut() = OrthographicProjection {
            left,
            right,
            bottom,
            top,
        };
    }

    /// `look_at(position, position + front, up)`
    #[inline]
    pub fn view_matrix(&self) -> Matrix4 {
        look_at(self.position, self.position + self.front, self.up)
    }

    /// The active projection. `aspect` (width / height) only matters in perspective mode.
    ///
    /// In orthographic mode the camera looks down -z, so view-space z is flipped before the
    /// `[near, far]` box is mapped onto the clip cube.
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4 {
        match self.projection() {
            Projection::Perspective(p) => perspective(p.fovy, aspect, self.near, self.far),
            Projection::Orthographic(o) => {
                ortho(o.left, o.right, o.bottom, o.top, self.near, self.far)
                    * scale(1.0, 1.0, -1.0)
            }
        }
    }

    fn perspective(&self) -> &PerspectiveProjection {
        match &self.state {
            ProjectionState::Perspective { active, .. } => active,
            ProjectionState::Orthographic { saved, .. } => saved,
        }
    }

    fn perspective_mut(&mut self) -> &mut PerspectiveProjection {
        match &mut self.state {
            ProjectionState::Perspective { active, .. } => active,
            ProjectionState::Orthographic { saved, .. } => saved,
        }
    }

    fn orthographic(&self) -> &OrthographicProjection {
        match &self.state {
            ProjectionState::Orthographic { active, .. } => active,
            ProjectionState::Perspective { saved, .. } => saved,
        }
    }

    fn orthographic_mut(&mut self) -> &mut OrthographicProjection {
        match &mut self.state {
            ProjectionState::Orthographic { active, .. } => active,
            ProjectionState::Perspective { saved, .. } => saved,
        }
    }
}

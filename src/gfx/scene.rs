//! Scene-graph math for glTF-style scenes. Parsing the file is somebody else's job; this takes
//! the already-decoded node and camera properties and turns them into matrices.

use crate::math::{ortho, perspective, scale, translate, Matrix4, Quaternion, Scalar, Vector3};
use log::warn;
use smallvec::SmallVec;

/// A node's local transform, either as a raw matrix or as translation/rotation/scale.
#[derive(Copy, Clone, Debug)]
pub enum NodeTransform {
    Matrix(Matrix4),
    Decomposed {
        translation: Vector3,
        rotation: Quaternion,
        scale: Vector3,
    },
}

impl Default for NodeTransform {
    #[inline]
    fn default() -> NodeTransform {
        NodeTransform::Decomposed {
            translation: Vector3::splat(0.0),
            rotation: Quaternion::identity(),
            scale: Vector3::splat(1.0),
        }
    }
}

impl NodeTransform {
    /// The local-to-parent matrix, `T * R * S`.
    pub fn matrix(&self) -> Matrix4 {
        match *self {
            NodeTransform::Matrix(m) => m,
            NodeTransform::Decomposed {
                translation: t,
                rotation,
                scale: s,
            } => {
                let r: Matrix4 = rotation.normalized().into();
                translate(t.x(), t.y(), t.z()) * r * scale(s.x(), s.y(), s.z())
            }
        }
    }

    /// The inverse of [`NodeTransform::matrix`]: the view matrix when this node carries a camera.
    pub fn view_matrix(&self) -> Matrix4 {
        match *self {
            NodeTransform::Matrix(m) => m.inverse_affine(),
            NodeTransform::Decomposed {
                translation: t,
                rotation,
                scale: s,
            } => {
                let r: Matrix4 = rotation.normalized().into();
                scale(1.0 / s.x(), 1.0 / s.y(), 1.0 / s.z())
                    * r.transpose()
                    * translate(-t.x(), -t.y(), -t.z())
            }
        }
    }
}

/// The projection part of a glTF camera.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SceneCamera {
    Perspective {
        /// Vertical field of view in radians.
        yfov: f32,
        /// Falls back to the viewport's aspect ratio when absent.
        aspect_ratio: Option<f32>,
        znear: f32,
        zfar: f32,
    },
    Orthographic {
        xmag: f32,
        ymag: f32,
        znear: f32,
        zfar: f32,
    },
}

impl SceneCamera {
    /// glTF cameras look down -z with positive `znear`/`zfar`, so the orthographic box is taken
    /// over flipped view-space z.
    pub fn projection(&self, viewport_aspect: f32) -> Matrix4 {
        match *self {
            SceneCamera::Perspective {
                yfov,
                aspect_ratio,
                znear,
                zfar,
            } => perspective(
                yfov.degrees(),
                aspect_ratio.unwrap_or(viewport_aspect),
                znear,
                zfar,
            ),
            SceneCamera::Orthographic {
                xmag,
                ymag,
                znear,
                zfar,
            } => ortho(-xmag, xmag, -ymag, ymag, znear, zfar) * scale(1.0, 1.0, -1.0),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    pub transform: NodeTransform,
    pub children: SmallVec<[usize; 8]>,
}

/// Compose every node reachable from `roots` with its ancestors: `world = parent * local`.
///
/// Returns one matrix per node in `nodes`; unreachable nodes get `None`.
pub fn world_matrices(nodes: &[SceneNode], roots: &[usize]) -> Vec<Option<Matrix4>> {
    let mut world = vec![None; nodes.len()];
    let mut search_stack: SmallVec<[(usize, Matrix4); 16]> = roots
        .iter()
        .map(|&root| (root, Matrix4::identity()))
        .collect();

    while let Some((id, parent)) = search_stack.pop() {
        let node = match nodes.get(id) {
            Some(node) => node,
            None => {
                warn!("Scene node {} does not exist", id);
                continue;
            }
        };
        if world[id].is_some() {
            warn!("Scene node {} is reachable twice, keeping the first path", id);
            continue;
        }
        let matrix = parent * node.transform.matrix();
        world[id] = Some(matrix);
        search_stack.extend(node.children.iter().map(|&child| (child, matrix)));
    }
    world
}

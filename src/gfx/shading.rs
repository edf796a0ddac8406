use crate::math::{Vector3, Vector4};

/// A point light in world coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vector3,
    pub ambient: Vector4,
    pub diffuse: Vector4,
    pub specular: Vector4,
}

impl Default for Light {
    #[inline]
    fn default() -> Light {
        Light {
            position: Vector3::new(3.0, 5.0, 10.0),
            ambient: Vector4::splat(1.0),
            diffuse: Vector4::splat(1.0),
            specular: Vector4::splat(1.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vector4,
    pub diffuse: Vector4,
    pub specular: Vector4,
    pub shininess: f32,
}

impl Default for Material {
    /// Shiny red plastic.
    #[inline]
    fn default() -> Material {
        Material {
            ambient: Vector4::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Vector4::new(1.0, 0.0, 0.0, 1.0),
            specular: Vector4::splat(1.0),
            shininess: 100.0,
        }
    }
}

/// Phong reflection at a world-space surface point: ambient, plus diffuse scaled by `max(0, n.l)`,
/// plus specular scaled by `max(0, r.v)^shininess`. Alpha is summed like the other channels.
pub fn phong(
    light: &Light,
    material: &Material,
    position: Vector3,
    normal: Vector3,
    view_position: Vector3,
) -> Vector4 {
    let n = normal.normalized();
    let l = (light.position - position).normalized();
    let r = (-l).reflected(n);
    let v = (view_position - position).normalized();

    let ambient = light.ambient * material.ambient;

    let n_dot_l = n.dot(l).max(0.0);
    let diffuse = light.diffuse * material.diffuse * n_dot_l;

    // No highlight on faces turned away from the light
    let r_dot_v = if n_dot_l > 0.0 { r.dot(v).max(0.0) } else { 0.0 };
    let specular = light.specular * material.specular * r_dot_v.powf(material.shininess);

    ambient + diffuse + specular
}

#[cfg(test)]
mod test {
    use super::*;

    fn white_light_at(position: Vector3) -> Light {
        Light {
            position,
            ambient: Vector4::new(0.1, 0.1, 0.1, 1.0),
            ..Light::default()
        }
    }

    #[test]
    fn ambient_only_when_facing_away() {
        let light = white_light_at(Vector3::new(0.0, -10.0, 0.0));
        let material = Material {
            ambient: Vector4::new(1.0, 0.5, 0.0, 1.0),
            ..Material::default()
        };
        let color = phong(
            &light,
            &material,
            Vector3::splat(0.0),
            Vector3::up(),
            Vector3::new(0.0, 10.0, 0.0),
        );
        assert_eq!(Vector4::new(0.1, 0.05, 0.0, 1.0), color);
    }

    #[test]
    fn head_on_light_is_fully_lit() {
        // Light, eye and normal all line up: full diffuse and a full highlight
        let light = white_light_at(Vector3::new(0.0, 0.0, 5.0));
        let material = Material::default();
        let color = phong(
            &light,
            &material,
            Vector3::splat(0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, 3.0),
        );
        // black ambient + red diffuse + white specular
        assert!((color - Vector4::new(2.0, 1.0, 1.0, 3.0)).length() < 1e-5, "{:?}", color);
    }

    #[test]
    fn diffuse_falls_off_with_angle() {
        let light = Light {
            ambient: Vector4::splat(0.0),
            specular: Vector4::splat(0.0),
            ..white_light_at(Vector3::new(1.0, 1.0, 0.0))
        };
        let color = phong(
            &light,
            &Material::default(),
            Vector3::splat(0.0),
            Vector3::up(),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((color.x() - expected).abs() < 1e-5);
        assert_eq!(0.0, color.y());
    }
}

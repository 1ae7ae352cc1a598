use glam::{Mat4, Vec3};

use crate::geometry::MeshData;
use crate::primitives;

/// Phong material constants uploaded per object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub specular_intensity: f32,
    pub shininess: f32,
}

impl Material {
    pub const SHINY: Self = Self {
        specular_intensity: 1.0,
        shininess: 16.0,
    };

    pub const DULL: Self = Self {
        specular_intensity: 0.3,
        shininess: 4.0,
    };
}

/// The scene's single directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub ambient_intensity: f32,
    /// Direction the light travels, not necessarily unit length.
    pub direction: Vec3,
    pub diffuse_intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            ambient_intensity: 0.05,
            direction: Vec3::new(1.0, 0.0, -1.0),
            diffuse_intensity: 0.5,
        }
    }
}

/// Projection mode, toggled at runtime by the `ToggleProjection` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

impl Projection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }

    pub fn matrix(self, aspect: f32) -> Mat4 {
        match self {
            Self::Perspective => {
                Mat4::perspective_rh(45.0_f32.to_radians(), aspect.max(0.01), 0.1, 100.0)
            }
            Self::Orthographic => Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0),
        }
    }
}

/// The meshes the demo builds at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshId {
    Plane,
    Cube,
    RectPrism,
    Cylinder,
    Sphere,
    Circle,
}

impl MeshId {
    pub const ALL: [Self; 6] = [
        Self::Plane,
        Self::Cube,
        Self::RectPrism,
        Self::Cylinder,
        Self::Sphere,
        Self::Circle,
    ];

    pub fn build(self) -> MeshData {
        match self {
            Self::Plane => primitives::plane(),
            Self::Cube => primitives::cube(),
            Self::RectPrism => primitives::rectangular_prism(),
            Self::Cylinder => primitives::cylinder(),
            Self::Sphere => primitives::sphere(),
            Self::Circle => primitives::circle(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Cube => "cube",
            Self::RectPrism => "rect-prism",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
            Self::Circle => "circle",
        }
    }
}

/// The textures the desk objects sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Wood,
    Black,
    Design,
    Gray,
    Blue,
    Mesh,
}

impl TextureId {
    pub const ALL: [Self; 6] = [
        Self::Wood,
        Self::Black,
        Self::Design,
        Self::Gray,
        Self::Blue,
        Self::Mesh,
    ];

    /// File name looked up in the texture directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Wood => "woodTex.jpg",
            Self::Black => "blackTex.jpg",
            Self::Design => "designTex.jpg",
            Self::Gray => "grayTex.jpg",
            Self::Blue => "blueTex.jpg",
            Self::Mesh => "meshTex.jpg",
        }
    }

    /// Solid color substituted when the texture file cannot be loaded.
    pub fn fallback_color(self) -> [u8; 4] {
        match self {
            Self::Wood => [150, 111, 51, 255],
            Self::Black => [20, 20, 20, 255],
            Self::Design => [120, 40, 40, 255],
            Self::Gray => [128, 128, 128, 255],
            Self::Blue => [40, 70, 180, 255],
            Self::Mesh => [60, 60, 70, 255],
        }
    }
}

/// One drawable object: a mesh instance with its texture, material and
/// model transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub name: &'static str,
    pub mesh: MeshId,
    pub texture: TextureId,
    pub material: Material,
    pub transform: Mat4,
}

/// Builds a model matrix from translation, per-axis rotation in degrees
/// (applied Z then Y then X) and scale.
pub fn model_matrix(translation: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Mat4 {
    let rotation = Mat4::from_rotation_z(rotation_degrees.z.to_radians())
        * Mat4::from_rotation_y(rotation_degrees.y.to_radians())
        * Mat4::from_rotation_x(rotation_degrees.x.to_radians());
    Mat4::from_translation(translation) * rotation * Mat4::from_scale(scale)
}

/// The fixed desk scene: floor, mousepad, keyboard with a keycap grid, and a
/// mic stand with boom, spherical mic and circular base.
pub fn desk_scene() -> Vec<SceneNode> {
    let mut nodes = vec![
        SceneNode {
            name: "floor",
            mesh: MeshId::Plane,
            texture: TextureId::Wood,
            material: Material::DULL,
            transform: model_matrix(
                Vec3::new(0.0, -1.0, -2.0),
                Vec3::ZERO,
                Vec3::new(10.0, 1.0, 10.0),
            ),
        },
        SceneNode {
            name: "mousepad",
            mesh: MeshId::Cube,
            texture: TextureId::Design,
            material: Material::DULL,
            transform: model_matrix(
                Vec3::new(2.5, -2.0, -1.0),
                Vec3::new(0.0, 0.0, -90.0),
                Vec3::new(2.05, 4.0, 4.0),
            ),
        },
        SceneNode {
            name: "keyboard",
            mesh: MeshId::RectPrism,
            texture: TextureId::Black,
            material: Material::DULL,
            transform: model_matrix(
                Vec3::new(-2.2, -0.89, -1.5),
                Vec3::new(0.0, 90.0, 0.0),
                Vec3::new(1.0, 0.1, 2.0),
            ),
        },
    ];

    // 4x10 keycap grid above the keyboard; the reference skips the final
    // grid position, leaving 39 caps.
    let keycap_start = Vec3::new(-4.0, -0.35, -2.2);
    let (rows, cols) = (4, 10);
    let spacing = 0.11;
    for row in 0..rows {
        for col in 0..cols {
            if row == rows - 1 && col == cols - 1 {
                continue;
            }
            let offset = Vec3::new(
                col as f32 * (0.25 + spacing),
                -0.50,
                row as f32 * (0.30 + spacing),
            );
            nodes.push(SceneNode {
                name: "keycap",
                mesh: MeshId::Cube,
                texture: TextureId::Gray,
                material: Material::DULL,
                transform: model_matrix(
                    keycap_start + offset,
                    Vec3::new(0.0, 0.0, -90.0),
                    Vec3::new(0.1, -0.1, -0.1),
                ),
            });
        }
    }

    nodes.extend([
        SceneNode {
            name: "mic-stand",
            mesh: MeshId::Cylinder,
            texture: TextureId::Blue,
            material: Material::DULL,
            transform: model_matrix(
                Vec3::new(-2.2, 0.0, -3.5),
                Vec3::ZERO,
                Vec3::new(0.2, 3.0, 0.2),
            ),
        },
        SceneNode {
            name: "mic-boom",
            mesh: MeshId::Cylinder,
            texture: TextureId::Blue,
            material: Material::DULL,
            transform: model_matrix(
                Vec3::new(-2.2, 1.55, -3.0),
                Vec3::new(90.0, 0.0, 0.0),
                Vec3::new(0.2, 3.0, 0.2),
            ),
        },
        SceneNode {
            name: "mic",
            mesh: MeshId::Sphere,
            texture: TextureId::Mesh,
            material: Material::SHINY,
            transform: model_matrix(
                Vec3::new(-2.2, 1.55, -1.5),
                Vec3::ZERO,
                Vec3::splat(0.5),
            ),
        },
        SceneNode {
            name: "stand-base",
            mesh: MeshId::Circle,
            texture: TextureId::Blue,
            material: Material::DULL,
            transform: model_matrix(
                Vec3::new(-2.2, -0.95, -3.5),
                Vec3::new(-90.0, 0.0, 0.0),
                Vec3::ONE,
            ),
        },
    ]);

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desk_scene_has_expected_node_counts() {
        let nodes = desk_scene();
        assert_eq!(nodes.len(), 46);
        let keycaps = nodes.iter().filter(|n| n.name == "keycap").count();
        assert_eq!(keycaps, 39);
        for name in ["floor", "mousepad", "keyboard", "mic-stand", "mic-boom", "mic", "stand-base"]
        {
            assert_eq!(nodes.iter().filter(|n| n.name == name).count(), 1);
        }
    }

    #[test]
    fn every_mesh_is_used_by_the_scene() {
        let nodes = desk_scene();
        for mesh in MeshId::ALL {
            assert!(
                nodes.iter().any(|n| n.mesh == mesh),
                "{} unused",
                mesh.label()
            );
        }
    }

    #[test]
    fn mic_is_the_only_shiny_object() {
        let nodes = desk_scene();
        let shiny: Vec<_> = nodes
            .iter()
            .filter(|n| n.material == Material::SHINY)
            .collect();
        assert_eq!(shiny.len(), 1);
        assert_eq!(shiny[0].name, "mic");
        assert_eq!(shiny[0].texture, TextureId::Mesh);
    }

    #[test]
    fn floor_transform_scales_and_drops_the_plane() {
        let nodes = desk_scene();
        let floor = nodes.iter().find(|n| n.name == "floor").unwrap();
        let corner = floor.transform.transform_point3(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(corner, Vec3::new(10.0, -1.0, 8.0));
    }

    #[test]
    fn model_matrix_composes_translate_rotate_scale() {
        let matrix = model_matrix(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 90.0, 0.0),
            Vec3::splat(2.0),
        );
        // +X scaled to length 2, rotated 90 degrees about Y onto -Z, then
        // translated.
        let mapped = matrix.transform_point3(Vec3::X);
        assert!((mapped - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn projection_toggle_alternates_modes() {
        let projection = Projection::Perspective;
        assert_eq!(projection.toggled(), Projection::Orthographic);
        assert_eq!(projection.toggled().toggled(), Projection::Perspective);
    }

    #[test]
    fn projection_matrices_are_finite() {
        for projection in [Projection::Perspective, Projection::Orthographic] {
            let matrix = projection.matrix(16.0 / 9.0);
            assert!(matrix.to_cols_array().iter().all(|v| v.is_finite()));
        }
        // A degenerate aspect ratio must not produce NaNs either.
        let matrix = Projection::Perspective.matrix(0.0);
        assert!(matrix.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn texture_ids_map_to_reference_files() {
        assert_eq!(TextureId::Wood.file_name(), "woodTex.jpg");
        assert_eq!(TextureId::Mesh.file_name(), "meshTex.jpg");
        for texture in TextureId::ALL {
            assert_eq!(texture.fallback_color()[3], 255);
        }
    }
}

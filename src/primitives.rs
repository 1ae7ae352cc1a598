//! Hard-coded and parametric meshes for the desk scene.
//!
//! All builders return interleaved [`MeshData`]. The flat-sided shapes run
//! the smooth-normal generator; the curved shapes carry analytic normals.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::geometry::MeshData;

/// Latitude/longitude resolution of the UV sphere.
pub const SPHERE_SEGMENTS: (u32, u32) = (16, 32);
/// Rim resolution of the cylinder sides and the circle fan.
pub const RING_SEGMENTS: u32 = 64;

/// Flat unit quad in the XZ plane, extents +-1 at y = 0, facing +Y.
pub fn plane() -> MeshData {
    #[rustfmt::skip]
    let vertices = vec![
        // position          tex coord  normal
        -1.0, 0.0,  1.0,     0.0, 0.0,  0.0, 0.0, 0.0,
         1.0, 0.0,  1.0,     1.0, 0.0,  0.0, 0.0, 0.0,
         1.0, 0.0, -1.0,     1.0, 1.0,  0.0, 0.0, 0.0,
        -1.0, 0.0, -1.0,     0.0, 1.0,  0.0, 0.0, 0.0,
    ];
    let mut mesh = MeshData::new(vertices, vec![0, 1, 2, 0, 2, 3]);
    mesh.generate_smooth_normals();
    mesh
}

/// Unit cube from eight shared corner vertices, smooth corner normals.
pub fn cube() -> MeshData {
    box_mesh(0.5)
}

/// Rectangular prism with extents +-1; same topology as the cube.
pub fn rectangular_prism() -> MeshData {
    box_mesh(1.0)
}

fn box_mesh(extent: f32) -> MeshData {
    let e = extent;
    #[rustfmt::skip]
    let vertices = vec![
        // position     tex coord  normal
        -e, -e,  e,     0.0, 1.0,  0.0, 0.0, 0.0,
         e, -e,  e,     1.0, 1.0,  0.0, 0.0, 0.0,
         e,  e,  e,     1.0, 0.0,  0.0, 0.0, 0.0,
        -e,  e,  e,     0.0, 0.0,  0.0, 0.0, 0.0,
        -e, -e, -e,     1.0, 0.0,  0.0, 0.0, 0.0,
         e, -e, -e,     0.0, 0.0,  0.0, 0.0, 0.0,
         e,  e, -e,     1.0, 1.0,  0.0, 0.0, 0.0,
        -e,  e, -e,     0.0, 1.0,  0.0, 0.0, 0.0,
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,  2, 3, 0, // front
        1, 5, 6,  6, 2, 1, // right
        7, 6, 5,  5, 4, 7, // back
        4, 0, 3,  3, 7, 4, // left
        4, 5, 1,  1, 0, 4, // bottom
        3, 2, 6,  6, 7, 3, // top
    ];
    let mut mesh = MeshData::new(vertices, indices);
    mesh.generate_smooth_normals();
    mesh
}

/// Capped cylinder of radius 0.5 and height 1 around the Y axis.
pub fn cylinder() -> MeshData {
    let segments = RING_SEGMENTS;
    let radius = 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side wall: paired bottom/top rings with radial normals. The seam
    // vertex is duplicated so texture coordinates can wrap.
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let (x, z) = (radius * cos, radius * sin);
        let u = i as f32 / segments as f32;
        vertices.extend_from_slice(&[x, -0.5, z, u, 1.0, cos, 0.0, sin]);
        vertices.extend_from_slice(&[x, 0.5, z, u, 0.0, cos, 0.0, sin]);
    }
    for i in 0..segments {
        let bottom = 2 * i;
        let top = bottom + 1;
        let next_bottom = 2 * (i + 1);
        let next_top = next_bottom + 1;
        indices.extend_from_slice(&[bottom, top, next_top, bottom, next_top, next_bottom]);
    }

    // Caps: a center vertex plus a rim ring each, axial normals.
    for (y, normal_y) in [(-0.5, -1.0), (0.5, 1.0)] {
        let center = (vertices.len() / crate::geometry::VERTEX_STRIDE) as u32;
        vertices.extend_from_slice(&[0.0, y, 0.0, 0.5, 0.5, 0.0, normal_y, 0.0]);
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            let (u, v) = (0.5 + 0.5 * cos, 0.5 + 0.5 * sin);
            vertices.extend_from_slice(&[radius * cos, y, radius * sin, u, v, 0.0, normal_y, 0.0]);
        }
        for i in 0..segments {
            let rim = center + 1 + i;
            if normal_y < 0.0 {
                indices.extend_from_slice(&[center, rim, rim + 1]);
            } else {
                indices.extend_from_slice(&[center, rim + 1, rim]);
            }
        }
    }

    MeshData::new(vertices, indices)
}

/// UV sphere of radius 0.5; normals are the normalized vertex positions.
pub fn sphere() -> MeshData {
    let (lat_segments, lon_segments) = SPHERE_SEGMENTS;
    let radius = 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for lat in 0..=lat_segments {
        let theta = lat as f32 * PI / lat_segments as f32;
        for lon in 0..=lon_segments {
            let phi = lon as f32 * TAU / lon_segments as f32;
            let normal = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            let position = normal * radius;
            let u = lon as f32 / lon_segments as f32;
            let v = lat as f32 / lat_segments as f32;
            vertices.extend_from_slice(&[
                position.x, position.y, position.z, u, v, normal.x, normal.y, normal.z,
            ]);
        }
    }

    for lat in 0..lat_segments {
        for lon in 0..lon_segments {
            let current = lat * (lon_segments + 1) + lon;
            let next = (lat + 1) * (lon_segments + 1) + lon;
            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[next, next + 1, current + 1]);
        }
    }

    MeshData::new(vertices, indices)
}

/// Filled circle of radius 0.5 in the XY plane, facing +Z.
pub fn circle() -> MeshData {
    let segments = RING_SEGMENTS;
    let radius = 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let u = i as f32 / segments as f32;
        vertices.extend_from_slice(&[radius * cos, radius * sin, 0.0, u, 0.5, 0.0, 0.0, 1.0]);
    }
    // Fan from the first rim vertex; the final rim vertex coincides with it.
    for i in 1..segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    MeshData::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::VERTEX_STRIDE;

    const TOLERANCE: f32 = 1e-5;

    fn assert_unit_normals(mesh: &MeshData) {
        for i in 0..mesh.vertex_count() {
            assert!(
                (mesh.normal(i).length() - 1.0).abs() < TOLERANCE,
                "normal {i} is not unit length"
            );
        }
    }

    fn assert_indices_in_bounds(mesh: &MeshData) {
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&index| index < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn plane_is_flat_and_up_facing() {
        let mesh = plane();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        for i in 0..mesh.vertex_count() {
            assert!((mesh.normal(i) - Vec3::Y).length() < TOLERANCE);
        }
    }

    #[test]
    fn cube_has_smooth_corner_normals() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert_unit_normals(&mesh);
        // Every corner normal points away from the center, along the corner
        // diagonal of its octant.
        for i in 0..mesh.vertex_count() {
            let direction = mesh.position(i).normalize();
            assert!(mesh.normal(i).dot(direction) > 0.9);
        }
    }

    #[test]
    fn prism_matches_cube_topology_at_double_extent() {
        let mesh = rectangular_prism();
        assert_eq!(mesh.indices, cube().indices);
        assert_eq!(mesh.position(0), Vec3::new(-1.0, -1.0, 1.0));
        assert_unit_normals(&mesh);
    }

    #[test]
    fn cylinder_side_normals_are_radial() {
        let mesh = cylinder();
        assert_indices_in_bounds(&mesh);
        assert_unit_normals(&mesh);
        // Side vertices come first: their normals have no Y component and
        // point straight out from the axis.
        for i in 0..(2 * (RING_SEGMENTS as usize + 1)) {
            let normal = mesh.normal(i);
            assert!(normal.y.abs() < TOLERANCE);
            let radial = Vec3::new(mesh.position(i).x, 0.0, mesh.position(i).z).normalize();
            assert!((normal - radial).length() < 1e-4);
        }
    }

    #[test]
    fn sphere_normals_are_normalized_positions() {
        let mesh = sphere();
        let (lat, lon) = SPHERE_SEGMENTS;
        assert_eq!(mesh.vertex_count(), ((lat + 1) * (lon + 1)) as usize);
        assert_eq!(mesh.triangle_count(), (lat * lon * 2) as usize);
        assert_indices_in_bounds(&mesh);
        assert_unit_normals(&mesh);
        for i in 0..mesh.vertex_count() {
            let position = mesh.position(i);
            if position.length() > TOLERANCE {
                assert!((mesh.normal(i) - position.normalize()).length() < 1e-4);
            }
        }
    }

    #[test]
    fn circle_fan_stays_in_bounds() {
        let mesh = circle();
        assert_eq!(mesh.vertex_count(), RING_SEGMENTS as usize + 1);
        assert_eq!(mesh.triangle_count(), RING_SEGMENTS as usize - 1);
        assert_indices_in_bounds(&mesh);
        for i in 0..mesh.vertex_count() {
            assert_eq!(mesh.normal(i), Vec3::Z);
        }
    }

    #[test]
    fn interleaved_layout_is_stride_eight() {
        for mesh in [plane(), cube(), cylinder(), sphere(), circle()] {
            assert_eq!(mesh.vertices.len() % VERTEX_STRIDE, 0);
        }
    }
}

use glam::Vec3;

/// Number of f32 scalars per interleaved vertex.
pub const VERTEX_STRIDE: usize = 8;
/// Offset of the texture coordinate pair within a vertex.
pub const TEXCOORD_OFFSET: usize = 3;
/// Offset of the normal triple within a vertex.
pub const NORMAL_OFFSET: usize = 5;

/// Triangle mesh stored as interleaved vertex attributes plus an index list.
///
/// Vertices are laid out as `position.xyz`, `texcoord.uv`, `normal.xyz`
/// (stride of [`VERTEX_STRIDE`] scalars). Indices are consecutive triples,
/// one per triangle, wound counter-clockwise for outward-facing normals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(vertices.len() % VERTEX_STRIDE, 0);
        debug_assert_eq!(indices.len() % 3, 0);
        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, vertex: usize) -> Vec3 {
        let base = vertex * VERTEX_STRIDE;
        Vec3::from_slice(&self.vertices[base..base + 3])
    }

    pub fn normal(&self, vertex: usize) -> Vec3 {
        let base = vertex * VERTEX_STRIDE + NORMAL_OFFSET;
        Vec3::from_slice(&self.vertices[base..base + 3])
    }

    /// Clears every normal slot so a fresh accumulation pass can run.
    pub fn zero_normals(&mut self) {
        for vertex in self.vertices.chunks_exact_mut(VERTEX_STRIDE) {
            vertex[NORMAL_OFFSET..NORMAL_OFFSET + 3].fill(0.0);
        }
    }

    /// Replaces all normals with smooth per-vertex normals averaged from the
    /// faces that reference each vertex.
    pub fn generate_smooth_normals(&mut self) {
        self.zero_normals();
        accumulate_smooth_normals(
            &mut self.vertices,
            &self.indices,
            VERTEX_STRIDE,
            NORMAL_OFFSET,
        );
    }
}

/// Accumulates face normals into per-vertex normal slots and renormalizes.
///
/// The normal slot of every referenced vertex must be zeroed beforehand; this
/// function only adds on top of whatever is there. Each triangle contributes
/// its unit face normal (right-hand rule, so index winding decides outward
/// versus inward) to all three of its vertices, unweighted, and every vertex
/// normal is scaled back to unit length afterwards.
///
/// Zero-area triangles contribute nothing, and a vertex referenced by no
/// triangle keeps its zero vector. Neither case is an error.
pub fn accumulate_smooth_normals(
    vertices: &mut [f32],
    indices: &[u32],
    stride: usize,
    normal_offset: usize,
) {
    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize * stride;
        let i1 = triangle[1] as usize * stride;
        let i2 = triangle[2] as usize * stride;

        let p0 = Vec3::from_slice(&vertices[i0..i0 + 3]);
        let p1 = Vec3::from_slice(&vertices[i1..i1 + 3]);
        let p2 = Vec3::from_slice(&vertices[i2..i2 + 3]);

        let face = (p1 - p0).cross(p2 - p0);
        if face.length_squared() <= f32::EPSILON {
            continue;
        }
        let face = face.normalize();

        for base in [i0 + normal_offset, i1 + normal_offset, i2 + normal_offset] {
            vertices[base] += face.x;
            vertices[base + 1] += face.y;
            vertices[base + 2] += face.z;
        }
    }

    for vertex in vertices.chunks_exact_mut(stride) {
        let slot = &mut vertex[normal_offset..normal_offset + 3];
        let normal = Vec3::from_slice(slot).normalize_or_zero();
        slot.copy_from_slice(&normal.to_array());
    }
}

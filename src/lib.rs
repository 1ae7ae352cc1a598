//! A small real-time rendering demo of a desk scene.
//!
//! The crate builds a handful of hard-coded meshes, generates smooth
//! per-vertex normals for the flat-sided ones, and renders the fixed scene
//! with Phong lighting while a free-fly camera responds to keyboard and
//! mouse input.  The geometry and camera math live in plain modules with no
//! GPU dependency so they stay testable; the wgpu/winit plumbing is confined
//! to [`render`] and [`app`].

pub mod app;
pub mod camera;
pub mod geometry;
pub mod input;
pub mod primitives;
pub mod render;
pub mod scene;

pub use app::App;
pub use camera::Camera;
pub use geometry::{
    accumulate_smooth_normals, MeshData, NORMAL_OFFSET, TEXCOORD_OFFSET, VERTEX_STRIDE,
};
pub use input::{Action, Bindings, InputState};
pub use render::{CameraParams, Renderer, SceneTexture, TextureError};
pub use scene::{
    desk_scene, DirectionalLight, Material, MeshId, Projection, SceneNode, TextureId,
};

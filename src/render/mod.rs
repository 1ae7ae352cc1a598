pub mod renderer;
pub mod texture;

pub use renderer::{CameraParams, Renderer};
pub use texture::{SceneTexture, TextureError};

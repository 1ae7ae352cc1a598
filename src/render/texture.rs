use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use crate::scene::TextureId;

/// Failure to produce pixel data for a scene texture.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture file {path} is missing")]
    Missing { path: PathBuf },
    #[error("failed to decode texture {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// RGBA8 pixel data ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decodes an image file into tightly packed RGBA8 pixels.
pub fn decode_rgba(path: &Path) -> Result<TexturePixels, TextureError> {
    if !path.exists() {
        return Err(TextureError::Missing {
            path: path.to_path_buf(),
        });
    }
    let image = image::open(path)
        .map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(TexturePixels {
        width,
        height,
        data: image.into_raw(),
    })
}

/// Pixels for a scene texture id: the decoded file, or the id's solid
/// fallback color (with a warning) when the file cannot be used.
pub fn pixels_for(id: TextureId, texture_dir: &Path) -> TexturePixels {
    let path = texture_dir.join(id.file_name());
    match decode_rgba(&path) {
        Ok(pixels) => pixels,
        Err(err) => {
            warn!("{err}; using a solid fallback color");
            TexturePixels {
                width: 1,
                height: 1,
                data: id.fallback_color().to_vec(),
            }
        }
    }
}

/// A texture uploaded to the GPU together with its sampling view.
#[derive(Debug)]
pub struct SceneTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl SceneTexture {
    /// Uploads RGBA8 pixels as an sRGB 2D texture.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &TexturePixels,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: pixels.width.max(1),
            height: pixels.height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels.data,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.width),
                rows_per_image: Some(size.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

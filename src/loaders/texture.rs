use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

/// Decoded image, always expanded to tightly packed RGBA8.
#[derive(Clone, Debug)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    pub fn byte_len(&self) -> usize {
        (self.width * self.height * 4) as usize
    }
}

/// Load an image file, flipped vertically for bottom-left uv origins.
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureData> {
    load_texture_with(path, true)
}

pub fn load_texture_with(path: impl AsRef<Path>, flip_vertical: bool) -> Result<TextureData> {
    let path = path.as_ref();
    let mut img = image::open(path).context(format!("failed to load image {:?}", path))?;
    if flip_vertical {
        img = img.flipv();
    }

    let width = img.width();
    let height = img.height();
    log::debug!(
        "loaded {:?}: {}x{}, {:?}",
        path,
        width,
        height,
        img.color()
    );

    let pixels = expand_to_rgba(img);
    Ok(TextureData {
        width,
        height,
        pixels,
    })
}

/// Expand any channel count to RGBA: gray replicates into rgb, missing
/// alpha becomes opaque.
fn expand_to_rgba(img: DynamicImage) -> Vec<u8> {
    match img {
        DynamicImage::ImageLuma8(img) => {
            let mut rgba = Vec::with_capacity(img.len() * 4);
            for p in img.pixels() {
                let l = p.0[0];
                rgba.extend_from_slice(&[l, l, l, 255]);
            }
            rgba
        }
        DynamicImage::ImageLumaA8(img) => {
            let mut rgba = Vec::with_capacity(img.len() * 2);
            for p in img.pixels() {
                let [l, a] = p.0;
                rgba.extend_from_slice(&[l, l, l, a]);
            }
            rgba
        }
        DynamicImage::ImageRgb8(img) => {
            let mut rgba = Vec::with_capacity(img.len() / 3 * 4);
            for p in img.pixels() {
                let [r, g, b] = p.0;
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
            rgba
        }
        DynamicImage::ImageRgba8(img) => img.into_raw(),
        other => {
            log::warn!("unusual texture format {:?}, converting", other.color());
            other.to_rgba8().into_raw()
        }
    }
}

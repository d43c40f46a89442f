use anyhow::Context;

use crate::{foundation::error::KeylineResult, frame::image::FrameImage};

/// Decode encoded image bytes (any format the `image` crate sniffs) into a
/// straight-alpha RGBA8 frame buffer.
pub fn decode_image(bytes: &[u8]) -> KeylineResult<FrameImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(FrameImage {
        width,
        height,
        data: rgba.into_raw(),
    })
}

/// Encode a frame buffer as PNG bytes.
pub fn encode_png(image: &FrameImage) -> KeylineResult<Vec<u8>> {
    image.validate()?;
    let mut bytes = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut bytes),
        &image.data,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(bytes)
}

/// Write a frame buffer to disk as a PNG file.
pub fn save_png(image: &FrameImage, path: &std::path::Path) -> KeylineResult<()> {
    image.validate()?;
    image::save_buffer_with_format(
        path,
        &image.data,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/frame/decode.rs"]
mod tests;

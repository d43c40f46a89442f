use crate::foundation::{
    core::{Fps, FrameIndex, Rgba8},
    error::{KeylineError, KeylineResult},
};

/// Straight (non-premultiplied) RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameImage {
    /// A fully transparent buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn solid(width: u32, height: u32, px: Rgba8) -> Self {
        let mut image = Self::new(width, height);
        for chunk in image.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        image
    }

    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> KeylineResult<Self> {
        let image = Self {
            width,
            height,
            data,
        };
        image.validate()?;
        Ok(image)
    }

    /// Check that the buffer length matches the declared dimensions. Effects
    /// call this before touching pixels so a malformed frame is rejected
    /// before any mutation.
    pub fn validate(&self) -> KeylineResult<()> {
        let expected_len = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| KeylineError::invalid_frame("frame buffer size overflow"))?;
        if self.data.len() != expected_len {
            return Err(KeylineError::invalid_frame(format!(
                "frame data length {} does not match {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Copy of the alpha channel as a one-byte-per-pixel plane.
    pub fn alpha_plane(&self) -> Vec<u8> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }
}

/// One video frame: pixel content plus the non-pixel attributes (index,
/// timebase) that effects leave untouched.
#[derive(Clone, Debug)]
pub struct Frame {
    pub number: FrameIndex,
    pub fps: Fps,
    pub image: FrameImage,
}

impl Frame {
    pub fn new(number: FrameIndex, fps: Fps, image: FrameImage) -> Self {
        Self { number, fps, image }
    }
}

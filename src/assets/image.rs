use std::sync::Arc;

use crate::foundation::core::{Rgba8Premul, rgba8_len};
use crate::foundation::error::{MemeError, MemeResult};

/// Decoded source pixels handed to a render surface, stored as premultiplied RGBA8.
///
/// A zero-sized image is representable (a loader may report `0x0` for a broken file); drawing
/// it fails in the fit calculator with [`MemeError::InvalidDimension`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wrap straight-alpha RGBA8 pixels, premultiplying them in place.
    pub fn from_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> MemeResult<Self> {
        check_len(width, height, rgba8.len())?;
        premultiply_rgba8_in_place(&mut rgba8);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8),
        })
    }

    /// Wrap pixels that are already premultiplied.
    pub fn from_premul_rgba8(width: u32, height: u32, rgba8_premul: Vec<u8>) -> MemeResult<Self> {
        check_len(width, height, rgba8_premul.len())?;
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// A single-color image.
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> MemeResult<Self> {
        let bytes = color.to_array().repeat(rgba8_len(width, height) / 4);
        Self::from_premul_rgba8(width, height, bytes)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn rgba8_premul(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

fn check_len(width: u32, height: u32, len: usize) -> MemeResult<()> {
    let expected = rgba8_len(width, height);
    if len != expected {
        return Err(MemeError::validation(format!(
            "image {width}x{height} expects {expected} rgba8 bytes, got {len}"
        )));
    }
    Ok(())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let premul = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
        px.copy_from_slice(&premul.to_array());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image.rs"]
mod tests;

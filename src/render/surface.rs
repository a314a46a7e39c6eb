use crate::{
    assets::image::SourceImage,
    foundation::core::Canvas,
    foundation::error::MemeResult,
    layout::fit::Placement,
    render::captions::Captions,
};

/// A rendered surface readback as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Fixed-size raster surface that shows one meme: a fitted image plus two caption lines.
///
/// Callers hand in decoded pixels; the surface owns background, placement and caption drawing.
pub trait RenderSurface {
    /// Surface size in pixels.
    fn canvas(&self) -> Canvas;

    /// Make every pixel transparent.
    fn clear(&mut self) -> MemeResult<()>;

    /// Replace the contents with the background color and `image` fitted into the surface.
    ///
    /// The placement comes from [`crate::fit`]; when it rejects the image size the surface is
    /// left untouched and the error is returned.
    fn draw_image(&mut self, image: &SourceImage) -> MemeResult<Placement>;

    /// Overlay the two caption lines on top of the current contents.
    fn draw_captions(&mut self, captions: &Captions) -> MemeResult<()>;

    /// Copy the current pixels out.
    fn snapshot(&self) -> FrameRGBA;
}

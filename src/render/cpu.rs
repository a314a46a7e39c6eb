use std::sync::Arc;

use crate::{
    assets::font::CaptionFont,
    assets::image::SourceImage,
    config::MemeConfig,
    foundation::core::{Affine, Canvas, rgba8_len},
    foundation::error::{MemeError, MemeResult},
    foundation::math::{add_sat_u8, mul_div255_u8},
    layout::fit::{Placement, fit_canvas},
    render::captions::{CaptionStyle, Captions, PlacedLine, caption_anchors, place_line},
    render::surface::{FrameRGBA, RenderSurface},
};

/// CPU render surface backed by a `vello_cpu` pixmap (premultiplied RGBA8).
pub struct CpuSurface {
    canvas: Canvas,
    background_rgba8: [u8; 4],
    style: CaptionStyle,
    font: Option<CaptionFont>,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("background_rgba8", &self.background_rgba8)
            .field("style", &self.style)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Create a transparent surface with a black background color and default caption style.
    pub fn new(canvas: Canvas) -> MemeResult<Self> {
        canvas.validate()?;
        let (w, h) = canvas_u16(canvas)?;
        Ok(Self {
            canvas,
            background_rgba8: [0, 0, 0, 255],
            style: CaptionStyle::default(),
            font: None,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Build a surface from configuration, loading the caption font when one is configured.
    pub fn from_config(cfg: &MemeConfig) -> MemeResult<Self> {
        cfg.validate()?;
        let font = match cfg.resolved_font_path() {
            Some(path) => Some(CaptionFont::from_path(path)?),
            None => None,
        };
        let mut surface = Self::new(cfg.canvas)?
            .with_background(cfg.background_rgba8)
            .with_caption_style(cfg.captions.clone());
        surface.font = font;
        Ok(surface)
    }

    /// Straight-alpha color painted behind the image on every image draw.
    pub fn with_background(mut self, rgba8: [u8; 4]) -> Self {
        self.background_rgba8 = rgba8;
        self
    }

    /// Caption appearance used by [`RenderSurface::draw_captions`].
    pub fn with_caption_style(mut self, style: CaptionStyle) -> Self {
        self.style = style;
        self
    }

    /// Font used to shape captions.
    pub fn with_font(mut self, font: CaptionFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Replace or remove the caption font.
    pub fn set_font(&mut self, font: Option<CaptionFont>) {
        self.font = font;
    }

    /// Whether a caption font is available.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    fn new_ctx(&self) -> vello_cpu::RenderContext {
        let mut ctx = vello_cpu::RenderContext::new(self.pixmap.width(), self.pixmap.height());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx
    }

    fn render_image(&mut self, image: &SourceImage, placement: Placement) -> MemeResult<()> {
        let src = pixmap_from_premul_bytes(image.rgba8_premul(), image.width(), image.height())?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(src)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        let (w, h) = self.canvas.size_f64();
        let (iw, ih) = (f64::from(image.width()), f64::from(image.height()));
        let [r, g, b, a] = self.background_rgba8;

        let mut ctx = self.new_ctx();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

        ctx.set_transform(affine_to_cpu(placement.content_transform(iw, ih)));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }

    fn render_lines(
        &mut self,
        font: vello_cpu::peniko::FontData,
        lines: &[PlacedLine],
    ) -> MemeResult<()> {
        let [fr, fg, fb, fa] = self.style.fill_rgba8;
        let [sr, sg, sb, sa] = self.style.stroke_rgba8;
        let stroke = vello_cpu::kurbo::Stroke::new(self.style.stroke_width_px)
            .with_miter_limit(self.style.miter_limit);
        let draw_stroke = self.style.stroke_width_px > 0.0;

        // `vello_cpu` renders into a fresh buffer, so captions go to a scratch pixmap first and
        // are then composited over the image.
        let mut ctx = self.new_ctx();
        for line in lines {
            let glyphs = || {
                line.glyphs.iter().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                })
            };
            if draw_stroke {
                ctx.set_stroke(stroke.clone());
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(sr, sg, sb, sa));
                ctx.glyph_run(&font)
                    .font_size(line.font_size)
                    .stroke_glyphs(glyphs());
            }
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(fr, fg, fb, fa));
            ctx.glyph_run(&font)
                .font_size(line.font_size)
                .fill_glyphs(glyphs());
        }

        let mut tmp = vello_cpu::Pixmap::new(self.pixmap.width(), self.pixmap.height());
        ctx.flush();
        ctx.render_to_pixmap(&mut tmp);

        premul_over_in_place(self.pixmap.data_as_u8_slice_mut(), tmp.data_as_u8_slice())
    }
}

impl RenderSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) -> MemeResult<()> {
        self.pixmap.data_as_u8_slice_mut().fill(0);
        Ok(())
    }

    #[tracing::instrument(skip(self, image), fields(image_w = image.width(), image_h = image.height()))]
    fn draw_image(&mut self, image: &SourceImage) -> MemeResult<Placement> {
        let placement = fit_canvas(self.canvas, image.width(), image.height())?;
        tracing::debug!(?placement, "fitted image into surface");
        self.render_image(image, placement)?;
        Ok(placement)
    }

    #[tracing::instrument(skip(self, captions))]
    fn draw_captions(&mut self, captions: &Captions) -> MemeResult<()> {
        if captions.is_empty() {
            return Ok(());
        }
        let anchors = caption_anchors(self.canvas, &self.style);
        let style = self.style.clone();
        let font = self
            .font
            .as_mut()
            .ok_or_else(|| MemeError::validation("no caption font configured"))?;

        let mut lines = Vec::with_capacity(2);
        for (text, anchor) in [
            (captions.top.as_str(), anchors.top),
            (captions.bottom.as_str(), anchors.bottom),
        ] {
            if let Some(line) = place_line(font, text, &style, anchor)? {
                lines.push(line);
            }
        }
        let font_data = font.font_data();
        tracing::debug!(lines = lines.len(), "drawing captions");
        self.render_lines(font_data, &lines)
    }

    fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn canvas_u16(canvas: Canvas) -> MemeResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| MemeError::render("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| MemeError::render("surface height exceeds u16"))?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> MemeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| MemeError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| MemeError::render("image height exceeds u16"))?;
    if bytes.len() != rgba8_len(width, height) {
        return Err(MemeError::render("image byte len mismatch"));
    }
    let mut pixels =
        Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(rgba8_len(width, height) / 4);
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> MemeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MemeError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = s[3];
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - u16::from(sa);
        d[3] = add_sat_u8(sa, mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            d[c] = add_sat_u8(s[c], mul_div255_u8(u16::from(d[c]), inv));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

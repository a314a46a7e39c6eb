use crate::{
    assets::font::{CaptionFont, PositionedGlyph},
    foundation::core::{Canvas, Point},
    foundation::error::{MemeError, MemeResult},
};

/// Top and bottom caption text.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Captions {
    /// Line drawn near the top edge.
    pub top: String,
    /// Line drawn near the bottom edge.
    pub bottom: String,
}

impl Captions {
    /// Build captions from any string-like values.
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    /// Whether both lines are empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}

/// How captions are drawn: an outlined line of text centered horizontally on the surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Request the bold face of the caption font.
    pub bold: bool,
    /// Outline width in pixels.
    pub stroke_width_px: f64,
    /// Miter limit for outline joins.
    pub miter_limit: f64,
    /// Straight-alpha fill color.
    pub fill_rgba8: [u8; 4],
    /// Straight-alpha outline color.
    pub stroke_rgba8: [u8; 4],
    /// Baseline of the top caption, measured from the top edge.
    pub top_baseline_px: f64,
    /// Baseline of the bottom caption, measured up from the bottom edge.
    pub bottom_inset_px: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_size_px: 36.0,
            bold: true,
            stroke_width_px: 6.0,
            miter_limit: 2.0,
            fill_rgba8: [255, 255, 255, 255],
            stroke_rgba8: [0, 0, 0, 255],
            top_baseline_px: 48.0,
            bottom_inset_px: 24.0,
        }
    }
}

impl CaptionStyle {
    /// Reject sizes and offsets that cannot be drawn.
    pub fn validate(&self) -> MemeResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(MemeError::validation(
                "captions.font_size_px must be finite and > 0",
            ));
        }
        if !self.stroke_width_px.is_finite() || self.stroke_width_px < 0.0 {
            return Err(MemeError::validation(
                "captions.stroke_width_px must be finite and >= 0",
            ));
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(MemeError::validation(
                "captions.miter_limit must be finite and >= 1",
            ));
        }
        for (name, v) in [
            ("captions.top_baseline_px", self.top_baseline_px),
            ("captions.bottom_inset_px", self.bottom_inset_px),
        ] {
            if !v.is_finite() {
                return Err(MemeError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

/// Baseline anchor points for both caption lines; each line is centered on its anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionAnchors {
    /// Anchor of the top line.
    pub top: Point,
    /// Anchor of the bottom line.
    pub bottom: Point,
}

/// Where the caption baselines sit on a surface of `canvas` size.
///
/// Anchors depend only on the surface size, never on where the image was placed.
pub fn caption_anchors(canvas: Canvas, style: &CaptionStyle) -> CaptionAnchors {
    let (w, h) = canvas.size_f64();
    let cx = w / 2.0;
    CaptionAnchors {
        top: Point::new(cx, style.top_baseline_px),
        bottom: Point::new(cx, h - style.bottom_inset_px),
    }
}

/// A shaped caption line with glyphs already moved onto its anchor.
#[derive(Clone, Debug)]
pub(crate) struct PlacedLine {
    pub(crate) glyphs: Vec<PositionedGlyph>,
    pub(crate) font_size: f32,
}

/// Shape `text` and translate it so its horizontal center and baseline sit on `anchor`.
///
/// Empty text yields `None`.
pub(crate) fn place_line(
    font: &mut CaptionFont,
    text: &str,
    style: &CaptionStyle,
    anchor: Point,
) -> MemeResult<Option<PlacedLine>> {
    if text.is_empty() {
        return Ok(None);
    }
    let shaped = font.shape_line(text, style.font_size_px, style.bold)?;
    let (dx, dy) = centering_offset(anchor, shaped.advance, shaped.baseline);
    let glyphs = shaped
        .glyphs
        .iter()
        .map(|g| PositionedGlyph {
            id: g.id,
            x: g.x + dx,
            y: g.y + dy,
        })
        .collect();
    Ok(Some(PlacedLine {
        glyphs,
        font_size: shaped.font_size,
    }))
}

fn centering_offset(anchor: Point, advance: f32, baseline: f32) -> (f32, f32) {
    (anchor.x as f32 - advance / 2.0, anchor.y as f32 - baseline)
}

#[cfg(test)]
#[path = "../../tests/unit/render/captions.rs"]
mod tests;

use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::error::{MemeError, MemeResult};

/// Font used to shape and draw captions, loaded from caller-provided bytes.
///
/// The first family found in the font data is used for every caption.
pub struct CaptionFont {
    bytes: Arc<Vec<u8>>,
    family: String,
    engine: TextLayoutEngine,
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionFont")
            .field("font_bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

impl CaptionFont {
    /// Register font bytes (TTF/OTF) and resolve their family name.
    pub fn from_bytes(bytes: Vec<u8>) -> MemeResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let family = engine.register(&bytes)?;
        Ok(Self {
            bytes: Arc::new(bytes),
            family,
            engine,
        })
    }

    /// Read and register a font file.
    pub fn from_path(path: impl AsRef<Path>) -> MemeResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read caption font '{}'", path.display()))?;
        Self::from_bytes(bytes)
    }

    /// Family name detected in the font data.
    pub fn family_name(&self) -> &str {
        &self.family
    }

    pub(crate) fn font_data(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            0,
        )
    }

    /// Shape `text` as one unwrapped line.
    pub(crate) fn shape_line(
        &mut self,
        text: &str,
        size_px: f32,
        bold: bool,
    ) -> MemeResult<ShapedLine> {
        self.engine.layout_line(text, &self.family, size_px, bold)
    }
}

/// Glyph id and pen position in layout space (`y` is the baseline, measured from the layout top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PositionedGlyph {
    pub(crate) id: u32,
    pub(crate) x: f32,
    pub(crate) y: f32,
}

/// A single shaped line: glyphs plus the metrics needed to center it on an anchor.
#[derive(Clone, Debug, Default)]
pub(crate) struct ShapedLine {
    pub(crate) glyphs: Vec<PositionedGlyph>,
    pub(crate) font_size: f32,
    pub(crate) advance: f32,
    pub(crate) baseline: f32,
}

struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl TextLayoutEngine {
    fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    fn register(&mut self, font_bytes: &[u8]) -> MemeResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            MemeError::validation("no font families registered from caption font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MemeError::validation("registered caption font family has no name"))?
            .to_string();
        Ok(family_name)
    }

    fn layout_line(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        bold: bool,
    ) -> MemeResult<ShapedLine> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MemeError::validation(
                "caption font size must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut out = ShapedLine {
            font_size: size_px,
            ..ShapedLine::default()
        };
        // Without a width limit everything lands on the first line.
        if let Some(line) = layout.lines().next() {
            let m = line.metrics();
            out.advance = m.advance;
            out.baseline = m.baseline;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                out.font_size = run.run().font_size();
                // Positions include the run offset and the line baseline.
                out.glyphs.extend(run.positioned_glyphs().map(|g| PositionedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;

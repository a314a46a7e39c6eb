//! JSON configuration for a meme surface.
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{
    foundation::core::Canvas,
    foundation::error::{MemeError, MemeResult},
    render::captions::CaptionStyle,
};

/// Environment variable naming a caption font file when the configuration leaves it unset.
pub const FONT_ENV_VAR: &str = "MEMEFRAME_FONT";

/// Surface size, background and caption settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemeConfig {
    /// Surface size in pixels.
    pub canvas: Canvas,
    /// Straight-alpha color behind the image (shows as letterbox bands).
    pub background_rgba8: [u8; 4],
    /// Caption appearance.
    pub captions: CaptionStyle,
    /// Font file used for captions (TTF/OTF).
    pub font_path: Option<PathBuf>,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background_rgba8: [0, 0, 0, 255],
            captions: CaptionStyle::default(),
            font_path: None,
        }
    }
}

impl MemeConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> MemeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| MemeError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    ///
    /// A relative `font_path` is resolved against the directory of the config file.
    pub fn from_path(path: impl AsRef<Path>) -> MemeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MemeError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if let (Some(font), Some(dir)) = (cfg.font_path.as_ref(), path.parent())
            && font.is_relative()
        {
            cfg.font_path = Some(dir.join(font));
        }
        Ok(cfg)
    }

    /// Check canvas and caption settings.
    pub fn validate(&self) -> MemeResult<()> {
        self.canvas.validate()?;
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(MemeError::validation(format!(
                "canvas {}x{} exceeds {} pixels per axis",
                self.canvas.width,
                self.canvas.height,
                u16::MAX
            )));
        }
        self.captions.validate()
    }

    /// Font path from the config, else from [`FONT_ENV_VAR`].
    pub fn resolved_font_path(&self) -> Option<PathBuf> {
        self.font_path.clone().or_else(|| {
            std::env::var_os(FONT_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

use crate::foundation::error::{MemeError, MemeResult};

/// Highest value a volume slider reports.
pub const VOLUME_SLIDER_MAX: u8 = 100;

/// Speech volume as set on a 0..=100 slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    /// Full volume.
    pub const MAX: Self = Self(VOLUME_SLIDER_MAX);
    /// Silent.
    pub const MUTE: Self = Self(0);

    /// Volume for a slider position; positions above 100 are rejected.
    pub fn from_slider(value: u8) -> MemeResult<Self> {
        if value > VOLUME_SLIDER_MAX {
            return Err(MemeError::validation(format!(
                "volume slider value must be 0..={VOLUME_SLIDER_MAX}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Raw slider position.
    pub fn slider(self) -> u8 {
        self.0
    }

    /// Gain handed to the synthesizer, `0.0..=1.0`.
    pub fn level(self) -> f32 {
        f32::from(self.0) / f32::from(VOLUME_SLIDER_MAX)
    }

    /// Icon that represents this volume.
    pub fn icon(self) -> VolumeIcon {
        let level = match self.0 {
            67.. => 3,
            34..=66 => 2,
            1..=33 => 1,
            0 => 0,
        };
        VolumeIcon::for_level(level)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Volume {
    type Error = MemeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_slider(value)
    }
}

impl From<Volume> for u8 {
    fn from(v: Volume) -> Self {
        v.0
    }
}

/// Volume indicator image and its accessible text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VolumeIcon {
    /// Bucket `0..=3`, 0 meaning muted.
    pub level: u8,
    /// Icon path, `icons/volume-level-<n>.svg`.
    pub src: String,
    /// Alternative text, `Volume Level <n>`.
    pub alt: String,
}

impl VolumeIcon {
    fn for_level(level: u8) -> Self {
        Self {
            level,
            src: format!("icons/volume-level-{level}.svg"),
            alt: format!("Volume Level {level}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/speech/volume.rs"]
mod tests;

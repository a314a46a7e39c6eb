/// Enabled state of the meme form controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Controls {
    /// "Generate" (draw captions).
    pub generate: bool,
    /// "Clear" (wipe the surface).
    pub clear: bool,
    /// "Read text" (speak captions).
    pub read: bool,
    /// Voice picker.
    pub voice_select: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self::editing()
    }
}

impl Controls {
    /// Captions not yet drawn: only generate is available.
    pub fn editing() -> Self {
        Self {
            generate: true,
            clear: false,
            read: false,
            voice_select: false,
        }
    }

    /// Captions drawn: generate is locked until the surface is cleared.
    pub fn generated() -> Self {
        Self {
            generate: false,
            clear: true,
            read: true,
            voice_select: true,
        }
    }
}

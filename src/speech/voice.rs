/// A text-to-speech voice offered by the host synthesizer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Voice {
    /// Display and lookup name.
    pub name: String,
    /// BCP 47 language tag, e.g. `en-US`.
    pub lang: String,
    /// Whether the synthesizer uses this voice when none is chosen.
    #[serde(default)]
    pub is_default: bool,
}

impl Voice {
    /// Build a non-default voice.
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }

    /// Mark this voice as the synthesizer default.
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Label shown in a voice picker: `"<name> (<lang>)"`, suffixed for the default voice.
    pub fn label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.lang);
        if self.is_default {
            label.push_str(" -- DEFAULT");
        }
        label
    }
}

/// One entry of a voice picker.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VoiceOption {
    /// Human readable label.
    pub label: String,
    /// Voice name used for selection.
    pub name: String,
    /// Voice language tag.
    pub lang: String,
}

/// The voices currently offered by the synthesizer, in synthesizer order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    /// Catalog over `voices`.
    pub fn new(voices: Vec<Voice>) -> Self {
        Self { voices }
    }

    /// Replace the whole list, as when the synthesizer reports a voice change.
    pub fn replace(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
    }

    /// All voices.
    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Whether no voice is known yet.
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Picker entries, one per voice.
    pub fn options(&self) -> Vec<VoiceOption> {
        self.voices
            .iter()
            .map(|v| VoiceOption {
                label: v.label(),
                name: v.name.clone(),
                lang: v.lang.clone(),
            })
            .collect()
    }

    /// Voice named `name`; when several share the name the last one wins.
    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().rev().find(|v| v.name == name)
    }

    /// The voice flagged as default, if any.
    pub fn default_voice(&self) -> Option<&Voice> {
        self.voices.iter().find(|v| v.is_default)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/speech/voice.rs"]
mod tests;

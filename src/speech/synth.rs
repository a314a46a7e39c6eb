use crate::{
    foundation::error::MemeResult,
    speech::voice::Voice,
    speech::volume::Volume,
};

/// One request to speak a piece of text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Utterance {
    /// Text to read aloud.
    pub text: String,
    /// Voice to use; `None` leaves the choice to the synthesizer.
    pub voice: Option<Voice>,
    /// Playback volume.
    pub volume: Volume,
}

/// Text-to-speech capability provided by the host.
///
/// Ordering contract: utterances are spoken in the order `speak` is called.
pub trait SpeechSynthesizer {
    /// Voices the synthesizer currently offers.
    fn voices(&self) -> Vec<Voice>;

    /// Queue an utterance for playback.
    fn speak(&mut self, utterance: Utterance) -> MemeResult<()>;
}

/// In-memory synthesizer for tests and debugging: records utterances instead of playing them.
#[derive(Debug, Default)]
pub struct InMemorySynthesizer {
    voices: Vec<Voice>,
    spoken: Vec<Utterance>,
}

impl InMemorySynthesizer {
    /// Create a synthesizer that offers `voices`.
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            spoken: Vec::new(),
        }
    }

    /// Change the offered voices.
    pub fn set_voices(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
    }

    /// Utterances in the order they were queued.
    pub fn spoken(&self) -> &[Utterance] {
        &self.spoken
    }
}

impl SpeechSynthesizer for InMemorySynthesizer {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&mut self, utterance: Utterance) -> MemeResult<()> {
        self.spoken.push(utterance);
        Ok(())
    }
}

use crate::{
    foundation::error::MemeResult,
    render::captions::Captions,
    speech::synth::{SpeechSynthesizer, Utterance},
    speech::voice::VoiceCatalog,
    speech::volume::Volume,
};

/// Turns captions into utterances for a [`SpeechSynthesizer`].
///
/// Stateless: the catalog, selected voice name and volume are passed in on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpeechRequester;

impl SpeechRequester {
    /// Build the top and bottom utterances without speaking them.
    ///
    /// When `selected_voice` is missing from `catalog` the utterances carry no voice and the
    /// synthesizer falls back to its own default.
    pub fn utterances(
        catalog: &VoiceCatalog,
        captions: &Captions,
        selected_voice: Option<&str>,
        volume: Volume,
    ) -> [Utterance; 2] {
        let voice = selected_voice.and_then(|name| catalog.find(name)).cloned();
        [
            Utterance {
                text: captions.top.clone(),
                voice: voice.clone(),
                volume,
            },
            Utterance {
                text: captions.bottom.clone(),
                voice,
                volume,
            },
        ]
    }

    /// Speak the top caption, then the bottom caption.
    #[tracing::instrument(skip(synth, catalog, captions))]
    pub fn read<S: SpeechSynthesizer + ?Sized>(
        synth: &mut S,
        catalog: &VoiceCatalog,
        captions: &Captions,
        selected_voice: Option<&str>,
        volume: Volume,
    ) -> MemeResult<()> {
        let [top, bottom] = Self::utterances(catalog, captions, selected_voice, volume);
        if top.voice.is_none() && selected_voice.is_some() {
            tracing::debug!("selected voice not in catalog, using synthesizer default");
        }
        synth.speak(top)?;
        synth.speak(bottom)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/speech/requester.rs"]
mod tests;

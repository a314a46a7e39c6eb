use super::*;
use crate::foundation::error::MemeError;
use crate::speech::synth::InMemorySynthesizer;
use crate::speech::voice::Voice;

fn catalog() -> VoiceCatalog {
    VoiceCatalog::new(vec![
        Voice::new("Alex", "en-US").with_default(true),
        Voice::new("Anna", "de-DE"),
    ])
}

#[test]
fn reads_top_then_bottom_with_voice_and_volume() {
    let mut synth = InMemorySynthesizer::default();
    let volume = Volume::from_slider(40).unwrap();
    SpeechRequester::read(
        &mut synth,
        &catalog(),
        &Captions::new("one does not simply", "read memes aloud"),
        Some("Anna"),
        volume,
    )
    .unwrap();

    let spoken = synth.spoken();
    assert_eq!(spoken.len(), 2);
    assert_eq!(spoken[0].text, "one does not simply");
    assert_eq!(spoken[1].text, "read memes aloud");
    for u in spoken {
        assert_eq!(u.voice.as_ref().unwrap().name, "Anna");
        assert_eq!(u.volume, volume);
    }
}

#[test]
fn unknown_voice_falls_back_to_synthesizer_default() {
    let [top, bottom] = SpeechRequester::utterances(
        &catalog(),
        &Captions::new("a", "b"),
        Some("Nobody"),
        Volume::MAX,
    );
    assert!(top.voice.is_none());
    assert!(bottom.voice.is_none());

    let [top, _] =
        SpeechRequester::utterances(&catalog(), &Captions::new("a", "b"), None, Volume::MAX);
    assert!(top.voice.is_none());
}

struct FailingSynth;

impl SpeechSynthesizer for FailingSynth {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&mut self, _utterance: Utterance) -> MemeResult<()> {
        Err(MemeError::speech("audio device unavailable"))
    }
}

#[test]
fn synthesizer_errors_propagate() {
    let err = SpeechRequester::read(
        &mut FailingSynth,
        &VoiceCatalog::default(),
        &Captions::new("a", "b"),
        None,
        Volume::MAX,
    )
    .unwrap_err();
    assert!(err.to_string().contains("audio device unavailable"));
}

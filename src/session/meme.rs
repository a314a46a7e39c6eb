use crate::{
    assets::image::SourceImage,
    foundation::error::{MemeError, MemeResult},
    layout::fit::Placement,
    render::captions::Captions,
    render::surface::RenderSurface,
    session::controls::Controls,
    speech::requester::SpeechRequester,
    speech::synth::SpeechSynthesizer,
    speech::voice::VoiceCatalog,
    speech::volume::{Volume, VolumeIcon},
};

/// Everything a user can do to a meme session.
#[derive(Clone, Debug)]
pub enum MemeEvent {
    /// A new image finished loading.
    ImageLoaded(SourceImage),
    /// Draw these captions over the image.
    Generate(Captions),
    /// Wipe the surface and the caption text.
    Clear,
    /// Read the current captions aloud.
    Read,
    /// Choose a voice by name.
    SelectVoice(String),
    /// The volume slider moved.
    VolumeInput(u8),
    /// The synthesizer reported a change in available voices.
    VoicesChanged,
}

/// One meme being edited: a surface, a synthesizer and the form state around them.
pub struct MemeSession<S, T> {
    surface: S,
    synth: T,
    controls: Controls,
    captions: Captions,
    catalog: VoiceCatalog,
    selected_voice: Option<String>,
    volume: Volume,
    placement: Option<Placement>,
}

impl<S: RenderSurface, T: SpeechSynthesizer> MemeSession<S, T> {
    /// Start a session; the voice catalog is populated from `synth` right away and the first
    /// voice is selected.
    pub fn new(surface: S, synth: T) -> Self {
        let catalog = VoiceCatalog::new(synth.voices());
        let selected_voice = first_voice_name(&catalog);
        Self {
            surface,
            synth,
            controls: Controls::editing(),
            captions: Captions::default(),
            catalog,
            selected_voice,
            volume: Volume::default(),
            placement: None,
        }
    }

    /// Apply one event.
    ///
    /// Events aimed at a disabled control are rejected and change nothing.
    #[tracing::instrument(skip(self, event), fields(event = event_name(&event)))]
    pub fn dispatch(&mut self, event: MemeEvent) -> MemeResult<()> {
        match event {
            MemeEvent::ImageLoaded(image) => {
                let placement = self.surface.draw_image(&image).inspect_err(|e| {
                    tracing::warn!(error = %e, "image not drawn");
                })?;
                self.placement = Some(placement);
            }
            MemeEvent::Generate(captions) => {
                require(self.controls.generate, "generate")?;
                self.surface.draw_captions(&captions)?;
                self.captions = captions;
                self.controls = Controls::generated();
            }
            MemeEvent::Clear => {
                require(self.controls.clear, "clear")?;
                self.surface.clear()?;
                self.captions = Captions::default();
                self.placement = None;
                self.controls = Controls::editing();
            }
            MemeEvent::Read => {
                require(self.controls.read, "read")?;
                SpeechRequester::read(
                    &mut self.synth,
                    &self.catalog,
                    &self.captions,
                    self.selected_voice.as_deref(),
                    self.volume,
                )?;
            }
            MemeEvent::SelectVoice(name) => {
                require(self.controls.voice_select, "voice selection")?;
                if self.catalog.find(&name).is_none() {
                    return Err(MemeError::validation(format!("unknown voice '{name}'")));
                }
                self.selected_voice = Some(name);
            }
            MemeEvent::VolumeInput(value) => {
                self.volume = Volume::from_slider(value)?;
            }
            MemeEvent::VoicesChanged => {
                self.catalog.replace(self.synth.voices());
                let stale = self
                    .selected_voice
                    .as_deref()
                    .is_none_or(|name| self.catalog.find(name).is_none());
                if stale {
                    self.selected_voice = first_voice_name(&self.catalog);
                    tracing::debug!(voice = ?self.selected_voice, "voice selection reset");
                }
            }
        }
        Ok(())
    }

    /// Current control state.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Captions drawn by the last generate, empty after clear.
    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    /// Known voices.
    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    /// Name of the chosen voice; `None` only while the catalog is empty.
    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    /// Current volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Icon for the current volume.
    pub fn volume_icon(&self) -> VolumeIcon {
        self.volume.icon()
    }

    /// Placement of the last drawn image.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Borrow the synthesizer.
    pub fn synth(&self) -> &T {
        &self.synth
    }

    /// Mutably borrow the synthesizer (e.g. to change its voices before `VoicesChanged`).
    pub fn synth_mut(&mut self) -> &mut T {
        &mut self.synth
    }

    /// Tear the session apart.
    pub fn into_parts(self) -> (S, T) {
        (self.surface, self.synth)
    }
}

fn require(enabled: bool, control: &str) -> MemeResult<()> {
    if enabled {
        Ok(())
    } else {
        Err(MemeError::validation(format!("{control} is disabled")))
    }
}

fn first_voice_name(catalog: &VoiceCatalog) -> Option<String> {
    catalog.voices().first().map(|v| v.name.clone())
}

fn event_name(event: &MemeEvent) -> &'static str {
    match event {
        MemeEvent::ImageLoaded(_) => "image_loaded",
        MemeEvent::Generate(_) => "generate",
        MemeEvent::Clear => "clear",
        MemeEvent::Read => "read",
        MemeEvent::SelectVoice(_) => "select_voice",
        MemeEvent::VolumeInput(_) => "volume_input",
        MemeEvent::VoicesChanged => "voices_changed",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/meme.rs"]
mod tests;

//! memeframe puts a user image and two caption lines on a fixed-size canvas and can hand the
//! captions to a text-to-speech capability.
//!
//! # Pieces
//!
//! 1. **Fit**: [`fit`] maps container and content sizes to a [`Placement`] that keeps the content's
//!    aspect ratio, spans the container on one axis and centers it on the other.
//! 2. **Draw**: a [`RenderSurface`] (CPU implementation: [`CpuSurface`]) fills its background,
//!    draws a [`SourceImage`] at the fitted placement and overlays outlined [`Captions`].
//! 3. **Speak**: [`SpeechRequester`] turns captions into [`Utterance`]s for a host
//!    [`SpeechSynthesizer`], using a voice from the [`VoiceCatalog`] and a [`Volume`].
//! 4. **Session**: [`MemeSession`] applies [`MemeEvent`]s and tracks which [`Controls`] are enabled.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure geometry**: [`fit`] does no IO and keeps no state; it is safe to call from any thread.
//! - **No codecs**: callers pass decoded pixels; frames stay in memory.
//! - **Premultiplied RGBA8** on the surface and in [`FrameRGBA`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod layout;
mod render;
mod session;
mod speech;

/// JSON configuration.
pub mod config;

pub use assets::font::CaptionFont;
pub use assets::image::SourceImage;
pub use config::{FONT_ENV_VAR, MemeConfig};
pub use foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{MemeError, MemeResult};
pub use layout::fit::{Placement, fit, fit_canvas};
pub use render::captions::{CaptionAnchors, CaptionStyle, Captions, caption_anchors};
pub use render::cpu::CpuSurface;
pub use render::surface::{FrameRGBA, RenderSurface};
pub use session::controls::Controls;
pub use session::meme::{MemeEvent, MemeSession};
pub use speech::requester::SpeechRequester;
pub use speech::synth::{InMemorySynthesizer, SpeechSynthesizer, Utterance};
pub use speech::voice::{Voice, VoiceCatalog, VoiceOption};
pub use speech::volume::{VOLUME_SLIDER_MAX, Volume, VolumeIcon};

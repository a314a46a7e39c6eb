pub(crate) mod requester;
pub(crate) mod synth;
pub(crate) mod voice;
pub(crate) mod volume;

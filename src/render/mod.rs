pub(crate) mod captions;
pub(crate) mod cpu;
pub(crate) mod surface;

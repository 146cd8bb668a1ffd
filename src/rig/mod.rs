pub(crate) mod analysis;
pub(crate) mod baked;
pub(crate) mod source;

pub(crate) mod aligner;
pub(crate) mod reference;

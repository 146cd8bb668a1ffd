pub(crate) mod aliases;
pub(crate) mod catalog;
pub(crate) mod frame;
pub(crate) mod resolver;

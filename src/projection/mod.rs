pub(crate) mod project;
pub(crate) mod view;

pub(crate) mod director;

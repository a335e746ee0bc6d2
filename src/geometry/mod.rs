pub(crate) mod vessel;
pub(crate) mod wave;

pub(crate) mod color;
pub(crate) mod length;
pub(crate) mod series;

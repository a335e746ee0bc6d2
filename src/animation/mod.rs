pub(crate) mod ease;
pub(crate) mod phase;
pub(crate) mod timeline;

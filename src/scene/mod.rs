pub(crate) mod assembler;
pub(crate) mod data;
pub(crate) mod entity;
pub(crate) mod node;

pub mod composition;
pub mod sequence;
pub mod structure;

// Corpus handling — documents on disk and how they get into memory.

pub mod document;
pub mod loader;

// src/extract/mod.rs
mod clusters;
mod entry;
mod family;
mod fields;

pub use entry::{Extraction, extract_entries};
pub use fields::FieldMap;

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod extract;
pub mod model;

pub use error::ParseError;
pub use extract::{Extraction, extract_entries};
pub use model::{CrossRef, EntryRoot, Example, Sense, SubSense};

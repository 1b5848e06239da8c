// src/core/mod.rs

pub mod dom;
pub mod query;
pub mod sanitize;

// src/specs/mod.rs
//! # Field selector tables
//!
//! This module hosts the **per-structural-unit selector tables** for the
//! Longman entry markup. Each table encodes *where the ground truth lives in
//! the HTML* relative to one node kind, and *how to extract it robustly*.
//!
//! ## What lives here
//! - One table per structural unit (entry header, sense, sub-sense), each a
//!   static slice of [`FieldRule`](crate::core::query::FieldRule)s mapping a
//!   semantic field name to a structural query plus take strategy.
//! - The field name constants the assembler reads back out of the extracted
//!   field map.
//!
//! ## What does **not** live here
//! - Tree walking and record assembly — that is `extract::entry`.
//! - Cluster extraction (examples, cross-references, corpus) — those units
//!   repeat per node and live in `extract::clusters`.
//!
//! ## Conventions & invariants
//! - Every query is **relative to the node the table is run against**; nothing
//!   here reaches for the document root.
//! - Header fields take the **last** match: merged homonym fragments repeat
//!   the marker spans and the final one is authoritative.
//! - Scalar sense/sub-sense fields **join** their fragments with the
//!   backslash-artifact exclusion applied.

pub mod header;
pub mod sense;
pub mod sub_sense;

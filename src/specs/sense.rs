// src/specs/sense.rs
//! Scalar fields of one `Sense` node. The sense number has no class of its
//! own; it is whatever the first span child holds.

use crate::core::query::{Class, FieldRule, Query};

pub const SENSE_NUMBER: &str = "sense_number";
pub const SIGNPOST: &str = "signpost";
pub const GRAMMAR_NOTE: &str = "grammar_note";
pub const DEFINITION: &str = "definition";
pub const FIELD_LABEL: &str = "field_label";
pub const REGISTER_LABEL: &str = "register_label";

pub static TABLE: &[FieldRule] = &[
    FieldRule::join_text(SENSE_NUMBER, Query::nth_child("span", 0)),
    FieldRule::join_text(SIGNPOST, Query::child("span", Class::Exact("SIGNPOST"))),
    FieldRule::join_text(GRAMMAR_NOTE, Query::child("span", Class::Exact("GRAM"))),
    FieldRule::join_text(DEFINITION, Query::child("span", Class::Exact("DEF"))),
    FieldRule::join_text(FIELD_LABEL, Query::child("span", Class::Exact("ACTIV"))),
    FieldRule::join_text(REGISTER_LABEL, Query::child("span", Class::Exact("REGISTERLAB"))),
];

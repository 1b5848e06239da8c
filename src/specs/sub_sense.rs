// src/specs/sub_sense.rs
//! Scalar fields of one `Subsense` node: the sense shape minus
//! signpost/field label, plus geography and synonym markers.

use crate::core::query::{Class, FieldRule, Query};

pub const SENSE_NUMBER: &str = "sense_number";
pub const GRAMMAR_NOTE: &str = "grammar_note";
pub const DEFINITION: &str = "definition";
pub const REGISTER_LABEL: &str = "register_label";
pub const GEOGRAPHY_LABEL: &str = "geography_label";
pub const SYNONYM: &str = "synonym";

pub static TABLE: &[FieldRule] = &[
    FieldRule::join_text(SENSE_NUMBER, Query::nth_child("span", 0)),
    FieldRule::join_text(GRAMMAR_NOTE, Query::child("span", Class::Exact("GRAM"))),
    FieldRule::join_text(DEFINITION, Query::child("span", Class::Exact("DEF"))),
    FieldRule::join_text(REGISTER_LABEL, Query::child("span", Class::Exact("REGISTERLAB"))),
    FieldRule::join_text(GEOGRAPHY_LABEL, Query::child("span", Class::Exact("GEO"))),
    FieldRule::join_text(SYNONYM, Query::child("span", Class::Exact("SYN"))),
];

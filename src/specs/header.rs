// src/specs/header.rs
//! Entry header fields: headword, hyphenation, homonym number, part of
//! speech, pronunciation audio. Queried across the whole entry subtree since
//! the site nests the head block at varying depths.

use crate::config::AUDIO_ATTR;
use crate::core::query::{Class, FieldRule, Query};

pub const HEADWORD: &str = "headword";
pub const HYPHENATION: &str = "hyphenation";
pub const HOMONYM_NUMBER: &str = "homonym_number";
pub const PART_OF_SPEECH: &str = "part_of_speech";
pub const BRITISH_AUDIO: &str = "british_audio_url";
pub const AMERICAN_AUDIO: &str = "american_audio_url";

pub static TABLE: &[FieldRule] = &[
    FieldRule::last_text(HEADWORD, Query::descendant("span", Class::Exact("HWD"))),
    FieldRule::last_text(HYPHENATION, Query::descendant("span", Class::Exact("HYPHENATION"))),
    FieldRule::last_text(HOMONYM_NUMBER, Query::descendant("span", Class::Exact("HOMNUM"))),
    FieldRule::last_text(PART_OF_SPEECH, Query::descendant("span", Class::Exact("POS"))),
    // Audio spans carry utility classes around the marker, e.g.
    // "speaker brefile fas fa-volume-up hideOnAmp".
    FieldRule::last_attr(
        BRITISH_AUDIO,
        Query::descendant("span", Class::Token("brefile")),
        AUDIO_ATTR,
    ),
    FieldRule::last_attr(
        AMERICAN_AUDIO,
        Query::descendant("span", Class::Token("amefile")),
        AUDIO_ATTR,
    ),
];

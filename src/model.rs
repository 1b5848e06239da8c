// src/model.rs
//! Nested record model for one extracted dictionary entry.
//!
//! The model is a pure tree: an entry owns its senses, a sense owns its
//! sub-senses and example clusters, nothing is shared. Built once by the
//! assembler and handed to the caller as-is.
//!
//! Absent fields are `None`/empty collections, never `Some("")`; serialization
//! skips them so a record only carries what the markup actually had.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One dictionary headword occurrence (one `dictentry` block).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryRoot {
    pub headword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyphenation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homonym_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub british_audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub american_audio_url: Option<String>,
    /// Document order preserved; the order carries no dictionary meaning but
    /// must be reproducible.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<Sense>,
    /// Corpus example groups, independent of senses: group title → cleaned
    /// example strings in document order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub corpus: BTreeMap<String, Vec<String>>,
}

/// One numbered meaning of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sense_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signpost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<CrossRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collocation_examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grammar_examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_senses: Vec<SubSense>,
}

/// A nested refinement of a sense. Same shape as [`Sense`] minus
/// signpost/field label, plus geography and synonym markers; extraction logic
/// is shared via the field selector tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubSense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sense_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<CrossRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collocation_examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grammar_examples: Vec<Example>,
}

impl SubSense {
    /// True when extraction found nothing at all; empty sub-senses are not
    /// appended to the owning sense.
    pub fn is_empty(&self) -> bool {
        self.sense_number.is_none()
            && self.grammar_note.is_none()
            && self.definition.is_none()
            && self.register_label.is_none()
            && self.geography_label.is_none()
            && self.synonym.is_none()
            && self.cross_references.is_empty()
            && self.examples.is_empty()
            && self.collocation_examples.is_empty()
            && self.grammar_examples.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossRef {
    pub text: String,
    /// Absolute: always prefixed with the site base URL.
    pub link_url: String,
}

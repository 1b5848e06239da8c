// src/extract/entry.rs
//! Entry assembler: walks one page payload and builds the nested records.
//!
//! Per payload: locate every `dictentry` root, extract its header (no header
//! fields means the block is decorative, drop it silently), walk `Sense`
//! nodes in document order recursing one level into `Subsense` children,
//! then merge the corpus example groups. A failure inside one entry root
//! never takes down its siblings; the failed index is reported instead.

use std::collections::{BTreeMap, HashSet};
use std::panic::{AssertUnwindSafe, catch_unwind};

use scraper::ElementRef;
use serde::Serialize;

use crate::core::dom;
use crate::core::query::{Class, Query};
use crate::error::ParseError;
use crate::extract::{clusters, family, fields};
use crate::model::{EntryRoot, Sense, SubSense};
use crate::specs;

static ENTRY_ROOT: Query = Query::descendant("span", Class::Exact("dictentry"));
static SENSE: Query = Query::descendant("span", Class::Exact("Sense"));
static SUB_SENSE: Query = Query::child("span", Class::Exact("Subsense"));

/// Everything extracted from one raw HTML payload.
#[derive(Debug, Default, Serialize)]
pub struct Extraction {
    /// `(key, entry)` in document order. The key is the homonym number when
    /// the source provides a fresh one; see [`Extraction::entries`] keying in
    /// the module docs.
    pub entries: Vec<(String, EntryRoot)>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub word_family: BTreeMap<String, Vec<String>>,
    /// Indices of entry roots whose extraction failed and was skipped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_roots: Vec<usize>,
}

impl Extraction {
    /// Drop the keys, keep the records.
    pub fn into_entries(self) -> Vec<EntryRoot> {
        self.entries.into_iter().map(|(_, e)| e).collect()
    }
}

/// Extract every dictionary entry from one page payload.
///
/// Zero entry roots is a normal outcome (empty `entries`), not an error;
/// [`ParseError`] fires only when the input is not HTML at all.
pub fn extract_entries(html: &str) -> Result<Extraction, ParseError> {
    let doc = dom::parse(html)?;
    let root = doc.root_element();

    let mut out = Extraction {
        word_family: family::word_family(root),
        ..Extraction::default()
    };

    let roots = ENTRY_ROOT.select(root);
    logd!("located {} entry root(s)", roots.len());

    let mut seen: HashSet<String> = HashSet::new();
    for (idx, entry_node) in roots.into_iter().enumerate() {
        match catch_unwind(AssertUnwindSafe(|| assemble(entry_node))) {
            Ok(Some(entry)) => {
                let key = entry_key(entry.homonym_number.as_deref(), idx, &seen);
                seen.insert(key.clone());
                logd!("entry root {idx}: '{}' keyed as '{key}'", entry.headword);
                out.entries.push((key, entry));
            }
            Ok(None) => {
                logd!("entry root {idx}: no header fields, skipped");
            }
            Err(_) => {
                loge!("entry root {idx}: extraction panicked, siblings unaffected");
                out.failed_roots.push(idx);
            }
        }
    }
    Ok(out)
}

/// Homonym number when fresh; otherwise the positional index disambiguates.
/// The source does not guarantee homonym uniqueness and a later entry must
/// never silently replace an earlier one.
fn entry_key(homnum: Option<&str>, idx: usize, seen: &HashSet<String>) -> String {
    let key = match homnum {
        Some(h) if !seen.contains(h) => return s!(h),
        Some(h) => format!("{h}-{idx}"),
        None => idx.to_string(),
    };
    // a positional key can still hit an earlier homonym number
    if seen.contains(&key) { format!("{key}-{idx}") } else { key }
}

fn assemble(node: ElementRef<'_>) -> Option<EntryRoot> {
    let mut header = fields::extract(node, specs::header::TABLE);
    if header.is_empty() {
        // Not a real entry block
        return None;
    }

    let senses = SENSE.select(node).into_iter().map(sense).collect();

    Some(EntryRoot {
        headword: header.take(specs::header::HEADWORD).unwrap_or_default(),
        hyphenation: header.take(specs::header::HYPHENATION),
        homonym_number: header.take(specs::header::HOMONYM_NUMBER),
        part_of_speech: header.take(specs::header::PART_OF_SPEECH),
        british_audio_url: header.take(specs::header::BRITISH_AUDIO),
        american_audio_url: header.take(specs::header::AMERICAN_AUDIO),
        senses,
        corpus: clusters::corpus(node),
    })
}

fn sense(node: ElementRef<'_>) -> Sense {
    let mut f = fields::extract(node, specs::sense::TABLE);
    let sub_senses = SUB_SENSE
        .select(node)
        .into_iter()
        .filter_map(sub_sense)
        .collect();

    Sense {
        sense_number: f.take(specs::sense::SENSE_NUMBER),
        grammar_note: f.take(specs::sense::GRAMMAR_NOTE),
        signpost: f.take(specs::sense::SIGNPOST),
        definition: f.take(specs::sense::DEFINITION),
        field_label: f.take(specs::sense::FIELD_LABEL),
        register_label: f.take(specs::sense::REGISTER_LABEL),
        cross_references: clusters::cross_refs(node),
        examples: clusters::examples(node),
        collocation_examples: clusters::collocation_examples(node),
        grammar_examples: clusters::grammar_examples(node),
        sub_senses,
    }
}

fn sub_sense(node: ElementRef<'_>) -> Option<SubSense> {
    let mut f = fields::extract(node, specs::sub_sense::TABLE);
    let rec = SubSense {
        sense_number: f.take(specs::sub_sense::SENSE_NUMBER),
        grammar_note: f.take(specs::sub_sense::GRAMMAR_NOTE),
        definition: f.take(specs::sub_sense::DEFINITION),
        register_label: f.take(specs::sub_sense::REGISTER_LABEL),
        geography_label: f.take(specs::sub_sense::GEOGRAPHY_LABEL),
        synonym: f.take(specs::sub_sense::SYNONYM),
        cross_references: clusters::cross_refs(node),
        examples: clusters::examples(node),
        collocation_examples: clusters::collocation_examples(node),
        grammar_examples: clusters::grammar_examples(node),
    };
    if rec.is_empty() { None } else { Some(rec) }
}

// src/extract/clusters.rs
//! Repeating sub-structures of a sense or sub-sense: example sentences,
//! grammar/collocation example pairs, cross-references, and the entry-level
//! corpus example groups.
//!
//! All queries run relative to the node passed in; a sense never sees a
//! sibling sense's examples.

use std::collections::BTreeMap;

use scraper::ElementRef;

use crate::config::{AUDIO_ATTR, SITE_URL};
use crate::core::dom;
use crate::core::query::{Class, Query};
use crate::core::sanitize::{join_clean, normalize_ws, strip_lead_delim};
use crate::model::{CrossRef, Example};

static EXAMPLE: Query = Query::child("span", Class::Exact("EXAMPLE"));
static GRAM_EXA: Query = Query::child("span", Class::Exact("GramExa"));
static COLLO_EXA: Query = Query::child("span", Class::Exact("ColloExa"));
static CROSS_REF: Query = Query::child("span", Class::Exact("Crossref"));
static ANCHOR: Query = Query::descendant("a", Class::Any);

static EXA_GROUP: Query = Query::descendant("span", Class::Exact("exaGroup"));
static EXA_TITLE: Query = Query::descendant("span", Class::Exact("title"));
static EXA_ITEM: Query = Query::descendant("span", Class::Exact("exa"));

/// Plain example sentences. The sentence is the example span's own text; the
/// bolded collocations nested inside belong to their own spans and are not
/// part of it. Audio hangs off the leading speaker span.
pub fn examples(node: ElementRef<'_>) -> Vec<Example> {
    EXAMPLE
        .select(node)
        .into_iter()
        .filter_map(|ex| {
            let text = join_clean(dom::own_text(ex));
            let audio = Query::nth_child("span", 0)
                .select(ex)
                .first()
                .and_then(|sp| dom::deep_attr(*sp, AUDIO_ATTR))
                .map(String::from);
            build_example(text, audio)
        })
        .collect()
}

/// Grammar pattern examples: first span child holds the pattern text, the
/// second the audio.
pub fn grammar_examples(node: ElementRef<'_>) -> Vec<Example> {
    span_pair_examples(node, &GRAM_EXA)
}

/// Collocation examples, same two-span layout as grammar examples.
pub fn collocation_examples(node: ElementRef<'_>) -> Vec<Example> {
    span_pair_examples(node, &COLLO_EXA)
}

fn span_pair_examples(node: ElementRef<'_>, query: &Query) -> Vec<Example> {
    query
        .select(node)
        .into_iter()
        .filter_map(|ex| {
            let mut spans = dom::child_elements(ex).filter(|el| el.value().name() == "span");
            let text = spans
                .next()
                .map(|sp| join_clean(dom::deep_text(sp)))
                .unwrap_or_default();
            let audio = spans
                .next()
                .and_then(|sp| dom::deep_attr(sp, AUDIO_ATTR))
                .map(String::from);
            build_example(text, audio)
        })
        .collect()
}

fn build_example(text: String, audio_url: Option<String>) -> Option<Example> {
    if text.is_empty() && audio_url.is_none() {
        return None;
    }
    Some(Example { text, audio_url })
}

/// Cross-reference links. Display text comes from the anchor's title
/// attribute; the href is relative and always gets the site base URL.
pub fn cross_refs(node: ElementRef<'_>) -> Vec<CrossRef> {
    let mut out = Vec::new();
    for cr in CROSS_REF.select(node) {
        for a in ANCHOR.select(cr) {
            let text = join_clean(dom::attr(a, "title"));
            if text.is_empty() {
                continue;
            }
            let href = dom::attr(a, "href").unwrap_or_default();
            out.push(CrossRef { text, link_url: join!(SITE_URL, href) });
        }
    }
    out
}

/// Corpus example groups under an entry root: title → cleaned example
/// strings. Each example carries a one-character leading delimiter artifact
/// which is stripped. Groups repeating a title are merged in document order.
pub fn corpus(root: ElementRef<'_>) -> BTreeMap<String, Vec<String>> {
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for group in EXA_GROUP.select(root) {
        let title = EXA_TITLE
            .select(group)
            .first()
            .map(|t| normalize_ws(&join_clean(dom::deep_text(*t))))
            .unwrap_or_default();
        if title.is_empty() {
            continue;
        }
        let items: Vec<String> = EXA_ITEM
            .select(group)
            .into_iter()
            .map(|exa| strip_lead_delim(&join_clean(dom::deep_text(exa))).to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !items.is_empty() {
            out.entry(title).or_default().extend(items);
        }
    }
    out
}

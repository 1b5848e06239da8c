// src/extract/family.rs
//! Word family block: the page-level `wordfams` strip listing related words
//! grouped by part of speech, e.g. `(noun) runner run (verb) run outrun`.
//!
//! The markup is flat text with parenthesized part-of-speech markers mixed
//! in, so extraction is a small scan over text fragments: a marker switches
//! the current group, every other non-empty fragment joins it.

use std::collections::BTreeMap;

use scraper::ElementRef;

use crate::core::query::{Class, Query};

static WORD_FAMS: Query = Query::descendant("div", Class::Exact("wordfams"));

pub fn word_family(root: ElementRef<'_>) -> BTreeMap<String, Vec<String>> {
    let mut fams: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let Some(block) = WORD_FAMS.select(root).into_iter().next() else {
        return fams;
    };

    let mut current_pos: Option<String> = None;
    for frag in block.text() {
        let item = frag.trim();
        if item.is_empty() {
            continue;
        }
        if let Some(marker) = paren_marker(item) {
            current_pos = Some(s!(marker));
        } else if let Some(pos) = current_pos.as_deref() {
            if !pos.is_empty() {
                fams.entry(s!(pos)).or_default().push(s!(item));
            }
        }
    }
    fams
}

/// First `(...)` group in the fragment, if any.
fn paren_marker(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let close = s[open + 1..].find(')')? + open + 1;
    Some(s[open + 1..close].trim())
}

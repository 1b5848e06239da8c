// src/extract/fields.rs
//! Table-driven scalar field extraction.
//!
//! One call runs a whole selector table against one node and returns a flat
//! field map. Fields are independent: a field that matches nothing is simply
//! absent, and never blocks its siblings. Values that clean down to the empty
//! string are omitted, so "has this field" is a presence check.

use scraper::ElementRef;

use crate::core::dom;
use crate::core::query::{FieldRule, Take, Value};
use crate::core::sanitize::join_clean;

/// Flat record produced by running one selector table against one node.
/// Insertion follows table order; small enough that linear lookup wins.
#[derive(Debug, Default)]
pub struct FieldMap(Vec<(&'static str, String)>);

impl FieldMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove and return a field, handing ownership to the record being built.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let idx = self.0.iter().position(|(n, _)| *n == name)?;
        Some(self.0.remove(idx).1)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn fragments<'a>(el: ElementRef<'a>, value: Value) -> Vec<&'a str> {
    match value {
        Value::DeepText => dom::deep_text(el),
        Value::OwnText => dom::own_text(el),
        Value::Attr(name) => dom::deep_attr(el, name).into_iter().collect(),
    }
}

/// Run `table` against `node`. Pure: same subtree, same table, same map.
pub fn extract(node: ElementRef<'_>, table: &[FieldRule]) -> FieldMap {
    let mut out = Vec::new();
    for rule in table {
        let hits = rule.query.select(node);
        let value = match rule.take {
            Take::Last => hits.last().map(|el| join_clean(fragments(*el, rule.value))),
            Take::Join => {
                let frags: Vec<&str> = hits
                    .iter()
                    .flat_map(|el| fragments(*el, rule.value))
                    .collect();
                Some(join_clean(frags))
            }
        };
        if let Some(v) = value {
            if !v.is_empty() {
                out.push((rule.name, v));
            }
        }
    }
    FieldMap(out)
}

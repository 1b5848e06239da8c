// src/core/query.rs
//! Structural queries against the parsed tree.
//!
//! A [`Query`] names *where* to look relative to some node (children vs. the
//! whole subtree, tag, class, optional positional child index); a
//! [`FieldRule`] pairs a query with *what* to read from the matched nodes and
//! *how* to reduce multiple matches. All queries here are relative to the node
//! they are run against — never the document root.

use scraper::ElementRef;

use super::dom;

#[derive(Clone, Copy, Debug)]
pub enum Scope {
    Children,
    Descendants,
}

/// How the class attribute must match.
#[derive(Clone, Copy, Debug)]
pub enum Class {
    Any,
    /// One class token equals the name exactly (e.g. `DEF`).
    Exact(&'static str),
    /// One class token contains the name (e.g. `brefile` inside
    /// `speaker brefile fas`).
    Token(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct Query {
    pub scope: Scope,
    pub tag: &'static str,
    pub class: Class,
    /// Positional filter over the tag-matched children (0-based), for
    /// selectors like "the first span child".
    pub nth: Option<usize>,
}

impl Query {
    pub const fn child(tag: &'static str, class: Class) -> Self {
        Query { scope: Scope::Children, tag, class, nth: None }
    }

    pub const fn descendant(tag: &'static str, class: Class) -> Self {
        Query { scope: Scope::Descendants, tag, class, nth: None }
    }

    pub const fn nth_child(tag: &'static str, nth: usize) -> Self {
        Query { scope: Scope::Children, tag, class: Class::Any, nth: Some(nth) }
    }

    fn matches(&self, el: &ElementRef) -> bool {
        if el.value().name() != self.tag {
            return false;
        }
        match self.class {
            Class::Any => true,
            Class::Exact(name) => el.value().classes().any(|c| c == name),
            Class::Token(name) => el.value().classes().any(|c| c.contains(name)),
        }
    }

    /// All matching nodes in document order. With `nth` set, at most one.
    pub fn select<'a>(&self, node: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let hits: Vec<ElementRef<'a>> = match self.scope {
            Scope::Children => dom::child_elements(node)
                .filter(|el| self.matches(el))
                .collect(),
            Scope::Descendants => dom::descendant_elements(node)
                .filter(|el| self.matches(el))
                .collect(),
        };
        match self.nth {
            Some(n) => hits.get(n).copied().into_iter().collect(),
            None => hits,
        }
    }
}

/// What to read off a matched node.
#[derive(Clone, Copy, Debug)]
pub enum Value {
    /// All text fragments of the subtree, document order.
    DeepText,
    /// Only text fragments that are direct children of the node.
    OwnText,
    /// The named attribute, searched on the node and then its subtree.
    Attr(&'static str),
}

/// How to reduce multiple matched nodes to one field value.
#[derive(Clone, Copy, Debug)]
pub enum Take {
    /// The last matching node wins. Header fields use this: merged homonym
    /// fragments repeat the marker spans and the site's final one is the
    /// authoritative one.
    Last,
    /// Concatenate every match's fragments, drop backslash-escaped fragments,
    /// trim. See [`crate::core::sanitize::join_clean`].
    Join,
}

/// One row of a field selector table: semantic field name plus the query,
/// value source and reduction that produce it.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub query: Query,
    pub value: Value,
    pub take: Take,
}

impl FieldRule {
    pub const fn last_text(name: &'static str, query: Query) -> Self {
        FieldRule { name, query, value: Value::DeepText, take: Take::Last }
    }

    pub const fn last_attr(name: &'static str, query: Query, attr: &'static str) -> Self {
        FieldRule { name, query, value: Value::Attr(attr), take: Take::Last }
    }

    pub const fn join_text(name: &'static str, query: Query) -> Self {
        FieldRule { name, query, value: Value::DeepText, take: Take::Join }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom;

    fn first_child(doc: &scraper::Html) -> ElementRef<'_> {
        dom::child_elements(doc.root_element()).next().unwrap()
    }

    #[test]
    fn child_scope_ignores_nested_matches() {
        let doc = dom::parse(
            r#"<div><span class="DEF">a</span><p><span class="DEF">b</span></p></div>"#,
        )
        .unwrap();
        let div = first_child(&doc);
        let q = Query::child("span", Class::Exact("DEF"));
        let hits = q.select(div);
        assert_eq!(hits.len(), 1);
        assert_eq!(dom::deep_text(hits[0]), vec!["a"]);
    }

    #[test]
    fn descendant_scope_finds_nested_matches() {
        let doc = dom::parse(
            r#"<div><span class="DEF">a</span><p><span class="DEF">b</span></p></div>"#,
        )
        .unwrap();
        let div = first_child(&doc);
        let q = Query::descendant("span", Class::Exact("DEF"));
        assert_eq!(q.select(div).len(), 2);
    }

    #[test]
    fn exact_class_requires_full_token() {
        let doc = dom::parse(r#"<div><span class="DEFINED">x</span></div>"#).unwrap();
        let div = first_child(&doc);
        assert!(Query::child("span", Class::Exact("DEF")).select(div).is_empty());
        assert_eq!(Query::child("span", Class::Token("DEF")).select(div).len(), 1);
    }

    #[test]
    fn token_class_matches_inside_multi_class_attribute() {
        let doc = dom::parse(r#"<div><span class="speaker brefile fas">x</span></div>"#).unwrap();
        let div = first_child(&doc);
        assert_eq!(Query::child("span", Class::Token("brefile")).select(div).len(), 1);
    }

    #[test]
    fn nth_picks_positional_child_among_tag_matches() {
        let doc = dom::parse(r#"<div><b>z</b><span>one</span><span>two</span></div>"#).unwrap();
        let div = first_child(&doc);
        let hits = Query::nth_child("span", 0).select(div);
        assert_eq!(hits.len(), 1);
        assert_eq!(dom::deep_text(hits[0]), vec!["one"]);
        assert!(Query::nth_child("span", 5).select(div).is_empty());
    }
}

// src/core/dom.rs
//! Thin layer over `scraper`'s html5ever tree.
//!
//! Scraped pages are routinely malformed (unclosed tags, stray fragments), so
//! parsing is best-effort: anything html5ever can recover into a tree is
//! accepted. Only empty input, or input that produces no nodes at all, is
//! rejected.

use scraper::{ElementRef, Html};

use crate::error::ParseError;

pub fn parse(html: &str) -> Result<Html, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let doc = Html::parse_fragment(html);
    if doc.root_element().children().next().is_none() {
        return Err(ParseError::NoMarkup);
    }
    Ok(doc)
}

/// Direct child elements, document order.
pub fn child_elements<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.children().filter_map(ElementRef::wrap)
}

/// All descendant elements, document order, excluding `node` itself.
pub fn descendant_elements<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Text fragments of the whole subtree, document order.
pub fn deep_text<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.text().collect()
}

/// Text fragments that are direct children of `el` only.
pub fn own_text<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// First occurrence of `name` on `el` or anywhere in its subtree.
pub fn deep_attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value()
        .attr(name)
        .or_else(|| descendant_elements(el).find_map(|d| d.value().attr(name)))
}

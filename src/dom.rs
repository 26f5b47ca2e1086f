//! Query layer over parsed HTML pages
//!
//! Wraps the `scraper` crate behind the handful of shapes the scanners need:
//! anchors in document order, class-matched text blocks, and the
//! closest-preceding-paragraph lookup used by the mobile apps page.

use scraper::{ElementRef, Html, Selector};

/// An `<a>` element that carries an href. Anchors without one are never
/// version candidates and are skipped at collection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

/// All href-carrying anchors, in document order
pub fn anchors(doc: &Html) -> Vec<Anchor> {
    doc.select(&selector("a"))
        .filter_map(|el| {
            let href = el.value().attr("href")?;
            Some(Anchor {
                href: href.to_string(),
                text: element_text(&el),
            })
        })
        .collect()
}

/// Anchors whose href satisfies `pred`, in document order
pub fn anchors_where(doc: &Html, pred: impl Fn(&str) -> bool) -> Vec<Anchor> {
    anchors(doc).into_iter().filter(|a| pred(&a.href)).collect()
}

/// Trimmed text of every `<div>` with the given class, in document order
pub fn text_blocks(doc: &Html, class: &str) -> Vec<String> {
    doc.select(&selector(&format!("div.{class}")))
        .map(|el| element_text(&el).trim().to_string())
        .collect()
}

/// Text of the closest `<p>` preceding the `<div>` with the given id, in
/// document order. Returns None when the div is absent or nothing precedes it.
pub fn paragraph_before_div(doc: &Html, id: &str) -> Option<String> {
    let mut last_paragraph = None;
    for node in doc.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        if el.value().name() == "p" {
            last_paragraph = Some(element_text(&el));
        } else if el.value().name() == "div" && el.value().id() == Some(id) {
            return last_paragraph;
        }
    }
    None
}

// src/core/html.rs
// DOM helpers on top of `scraper`. Tag names come back lowercased from html5ever.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;
use crate::config::options::Whitespace;

/// Every element of the document in document (pre-)order.
pub fn elements(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
}

/// Concatenated descendant text of `el`, entities decoded, normalized per `mode`.
pub fn element_text(el: ElementRef<'_>, mode: Whitespace) -> String {
    let raw: String = el.text().collect();
    match mode {
        Whitespace::Trim => raw.trim().to_string(),
        Whitespace::Collapse => normalize_ws(&raw),
    }
}

// src/core/html.rs
//
// Thin helpers over `scraper` so page specs read as a list of lookups.
// Selectors used by specs are literals; they are compiled once.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Compile a built-in selector. Only ever called with string literals.
pub fn compile(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("built-in selector {css:?} does not parse: {e}"),
    }
}

/// First descendant of `scope` matching `sel`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// All visible text under `el`, whitespace collapsed and trimmed.
/// Entities are already decoded by the parser.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

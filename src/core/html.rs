// src/core/html.rs
use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

pub fn sel(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css:?}: {e:?}")))
}

/// Visible text of an element, whitespace collapsed (`&nbsp;` included).
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

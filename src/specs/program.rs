// src/specs/program.rs
//! Scraping *spec* for a program page.
//!
//! Rows of `table#programmatrix` carry the course name in `td.course_number`
//! and the outline landing page in `a.course_outline`. Rows missing either are
//! layout rows (term headings, electives notes) and are skipped, as are rows
//! whose link cannot be resolved.

use scraper::Html;
use url::Url;

use crate::config::consts::PREFIX_URL;
use crate::core::html::{sel, text_of};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseLink {
    pub name: String,
    /// Course landing page from the matrix. Absolute.
    pub outline_url: String,
}

/// Extract `(course, outline link)` pairs in page order.
/// A course listed twice keeps its first position and its last link.
pub fn extract_course_links(html_doc: &str) -> Result<Vec<CourseLink>> {
    let doc = Html::parse_document(html_doc);
    let rows = sel("table#programmatrix tr")?;
    let course_cell = sel("td.course_number")?;
    let outline_link = sel("a.course_outline")?;
    let prefix = Url::parse(PREFIX_URL)?;

    let mut out: Vec<CourseLink> = Vec::new();

    for row in doc.select(&rows) {
        let Some(cell) = row.select(&course_cell).next() else { continue };
        let Some(anchor) = row.select(&outline_link).next() else { continue };
        let Some(href) = anchor.value().attr("href") else { continue };

        let name = text_of(cell);
        let Ok(outline_url) = absolutize(&prefix, href) else {
            logd!("{name}: skipping unparsable outline link {href:?}");
            continue;
        };

        match out.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.outline_url = outline_url,
            None => out.push(CourseLink { name, outline_url }),
        }
    }

    Ok(out)
}

/// Site-relative hrefs (`/...`) hang off the site prefix; anything else is kept verbatim.
fn absolutize(prefix: &Url, href: &str) -> Result<String> {
    if href.starts_with('/') {
        Ok(prefix.join(href)?.to_string())
    } else {
        Ok(s!(href))
    }
}

// src/specs/outline_api.rs
//! Outlines API: URL shape and reply parsing.
//!
//! `GET {API_URL}/{term}/{dept}/{number}/` answers with
//! `{"data": {"courses": [{"crn": "12345", ...}, ...]}}` when the course runs
//! that term. Otherwise `data` may be `false`, `null`, or an error object.
//! Only the first section's CRN is used.

use serde::Deserialize;
use serde_json::Value;

use crate::config::options::Term;
use crate::core::sanitize::strip_trailing_slash;
use crate::course::CourseId;

#[derive(Deserialize)]
struct Envelope {
    data: Payload,
}

#[derive(Deserialize)]
struct Payload {
    // Only the first entry is read; keep the rest untyped.
    courses: Vec<Value>,
}

#[derive(Deserialize)]
struct Section {
    crn: Crn,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Crn {
    Text(String),
    Number(u64),
}

pub fn api_url(base: &str, term: &Term, course: &CourseId) -> String {
    format!(
        "{}/{}/{}/{}/",
        strip_trailing_slash(base),
        term,
        course.department_slug(),
        course.number
    )
}

/// CRN of the first listed section, or `None` when the reply has no usable one.
pub fn extract_crn(reply: &Value) -> Option<String> {
    let envelope = Envelope::deserialize(reply).ok()?;
    let first = envelope.data.courses.first()?;
    let section = Section::deserialize(first).ok()?;

    let crn = match section.crn {
        Crn::Text(t) => s!(t.trim()),
        Crn::Number(n) => n.to_string(),
    };
    (!crn.is_empty()).then_some(crn)
}

/// Full outline page: `{prefix}/outlines/{term}{crn}`.
pub fn outline_url(prefix: &str, term: &Term, crn: &str) -> String {
    join!(strip_trailing_slash(prefix), "/outlines/", term.as_str(), crn)
}

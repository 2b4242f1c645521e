// src/course.rs
use std::fmt;

use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};

/// A course name as listed in the program matrix, e.g. `COMP 1510`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CourseId {
    pub department: String,
    pub number: String,
}

impl CourseId {
    /// Exactly two space-separated parts: department then number.
    pub fn parse(name: &str) -> Result<Self> {
        let clean = normalize_ws(name);
        let mut parts = clean.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(dept), Some(num), None) if !dept.is_empty() && !num.is_empty() => Ok(Self {
                department: s!(dept),
                number: s!(num),
            }),
            _ => Err(Error::MalformedCourse(s!(name))),
        }
    }

    /// Department as the outlines API expects it (`comp`).
    pub fn department_slug(&self) -> String {
        self.department.to_lowercase()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.department, self.number)
    }
}

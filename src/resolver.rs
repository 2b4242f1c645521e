// src/resolver.rs
//! CRN lookup against the outlines API, memoized per `(term, course)`.
//!
//! Asking for the CRN and then the outline URL of the same course costs one
//! request. Only successful replies are cached; the cache lives as long as the
//! resolver.

use std::{
    collections::{hash_map::Entry, HashMap},
    thread,
    time::Duration,
};

use serde_json::Value;

use crate::{
    config::{consts::{API_URL, PREFIX_URL}, options::Term},
    core::Fetch,
    course::CourseId,
    error::Result,
    specs::outline_api::{api_url, extract_crn, outline_url},
};

pub struct OutlineResolver<'a, F: Fetch + ?Sized> {
    fetch: &'a F,
    api_base: String,
    prefix: String,
    pause: Duration,
    calls: usize,
    cache: HashMap<(Term, String), Value>,
}

impl<'a, F: Fetch + ?Sized> OutlineResolver<'a, F> {
    pub fn new(fetch: &'a F) -> Self {
        Self::with_endpoints(fetch, API_URL, PREFIX_URL)
    }

    pub fn with_endpoints(fetch: &'a F, api_base: &str, prefix: &str) -> Self {
        Self {
            fetch,
            api_base: s!(api_base),
            prefix: s!(prefix),
            pause: Duration::ZERO,
            calls: 0,
            cache: HashMap::new(),
        }
    }

    /// Sleep this long before every API call but the first.
    pub fn with_pause(mut self, ms: u64) -> Self {
        self.pause = Duration::from_millis(ms);
        self
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn api_data(&mut self, term: &Term, course_name: &str) -> Result<&Value> {
        match self.cache.entry((term.clone(), s!(course_name))) {
            Entry::Occupied(hit) => Ok(hit.into_mut()),
            Entry::Vacant(slot) => {
                let course = CourseId::parse(course_name)?;
                let url = api_url(&self.api_base, term, &course);

                if self.calls > 0 && !self.pause.is_zero() {
                    thread::sleep(self.pause);
                }
                self.calls += 1;

                let reply = self.fetch.get_json(&url)?;
                Ok(slot.insert(reply))
            }
        }
    }

    /// First listed CRN for the course in `term`.
    /// `Ok(None)` means the API answered but lists no section.
    pub fn crn(&mut self, term: &Term, course_name: &str) -> Result<Option<String>> {
        let reply = self.api_data(term, course_name)?;
        let crn = extract_crn(reply);
        if crn.is_none() {
            logd!("{course_name}: no CRN in reply for {term}");
        }
        Ok(crn)
    }

    /// Full outline URL, present iff a CRN was found.
    pub fn outline_url(&mut self, term: &Term, course_name: &str) -> Result<Option<String>> {
        let crn = self.crn(term, course_name)?;
        Ok(crn.map(|crn| outline_url(&self.prefix, term, &crn)))
    }
}

//! # Scraping "specs" module
//!
//! Page-specific knowledge lives here: *where the ground truth sits* in a remote
//! response and *how to read it tolerantly*.
//!
//! - `program` reads a program page (HTML) and returns the course matrix as
//!   `CourseLink`s, in page order.
//! - `outline_api` builds outlines API URLs and pulls the CRN out of the JSON
//!   reply; it also formats the final outline URL.
//!
//! Nothing here does networking or caching. `resolver` and `runner` decide
//! when to fetch and what to keep; specs only extract.
//!
//! ## Typical call chain
//! ```text
//! runner::run → Fetch::get_text → specs::program::extract_course_links
//!             → resolver::OutlineResolver → Fetch::get_json → specs::outline_api::extract_crn
//! ```
//!
//! Specs are testable offline against captured fixtures (see `tests/fixtures`).
pub mod outline_api;
pub mod program;

// src/config/consts.rs

// Site
pub const PREFIX_URL: &str = "https://www.bcit.ca";
pub const API_URL: &str = "https://www.bcit.ca/wp-json/bcit/outlines/v1/load_course_term/";

// Programs
pub const CIT_PROGRAM_URL: &str =
    "https://www.bcit.ca/programs/computer-information-technology-diploma-full-time-5540dipma/";
pub const CST_PROGRAM_URL: &str =
    "https://www.bcit.ca/programs/computer-systems-technology-diploma-full-time-5500dipma/";

// Adjust if required
pub const DEFAULT_TERM: &str = "202130";

// Net config
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("crn_outlines/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Output
pub const OUTPUT_HEADERS: [&str; 3] = ["Course", "CRN", "Outline"];

// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Holds the upper-cased program name as typed.
    #[error("I don't know where to find info about the program {0}. Try with CIT or CST.")]
    UnknownProgram(String),

    #[error("Term {0} seems invalid. Sorry!")]
    InvalidTerm(String),

    #[error("malformed course name {0:?} (expected \"DEPT NUMBER\")")]
    MalformedCourse(String),

    #[error("bad selector {0}")]
    Selector(String),

    #[error("HTTP error: {status} {url}")]
    Http { status: u16, url: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Bad user input rather than a failed fetch.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::UnknownProgram(_) | Error::InvalidTerm(_))
    }
}

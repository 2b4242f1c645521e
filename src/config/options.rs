// src/config/options.rs
use std::{fmt, path::PathBuf, str::FromStr};

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Program {
    Cit,
    Cst,
}

impl Program {
    pub const ALL: [Program; 2] = [Program::Cit, Program::Cst];

    pub fn code(self) -> &'static str {
        match self {
            Program::Cit => "cit",
            Program::Cst => "cst",
        }
    }

    /// Program page holding the course matrix.
    pub fn url(self) -> &'static str {
        match self {
            Program::Cit => CIT_PROGRAM_URL,
            Program::Cst => CST_PROGRAM_URL,
        }
    }
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cit" => Ok(Program::Cit),
            "cst" => Ok(Program::Cst),
            _ => Err(Error::UnknownProgram(s.trim().to_uppercase())),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_ascii_uppercase())
    }
}

/// Academic term, `YYYYS0`: year 20xx, season 1 (winter), 2 (spring/summer) or 3 (fall).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    pub fn parse(s: &str) -> Result<Self> {
        if is_valid_term(s) {
            Ok(Term(s!(s)))
        } else {
            Err(Error::InvalidTerm(s!(s)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_term(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [b'2', b'0', y1, y2, b'1'..=b'3', b'0'] if y1.is_ascii_digit() && y2.is_ascii_digit()
    )
}

impl Default for Term {
    fn default() -> Self {
        Term(s!(DEFAULT_TERM))
    }
}

impl FromStr for Term {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Term::parse(s)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `COURSE CRN URL`, one per line
    Text,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub program: Program,
    pub term: Term,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,      // None = stdout
    pub include_headers: bool,     // CSV/TSV only
    pub pause_ms: u64,             // between API calls
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            program: Program::Cit,
            term: Term::default(),
            format: OutputFormat::Text,
            out: None,
            include_headers: false,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

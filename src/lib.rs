// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod course;
pub mod csv;
pub mod error;
pub mod progress;
pub mod resolver;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

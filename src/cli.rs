// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    config::{
        consts::{DEFAULT_TERM, REQUEST_PAUSE_MS},
        options::{OutputFormat, Program, RunOptions, Term},
    },
    core::HttpClient,
    error::Result,
    progress::Progress,
    runner,
};

/// Resolve a BCIT program's courses to CRNs and full outline URLs.
#[derive(Parser, Debug)]
#[command(name = "crn_outlines", version, about)]
pub struct Args {
    /// Program code (CIT or CST)
    #[arg(default_value = "cit")]
    pub program: String,

    /// Term as YYYYS0 (S: 1 winter, 2 spring/summer, 3 fall)
    #[arg(default_value = DEFAULT_TERM)]
    pub term: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Header row for CSV/TSV
    #[arg(long)]
    pub include_headers: bool,

    /// Print known programs and exit
    #[arg(long)]
    pub list_programs: bool,

    /// Pause between API calls, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// More diagnostics on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> Result<RunOptions> {
        Ok(RunOptions {
            program: self.program.parse::<Program>()?,
            term: Term::parse(&self.term)?,
            format: self.format,
            out: self.out.clone(),
            include_headers: self.include_headers,
            pause_ms: self.pause_ms,
        })
    }
}

/// Progress sink that reports through the log.
struct LogProgress {
    total: usize,
    seen: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Resolving {total} courses");
    }
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn item_done(&mut self, course: &str) {
        self.seen += 1;
        logd!("[{}/{}] {course}", self.seen, self.total);
    }
    fn item_failed(&mut self, course: &str) {
        self.seen += 1;
        logd!("[{}/{}] {course} failed", self.seen, self.total);
    }
}

pub fn list_programs() -> Vec<(&'static str, &'static str)> {
    Program::ALL.iter().map(|p| (p.code(), p.url())).collect()
}

pub fn run(args: &Args) -> Result<()> {
    if args.list_programs {
        for (code, url) in list_programs() {
            println!("{},{}", code, url);
        }
        return Ok(());
    }

    let opts = args.to_options()?;
    let client = HttpClient::new()?;
    let mut progress = LogProgress { total: 0, seen: 0 };

    let summary = runner::run(&opts, &client, Some(&mut progress))?;
    runner::write_output(&summary, &opts)?;

    if summary.failed() > 0 {
        logf!("{} of {} courses could not be resolved", summary.failed(), summary.reports.len());
    }
    Ok(())
}

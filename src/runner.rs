// src/runner.rs
use std::fmt::Write as _;
use std::{fs, io::{self, Write}};

use crate::{
    config::{
        consts::OUTPUT_HEADERS,
        options::{OutputFormat, Program, RunOptions, Term},
    },
    core::Fetch,
    csv,
    error::Result,
    progress::Progress,
    resolver::OutlineResolver,
    specs::program::extract_course_links,
};

/// Outcome for one course of the program matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CourseReport {
    Found { course: String, crn: String, url: String },
    Failed { course: String, reason: String },
}

impl CourseReport {
    pub fn course(&self) -> &str {
        match self {
            CourseReport::Found { course, .. } | CourseReport::Failed { course, .. } => course,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, CourseReport::Found { .. })
    }
}

/// Summary of one run, courses in page order.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub program: Program,
    pub term: Term,
    pub reports: Vec<CourseReport>,
}

impl RunSummary {
    pub fn found(&self) -> usize {
        self.reports.iter().filter(|r| r.is_found()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.found()
    }
}

/// Fetch the program page, then resolve every listed course.
/// Only a failure to get the program page aborts; course failures are reported per course.
pub fn run<F: Fetch + ?Sized>(
    opts: &RunOptions,
    fetch: &F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let page_url = opts.program.url();
    logf!("Fetching {} program page: {page_url}", opts.program);
    let html_doc = fetch.get_text(page_url)?;

    let courses = extract_course_links(&html_doc)?;
    logf!("{} courses listed for {}", courses.len(), opts.program);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(courses.len());
        if courses.is_empty() {
            p.log("No courses found on the program page.");
        }
    }

    let mut resolver = OutlineResolver::new(fetch).with_pause(opts.pause_ms);
    let mut reports = Vec::with_capacity(courses.len());

    for link in &courses {
        logd!("{}: landing page {}", link.name, link.outline_url);
        let report = resolve_one(&mut resolver, &opts.term, &link.name);

        if let Some(p) = progress.as_deref_mut() {
            if report.is_found() {
                p.item_done(&link.name);
            } else {
                p.item_failed(&link.name);
            }
        }
        reports.push(report);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { program: opts.program, term: opts.term.clone(), reports })
}

fn resolve_one<F: Fetch + ?Sized>(
    resolver: &mut OutlineResolver<'_, F>,
    term: &Term,
    course: &str,
) -> CourseReport {
    // Second lookup is served from the resolver cache.
    let resolved = match resolver.crn(term, course) {
        Ok(crn) => resolver.outline_url(term, course).map(|url| (crn, url)),
        Err(e) => Err(e),
    };

    match resolved {
        Ok((Some(crn), Some(url))) => CourseReport::Found { course: s!(course), crn, url },
        Err(e) => {
            loge!("Course {course}: {e}");
            CourseReport::Failed { course: s!(course), reason: e.to_string() }
        }
        _ => CourseReport::Failed {
            course: s!(course),
            reason: format!("no CRN listed for term {term}"),
        },
    }
}

/// Render a summary in the requested format. Headers apply to CSV/TSV only.
pub fn render(summary: &RunSummary, format: OutputFormat, include_headers: bool) -> String {
    let Some(sep) = format.delim() else {
        let mut out = s!();
        for report in &summary.reports {
            let _ = match report {
                CourseReport::Found { course, crn, url } => writeln!(out, "{course} {crn} {url}"),
                CourseReport::Failed { course, .. } => {
                    writeln!(out, "Something went wrong with course {course}. Sorry!")
                }
            };
        }
        return out;
    };

    let headers: Option<Vec<String>> =
        include_headers.then(|| OUTPUT_HEADERS.iter().map(|h| s!(*h)).collect());

    let rows: Vec<Vec<String>> = summary
        .reports
        .iter()
        .map(|r| match r {
            CourseReport::Found { course, crn, url } => vec![course.clone(), crn.clone(), url.clone()],
            CourseReport::Failed { course, .. } => vec![course.clone(), s!(), s!()],
        })
        .collect();

    csv::rows_to_string(&rows, headers.as_deref(), sep)
}

/// Write the rendered summary to `opts.out` (parents created) or stdout.
pub fn write_output(summary: &RunSummary, opts: &RunOptions) -> Result<()> {
    let text = render(summary, opts.format, opts.include_headers);

    match &opts.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, text)?;
            logf!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

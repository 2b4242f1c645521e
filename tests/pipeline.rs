// tests/pipeline.rs
//
// Full program → CRN → outline run over an in-memory site.
//
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};

use crn_outlines::config::options::{OutputFormat, Program, RunOptions, Term};
use crn_outlines::core::Fetch;
use crn_outlines::progress::{NullProgress, Progress};
use crn_outlines::runner::{self, CourseReport};
use crn_outlines::{Error, Result};

const PAGE: &str = include_str!("fixtures/cit_program.html");
const API: &str = "https://www.bcit.ca/wp-json/bcit/outlines/v1/load_course_term";

/// Pages and API replies keyed by URL; records every request.
#[derive(Default)]
struct FakeSite {
    pages: HashMap<String, String>,
    json: HashMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl FakeSite {
    fn cit(term: &str) -> Self {
        let mut site = FakeSite::default();
        site.pages.insert(Program::Cit.url().into(), PAGE.into());
        site.api(term, "comp", "1002", json!({"data": {"courses": [{"crn": "30001"}, {"crn": "30002"}]}}));
        site.api(term, "comp", "1113", json!({"data": {"courses": [{"crn": 30110}]}}));
        site.api(term, "comm", "1116", json!({"data": false}));
        site.api(term, "comp", "2714", json!({"data": {"courses": [{"crn": "32714"}]}}));
        site
    }

    fn api(&mut self, term: &str, dept: &str, num: &str, reply: Value) {
        self.json.insert(format!("{API}/{term}/{dept}/{num}/"), reply);
    }

    fn count(&self, url_part: &str) -> usize {
        self.requests.borrow().iter().filter(|u| u.contains(url_part)).count()
    }
}

impl Fetch for FakeSite {
    fn get_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or(Error::Http { status: 404, url: url.into() })
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        self.requests.borrow_mut().push(url.to_string());
        self.json.get(url).cloned().ok_or(Error::Http { status: 404, url: url.into() })
    }
}

fn opts() -> RunOptions {
    RunOptions { pause_ms: 0, ..RunOptions::default() }
}

#[derive(Default)]
struct Tally {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, course: &str) {
        self.done.push(course.into());
    }

    fn item_failed(&mut self, course: &str) {
        self.failed.push(course.into());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn resolves_each_course_in_page_order() {
    let site = FakeSite::cit("202130");
    let summary = runner::run(&opts(), &site, Some(&mut NullProgress)).unwrap();

    let courses: Vec<&str> = summary.reports.iter().map(|r| r.course()).collect();
    assert_eq!(courses, ["COMP 1002", "COMP 1113", "COMM 1116", "COMP 2714", "Electives"]);

    assert_eq!(summary.reports[0], CourseReport::Found {
        course: "COMP 1002".into(),
        crn: "30001".into(),
        url: "https://www.bcit.ca/outlines/20213030001".into(),
    });
    assert!(matches!(&summary.reports[1], CourseReport::Found { crn, .. } if crn == "30110"));
    assert!(!summary.reports[2].is_found()); // no section this term
    assert!(!summary.reports[4].is_found()); // "Electives" is not a course id
    assert_eq!((summary.found(), summary.failed()), (3, 2));
}

#[test]
fn one_api_call_per_course() {
    let site = FakeSite::cit("202130");
    runner::run(&opts(), &site, None).unwrap();

    assert_eq!(site.count("/comp/1002/"), 1);
    assert_eq!(site.count("/comp/2714/"), 1);
    assert_eq!(site.count("/comm/1116/"), 1);
    // page + four well-formed courses; "Electives" never reaches the API
    assert_eq!(site.requests.borrow().len(), 5);
}

#[test]
fn missing_api_reply_fails_only_that_course() {
    let mut site = FakeSite::cit("202130");
    site.json.retain(|url, _| !url.contains("/comp/1113/"));

    let summary = runner::run(&opts(), &site, None).unwrap();
    match &summary.reports[1] {
        CourseReport::Failed { course, reason } => {
            assert_eq!(course, "COMP 1113");
            assert!(reason.contains("404"), "{reason}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(summary.reports[3].is_found());
}

#[test]
fn term_flows_into_api_and_outline() {
    let site = FakeSite::cit("202210");
    let o = RunOptions { term: Term::parse("202210").unwrap(), ..opts() };
    let summary = runner::run(&o, &site, None).unwrap();
    assert!(matches!(
        &summary.reports[3],
        CourseReport::Found { url, .. } if url == "https://www.bcit.ca/outlines/20221032714"
    ));
}

#[test]
fn unreachable_program_page_aborts() {
    let site = FakeSite::default();
    let err = runner::run(&opts(), &site, None).unwrap_err();
    assert!(matches!(err, Error::Http { status: 404, .. }));
}

#[test]
fn progress_sees_every_course() {
    let site = FakeSite::cit("202130");
    let mut tally = Tally::default();
    runner::run(&opts(), &site, Some(&mut tally)).unwrap();

    assert_eq!(tally.total, 5);
    assert_eq!(tally.done, ["COMP 1002", "COMP 1113", "COMP 2714"]);
    assert_eq!(tally.failed, ["COMM 1116", "Electives"]);
    assert!(tally.finished);
}

#[test]
fn text_output_matches_script_lines() {
    let site = FakeSite::cit("202130");
    let summary = runner::run(&opts(), &site, None).unwrap();
    let text = runner::render(&summary, OutputFormat::Text, false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, [
        "COMP 1002 30001 https://www.bcit.ca/outlines/20213030001",
        "COMP 1113 30110 https://www.bcit.ca/outlines/20213030110",
        "Something went wrong with course COMM 1116. Sorry!",
        "COMP 2714 32714 https://www.bcit.ca/outlines/20213032714",
        "Something went wrong with course Electives. Sorry!",
    ]);
}

#[test]
fn csv_written_to_nested_path() {
    let mut dir = std::env::temp_dir();
    dir.push("crn_outlines_pipeline_csv");
    let _ = fs::remove_dir_all(&dir);
    let path: PathBuf = dir.join("nested").join("cit.csv");

    let site = FakeSite::cit("202130");
    let o = RunOptions {
        format: OutputFormat::Csv,
        out: Some(path.clone()),
        include_headers: true,
        ..opts()
    };
    let summary = runner::run(&o, &site, None).unwrap();
    runner::write_output(&summary, &o).unwrap();

    let s = fs::read_to_string(&path).unwrap();
    let mut lines = s.lines();
    assert_eq!(lines.next(), Some("Course,CRN,Outline"));
    assert_eq!(lines.next(), Some("COMP 1002,30001,https://www.bcit.ca/outlines/20213030001"));
    assert!(s.contains("\nCOMM 1116,,\n"));
}

#[test]
fn failed_course_is_requested_once() {
    let mut site = FakeSite::cit("202130");
    site.json.retain(|url, _| !url.contains("/comp/2714/"));
    runner::run(&opts(), &site, None).unwrap();
    assert_eq!(site.count("/comp/2714/"), 1);
}

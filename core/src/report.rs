#![deny(missing_docs)]

//! # Report Rendering
//!
//! Serializes test cases as plain text (for reading) or YAML/JSON
//! (for tooling).

use crate::cases::{Step, TestCase};
use crate::error::AppResult;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Write as _};

const SEPARATOR_WIDTH: usize = 70;

/// Top-level shape of the YAML/JSON report.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Shared run environment.
    pub environment: Environment<'a>,
    /// Every generated test case.
    pub test_cases: &'a [TestCase],
}

/// The `environment` block of a report.
#[derive(Debug, Serialize)]
pub struct Environment<'a> {
    /// Server URLs declared by the document.
    pub servers: &'a [String],
}

impl<'a> Report<'a> {
    /// Wraps `cases` with the document's `servers`.
    pub fn new(cases: &'a [TestCase], servers: &'a [String]) -> Self {
        Self {
            environment: Environment { servers },
            test_cases: cases,
        }
    }
}

/// Renders every case as a human-readable block.
pub fn render_text(cases: &[TestCase]) -> String {
    cases.iter().map(TestCase::to_string).collect()
}

/// Renders the report as YAML.
pub fn render_yaml(cases: &[TestCase], servers: &[String]) -> AppResult<String> {
    Ok(serde_yaml::to_string(&Report::new(cases, servers))?)
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(cases: &[TestCase], servers: &[String]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&Report::new(cases, servers))?)
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        writeln!(f, "{separator}")?;
        writeln!(f, "TEST CASE: {}", self.name)?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Description: {}", self.description)?;
        if self.environment.is_empty() {
            writeln!(f, "Environment: (no servers declared)")?;
        } else {
            writeln!(f, "Environment: {}", self.environment.join(", "))?;
        }
        writeln!(f)?;

        write_steps(f, "PRECONDITIONS", "no preconditions", &self.preconditions)?;
        write_steps(f, "STEPS", "no steps", &self.steps)?;

        writeln!(f, "EXPECTED RESULT:")?;
        writeln!(f, "  Status: {}", self.expected.status)?;
        if let Some(body) = &self.expected.body {
            writeln!(f, "  Body:")?;
            write_body(f, body, "    ")?;
        }
        writeln!(f)?;

        write_steps(f, "POSTCONDITIONS", "no postconditions", &self.postconditions)?;
        writeln!(f, "{separator}")?;
        writeln!(f)
    }
}

fn write_steps(f: &mut fmt::Formatter<'_>, title: &str, empty: &str, steps: &[Step]) -> fmt::Result {
    writeln!(f, "{title}:")?;
    if steps.is_empty() {
        writeln!(f, "  - ({empty})")?;
    }
    for (index, step) in steps.iter().enumerate() {
        writeln!(f, "  {}. {} {}", index + 1, step.method, step.url)?;
        for (name, value) in &step.headers {
            writeln!(f, "     Header {name}: {value}")?;
        }
        for (name, value) in &step.cookies {
            writeln!(f, "     Cookie {name}={value}")?;
        }
        if let Some(body) = &step.body {
            writeln!(f, "     Body:")?;
            write_body(f, body, "       ")?;
        }
        if let Some(curl) = &step.curl {
            writeln!(f, "     curl:")?;
            for line in curl.lines() {
                writeln!(f, "       {line}")?;
            }
        }
    }
    writeln!(f)
}

fn write_body(f: &mut fmt::Formatter<'_>, body: &Value, indent: &str) -> fmt::Result {
    let pretty = serde_json::to_string_pretty(body).map_err(|_| fmt::Error)?;
    let mut out = String::new();
    for line in pretty.lines() {
        writeln!(out, "{indent}{line}")?;
    }
    f.write_str(&out)
}

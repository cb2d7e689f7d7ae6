// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Built-in conversion checks.
//!
//! `feather --self-test` runs every case in [`CASES`] through the line
//! rewriter and reports any line that does not produce the expected HTML.
//! This makes it easy to confirm that an installed binary behaves the same
//! way as the one that was tested.

use crate::markdown::line::{RewriteOptions, Rewriter};
use colored::Colorize;
use log::debug;

/// A line of Markdown and the HTML it should be rewritten to.
pub type Case = (&'static str, &'static str);

/// Every built-in case, checked with the default rewrite options.
pub const CASES: &[Case] = &[
    ("# some cool header", "<h1>some cool header</h1>"),
    ("## some cool header", "<h2>some cool header</h2>"),
    ("### some cool header", "<h3>some cool header</h3>"),
    ("#### some cool header", "<h4>some cool header</h4>"),
    ("##### some cool header", "<h5>some cool header</h5>"),
    ("###### some cool header", "<h6>some cool header</h6>"),
    ("####### some cool header", "<h7>some cool header</h7>"),
    ("######## some cool header", "<h7>some cool header</h7>"),
    ("Not # a header", "Not # a header"),
    (" # Title with a space", " # Title with a space"),
    ("---", "<hr>"),
    ("--", "--"),
    ("----", "----"),
    (
        "Some text [and](https://alink.something) more text",
        "Some text <a href=\"https://alink.something\">and</a> more text",
    ),
    ("[some link](example.com)", "<a href=\"example.com\">some link</a>"),
    (
        "## [link in a title](example.com)",
        "<h2><a href=\"example.com\">link in a title</a></h2>",
    ),
    (
        "Two [links](example.com) on the [same](some.link.com) line",
        "Two <a href=\"example.com\">links</a> on the <a href=\"some.link.com\">same</a> line",
    ),
    ("[a](a)", "<a href=\"a\">a</a>"),
    (
        "[a](a) [a](a) [a](a)",
        "<a href=\"a\">a</a> <a href=\"a\">a</a> <a href=\"a\">a</a>",
    ),
    ("This [link] is not a [link]", "This [link] is not a [link]"),
    ("[x] (y)", "[x] (y)"),
    ("Invalid [](link)", "Invalid [](link)"),
    ("[]]()", "[]]()"),
    ("[](()", "[](()"),
    ("[]())", "[]())"),
    (
        "# [x] (y) [a](b)",
        "<h1>[x] (y) <a href=\"b\">a</a></h1>",
    ),
    ("**text**", "<b>text</b>"),
    ("*text*", "<i>text</i>"),
    ("****", ""),
    ("**aa", "**aa"),
    ("**", "**"),
    ("_text_", "<u>text</u>"),
    ("__", "<u></u>"),
    ("_text", "_text"),
    (
        "Some **bold** and [a link](http://x)",
        "Some <b>bold</b> and <a href=\"http://x\">a link</a>",
    ),
];

/// A case whose output did not match the expected HTML.
#[derive(Debug, PartialEq, Eq)]
pub struct Failure {
    /// The Markdown that was rewritten.
    pub input: &'static str,

    /// The HTML that should have been produced.
    pub expected: &'static str,

    /// The HTML that was actually produced.
    pub actual: String,
}

/// The outcome of running the built-in cases.
#[derive(Debug, Default)]
pub struct Report {
    passed: usize,
    failures: Vec<Failure>,
}

impl Report {
    /// Number of cases that produced the expected HTML.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Cases that did not produce the expected HTML.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Total number of cases that were run.
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    /// True if every case produced the expected HTML.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// A human-readable summary of the run, listing each failure.
    pub fn view(&self) -> String {
        let mut lines = self
            .failures
            .iter()
            .map(|failure| {
                format!(
                    "{} {:?}\n  expected: {:?}\n    actual: {:?}",
                    "FAILED".red().bold(),
                    failure.input,
                    failure.expected,
                    failure.actual,
                )
            })
            .collect::<Vec<_>>();

        let status = if self.is_success() {
            "ok".green().bold()
        } else {
            "FAILED".red().bold()
        };
        lines.push(format!(
            "self-test result: {status}. {} passed; {} failed",
            self.passed,
            self.failures.len(),
        ));

        lines.join("\n")
    }
}

/// Runs [`CASES`] through a rewriter using `options`.
pub fn run(options: &RewriteOptions) -> Report {
    run_cases(CASES, options)
}

/// Runs the given cases through a rewriter using `options`.
pub fn run_cases(cases: &[Case], options: &RewriteOptions) -> Report {
    let rewriter = Rewriter::new(*options);
    let mut report = Report::default();

    for &(input, expected) in cases {
        let actual = rewriter.rewrite(input);
        if actual == expected {
            debug!("ok: {input:?}");
            report.passed += 1;
        } else {
            debug!("failed: {input:?} -> {actual:?}");
            report.failures.push(Failure {
                input,
                expected,
                actual,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::line::{CursorMode, MalformedLinks};
    use pretty_assertions::assert_eq;

    #[test]
    fn it_passes_every_built_in_case() {
        let report = run(&RewriteOptions::default());
        assert_eq!(report.failures(), &[] as &[Failure]);
        assert_eq!(report.passed(), CASES.len());
        assert!(report.is_success());
    }

    #[test]
    fn it_passes_every_built_in_case_with_other_options() {
        let opts = RewriteOptions::build()
            .cursor(CursorMode::Adjusted)
            .malformed_links(MalformedLinks::EndPass)
            .build();
        let report = run(&opts);
        assert_eq!(report.failures(), &[] as &[Failure]);
    }

    #[test]
    fn it_reports_failures() {
        let cases = [("*a*", "<i>a</i>"), ("*b*", "<b>b</b>")];
        let report = run_cases(&cases, &RewriteOptions::default());
        assert_eq!(report.passed(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.is_success());
        assert_eq!(
            report.failures(),
            &[Failure {
                input: "*b*",
                expected: "<b>b</b>",
                actual: String::from("<i>b</i>"),
            }]
        );
    }

    #[test]
    fn it_summarizes_a_run() {
        let cases = [("*a*", "<i>a</i>"), ("*b*", "<b>b</b>")];
        let view = run_cases(&cases, &RewriteOptions::default()).view();
        assert!(view.contains("\"*b*\""));
        assert!(view.contains("expected: \"<b>b</b>\""));
        assert!(view.contains("actual: \"<i>b</i>\""));
        assert!(view.contains("1 passed; 1 failed"));
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Assembles a complete HTML page from lines of Markdown.

use crate::markdown::line::{RewriteOptions, Rewriter};
use crate::text;
use indoc::formatdoc;
use itertools::Itertools;
use log::debug;

/// Rewrites every line of `lines` and wraps the result in an HTML page
/// titled `title`, using the default [`RewriteOptions`].
///
/// # Examples
///
/// ```
/// let html = feather::markdown::render("Test site", ["# Title", "Some *text*"]);
/// assert!(html.contains("<title>Test site</title>"));
/// assert!(html.contains("<h1>Title</h1>\nSome <i>text</i>"));
/// ```
pub fn render(title: &str, lines: impl IntoIterator<Item = impl Into<String>>) -> String {
    Page::new(title, lines).render()
}

/// A Markdown document and the title of the page it is rendered into.
#[derive(Debug)]
pub struct Page {
    title: String,
    lines: Vec<String>,
    options: RewriteOptions,
}

impl Page {
    /// Creates a new page from a title and the document's lines.
    ///
    /// Each line should already have its line terminator removed.
    pub fn new(title: impl Into<String>, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let title = title.into();
        let lines = lines.into_iter().map(Into::into).collect();
        Self {
            title,
            lines,
            options: RewriteOptions::default(),
        }
    }

    /// Creates a new page from a title and raw Markdown source code, which
    /// is split into lines with [`text::lines()`].
    pub fn from_source(title: impl Into<String>, source: &str) -> Self {
        Self::new(title, text::lines(source))
    }

    /// Rewrites the page's lines using the given options instead of the
    /// defaults.
    pub fn with_options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    /// The page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The document's Markdown source, one element per line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The rewritten lines, joined by a single newline.
    pub fn body(&self) -> String {
        let rewriter = Rewriter::new(self.options);
        self.lines
            .iter()
            .map(|line| rewriter.rewrite(line))
            .join("\n")
    }

    /// The complete HTML page.
    pub fn render(&self) -> String {
        debug!("rendering {} lines into {:?}", self.lines.len(), self.title);
        formatdoc! {"
            <html>
              <head>
                <title>{title}</title>
              </head>
              <body>
            {body}
              </body>
            </html>",
            title = self.title,
            body = self.body(),
        }
    }
}

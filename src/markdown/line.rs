// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! The line rewriter.
//!
//! A line is rewritten by running detection passes over it until a pass
//! makes no change. Each pass checks, in order, for a header, a horizontal
//! rule, a link, emphasis, and underlined text. As soon as one construct
//! is found and replaced, the pass starts over from the top, so text
//! produced by one construct is scanned for the others. A header is the
//! exception: the rest of the pass runs over the rendered header, and the
//! pass counts as having changed the line.
//!
//! Each inline construct scans forward from its own cursor, and its cursor
//! only ever moves forward. Markup that sits before a construct's cursor
//! is never looked at again by that construct. The cursors are kept apart
//! rather than shared between constructs, so that a link found first does
//! not hide emphasis earlier in the same line.
//!
//! Malformed markup is never an error: it is simply left in the line as
//! literal text.

use log::{debug, trace};

/// The highest header level emitted. Anything with more `#` characters is
/// still rendered at this level.
pub const MAX_HEADER_LEVEL: usize = 7;

/// The only line that is rendered as a horizontal rule.
pub const RULE_MARKUP: &str = "---";

/// The HTML emitted for a horizontal rule.
pub const RULE_HTML: &str = "<hr>";

/// Rewrites a single line of Markdown into HTML using the default
/// [`RewriteOptions`].
///
/// # Examples
///
/// ```
/// use feather::markdown::line::rewrite;
/// assert_eq!(rewrite("# A Title"), "<h1>A Title</h1>");
/// assert_eq!(rewrite("Some **bold** text"), "Some <b>bold</b> text");
/// assert_eq!(rewrite("Not [a link] (really)"), "Not [a link] (really)");
/// ```
pub fn rewrite(line: &str) -> String {
    Rewriter::default().rewrite(line)
}

/// Determines where a construct resumes scanning after one of its matches
/// has been replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    /// Resume at the end of the matched markup as it was in the line before
    /// the replacement. Because the HTML is generally longer than the
    /// markup, this usually lands inside the rendered fragment.
    #[default]
    Legacy,

    /// Resume immediately after the rendered fragment.
    Adjusted,
}

/// Determines what happens to the rest of a pass when a `[` is found that
/// does not start a well-formed link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedLinks {
    /// Leave the brackets alone, look for another link from the next `(`
    /// if there is one, and keep looking for emphasis and underlined text
    /// in the same pass.
    #[default]
    Continue,

    /// Leave the brackets alone and end the pass, skipping emphasis and
    /// underline detection. The link cursor still moves to the next `(`.
    /// The line is finished unless a header was rendered earlier in the
    /// same pass, in which case another pass runs.
    EndPass,
}

/// Line rewriter options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    cursor: CursorMode,
    malformed_links: MalformedLinks,
}

impl RewriteOptions {
    /// Incrementally builds a new set of rewrite options.
    ///
    /// # Examples
    ///
    /// ```
    /// use feather::markdown::line::{CursorMode, RewriteOptions};
    /// let opts = RewriteOptions::build().cursor(CursorMode::Adjusted).build();
    /// assert_eq!(opts.cursor(), CursorMode::Adjusted);
    /// ```
    pub fn build() -> RewriteOptionsBuilder {
        RewriteOptionsBuilder::default()
    }

    /// How cursors are repositioned after a replacement.
    pub fn cursor(&self) -> CursorMode {
        self.cursor
    }

    /// How malformed links affect the rest of a pass.
    pub fn malformed_links(&self) -> MalformedLinks {
        self.malformed_links
    }
}

/// A builder for rewrite options.
///
/// You probably don't want to use this directly; call
/// [`RewriteOptions::build()`] and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct RewriteOptionsBuilder {
    cursor: CursorMode,
    malformed_links: MalformedLinks,
}

impl RewriteOptionsBuilder {
    /// Sets the cursor mode.
    pub fn cursor(mut self, cursor: CursorMode) -> Self {
        self.cursor = cursor;
        self
    }

    /// Sets the malformed link policy.
    pub fn malformed_links(mut self, malformed_links: MalformedLinks) -> Self {
        self.malformed_links = malformed_links;
        self
    }

    /// Finalizes the [`RewriteOptions`].
    pub fn build(self) -> RewriteOptions {
        RewriteOptions {
            cursor: self.cursor,
            malformed_links: self.malformed_links,
        }
    }
}

/// A piece of markup found in a line, along with its HTML rendering.
#[derive(Debug, PartialEq, Eq)]
pub struct Markup<'a> {
    start: usize,
    source: &'a str,
    html: String,
}

impl<'a> Markup<'a> {
    /// Creates a new piece of markup found at byte offset `start`.
    pub fn new(start: usize, source: &'a str, html: impl Into<String>) -> Self {
        let html = html.into();
        Self {
            start,
            source,
            html,
        }
    }

    /// Byte offset at which the markup was found.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The Markdown text that was matched.
    pub fn source(&self) -> &str {
        self.source
    }

    /// The HTML that replaces the markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replaces the first occurrence of the markup in `line` with its HTML.
    ///
    /// The first occurrence is not necessarily the one at [`Markup::start()`]
    /// if identical text appears earlier in the line.
    ///
    /// Returns the rewritten line and the position from which the construct
    /// should resume scanning.
    pub fn apply(&self, line: &str, mode: CursorMode) -> (String, usize) {
        let at = line.find(self.source).unwrap_or(self.start);
        let end = at + self.source.len();

        let mut rewritten = String::with_capacity(line.len() + self.html.len());
        rewritten.push_str(&line[..at]);
        rewritten.push_str(&self.html);
        rewritten.push_str(&line[end..]);

        let cursor = match mode {
            CursorMode::Legacy => self.start + self.source.len(),
            CursorMode::Adjusted => at + self.html.len(),
        };

        (rewritten, cursor)
    }
}

/// The result of scanning a line for a construct.
#[derive(Debug, PartialEq, Eq)]
pub enum Scan<'a> {
    /// The construct does not appear at or after the cursor.
    Miss,

    /// The construct's opening delimiter was found, but what follows it is
    /// not well-formed. Carries the position from which the construct
    /// should resume scanning, if it can skip ahead.
    Malformed(Option<usize>),

    /// The construct was found.
    Hit(Markup<'a>),
}

/// An inline construct that can be found somewhere inside a line.
pub trait Construct {
    /// A short, human-readable name for the construct, used in logs.
    fn name(&self) -> &'static str;

    /// Scans `line` for the construct, starting at byte offset `from`.
    fn scan<'a>(&self, line: &'a str, from: usize) -> Scan<'a>;
}

/// `[text](target)`
#[derive(Debug, Default)]
pub struct Link;

impl Construct for Link {
    fn name(&self) -> &'static str {
        "link"
    }

    fn scan<'a>(&self, line: &'a str, from: usize) -> Scan<'a> {
        let Some(open_bracket) = find(line, b'[', from) else {
            return Scan::Miss;
        };

        // The link text must be at least one character long.
        let Some(close_bracket) = find(line, b']', open_bracket + 2) else {
            return Scan::Malformed(None);
        };

        let Some(open_paren) = find(line, b'(', close_bracket) else {
            return Scan::Malformed(None);
        };
        if open_paren != close_bracket + 1 {
            return Scan::Malformed(Some(open_paren));
        }

        let Some(close_paren) = find(line, b')', open_paren + 2) else {
            return Scan::Malformed(Some(open_paren));
        };

        let text = &line[open_bracket + 1..close_bracket];
        let target = &line[open_paren + 1..close_paren];
        Scan::Hit(Markup::new(
            open_bracket,
            &line[open_bracket..=close_paren],
            format!("<a href=\"{target}\">{text}</a>"),
        ))
    }
}

/// `**bold**` and `*italic*`
#[derive(Debug, Default)]
pub struct Emphasis;

impl Construct for Emphasis {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn scan<'a>(&self, line: &'a str, from: usize) -> Scan<'a> {
        let Some(start) = find(line, b'*', from) else {
            return Scan::Miss;
        };

        let bytes = line.as_bytes();
        let maybe_bold = bytes.get(start + 1) == Some(&b'*');

        let Some(close) = find(line, b'*', start + 2) else {
            return Scan::Miss;
        };

        if maybe_bold && bytes.get(close + 1) == Some(&b'*') {
            let source = &line[start..close + 2];
            let html = if source == "****" {
                String::new()
            } else {
                format!("<b>{}</b>", &line[start + 2..close])
            };
            Scan::Hit(Markup::new(start, source, html))
        } else {
            let source = &line[start..=close];
            let html = format!("<i>{}</i>", &line[start + 1..close]);
            Scan::Hit(Markup::new(start, source, html))
        }
    }
}

/// `_underlined_`
#[derive(Debug, Default)]
pub struct Underline;

impl Construct for Underline {
    fn name(&self) -> &'static str {
        "underline"
    }

    fn scan<'a>(&self, line: &'a str, from: usize) -> Scan<'a> {
        let Some(start) = find(line, b'_', from) else {
            return Scan::Miss;
        };

        let Some(close) = find(line, b'_', start + 1) else {
            return Scan::Miss;
        };

        let source = &line[start..=close];
        let html = format!("<u>{}</u>", source.trim_matches('_'));
        Scan::Hit(Markup::new(start, source, html))
    }
}

/// Inline constructs, in the order in which they are checked during a pass.
const CONSTRUCTS: [&dyn Construct; 3] = [&Link, &Emphasis, &Underline];

/// Renders `line` as a header if it starts with `#`.
///
/// The header level is the number of leading `#` characters, up to
/// [`MAX_HEADER_LEVEL`]. The content is everything after the first space in
/// the line, or everything after the run of `#` characters if the line has
/// no space at all.
///
/// # Examples
///
/// ```
/// use feather::markdown::line::header;
/// assert_eq!(header("## Two").as_deref(), Some("<h2>Two</h2>"));
/// assert_eq!(header("######### Nine").as_deref(), Some("<h7>Nine</h7>"));
/// assert_eq!(header(" # Indented"), None);
/// ```
pub fn header(line: &str) -> Option<String> {
    if !line.starts_with('#') {
        return None;
    }

    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let level = hashes.min(MAX_HEADER_LEVEL);
    let content = match line.split_once(' ') {
        Some((_, content)) => content,
        None => &line[hashes..],
    };

    Some(format!("<h{level}>{content}</h{level}>"))
}

/// True if the entire line is a horizontal rule.
pub fn is_rule(line: &str) -> bool {
    line == RULE_MARKUP
}

/// Rewrites lines of Markdown into HTML.
#[derive(Debug, Default)]
pub struct Rewriter {
    options: RewriteOptions,
}

impl Rewriter {
    /// Creates a new rewriter using the given options.
    pub fn new(options: RewriteOptions) -> Self {
        Self { options }
    }

    /// The rewriter's options.
    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Rewrites a single line of Markdown into HTML.
    pub fn rewrite(&self, line: &str) -> String {
        let mut line = line.to_string();
        let mut cursors = [0usize; CONSTRUCTS.len()];

        loop {
            let mut changed = false;

            if let Some(html) = header(&line) {
                trace!("header: {line:?} -> {html:?}");
                line = html;
                changed = true;
            }

            if is_rule(&line) {
                trace!("horizontal rule: {line:?}");
                return String::from(RULE_HTML);
            }

            match self.inline_pass(&line, &mut cursors) {
                Some(rewritten) => line = rewritten,
                None if changed => continue,
                None => return line,
            }
        }
    }

    /// Runs the inline constructs over `line` once.
    ///
    /// Returns the rewritten line as soon as one construct is replaced, or
    /// `None` if the line is finished.
    fn inline_pass(&self, line: &str, cursors: &mut [usize]) -> Option<String> {
        for (construct, cursor) in CONSTRUCTS.iter().zip(cursors.iter_mut()) {
            loop {
                match construct.scan(line, *cursor) {
                    Scan::Miss => break,
                    Scan::Malformed(resume) => {
                        debug!(
                            "malformed {} at or after {cursor} in {line:?}, resuming at {resume:?}",
                            construct.name(),
                        );
                        if let Some(resume) = resume {
                            *cursor = resume;
                        }
                        match (self.options.malformed_links(), resume) {
                            (MalformedLinks::Continue, Some(_)) => continue,
                            (MalformedLinks::Continue, None) => break,
                            (MalformedLinks::EndPass, _) => return None,
                        }
                    }
                    Scan::Hit(markup) => {
                        let (rewritten, next) = markup.apply(line, self.options.cursor());
                        trace!(
                            "{}: {:?} -> {:?}, cursor {} -> {next}",
                            construct.name(),
                            markup.source(),
                            markup.html(),
                            *cursor,
                        );
                        *cursor = next;
                        return Some(rewritten);
                    }
                }
            }
        }
        None
    }
}

/// Finds the next occurrence of the ASCII byte `needle` in `line`, starting
/// at byte offset `from`.
///
/// Because `needle` is ASCII, the returned offset is always a character
/// boundary, even when `line` contains multi-byte characters.
fn find(line: &str, needle: u8, from: usize) -> Option<usize> {
    line.as_bytes()
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

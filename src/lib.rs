// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! feather converts a small, informal Markdown dialect into HTML, one line
//! at a time, and wraps the result in a minimal HTML page.
//!
//! The dialect understands headers (`#` through `#######`), horizontal
//! rules (`---`), links (`[text](target)`), bold (`**bold**`), italic
//! (`*italic*`), and underlined (`_underlined_`) text. See the [`markdown`]
//! module for the details.
//!
//! # Examples
//!
//! Convert a Markdown file into an HTML page:
//!
//! ```bash
//! feather -i notes.md
//! ```
//!
//! Convert standard input, giving the page a title:
//!
//! ```bash
//! cat notes.md | feather --title "My Notes"
//! ```
//!
//! The default title is "Test site", or the value of `$FEATHER_TITLE` if
//! it is set.
//!
//! Check that the converter produces the expected HTML for its built-in
//! cases:
//!
//! ```bash
//! feather --self-test
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! feather --help
//! ```
//!
//! The same conversion is available as a library:
//!
//! ```
//! let html = feather::markdown::render("Test site", ["# Title", "Some **bold** text"]);
//! assert!(html.contains("<h1>Title</h1>\nSome <b>bold</b> text"));
//! ```
//!
//! # License
//!
//! feather is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod conf;
pub mod markdown;
pub mod selftest;
pub mod text;

#[cfg(test)]
mod test_utils;

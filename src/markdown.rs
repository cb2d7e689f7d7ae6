// feather
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Markdown to HTML conversion.
//!
//! This is not a CommonMark parser. It understands a small, informal
//! dialect of Markdown, one line at a time:
//!
//! | Markdown          | HTML                       |
//! |-------------------|----------------------------|
//! | `# Header`        | `<h1>Header</h1>`          |
//! | `---`             | `<hr>`                     |
//! | `[text](target)`  | `<a href="target">text</a>`|
//! | `**bold**`        | `<b>bold</b>`              |
//! | `*italic*`        | `<i>italic</i>`            |
//! | `_underline_`     | `<u>underline</u>`         |
//!
//! Headers go up to `<h7>`. There is no state shared between lines, so
//! nothing spans more than one line.
//!
//! [`line`] rewrites a single line; [`page`] rewrites a whole document and
//! wraps it in a minimal HTML page.

pub mod line;
pub mod page;

pub use line::{CursorMode, MalformedLinks, RewriteOptions, Rewriter, rewrite};
pub use page::{Page, render};

#[cfg(test)]
pub(crate) mod test_utils;

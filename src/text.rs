//! Helpful utilities for working with text.

/// Splits Markdown source code into lines.
///
/// Lines may end in either `\n` or `\r\n`; the line terminator is not
/// included in the returned lines. A trailing line terminator at the end of
/// the source does not produce an extra, empty line.
///
/// # Examples
///
/// ```
/// use feather::text::lines;
/// let source = "# Title\nSome text\n";
/// assert_eq!(lines(source), vec!["# Title", "Some text"]);
/// ```
///
/// ```
/// use feather::text::lines;
/// let source = "# Title\r\n\r\nSome text";
/// assert_eq!(lines(source), vec!["# Title", "", "Some text"]);
/// ```
///
/// ```
/// use feather::text::lines;
/// assert!(lines("").is_empty());
/// ```
pub fn lines(source: &str) -> Vec<String> {
    source.lines().map(String::from).collect()
}

//! Environment and configuration utilities.

use std::env;

/// The environment variable that overrides the default page title.
pub const TITLE_ENV: &str = "FEATHER_TITLE";

/// The page title used when none is given on the command line and
/// `$FEATHER_TITLE` is not set.
pub const DEFAULT_TITLE: &str = "Test site";

/// Returns the title to use for a page when none is given explicitly.
///
/// This is the value of `$FEATHER_TITLE` if it is set to a non-empty
/// value, and [`DEFAULT_TITLE`] otherwise.
///
/// # Examples
///
/// ```
/// use feather::conf::default_title;
/// # use temp_env::with_var_unset;
/// # with_var_unset("FEATHER_TITLE", || {
/// assert_eq!(default_title(), "Test site");
/// # });
/// ```
///
/// ```
/// use feather::conf::default_title;
/// # use temp_env::with_var;
/// # with_var("FEATHER_TITLE", Some("My Notes"), || {
/// assert_eq!(default_title(), "My Notes");
/// # });
/// ```
pub fn default_title() -> String {
    match env::var(TITLE_ENV) {
        Ok(title) if !title.is_empty() => title,
        _ => String::from(DEFAULT_TITLE),
    }
}

/// Returns `title` if it was given, or [`default_title()`] otherwise.
pub fn title(title: Option<&str>) -> String {
    title.map(String::from).unwrap_or_else(default_title)
}

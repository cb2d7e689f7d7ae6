//! Drives the command-line program.

use crate::conf;
use crate::markdown::{CursorMode, MalformedLinks, Page, RewriteOptions};
use crate::selftest;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use std::io::{self, Read};
use std::path::PathBuf;
use std::{fs, process};
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Converts a small, informal Markdown dialect into an HTML page", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Markdown file to convert; reads standard input if omitted
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Page title [default: $FEATHER_TITLE or "Test site"]
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Resume scanning after each rendered fragment instead of at the end
    /// of the original markup
    #[arg(long, default_value_t = false)]
    adjust_cursor: bool,

    /// Skip emphasis and underlines for the rest of a pass when a malformed
    /// link is found
    #[arg(long, default_value_t = false)]
    end_pass_on_malformed_links: bool,

    /// Check the converter against its built-in cases and exit
    #[arg(long, default_value_t = false)]
    self_test: bool,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The page title, taken from the command line or the environment.
    pub fn title(&self) -> String {
        conf::title(self.title.as_deref())
    }

    /// Line rewriter options selected on the command line.
    pub fn rewrite_options(&self) -> RewriteOptions {
        let cursor = if self.adjust_cursor {
            CursorMode::Adjusted
        } else {
            CursorMode::Legacy
        };
        let malformed_links = if self.end_pass_on_malformed_links {
            MalformedLinks::EndPass
        } else {
            MalformedLinks::Continue
        };
        RewriteOptions::build()
            .cursor(cursor)
            .malformed_links(malformed_links)
            .build()
    }
}

/// A command-line error.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("could not read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// At least one built-in case produced the wrong HTML.
    #[error("{failed} of {total} self-test cases failed")]
    SelfTest { failed: usize, total: usize },
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the command-line program using its stored configuration options.
    ///
    /// Returns the text that should be printed to stdout.
    pub fn run(&self) -> Result<String, Error> {
        if self.config.self_test {
            self.run_self_test()
        } else {
            self.run_convert()
        }
    }

    fn run_convert(&self) -> Result<String, Error> {
        let source = self.read_source()?;
        let page = Page::from_source(self.config.title(), &source)
            .with_options(self.config.rewrite_options());
        info!("converting {} lines", page.lines().len());
        Ok(page.render())
    }

    fn run_self_test(&self) -> Result<String, Error> {
        let report = selftest::run(&self.config.rewrite_options());
        if report.is_success() {
            Ok(report.view())
        } else {
            eprintln!("{}", report.view());
            Err(Error::SelfTest {
                failed: report.failures().len(),
                total: report.total(),
            })
        }
    }

    fn read_source(&self) -> Result<String, Error> {
        match &self.config.input {
            Some(path) => {
                debug!("reading markdown from {}", path.display());
                fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })
            }
            None => {
                debug!("reading markdown from standard input");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(Error::Stdin)?;
                Ok(buffer)
            }
        }
    }
}

/// Runs the command-line program and prints its output.
pub fn run(config: Config) -> Result<(), Error> {
    let output = Runner::new(config).run()?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::test_utils::load_output;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use temp_env::with_var_unset;

    fn parse(args: &[&str]) -> Config {
        let args = std::iter::once("feather").chain(args.iter().copied());
        Config::try_parse_from(args).expect("could not parse arguments")
    }

    #[test]
    fn it_has_a_valid_command_definition() {
        Config::command().debug_assert();
    }

    #[test]
    fn it_uses_default_rewrite_options() {
        let config = parse(&[]);
        assert_eq!(config.rewrite_options(), RewriteOptions::default());
    }

    #[test]
    fn it_selects_rewrite_options() {
        let config = parse(&["--adjust-cursor", "--end-pass-on-malformed-links"]);
        let opts = config.rewrite_options();
        assert_eq!(opts.cursor(), CursorMode::Adjusted);
        assert_eq!(opts.malformed_links(), MalformedLinks::EndPass);
    }

    #[test]
    fn it_uses_the_default_title() {
        with_var_unset(conf::TITLE_ENV, || {
            let config = parse(&[]);
            assert_eq!(config.title(), "Test site");
        });
    }

    #[test]
    fn it_uses_the_given_title() {
        let config = parse(&["--title", "My Notes"]);
        assert_eq!(config.title(), "My Notes");
    }

    #[test]
    fn it_converts_a_file() {
        let config = parse(&["-i", "tests/markdown/page.md", "-t", "Test site"]);
        let output = Runner::new(config).run().expect("could not convert file");
        assert_eq!(output, load_output("page"));
    }

    #[test]
    fn it_reports_a_missing_file() {
        let config = parse(&["-i", "tests/markdown/does-not-exist.md"]);
        let err = Runner::new(config).run().unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(
            err.to_string()
                .starts_with("could not read tests/markdown/does-not-exist.md: ")
        );
    }

    #[test]
    fn it_runs_the_self_test() {
        let config = parse(&["--self-test"]);
        let output = Runner::new(config).run().expect("self-test failed");
        assert!(output.contains("0 failed"));
    }

    #[test]
    fn it_describes_self_test_failures() {
        let err = Error::SelfTest {
            failed: 2,
            total: 34,
        };
        assert_eq!(err.to_string(), "2 of 34 self-test cases failed");
    }
}

use clap::Parser;
use feather::cli::{self, Config};

fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = cli::run(config) {
        cli::die(1, &err.to_string());
    }
}

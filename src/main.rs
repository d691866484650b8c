use clap::Parser;
use env_logger::{Builder, Env};
use log::error;

use slate_engine::cli::{self, parsers::CliParser};
use slate_engine::config::SlateConfig;

fn init_logger(default_filter: &str) {
    // RUST_LOG wins over the configured filter.
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn main() {
    let args = CliParser::parse();

    let mut config = SlateConfig::load();
    if args.in_memory {
        config = config.with_db_file(None);
    } else if args.file.is_some() {
        config = config.with_db_file(args.file);
    }
    if args.no_archive_on_exit {
        config = config.with_archive_on_exit(false);
    }

    init_logger(&config.log_filter);

    if let Err(e) = cli::run_client(config) {
        error!("{}", e);
        eprintln!("err: {}", e);
        std::process::exit(1);
    }
}

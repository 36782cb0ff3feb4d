//! Abstracta CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use abstracta_cli::{Args, error_adapter::to_reportables};

/// Installs `env_logger` at the requested level. Unknown names mean `warn`.
fn init_logger(level: &str) -> LevelFilter {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, falling back to 'warn'.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();

    filter
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logger(&args.log_level);

    info!(log_level:?; "Starting Abstracta");
    debug!(args:?; "Parsed arguments");

    let Err(err) = abstracta_cli::run(&args) else {
        info!("Completed successfully");
        return;
    };

    let reporter = miette::GraphicalReportHandler::new();
    for reportable in to_reportables(&err) {
        let mut report = String::new();
        reporter
            .render_report(&mut report, &reportable)
            .expect("Writing to String buffer is infallible");
        error!("{report}");
    }

    process::exit(1);
}

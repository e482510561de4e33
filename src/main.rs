use certwiz::cli::Cli;
use certwiz::services::config::load_config;
use certwiz::services::logging::init_file_logging;
use certwiz::services::platform::detect_platform;
use certwiz::services::process::SystemRunner;
use certwiz::services::prompt::StdinInput;
use certwiz::services::reporter::ConsoleReporter;
use certwiz::{Outcome, Wizard};
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {:#}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = load_config(cli.config.as_deref())?;
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.log_file));
    init_file_logging(&log_file)?;

    let mut input = StdinInput::locked();
    let mut wizard = Wizard::new(
        &config,
        detect_platform(),
        &SystemRunner,
        &ConsoleReporter,
        &mut input,
    );
    Ok(wizard.run())
}

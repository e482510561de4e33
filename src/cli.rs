use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "certwiz",
    version,
    about = "Install Certbot and obtain a Let's Encrypt certificate interactively"
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "PATH",
        help = "Config file (default: ~/.config/certwiz/config.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Append the event log here instead of the configured log_file"
    )]
    pub log_file: Option<PathBuf>,
}

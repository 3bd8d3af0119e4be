//! `stockbook` — interactive front end over the in-memory inventory.

pub mod input;
pub mod session;
pub mod table;

use std::io;

use anyhow::Context;
use clap::Parser;

use stockbook_observability::LogFormat;

pub use session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "stockbook",
    about = "Interactive in-memory inventory manager",
    long_about = "Add, update, delete, list and search catalog articles from a text menu. \
                  Nothing is persisted: the inventory lives for the duration of the session.",
    after_help = "Logging goes to stderr and is filtered with RUST_LOG (default: warn)."
)]
pub struct Cli {
    #[arg(
        long,
        env = "STOCKBOOK_LOG_FORMAT",
        default_value_t = LogFormat::Pretty,
        help = "Log output format: pretty or json"
    )]
    pub log_format: LogFormat,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockbook_observability::init(cli.log_format);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Session::new(stdin, stdout)
        .run()
        .context("interactive session failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_pretty() {
        let cli = Cli::try_parse_from(["stockbook"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn log_format_flag_is_parsed() {
        let cli = Cli::try_parse_from(["stockbook", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);

        assert!(Cli::try_parse_from(["stockbook", "--log-format", "xml"]).is_err());
    }
}

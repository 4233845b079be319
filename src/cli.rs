/// CLI argument parsing and command handling.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::scheme::{DEFAULT_ENDPOINT, SchemeSource};
use crate::theme_store::ThemeStore;
use crate::types::{SCHEME_COUNT, SchemeMode, SchemeRequest};

#[derive(Parser, Debug)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal color scheme generator"
)]
pub struct Cli {
    /// Scheme service endpoint.
    #[arg(long, env = "SWATCHR_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Path to the settings database.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log filter directive, e.g. `swatchr=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one scheme and print its colors.
    Scheme {
        hex: String,
        #[arg(short = 'm', long = "mode", value_enum, default_value_t = SchemeMode::default())]
        mode: SchemeMode,
        #[arg(
            short = 'c',
            long = "count",
            default_value_t = SCHEME_COUNT,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        count: u32,
    },
    /// Show or toggle the saved theme.
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
}

#[derive(Subcommand, Debug, Default)]
pub enum ThemeCommand {
    #[default]
    Show,
    Toggle,
}

/// Execute a CLI command (scheme or theme).
pub fn run(command: Command, conn: &Connection, source: Arc<dyn SchemeSource>) -> Result<()> {
    match command {
        Command::Scheme { hex, mode, count } => handle_scheme(&hex, mode, count, source.as_ref())?,
        Command::Theme { command } => handle_theme(command.unwrap_or_default(), conn),
    }
    Ok(())
}

fn handle_scheme(hex: &str, mode: SchemeMode, count: u32, source: &dyn SchemeSource) -> Result<()> {
    let request = SchemeRequest::from_input(hex, mode, count);
    let colors = source.fetch_scheme(&request)?;
    for color in colors {
        println!("{}", color.hex);
    }
    Ok(())
}

fn handle_theme(command: ThemeCommand, conn: &Connection) {
    let mut store = ThemeStore::load(conn);
    let theme = match command {
        ThemeCommand::Show => store.current(),
        ThemeCommand::Toggle => store.toggle(conn),
    };
    println!("{}", theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_the_tui() {
        let cli = Cli::try_parse_from(["swatchr"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.timeout_secs, 10);
    }

    #[test]
    fn scheme_subcommand_parses_mode_and_count() {
        let cli = Cli::try_parse_from([
            "swatchr",
            "scheme",
            "#3498db",
            "--mode",
            "analogic-complement",
            "-c",
            "3",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Scheme { hex, mode, count }) => {
                assert_eq!(hex, "#3498db");
                assert_eq!(mode, SchemeMode::AnalogicComplement);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["swatchr", "scheme", "fff", "--mode", "rainbow"]).is_err());
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(Cli::try_parse_from(["swatchr", "scheme", "fff", "--count", "0"]).is_err());
        assert!(Cli::try_parse_from(["swatchr", "scheme", "fff", "--count", "1"]).is_ok());
    }

    #[test]
    fn theme_subcommand_defaults_to_show() {
        let cli = Cli::try_parse_from(["swatchr", "theme"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Theme { command: None })
        ));
    }
}

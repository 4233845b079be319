/// Runtime configuration assembled from command-line options.
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::db;

const DEFAULT_LOG_DIRECTIVE: &str = "swatchr=info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub log_directive: Option<String>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            endpoint: cli.endpoint.clone(),
            timeout: Duration::from_secs(cli.timeout_secs.max(1)),
            db_path: cli.db.clone().unwrap_or_else(db::default_db_path),
            log_path: db::data_dir().join("swatchr.log"),
            log_directive: cli.log_level.clone(),
        }
    }

    /// `--log-level` wins, then `RUST_LOG`, then the crate default.
    pub fn log_directive(&self) -> String {
        self.log_directive
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::scheme::DEFAULT_ENDPOINT;

    #[test]
    fn explicit_options_override_defaults() {
        let cli = Cli::try_parse_from([
            "swatchr",
            "--endpoint",
            "http://localhost:9000/scheme",
            "--timeout-secs",
            "0",
            "--db",
            "/tmp/colors.db",
            "--log-level",
            "swatchr=debug",
        ])
        .unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.endpoint, "http://localhost:9000/scheme");
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.db_path, PathBuf::from("/tmp/colors.db"));
        assert_eq!(config.log_directive(), "swatchr=debug");
    }

    #[test]
    fn endpoint_defaults_to_public_service() {
        let cli = Cli::try_parse_from(["swatchr", "--db", "/tmp/x.db"]).unwrap();
        let config = Config::from_cli(&cli);
        if std::env::var("SWATCHR_ENDPOINT").is_err() {
            assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        }
    }
}

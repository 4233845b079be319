mod app;
mod cards;
mod cli;
mod clipboard;
mod color;
mod config;
mod db;
mod event;
mod logging;
mod scheme;
mod theme_store;
mod tui;
mod types;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::scheme::HttpSchemeClient;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = Config::from_cli(&cli_opts);
    if let Err(err) = logging::init(&config) {
        eprintln!("logging disabled: {err}");
    }
    tracing::info!("Swatchr v{} starting", env!("CARGO_PKG_VERSION"));

    let conn = db::init(&config.db_path)?;
    let source = Arc::new(HttpSchemeClient::new(config.endpoint.clone(), config.timeout)?);
    if let Some(command) = cli_opts.command {
        return cli::run(command, &conn, source);
    }

    let mut app = app::App::new(conn, source, Box::new(SystemClipboard::default()));
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}

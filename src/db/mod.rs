/// Database module with settings queries and migrations.
mod migrations;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::Connection;

pub use settings::{query_setting, store_setting};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

#[cfg(test)]
pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the app directory inside the user's data directory.
/// Falls back to the current directory when no data dir is found.
pub fn data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join("swatchr");
        std::fs::create_dir_all(&app_dir).ok();
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// Returns the default database path inside the app directory.
pub fn default_db_path() -> PathBuf {
    data_dir().join("swatchr.db")
}

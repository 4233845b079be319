/// Persisted light/dark preference and the visual state it drives.
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// What the rest of the UI sees of the theme: the dark marker and the
/// glyph on the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSurface {
    pub dark_marker: bool,
    pub toggle_glyph: &'static str,
}

impl ThemeSurface {
    fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self {
                dark_marker: false,
                toggle_glyph: "🌙",
            },
            ThemePreference::Dark => Self {
                dark_marker: true,
                toggle_glyph: "☀️",
            },
        }
    }
}

#[derive(Debug)]
pub struct ThemeStore {
    current: ThemePreference,
    surface: ThemeSurface,
}

impl ThemeStore {
    /// Reads the stored preference and applies it. Storage errors fall back to light.
    pub fn load(conn: &Connection) -> Self {
        let stored = match db::query_setting(THEME_KEY, conn) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read theme preference: {err}");
                None
            }
        };
        let current = ThemePreference::from_stored(stored.as_deref());
        debug!(theme = current.as_str(), "theme loaded");
        Self {
            current,
            surface: ThemeSurface::for_preference(current),
        }
    }

    /// Flips the theme, persists it and updates the surface.
    ///
    /// The surface flips even if the write fails.
    pub fn toggle(&mut self, conn: &Connection) -> ThemePreference {
        self.current = self.current.flipped();
        self.surface = ThemeSurface::for_preference(self.current);
        if let Err(err) = db::store_setting(THEME_KEY, self.current.as_str(), conn) {
            warn!("failed to persist theme preference: {err}");
        }
        self.current
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn surface(&self) -> ThemeSurface {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_dark_sets_marker_and_sun_glyph() {
        let conn = db::init_in_memory().unwrap();
        db::store_setting(THEME_KEY, "dark", &conn).unwrap();

        let store = ThemeStore::load(&conn);
        assert_eq!(store.current(), ThemePreference::Dark);
        assert!(store.surface().dark_marker);
        assert_eq!(store.surface().toggle_glyph, "☀️");
    }

    #[test]
    fn absent_or_unknown_value_loads_light() {
        let conn = db::init_in_memory().unwrap();
        let store = ThemeStore::load(&conn);
        assert_eq!(store.current(), ThemePreference::Light);
        assert!(!store.surface().dark_marker);
        assert_eq!(store.surface().toggle_glyph, "🌙");

        db::store_setting(THEME_KEY, "sepia", &conn).unwrap();
        assert_eq!(ThemeStore::load(&conn).current(), ThemePreference::Light);

        db::store_setting(THEME_KEY, "light", &conn).unwrap();
        assert_eq!(ThemeStore::load(&conn).current(), ThemePreference::Light);
    }

    #[test]
    fn toggle_persists_new_value() {
        let conn = db::init_in_memory().unwrap();
        let mut store = ThemeStore::load(&conn);

        assert_eq!(store.toggle(&conn), ThemePreference::Dark);
        assert_eq!(
            db::query_setting(THEME_KEY, &conn).unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(store.surface().toggle_glyph, "☀️");
    }

    #[test]
    fn toggling_twice_restores_everything() {
        let conn = db::init_in_memory().unwrap();
        db::store_setting(THEME_KEY, "light", &conn).unwrap();
        let mut store = ThemeStore::load(&conn);
        let before = store.surface();

        store.toggle(&conn);
        store.toggle(&conn);

        assert_eq!(store.surface(), before);
        assert_eq!(store.current(), ThemePreference::Light);
        assert_eq!(
            db::query_setting(THEME_KEY, &conn).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn failed_write_still_flips_surface() {
        let conn = Connection::open_in_memory().unwrap();
        let mut store = ThemeStore::load(&conn);
        assert_eq!(store.toggle(&conn), ThemePreference::Dark);
        assert!(store.surface().dark_marker);
    }
}

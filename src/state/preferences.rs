use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Key under which the color theme is stored
const THEME_KEY: &str = "theme";

/// Color theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Parse the stored value; anything else is treated as "not set"
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Toggle button label: the theme you would switch to
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemePreference::Dark => "Light Mode",
            ThemePreference::Light => "Dark Mode",
        }
    }
}

/// Preferences manages the small SQLite key-value store.
/// Only the color theme is stored today.
pub struct Preferences {
    conn: Connection,
    db_path: PathBuf,
}

impl Preferences {
    /// Open (or create) the store at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| AppError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(db_path)?;
        let prefs = Preferences {
            conn,
            db_path: db_path.to_path_buf(),
        };
        prefs.init_schema()?;

        log::info!("Preferences at {}", db_path.display());
        Ok(prefs)
    }

    /// Where the store lives by default:
    /// - Linux: ~/.local/share/edge-showcase/preferences.db
    /// - macOS: ~/Library/Application Support/edge-showcase/preferences.db
    /// - Windows: %APPDATA%\edge-showcase\preferences.db
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(AppError::NoDataDir)?;

        path.push("edge-showcase");
        path.push("preferences.db");
        Ok(path)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Stored theme, or the default when nothing valid is stored
    pub fn theme(&self) -> Result<ThemePreference> {
        let stored = self.get(THEME_KEY)?;
        Ok(stored
            .as_deref()
            .and_then(ThemePreference::from_stored)
            .unwrap_or_default())
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<()> {
        self.set(THEME_KEY, theme.as_str())
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("db_path", &self.db_path)
            .finish()
    }
}

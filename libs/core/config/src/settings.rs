//! Hierarchical settings with `Section:Key` addressing.
//!
//! Values come from a JSON settings file and can be overridden by
//! environment variables, where the `:` separator is spelled `__`
//! (`ConnectionStrings:DefaultConnection` → `ConnectionStrings__DefaultConnection`).

use crate::{ConfigError, FromEnv, env_or_default};
use serde_json::Value;
use std::env;
use std::path::Path;

/// Environment variable holding the settings file location
pub const SETTINGS_PATH_VAR: &str = "APP_SETTINGS_PATH";

/// Settings file used when [`SETTINGS_PATH_VAR`] is unset
pub const DEFAULT_SETTINGS_PATH: &str = "appsettings.json";

/// Section holding named connection strings
pub const CONNECTION_STRINGS_SECTION: &str = "ConnectionStrings";

/// Name of the primary database connection string
pub const DEFAULT_CONNECTION: &str = "DefaultConnection";

/// Last-resort variable consulted for the connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Settings loaded from a JSON document
#[derive(Clone, Debug, Default)]
pub struct Settings {
    root: Value,
}

impl Settings {
    /// Settings with no values; every lookup falls through to the environment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            root: serde_json::from_str(json)?,
        })
    }

    /// Load settings from `path`. A missing file yields empty settings;
    /// an unreadable or malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, using environment only");
            return Ok(Self::empty());
        }

        let to_error = |details: String| ConfigError::SettingsFile {
            path: path.display().to_string(),
            details,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
        let settings = Self::from_json_str(&contents).map_err(|e| to_error(e.to_string()))?;

        tracing::debug!(path = %path.display(), "Loaded settings file");
        Ok(settings)
    }

    /// Look up a `Section:Key` path in the file. Segment matching ignores
    /// ASCII case. Only string values are returned.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in key.split(':') {
            node = node
                .as_object()?
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(segment))
                .map(|(_, value)| value)?;
        }
        node.as_str()
    }

    /// Resolve `key`, preferring its environment override over the file.
    pub fn resolve(&self, key: &str) -> Option<String> {
        env::var(env_key(key))
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.get(key).map(str::to_string))
    }

    /// Resolve the named connection string (`ConnectionStrings:<name>`),
    /// falling back to `DATABASE_URL` when neither source defines it.
    pub fn connection_string(&self, name: &str) -> Result<String, ConfigError> {
        let key = format!("{}:{}", CONNECTION_STRINGS_SECTION, name);

        self.resolve(&key)
            .or_else(|| {
                env::var(DATABASE_URL_VAR)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
            })
            .ok_or(ConfigError::MissingSetting(key))
    }
}

impl FromEnv for Settings {
    /// Loads the file named by `APP_SETTINGS_PATH` (default `appsettings.json`)
    fn from_env() -> Result<Self, ConfigError> {
        Self::load(env_or_default(SETTINGS_PATH_VAR, DEFAULT_SETTINGS_PATH))
    }
}

/// Environment variable name for a `Section:Key` setting
pub fn env_key(key: &str) -> String {
    key.replace(':', "__")
}

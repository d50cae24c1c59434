//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::clipboard::{Clipboard, CommandClipboard, StdoutClipboard};
use crate::engine::LibraryOptions;
use crate::storage::StorageKeys;
use crate::types::{LibraryError, LibraryResult};

/// Environment variable overriding the store path.
pub const STORE_ENV_VAR: &str = "EXLIB_STORE";

/// Library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Path of the JSON store file holding persisted preferences.
    #[serde(default)]
    pub store_path: Option<String>,
    /// Catalog JSON file; the bundled catalog is used when absent.
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Prefix applied to storage keys.
    #[serde(default)]
    pub key_namespace: Option<String>,
    /// Program (plus arguments) that receives copied text on stdin.
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Ignore favorite ids missing from the catalog.
    #[serde(default)]
    pub strict_favorites: bool,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            catalog_path: None,
            key_namespace: None,
            clipboard_command: None,
            strict_favorites: false,
            log_level: default_log_level(),
        }
    }
}

impl LibraryConfig {
    /// Storage keys, namespaced when `key_namespace` is set.
    pub fn storage_keys(&self) -> StorageKeys {
        match self.key_namespace.as_deref() {
            Some(ns) if !ns.trim().is_empty() => StorageKeys::namespaced(ns.trim()),
            _ => StorageKeys::default(),
        }
    }

    /// Engine options derived from this configuration.
    pub fn library_options(&self) -> LibraryOptions {
        LibraryOptions {
            keys: self.storage_keys(),
            strict_favorites: self.strict_favorites,
        }
    }

    /// Load the configured catalog, or the bundled one.
    pub fn load_catalog(&self) -> LibraryResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(Path::new(path)),
            None => Catalog::builtin(),
        }
    }

    /// The clipboard described by `clipboard_command`, or stdout.
    pub fn clipboard(&self) -> Box<dyn Clipboard> {
        match self
            .clipboard_command
            .as_deref()
            .and_then(CommandClipboard::from_command_line)
        {
            Some(command) => Box::new(command),
            None => Box::new(StdoutClipboard),
        }
    }

    /// Parsed log level, falling back to `warn` for unknown names.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> LibraryResult<LibraryConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LibraryError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> LibraryResult<LibraryConfig> {
    toml::from_str(content).map_err(|e| LibraryError::Config(format!("Failed to parse config: {e}")))
}

/// Resolve the store path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. Config file `store_path`
/// 3. EXLIB_STORE environment variable
/// 4. .exlib/state.json in current directory, if it exists
/// 5. ~/.exlib-state.json (global default)
pub fn resolve_store_path(explicit: Option<&Path>, config: &LibraryConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = &config.store_path {
        return PathBuf::from(path);
    }

    if let Ok(env_path) = std::env::var(STORE_ENV_VAR) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    let cwd_store = PathBuf::from(".exlib/state.json");
    if cwd_store.exists() {
        return cwd_store;
    }

    default_store_path()
}

fn default_store_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());

    PathBuf::from(home).join(".exlib-state.json")
}

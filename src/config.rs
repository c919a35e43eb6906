//! Site configuration
//!
//! Read from environment variables, with defaults suited to running from the
//! repository root during local development.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::navigation::MenuModel;

pub const DOCS_DIR_ENV: &str = "IZE_DOCS_DIR";
pub const PAGES_DIR_ENV: &str = "IZE_PAGES_DIR";
pub const MENU_FILE_ENV: &str = "IZE_MENU_FILE";
pub const STATIC_DIR_ENV: &str = "IZE_STATIC_DIR";
pub const CACHE_TTL_ENV: &str = "IZE_CACHE_TTL_SECS";
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Markdown files listed in the see-also section.
    pub docs_dir: PathBuf,
    /// Markdown bodies of the static menu entries.
    pub pages_dir: PathBuf,
    /// Optional JSON menu replacing the built-in one.
    pub menu_file: Option<PathBuf>,
    /// Stylesheet and icons served under `/static`.
    pub static_dir: PathBuf,
    pub port: u16,
    pub cache_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            pages_dir: PathBuf::from("pages"),
            menu_file: None,
            static_dir: PathBuf::from("static"),
            port: DEFAULT_PORT,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            docs_dir: get(DOCS_DIR_ENV).map(PathBuf::from).unwrap_or(defaults.docs_dir),
            pages_dir: get(PAGES_DIR_ENV).map(PathBuf::from).unwrap_or(defaults.pages_dir),
            menu_file: get(MENU_FILE_ENV).map(PathBuf::from),
            static_dir: get(STATIC_DIR_ENV).map(PathBuf::from).unwrap_or(defaults.static_dir),
            port: get(PORT_ENV).and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
            cache_ttl: get(CACHE_TTL_ENV)
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        }
    }

    /// The configured menu, or the built-in ize menu.
    pub fn load_menu(&self) -> Result<MenuModel> {
        match &self.menu_file {
            Some(path) => MenuModel::load(path)
                .with_context(|| format!("Failed to load menu file: {:?}", path)),
            None => Ok(MenuModel::ize_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        SiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), SiteConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (DOCS_DIR_ENV, "/srv/docs"),
            (PORT_ENV, "8080"),
            (CACHE_TTL_ENV, "5"),
            (MENU_FILE_ENV, "menu.json"),
        ]);
        assert_eq!(config.docs_dir, PathBuf::from("/srv/docs"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
        assert_eq!(config.menu_file, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(config_from(&[(PORT_ENV, "http")]).port, DEFAULT_PORT);
    }

    #[test]
    fn test_blank_values_are_unset() {
        assert_eq!(config_from(&[(MENU_FILE_ENV, "  ")]).menu_file, None);
    }

    #[test]
    fn test_load_menu_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        std::fs::write(&path, r#"{"sections":[{"title":"start","entries":["welcome"]}]}"#).unwrap();
        let config = SiteConfig { menu_file: Some(path), ..SiteConfig::default() };
        let menu = config.load_menu().unwrap();
        assert_eq!(menu.sections()[0].title, "start");
    }

    #[test]
    fn test_load_menu_missing_file_errors() {
        let config = SiteConfig {
            menu_file: Some(PathBuf::from("/nonexistent/menu.json")),
            ..SiteConfig::default()
        };
        assert!(config.load_menu().is_err());
    }
}

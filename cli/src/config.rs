use std::path::{Path, PathBuf};

use landing::Language;
use renderer::{Catalog, CopyError, LinkConfig};
use serde::Deserialize;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_FILE: &str = "landing.toml";

/// Overrides `user_page_base_url` from the file.
pub const BASE_URL_ENV: &str = "LANDING_USER_PAGE_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings from `landing.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the user portal; login links point at `{base}/login`.
    pub user_page_base_url: Option<String>,
    pub language: Option<Language>,
    /// Root of the content store.
    pub content_dir: Option<PathBuf>,
    /// Extra message table merged over the built-in copy.
    pub copy_file: Option<PathBuf>,
}

impl Config {
    /// Load from `explicit` if given, else from `./landing.toml` if it exists,
    /// else defaults. The environment override is applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let config = match explicit {
            Some(path) => Config::read(path)?,
            None if Path::new(DEFAULT_FILE).is_file() => Config::read(Path::new(DEFAULT_FILE))?,
            None => Config::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Read a config file. Relative paths inside it are taken relative to the file.
    pub fn read(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Config::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    pub fn from_toml(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }

    fn relative_to(mut self, base: &Path) -> Config {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.content_dir = self.content_dir.map(anchor);
        self.copy_file = self.copy_file.map(anchor);
        self
    }

    /// Apply environment overrides, reading variables through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            self.user_page_base_url = Some(url);
        }
        self
    }

    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    pub fn content_dir(&self) -> PathBuf {
        self.content_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn links(&self) -> LinkConfig {
        LinkConfig::new(self.user_page_base_url.clone())
    }

    /// The built-in message table, with `copy_file` merged over it when set.
    pub fn catalog(&self) -> Result<Catalog, CopyError> {
        let mut catalog = Catalog::builtin()?;
        if let Some(path) = &self.copy_file {
            catalog.merge(Catalog::load(path)?);
        }
        Ok(catalog)
    }
}

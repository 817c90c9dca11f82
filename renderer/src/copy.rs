//! The message table shared by every render function.
//!
//! Entries are keyed by message id, then by language code:
//!
//! ```toml
//! ["history.title"]
//! en = "History"
//! ru = "История"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use landing::Language;
use serde::Deserialize;

const BUILTIN: &str = include_str!("../copy.toml");

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid message table{}: {source}", origin(.path))]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

fn origin(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl Catalog {
    /// The table compiled into the crate.
    pub fn builtin() -> Result<Self, CopyError> {
        Self::from_toml(BUILTIN)
    }

    pub fn from_toml(source: &str) -> Result<Self, CopyError> {
        toml::from_str(source).map_err(|source| CopyError::Parse { path: None, source })
    }

    pub fn load(path: &Path) -> Result<Self, CopyError> {
        let source = std::fs::read_to_string(path).map_err(|source| CopyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&source).map_err(|source| CopyError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Overlay `other` on top of this table, entry by entry.
    pub fn merge(&mut self, other: Catalog) {
        for (id, translations) in other.messages {
            self.messages.entry(id).or_default().extend(translations);
        }
    }

    /// Copy for `id` in `language`, falling back to English, then to the id itself.
    pub fn get<'a>(&'a self, language: Language, id: &'a str) -> &'a str {
        self.messages
            .get(id)
            .and_then(|translations| {
                translations
                    .get(language.code())
                    .or_else(|| translations.get(Language::En.code()))
            })
            .map(String::as_str)
            .unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

//! Data contracts with the content service, plus a directory-backed implementation.
//!
//! `FsStore` layout under its root:
//!
//! ```text
//! tenant.json
//! landing/{slug}.{lang}.json   (falls back to landing/{slug}.json)
//! pages/{slug}.json
//! audit/{slug}.json            (missing file = no history)
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::audit::AuditEvent;
use crate::language::Language;
use crate::page::PageContent;
use crate::parser::{LoadError, load_file};
use crate::tenant::Tenant;
use crate::LandingData;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid slug '{0}'")]
    InvalidSlug(String),
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot encode {what}: {source}")]
    Encode {
        what: &'static str,
        source: serde_json::Error,
    },
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read side of the content service.
pub trait ContentSource {
    fn draft_landing(&self, slug: &str, language: Language) -> Result<LandingData, StoreError>;
    fn page_content(&self, slug: &str) -> Result<PageContent, StoreError>;
    fn tenant(&self) -> Result<Tenant, StoreError>;
    fn audit_events(&self, slug: &str) -> Result<Vec<AuditEvent>, StoreError>;
}

/// Write side of the content service. Calls are fire-and-report: a failure is
/// returned to the caller once and never retried here.
pub trait ContentSink {
    fn save_page_content(&mut self, slug: &str, content: &PageContent) -> Result<(), StoreError>;
    fn save_landing_draft(
        &mut self,
        slug: &str,
        language: Language,
        data: &LandingData,
    ) -> Result<(), StoreError>;
    fn update_tenant(&mut self, tenant: &Tenant) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn landing_path(&self, slug: &str, language: Language) -> PathBuf {
        self.root
            .join("landing")
            .join(format!("{}.{}.json", slug, language))
    }

    fn read<T: DeserializeOwned>(&self, path: PathBuf) -> Result<T, StoreError> {
        if !path.is_file() {
            return Err(StoreError::NotFound(path));
        }
        debug!(path = %path.display(), "reading document");
        Ok(load_file(&path)?)
    }

    fn write<T: Serialize>(&self, path: PathBuf, what: &'static str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::Encode { what, source })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, json + "\n").map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "saved {}", what);
        Ok(())
    }
}

/// Slugs become file names; anything that could leave the store root is refused.
fn check_slug(slug: &str) -> Result<(), StoreError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidSlug(slug.to_string()))
    }
}

impl ContentSource for FsStore {
    fn draft_landing(&self, slug: &str, language: Language) -> Result<LandingData, StoreError> {
        check_slug(slug)?;
        let localized = self.landing_path(slug, language);
        if localized.is_file() {
            return self.read(localized);
        }
        debug!(slug, %language, "no localized draft, using the default one");
        self.read(self.root.join("landing").join(format!("{}.json", slug)))
    }

    fn page_content(&self, slug: &str) -> Result<PageContent, StoreError> {
        check_slug(slug)?;
        self.read(self.root.join("pages").join(format!("{}.json", slug)))
    }

    fn tenant(&self) -> Result<Tenant, StoreError> {
        self.read(self.root.join("tenant.json"))
    }

    fn audit_events(&self, slug: &str) -> Result<Vec<AuditEvent>, StoreError> {
        check_slug(slug)?;
        let path = self.root.join("audit").join(format!("{}.json", slug));
        if !path.is_file() {
            debug!(slug, "no audit log");
            return Ok(Vec::new());
        }
        self.read(path)
    }
}

impl ContentSink for FsStore {
    fn save_page_content(&mut self, slug: &str, content: &PageContent) -> Result<(), StoreError> {
        check_slug(slug)?;
        let path = self.root.join("pages").join(format!("{}.json", slug));
        self.write(path, "page content", content)
    }

    fn save_landing_draft(
        &mut self,
        slug: &str,
        language: Language,
        data: &LandingData,
    ) -> Result<(), StoreError> {
        check_slug(slug)?;
        let path = self.landing_path(slug, language);
        self.write(path, "landing draft", data)
    }

    fn update_tenant(&mut self, tenant: &Tenant) -> Result<(), StoreError> {
        let path = self.root.join("tenant.json");
        self.write(path, "tenant", tenant)
    }
}

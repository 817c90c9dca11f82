pub mod error;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub use error::ParseError;

use crate::LandingData;
use crate::audit::AuditEvent;
use crate::page::{NavProps, PageContent};
use crate::tenant::Tenant;

/// Failure to load a document from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid document '{}': {error}", path.display())]
    Parse {
        path: PathBuf,
        /// The document text, kept for diagnostic rendering.
        text: String,
        #[source]
        error: ParseError,
    },
}

/// Decoder entry point for persisted JSON documents.
pub struct Parser {
    source: String,
    file_id: usize,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.source)
            .map_err(|e| ParseError::from_json(&e, &self.source, self.file_id))
    }

    pub fn parse_landing(&self) -> Result<LandingData, ParseError> {
        self.parse()
    }

    pub fn parse_page(&self) -> Result<PageContent, ParseError> {
        self.parse()
    }

    pub fn parse_tenant(&self) -> Result<Tenant, ParseError> {
        self.parse()
    }

    pub fn parse_nav(&self) -> Result<NavProps, ParseError> {
        self.parse()
    }

    pub fn parse_audit(&self) -> Result<Vec<AuditEvent>, ParseError> {
        self.parse()
    }

    /// Warnings about a decoded landing page that still renders: unknown block
    /// kinds (which render nothing) and duplicate block ids.
    pub fn lint_landing(&self, data: &LandingData) -> Vec<ParseError> {
        let mut warnings = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, block) in data.blocks.iter().enumerate() {
            if !block.kind.is_known() {
                warnings.push(
                    ParseError::warning(
                        format!("unknown block type '{}' will not be rendered", block.kind),
                        self.file_id,
                    )
                    .with_note(format!("block #{} (id '{}')", index, block.id)),
                );
            }
            let first = *seen.entry(block.id.as_str()).or_insert(index);
            if first != index {
                warnings.push(
                    ParseError::warning(format!("duplicate block id '{}'", block.id), self.file_id)
                        .with_note(format!("first used by block #{}, again by block #{}", first, index)),
                );
            }
        }
        warnings
    }
}

/// Read and decode a JSON document from `path`.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parser = Parser::new(source, 0);
    parser.parse().map_err(|error| LoadError::Parse {
        path: path.to_path_buf(),
        text: parser.source,
        error,
    })
}

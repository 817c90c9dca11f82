use std::fmt;

use serde::{Deserialize, Serialize};

/// The discriminating type tag of a block.
/// Tags outside the known set load as `Unknown` so newer documents stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Hero,
    FeatureGrid,
    Paths,
    Logos,
    Gallery,
    Testimonials,
    Faq,
    ApplyForm,
    Footer,
    Custom,
    Unknown(String),
}

impl BlockKind {
    pub const KNOWN: [BlockKind; 10] = [
        BlockKind::Hero,
        BlockKind::FeatureGrid,
        BlockKind::Paths,
        BlockKind::Logos,
        BlockKind::Gallery,
        BlockKind::Testimonials,
        BlockKind::Faq,
        BlockKind::ApplyForm,
        BlockKind::Footer,
        BlockKind::Custom,
    ];

    /// The persisted tag.
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::FeatureGrid => "feature-grid",
            BlockKind::Paths => "paths",
            BlockKind::Logos => "logos",
            BlockKind::Gallery => "gallery",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Faq => "faq",
            BlockKind::ApplyForm => "apply-form",
            BlockKind::Footer => "footer",
            BlockKind::Custom => "custom",
            BlockKind::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Unknown(_))
    }
}

impl From<&str> for BlockKind {
    fn from(tag: &str) -> Self {
        BlockKind::KNOWN
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .unwrap_or_else(|| BlockKind::Unknown(tag.to_string()))
    }
}

impl From<String> for BlockKind {
    fn from(tag: String) -> Self {
        match BlockKind::from(tag.as_str()) {
            BlockKind::Unknown(_) => BlockKind::Unknown(tag),
            known => known,
        }
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod kind;
pub mod props;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub use crate::block::kind::BlockKind;
use crate::block::props::{
    ApplyFormProps, CustomProps, FaqProps, FeatureGridProps, FooterProps, GalleryProps, HeroProps,
    LogosProps, PathsProps, TestimonialsProps,
};

/// A typed, independently rendered unit of a landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Expected to be unique within a page, but not enforced.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Raw property bag. Kept untyped so unknown kinds and extra fields
    /// survive a load/save round trip; see [`Block::body`] for the typed view.
    /// `null` or any other non-object reads as an empty bag.
    #[serde(default, deserialize_with = "props_bag")]
    pub props: Map<String, Value>,
}

fn props_bag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Object(props) => Ok(props),
        _ => Ok(Map::new()),
    }
}

/// The typed view of a block: one variant per kind, with its decoded props.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    Hero(HeroProps),
    FeatureGrid(FeatureGridProps),
    Paths(PathsProps),
    Logos(LogosProps),
    Gallery(GalleryProps),
    Testimonials(TestimonialsProps),
    Faq(FaqProps),
    ApplyForm(ApplyFormProps),
    Footer(FooterProps),
    Custom(CustomProps),
    Unknown(String),
}

impl Block {
    pub fn new(id: impl Into<String>, kind: impl Into<BlockKind>) -> Self {
        Block {
            id: id.into(),
            kind: kind.into(),
            props: Map::new(),
        }
    }

    /// Builder-style property setter, mostly for tests and fixtures.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// The explicit anchor override, when `props.anchor` is a non-empty string.
    pub fn anchor_override(&self) -> Option<&str> {
        self.props
            .get("anchor")
            .and_then(Value::as_str)
            .filter(|anchor| !anchor.is_empty())
    }

    /// Decode the property bag into the record for this block's kind.
    pub fn body(&self) -> Result<BlockBody, serde_json::Error> {
        let body = match &self.kind {
            BlockKind::Hero => BlockBody::Hero(self.decode()?),
            BlockKind::FeatureGrid => BlockBody::FeatureGrid(self.decode()?),
            BlockKind::Paths => BlockBody::Paths(self.decode()?),
            BlockKind::Logos => BlockBody::Logos(self.decode()?),
            BlockKind::Gallery => BlockBody::Gallery(self.decode()?),
            BlockKind::Testimonials => BlockBody::Testimonials(self.decode()?),
            BlockKind::Faq => BlockBody::Faq(self.decode()?),
            BlockKind::ApplyForm => BlockBody::ApplyForm(self.decode()?),
            BlockKind::Footer => BlockBody::Footer(self.decode()?),
            BlockKind::Custom => BlockBody::Custom(self.decode()?),
            BlockKind::Unknown(tag) => BlockBody::Unknown(tag.clone()),
        };
        Ok(body)
    }

    fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.props.clone()))
    }
}

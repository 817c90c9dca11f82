pub mod audit;
pub mod block;
pub mod document;
pub mod language;
pub mod page;
pub mod parser;
pub mod store;
pub mod tenant;
pub mod theme;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::theme::ThemeTokens;

pub use crate::language::Language;

/// A persisted landing page: branding tokens plus the ordered block list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingData {
    /// Styling tokens, carried through to the page root without interpretation.
    #[serde(default, deserialize_with = "crate::block::props::lenient")]
    pub theme: ThemeTokens,
    /// Blocks in render order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

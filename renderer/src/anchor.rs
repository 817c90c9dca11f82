use landing::block::{Block, BlockKind};

/// Default in-page anchor for each block kind.
pub fn fallback_anchor(kind: &BlockKind) -> Option<&'static str> {
    let anchor = match kind {
        BlockKind::Hero => "hero",
        BlockKind::FeatureGrid => "about",
        BlockKind::Paths => "programs",
        BlockKind::Logos => "logos",
        BlockKind::Gallery => "gallery",
        BlockKind::Testimonials => "outcomes",
        BlockKind::Faq => "faq",
        BlockKind::ApplyForm => "contact",
        BlockKind::Footer => "footer",
        BlockKind::Custom => "section",
        BlockKind::Unknown(_) => return None,
    };
    Some(anchor)
}

/// The DOM anchor for a block: the explicit `props.anchor` if set, else the
/// kind's default, else the block id.
pub fn resolve_anchor(block: &Block) -> String {
    if let Some(anchor) = block.anchor_override() {
        return anchor.to_string();
    }
    fallback_anchor(&block.kind)
        .map(str::to_string)
        .unwrap_or_else(|| block.id.clone())
}

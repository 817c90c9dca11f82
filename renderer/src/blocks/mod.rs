//! Landing-page block dispatch.
//!
//! Each block kind maps to one rendering routine. Some blocks deliberately
//! render nothing: unknown kinds, FAQ blocks that are not the pricing
//! variant, lead forms without a tenant, and props that cannot be decoded.
//! Those are skipped silently (a `debug` trace only), never reported as errors.

mod conversion;
mod marketing;

use landing::LandingData;
use landing::block::{Block, BlockBody};
use landing::document::{Element, Node, el};
use landing::tenant::Tenant;
use landing::theme::ThemeTokens;
use tracing::debug;

use crate::anchor::resolve_anchor;
use crate::context::RenderContext;

/// Render the blocks in order, one fragment per renderable block.
pub fn render_blocks(ctx: &RenderContext<'_>, tenant: Option<&Tenant>, blocks: &[Block]) -> Vec<Node> {
    blocks
        .iter()
        .filter_map(|block| render_block(ctx, tenant, block))
        .collect()
}

/// Render a single block, or `None` when the block has no rendering.
pub fn render_block(ctx: &RenderContext<'_>, tenant: Option<&Tenant>, block: &Block) -> Option<Node> {
    let body = match block.body() {
        Ok(body) => body,
        Err(error) => {
            debug!(id = %block.id, kind = %block.kind, %error, "skipping block with undecodable props");
            return None;
        }
    };
    let anchor = resolve_anchor(block);
    let node = match body {
        BlockBody::Hero(props) => marketing::hero(ctx, tenant, &anchor, &props),
        BlockBody::FeatureGrid(props) => marketing::feature_grid(&anchor, &props),
        BlockBody::Paths(props) => marketing::paths(ctx, tenant, &anchor, &props),
        BlockBody::Logos(props) if props.is_brands() => marketing::brand_strip(&anchor, &props),
        BlockBody::Logos(props) => marketing::tool_grid(&anchor, &props),
        BlockBody::Gallery(props) => marketing::gallery(&anchor, &props),
        BlockBody::Testimonials(props) => marketing::testimonials(ctx, &anchor, &props),
        BlockBody::Faq(props) => {
            if !props.is_pricing() {
                debug!(id = %block.id, variant = ?props.variant, "faq block has no rendering for this variant");
                return None;
            }
            conversion::pricing(&anchor, &props)
        }
        BlockBody::ApplyForm(props) => {
            let Some(tenant) = tenant else {
                debug!(id = %block.id, "apply form needs a tenant");
                return None;
            };
            conversion::apply_form(ctx, tenant, &anchor, &props)
        }
        BlockBody::Footer(props) => conversion::footer(ctx, tenant, &anchor, &props),
        BlockBody::Custom(props) => marketing::custom(ctx, tenant, &anchor, &props),
        BlockBody::Unknown(kind) => {
            debug!(id = %block.id, %kind, "skipping block of unknown type");
            return None;
        }
    };
    Some(node)
}

/// Render a whole landing page: the block fragments inside a root that carries
/// the theme tokens as CSS custom properties.
pub fn render_landing(ctx: &RenderContext<'_>, tenant: Option<&Tenant>, data: &LandingData) -> Node {
    el("main")
        .class("landing")
        .attr("lang", ctx.language.code())
        .attr_opt("style", theme_style(&data.theme))
        .children(render_blocks(ctx, tenant, &data.blocks))
        .into()
}

fn theme_style(theme: &ThemeTokens) -> Option<String> {
    let tokens = [
        ("--color-primary", theme.primary.as_deref()),
        ("--color-secondary", theme.secondary.as_deref()),
        ("--color-background", theme.background.as_deref()),
        ("--color-text", theme.text.as_deref()),
        ("--font-display", theme.font_display.as_deref()),
        ("--font-body", theme.font_body.as_deref()),
        ("--radius", theme.radius.as_deref()),
        ("--spacing", theme.spacing.map(|s| s.as_str())),
    ];
    let style: String = tokens
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value.filter(|v| !v.is_empty())?;
            if !is_plain_css_value(value) {
                debug!(token = name, value, "dropping theme token that is not a plain CSS value");
                return None;
            }
            Some(format!("{}:{};", name, value))
        })
        .collect();
    (!style.is_empty()).then_some(style)
}

/// True when the value cannot end its own declaration or load a resource.
fn is_plain_css_value(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    !value.contains([';', '{', '}', '\\'])
        && !lower.contains("url(")
        && !lower.contains("expression(")
        && !lower.contains("@import")
}

/// Outer `<section>` shared by most blocks.
fn section(anchor: &str, kind: &str) -> Element {
    el("section").id(anchor).class("block").class(format!("block--{}", kind))
}

/// Eyebrow / title / description header, omitting whatever is missing.
fn heading(eyebrow: Option<&str>, title: Option<&str>, description: Option<&str>) -> Element {
    el("header")
        .class("block__header")
        .child_opt(eyebrow.map(|text| el("p").class("eyebrow").text(text)))
        .child_opt(title.map(|text| el("h2").class("block__title").text(text)))
        .child_opt(description.map(|text| el("p").class("block__description").text(text)))
}

fn image(src: Option<&str>, alt: Option<&str>) -> Option<Element> {
    src.filter(|s| !s.is_empty())
        .map(|src| el("img").attr("src", src).attr("alt", alt.unwrap_or_default()))
}

use landing::block::props::{
    Cta, CustomLayout, CustomProps, FeatureGridProps, GalleryProps, HeroProps, LogosProps,
    PathsProps, TestimonialsProps,
};
use landing::document::{Element, Node, el};
use landing::tenant::Tenant;

use super::{heading, image, section};
use crate::context::RenderContext;
use crate::link::resolve_href;

pub(super) fn hero(
    ctx: &RenderContext<'_>,
    tenant: Option<&Tenant>,
    anchor: &str,
    props: &HeroProps,
) -> Node {
    let title = (props.headline.is_some() || props.headline_accent.is_some()).then(|| {
        el("h1")
            .class("hero__headline")
            .child_opt(props.headline.as_deref().map(Node::text))
            .child(el("br"))
            .child_opt(
                props
                    .headline_accent
                    .as_deref()
                    .map(|accent| el("span").class("accent").text(accent)),
            )
    });

    let primary = props.primary_cta.as_ref().map(|cta| {
        let style = if cta.variant.as_deref() == Some("outline") {
            "button--outline"
        } else {
            "button--solid"
        };
        cta_button(ctx, tenant, cta, style)
    });
    let secondary = props
        .secondary_cta
        .as_ref()
        .map(|cta| cta_button(ctx, tenant, cta, "button--ghost"));

    let bullets = (!props.bullets.is_empty()).then(|| {
        el("ul").class("hero__bullets").children(
            props
                .bullets
                .iter()
                .map(|item| el("li").child(el("span").class("dot")).child(el("span").text(item))),
        )
    });

    let copy = el("div")
        .class("hero__copy")
        .child_opt(props.eyebrow.as_deref().map(|text| el("p").class("eyebrow").text(text)))
        .child_opt(title)
        .child_opt(props.subheadline.as_deref().map(|text| el("p").class("hero__lead").text(text)))
        .child(el("div").class("hero__actions").child_opt(primary).child_opt(secondary))
        .child_opt(bullets);

    let media = image(props.image.as_deref(), Some("Hero"))
        .map(|img| el("div").class("hero__media").child(img.class("hero__image")));

    section(anchor, "hero")
        .child(el("div").class("hero__grid").child(copy).child_opt(media))
        .into()
}

fn cta_button(ctx: &RenderContext<'_>, tenant: Option<&Tenant>, cta: &Cta, style: &str) -> Element {
    el("a")
        .class("button")
        .class(style)
        .attr("href", resolve_href(ctx.links, tenant, cta.href.as_deref()))
        .text(cta.label.as_deref().unwrap_or_default())
}

pub(super) fn feature_grid(anchor: &str, props: &FeatureGridProps) -> Node {
    let items = props.items.iter().map(|item| {
        el("div")
            .class("feature")
            .child(el("span").class("feature__marker").text("✳"))
            .child(
                el("div")
                    .child_opt(item.title.as_deref().map(|t| el("h3").text(t)))
                    .child_opt(item.body.as_deref().map(|b| el("p").text(b))),
            )
    });
    section(anchor, "feature-grid")
        .child(heading(
            props.eyebrow.as_deref(),
            props.title.as_deref(),
            props.description.as_deref(),
        ))
        .child(el("div").class("feature-grid").children(items))
        .into()
}

pub(super) fn paths(
    ctx: &RenderContext<'_>,
    tenant: Option<&Tenant>,
    anchor: &str,
    props: &PathsProps,
) -> Node {
    let block_href = props
        .cta
        .as_ref()
        .and_then(|cta| cta.href.as_deref())
        .filter(|href| !href.is_empty());

    let cards = props.items.iter().map(|item| {
        let target = item.href.as_deref().filter(|href| !href.is_empty()).or(block_href);
        el("article")
            .class("path-card")
            .child(
                el("div")
                    .class("path-card__media")
                    .child_opt(image(item.image.as_deref(), item.title.as_deref())),
            )
            .child(
                el("div")
                    .class("path-card__body")
                    .child_opt(item.title.as_deref().map(|t| el("h3").text(t)))
                    .child_opt(item.body.as_deref().map(|b| el("p").text(b)))
                    .child(
                        el("a")
                            .class("path-card__link")
                            .attr("href", resolve_href(ctx.links, tenant, target))
                            .child(el("span").text(ctx.t("blocks.explore")))
                            .child(el("span").text("->")),
                    ),
            )
    });

    let closing = props.cta.as_ref().map(|cta| {
        el("div").class("block__cta").child(
            el("a")
                .attr("href", resolve_href(ctx.links, tenant, cta.href.as_deref()))
                .text(cta.label.as_deref().unwrap_or_default())
                .child(el("span").text("->")),
        )
    });

    section(anchor, "paths")
        .child(heading(
            props.eyebrow.as_deref(),
            props.title.as_deref(),
            props.description.as_deref(),
        ))
        .child(el("div").class("path-grid").children(cards))
        .child_opt(closing)
        .into()
}

pub(super) fn brand_strip(anchor: &str, props: &LogosProps) -> Node {
    let names = props
        .logos
        .iter()
        .filter_map(|logo| logo.name.as_deref())
        .map(|name| el("span").class("brand").text(name));
    section(anchor, "logos")
        .class("logos--brands")
        .child_opt(props.title.as_deref().map(|t| el("p").class("logos__title").text(t)))
        .child(el("div").class("brand-strip").children(names))
        .into()
}

pub(super) fn tool_grid(anchor: &str, props: &LogosProps) -> Node {
    let badges = (!props.badges.is_empty()).then(|| {
        el("div")
            .class("badges")
            .children(props.badges.iter().map(|badge| el("span").class("badge").text(badge)))
    });
    let tiles = props.logos.iter().map(|logo| {
        el("div")
            .class("tool")
            .child_opt(image(logo.url.as_deref(), logo.name.as_deref()))
            .child_opt(logo.name.as_deref().map(|name| el("span").class("tool__name").text(name)))
    });
    section(anchor, "logos")
        .class("logos--tools")
        .child(
            el("div")
                .class("logos__intro")
                .child_opt(props.title.as_deref().map(|t| el("h2").text(t)))
                .child_opt(badges),
        )
        .child(el("div").class("tool-grid").children(tiles))
        .into()
}

pub(super) fn gallery(anchor: &str, props: &GalleryProps) -> Node {
    let figures = props.images.iter().enumerate().map(|(index, img)| {
        let figure = el("figure").class("gallery__item");
        // The middle card of the first row sits higher.
        let figure = if index == 1 {
            figure.class("gallery__item--offset")
        } else {
            figure
        };
        figure
            .child_opt(image(img.url.as_deref(), img.caption.as_deref()))
            .child_opt(img.caption.as_deref().map(|c| el("figcaption").text(c)))
    });
    section(anchor, "gallery")
        .child(heading(
            props.eyebrow.as_deref(),
            props.title.as_deref(),
            props.description.as_deref(),
        ))
        .child(el("div").class("gallery").children(figures))
        .into()
}

pub(super) fn testimonials(ctx: &RenderContext<'_>, anchor: &str, props: &TestimonialsProps) -> Node {
    // The list is laid out twice so the marquee can loop seamlessly.
    let cards = props.items.iter().chain(props.items.iter()).map(|item| {
        el("div")
            .class("testimonial")
            .child(
                el("div")
                    .class("testimonial__media")
                    .child_opt(image(item.image.as_deref(), item.name.as_deref()))
                    .child(el("span").class("testimonial__play").text("▶")),
            )
            .child(
                el("div")
                    .class("testimonial__person")
                    .child(
                        el("div")
                            .child_opt(item.name.as_deref().map(|n| el("p").class("testimonial__name").text(n)))
                            .child_opt(item.role.as_deref().map(|r| el("p").class("testimonial__role").text(r))),
                    )
                    .child_opt(image(item.image.as_deref(), item.name.as_deref()).map(|img| img.class("avatar"))),
            )
    });
    section(anchor, "testimonials")
        .child(heading(
            props.eyebrow.as_deref(),
            props.title.as_deref(),
            props.description.as_deref(),
        ))
        .child(el("div").class("marquee").children(cards))
        .child(
            el("div")
                .class("block__cta")
                .child(el("span").text("→"))
                .child(el("span").text(ctx.t("blocks.become_student"))),
        )
        .into()
}

pub(super) fn custom(
    ctx: &RenderContext<'_>,
    tenant: Option<&Tenant>,
    anchor: &str,
    props: &CustomProps,
) -> Node {
    let arrangement = props.arrangement();

    let cta = match (
        props.cta_label.as_deref().filter(|l| !l.is_empty()),
        props.cta_href.as_deref().filter(|h| !h.is_empty()),
    ) {
        (Some(label), Some(href)) => Some(
            el("a")
                .class("custom__cta")
                .attr("href", resolve_href(ctx.links, tenant, Some(href)))
                .text(label)
                .child(el("span").text("->")),
        ),
        _ => None,
    };

    let text = el("div")
        .class("custom__text")
        .child_opt(props.eyebrow.as_deref().map(|e| el("p").class("eyebrow").text(e)))
        .child_opt(props.title.as_deref().map(|t| el("h2").class("block__title").text(t)))
        .child_opt(props.body.as_deref().map(|b| el("p").text(b)))
        .child_opt(cta);

    let media = || {
        el("div").class("custom__media").child_opt(image(
            props.image.as_deref(),
            Some(props.title.as_deref().unwrap_or("Section")),
        ))
    };

    let root = section(anchor, "custom");
    let root = match arrangement {
        CustomLayout::TextOnly => root.class("custom--text-only").child(text),
        CustomLayout::ImageLeft => root.class("custom--image-left").child(media()).child(text),
        CustomLayout::ImageRight => root.class("custom--image-right").child(text).child(media()),
    };
    root.into()
}

use landing::document::{Element, Node, el};
use landing::page::{Card, PageContent, Section};

use super::{Hrefs, ordinal};
use crate::context::RenderContext;

/// Number of decorative carousel dots under the courses spotlight.
const SPOTLIGHT_DOTS: usize = 7;

pub(super) fn standard(ctx: &RenderContext<'_>, hrefs: Hrefs<'_>, page: &PageContent) -> Node {
    let hero = hero(ctx, hrefs, page);
    if page.sections.is_empty() {
        return hero.into();
    }

    let summary = page.sections.iter().take(3).enumerate().map(|(index, section)| {
        el("div")
            .class("structure__item")
            .child(el("span").class("ordinal").text(ordinal(index)))
            .child(
                el("div")
                    .child(el("p").class("structure__heading").text(&section.heading))
                    .child(el("p").text(&section.body)),
            )
    });
    let structure = el("section")
        .class("page-section")
        .class("structure")
        .child(
            el("div")
                .class("structure__intro")
                .child(el("p").class("eyebrow").text(ctx.t("page.structure_eyebrow")))
                .child(el("h2").text(ctx.t("page.structure_title")))
                .child(el("p").text(ctx.t("page.structure_body"))),
        )
        .child(el("div").class("structure__list").children(summary));

    let sections = page
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| feature_section(ctx, index, section));

    Node::Fragment(vec![
        hero.into(),
        el("div").class("page-sections").child(structure).children(sections).into(),
    ])
}

fn hero(ctx: &RenderContext<'_>, hrefs: Hrefs<'_>, page: &PageContent) -> Element {
    let media = match page.hero_image() {
        Some(url) => el("img").attr("src", url).attr("alt", page.title.as_str()),
        None => placeholder(ctx.t("page.hero_placeholder")),
    };
    el("section")
        .class("page-hero")
        .child(
            el("div")
                .class("page-hero__copy")
                .child_opt(eyebrow(page))
                .child(el("h1").text(&page.title))
                .child_opt(page.subtitle.as_deref().map(|s| el("p").class("page-hero__subtitle").text(s)))
                .child_opt(page.description.as_deref().map(|d| el("p").text(d)))
                .child_opt(cta(hrefs, page).map(|a| a.child(el("span").text("→")))),
        )
        .child(el("div").class("page-hero__media").child(media))
}

fn feature_section(ctx: &RenderContext<'_>, index: usize, section: &Section) -> Element {
    let orientation = if index % 2 == 1 {
        "page-section--reversed"
    } else {
        "page-section--forward"
    };
    let media = match section.image.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => el("div")
            .class("page-section__media")
            .child(el("img").attr("src", url).attr("alt", section.heading.as_str())),
        None => el("div").class("page-section__media").class("page-section__media--empty"),
    };
    el("section")
        .class("page-section")
        .class(orientation)
        .child(
            el("div")
                .class("page-section__copy")
                .child(
                    el("div")
                        .class("page-section__label")
                        .child(el("span").class("ordinal").text(ordinal(index)))
                        .child(el("span").text(ctx.t("page.focus"))),
                )
                .child(el("h2").text(&section.heading))
                .child(el("p").text(&section.body))
                .child(el("div").class("page-section__note").text(ctx.t("page.portfolio_output"))),
        )
        .child(media)
}

pub(super) fn team(ctx: &RenderContext<'_>, hrefs: Hrefs<'_>, page: &PageContent) -> Node {
    let benefits = page.bullets.iter().enumerate().map(|(index, item)| {
        el("li")
            .child(el("span").class("ordinal").text(ordinal(index)))
            .child(el("span").text(item))
    });
    let hero = el("section")
        .class("page-hero")
        .class("page-hero--team")
        .child(
            el("div")
                .class("page-hero__copy")
                .child_opt(eyebrow(page))
                .child(el("h1").text(&page.title))
                .child_opt(page.subtitle.as_deref().map(|s| el("p").class("page-hero__subtitle").text(s)))
                .child_opt(page.description.as_deref().map(|d| el("p").text(d)))
                .child(
                    el("div")
                        .class("page-hero__actions")
                        .child_opt(cta(hrefs, page).map(|a| a.child(el("span").text("→"))))
                        .child(el("span").class("badge").text(ctx.t("page.enterprise_ready"))),
                ),
        )
        .child(
            el("div")
                .class("benefits")
                .child(el("p").class("eyebrow").text(ctx.t("page.team_benefits")))
                .child(el("ul").children(benefits)),
        );

    let roster = if page.cards.is_empty() {
        page.hero_image().map(|url| {
            el("section")
                .class("page-section")
                .child(el("img").attr("src", url).attr("alt", page.title.as_str()))
        })
    } else {
        let members = page.cards.iter().map(|member| {
            let portrait = match member.image.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => el("img").attr("src", url).attr("alt", member.title.as_str()),
                None => placeholder(ctx.t("page.team_placeholder")),
            };
            el("div")
                .class("profile")
                .child(el("div").class("profile__portrait").child(portrait))
                .child(
                    el("div")
                        .child(el("p").class("profile__name").text(&member.title))
                        .child_opt(non_empty(&member.body).map(|b| el("p").class("profile__role").text(b))),
                )
        });
        Some(
            el("section")
                .class("page-section")
                .class("team")
                .child(
                    el("div")
                        .class("team__intro")
                        .child(el("p").class("eyebrow").text(ctx.t("page.team_eyebrow")))
                        .child(el("h2").text(ctx.t("page.team_title")))
                        .child(el("p").text(ctx.t("page.team_body"))),
                )
                .child(el("div").class("team__grid").children(members)),
        )
    };

    let mut nodes = vec![Node::from(hero)];
    nodes.extend(roster.map(Node::from));
    Node::Fragment(nodes)
}

pub(super) fn blog(ctx: &RenderContext<'_>, hrefs: Hrefs<'_>, page: &PageContent) -> Node {
    let featured = match page.hero_image() {
        Some(url) => el("img").attr("src", url).attr("alt", page.title.as_str()),
        None => placeholder(ctx.t("page.featured_placeholder")),
    };
    let hero = el("section")
        .class("page-hero")
        .class("page-hero--blog")
        .child(el("div").class("page-hero__media").child(featured))
        .child(
            el("div")
                .class("page-hero__copy")
                .child_opt(page.eyebrow.as_deref().map(|e| el("span").class("eyebrow").text(e)))
                .child(el("h1").text(&page.title))
                .child_opt(page.subtitle.as_deref().map(|s| el("p").class("page-hero__subtitle").text(s)))
                .child_opt(cta(hrefs, page)),
        );

    let posts = page
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| post(ctx, index, card));
    let list = el("section")
        .class("page-section")
        .class("posts")
        .child(
            el("div")
                .class("posts__header")
                .child(el("p").class("eyebrow").text(ctx.t("page.latest_stories")))
                .child(
                    el("span")
                        .class("posts__count")
                        .text(format!("{} {}", page.cards.len(), ctx.t("page.posts"))),
                ),
        )
        .child(el("div").class("posts__list").children(posts));

    Node::Fragment(vec![hero.into(), list.into()])
}

fn post(ctx: &RenderContext<'_>, index: usize, card: &Card) -> Element {
    el("article")
        .class("post")
        .child(el("div").class("post__number").text(ordinal(index)))
        .child(
            el("div")
                .class("post__body")
                .child(thumbnail(ctx, card))
                .child(
                    el("div")
                        .child_opt(card_tag(card))
                        .child(el("h3").text(&card.title))
                        .child(el("p").text(&card.body))
                        .child(
                            el("button")
                                .attr("type", "button")
                                .class("post__more")
                                .text(ctx.t("page.read_more")),
                        ),
                ),
        )
}

pub(super) fn courses(ctx: &RenderContext<'_>, hrefs: Hrefs<'_>, page: &PageContent) -> Node {
    let hero = el("section")
        .class("page-hero")
        .class("page-hero--courses")
        .child(
            el("div")
                .class("page-hero__copy")
                .child_opt(page.eyebrow.as_deref().map(|e| el("p").class("eyebrow").text(e)))
                .child(el("h1").text(&page.title))
                .child_opt(page.subtitle.as_deref().map(|s| el("p").class("page-hero__subtitle").text(s)))
                .child_opt(page.description.as_deref().map(|d| el("p").text(d))),
        );

    let featured = (!page.sections.is_empty()).then(|| {
        let items = page.sections.iter().enumerate().map(|(index, section)| {
            let media = match section.image.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => el("img").attr("src", url).attr("alt", section.heading.as_str()),
                None => el("div").class("placeholder"),
            };
            el("div")
                .class("featured")
                .child(el("div").class("featured__media").child(media))
                .child(
                    el("div")
                        .class("featured__copy")
                        .child(
                            el("div")
                                .class("featured__label")
                                .text(format!("{} {}", ctx.t("page.featured"), ordinal(index))),
                        )
                        .child(el("h3").text(&section.heading))
                        .child(el("p").text(&section.body)),
                )
        });
        el("section").class("page-section").class("featured-list").children(items)
    });

    let spotlight_media = match page.hero_image() {
        Some(url) => el("img").attr("src", url).attr("alt", page.title.as_str()),
        None => placeholder(ctx.t("page.featured_placeholder")),
    };
    let dots = (0..SPOTLIGHT_DOTS).map(|index| {
        let dot = el("span").class("dot");
        if index == 2 { dot.class("dot--active") } else { dot }
    });
    let spotlight = el("section")
        .class("page-section")
        .class("spotlight")
        .child(
            el("div")
                .class("spotlight__card")
                .child(
                    el("div")
                        .class("spotlight__copy")
                        .child(el("h2").text(ctx.t("page.spotlight_title")))
                        .child(el("p").text(ctx.t("page.spotlight_body")))
                        .child_opt(cta(hrefs, page)),
                )
                .child(el("div").class("spotlight__media").child(spotlight_media)),
        )
        .child(el("div").class("dots").children(dots));

    let filters: Vec<&str> = if page.bullets.is_empty() {
        vec![ctx.t("page.filter_format"), ctx.t("page.filter_tools")]
    } else {
        page.bullets.iter().map(String::as_str).collect()
    };
    let toolbar = el("section")
        .class("page-section")
        .class("filters")
        .child(
            el("div")
                .class("filters__chips")
                .child(el("span").text(ctx.t("page.filter_by")))
                .children(
                    filters
                        .into_iter()
                        .map(|filter| el("button").attr("type", "button").class("chip").text(filter)),
                )
                .child(
                    el("span")
                        .class("filters__count")
                        .text(format!("{} {}", page.cards.len(), ctx.t("page.results"))),
                ),
        )
        .child(el("button").attr("type", "button").class("filters__sort").text(ctx.t("page.sort_by")));

    let catalog = (!page.cards.is_empty()).then(|| {
        let items = page.cards.iter().enumerate().map(|(index, card)| {
            let meta = (!card.meta.is_empty()).then(|| {
                el("div")
                    .class("course__meta")
                    .children(card.meta.iter().map(|item| el("span").text(item)))
            });
            el("div")
                .class("course")
                .child(
                    el("div")
                        .class("course__head")
                        .child(
                            el("div")
                                .class("course__label")
                                .text(format!("{} {}", ctx.t("page.course"), ordinal(index))),
                        )
                        .child(thumbnail(ctx, card)),
                )
                .child(
                    el("div")
                        .class("course__body")
                        .child_opt(card_tag(card))
                        .child(el("h3").text(&card.title))
                        .child(el("p").text(&card.body))
                        .child_opt(meta),
                )
        });
        el("section").class("page-section").class("courses").children(items)
    });

    el("div")
        .class("courses-page")
        .child(hero)
        .child_opt(featured)
        .child(spotlight)
        .child(toolbar)
        .child_opt(catalog)
        .into()
}

fn eyebrow(page: &PageContent) -> Option<Element> {
    page.eyebrow
        .as_deref()
        .map(|text| el("p").class("eyebrow").text(text))
}

fn cta(hrefs: Hrefs<'_>, page: &PageContent) -> Option<Element> {
    page.cta.as_ref().map(|link| {
        el("a")
            .class("button")
            .class("button--solid")
            .attr("href", hrefs.resolve(&link.href))
            .text(&link.label)
    })
}

fn thumbnail(ctx: &RenderContext<'_>, card: &Card) -> Element {
    let inner = match card.image.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => el("img").attr("src", url).attr("alt", card.title.as_str()),
        None => placeholder(ctx.t("page.thumbnail")),
    };
    el("div").class("thumbnail").child(inner)
}

fn card_tag(card: &Card) -> Option<Element> {
    card.tag
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .map(|tag| el("span").class("tag").text(tag))
}

fn placeholder(label: &str) -> Element {
    el("div").class("placeholder").text(label)
}

fn non_empty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

//! Static (non-block) pages.
//!
//! A page is rendered by exactly one layout builder, chosen by the page's
//! `layout`, between an optional navigation bar and the shared page footer.

mod layouts;

use landing::document::{Element, Node, el};
use landing::page::{Layout, Link, NavProps, PageContent};
use landing::tenant::Tenant;

use crate::context::{LinkConfig, RenderContext};
use crate::link::resolve_page_href;

/// Footer links used when the page has no navigation descriptor,
/// as (message id, target) pairs.
const DEFAULT_NAV: [(&str, &str); 6] = [
    ("nav.home", "/"),
    ("nav.all_access", "/all-access"),
    ("nav.community", "/community"),
    ("nav.about", "/about-us"),
    ("nav.blog", "/blog"),
    ("nav.contact", "/#contact"),
];

const SOCIALS: [&str; 5] = ["Facebook", "Twitter", "Instagram", "LinkedIn", "YouTube"];

/// Page-link resolution bound to one tenant.
#[derive(Clone, Copy)]
struct Hrefs<'a> {
    config: &'a LinkConfig,
    tenant: &'a Tenant,
}

impl Hrefs<'_> {
    fn resolve(&self, href: &str) -> String {
        resolve_page_href(self.config, self.tenant, Some(href))
    }
}

/// Render a static page for `tenant`. `nav`, when present, adds the
/// navigation bar and supplies the footer links.
pub fn render_page(
    ctx: &RenderContext<'_>,
    tenant: &Tenant,
    nav: Option<&NavProps>,
    page: &PageContent,
) -> Node {
    let hrefs = Hrefs {
        config: ctx.links,
        tenant,
    };
    let body = match page.layout {
        Layout::Standard => layouts::standard(ctx, hrefs, page),
        Layout::Team => layouts::team(ctx, hrefs, page),
        Layout::Blog => layouts::blog(ctx, hrefs, page),
        Layout::Courses => layouts::courses(ctx, hrefs, page),
    };
    el("div")
        .class("page")
        .class(format!("page--{}", page.layout))
        .attr("lang", ctx.language.code())
        .child_opt(nav.map(|nav| nav_bar(hrefs, nav)))
        .child(body)
        .child(page_footer(ctx, hrefs, nav))
        .into()
}

fn nav_bar(hrefs: Hrefs<'_>, nav: &NavProps) -> Element {
    let brand = nav
        .brand
        .as_deref()
        .filter(|b| !b.is_empty())
        .unwrap_or(hrefs.tenant.name.as_str());

    let announcement = nav.announcement.as_ref().filter(|a| !a.text.is_empty()).map(|a| {
        el("div")
            .class("announcement")
            .child(el("span").text(&a.text))
            .child_opt((!a.cta.is_empty()).then(|| {
                el("a").attr("href", hrefs.resolve(&a.href)).text(&a.cta)
            }))
    });

    let links = nav
        .links
        .iter()
        .map(|link| el("li").child(anchor(hrefs, link)));

    let cta = nav.cta.as_ref().map(|cta| {
        let style = match cta.variant.as_deref() {
            Some("outline") => "button--outline",
            _ => "button--solid",
        };
        el("a")
            .class("button")
            .class(style)
            .attr("href", hrefs.resolve(&cta.href))
            .text(&cta.label)
    });
    let secondary = nav
        .secondary_cta
        .as_ref()
        .map(|link| anchor(hrefs, link).class("button").class("button--ghost"));

    el("header")
        .class("nav")
        .child_opt(announcement)
        .child(
            el("nav")
                .class("nav__bar")
                .child(el("a").class("nav__brand").attr("href", hrefs.resolve("/")).text(brand))
                .child(el("ul").class("nav__links").children(links))
                .child(el("div").class("nav__actions").child_opt(secondary).child_opt(cta)),
        )
}

fn anchor(hrefs: Hrefs<'_>, link: &Link) -> Element {
    el("a").attr("href", hrefs.resolve(&link.href)).text(&link.label)
}

fn page_footer(ctx: &RenderContext<'_>, hrefs: Hrefs<'_>, nav: Option<&NavProps>) -> Element {
    let links: Vec<Element> = match nav.filter(|nav| !nav.links.is_empty()) {
        Some(nav) => nav.links.iter().map(|link| anchor(hrefs, link)).collect(),
        None => DEFAULT_NAV
            .iter()
            .map(|&(id, href)| el("a").attr("href", hrefs.resolve(href)).text(ctx.t(id)))
            .collect(),
    };
    let tenant = hrefs.tenant;
    let brand = el("div")
        .class("footer__brand")
        .child_opt(
            tenant
                .logo_url()
                .map(|url| el("img").class("logo").attr("src", url).attr("alt", tenant.name.as_str())),
        )
        .child(el("span").text(&tenant.name));

    el("footer")
        .class("page-footer")
        .child(
            el("div")
                .class("footer__top")
                .child(brand)
                .child(
                    el("div")
                        .class("footer__newsletter")
                        .child(el("h3").text(ctx.t("footer.newsletter_title")))
                        .child(el("p").text(ctx.t("footer.newsletter_body")))
                        .child(
                            el("div")
                                .class("subscribe")
                                .child(el("input").attr("placeholder", ctx.t("blocks.email_label")))
                                .child(el("button").class("button").text(ctx.t("blocks.subscribe"))),
                        ),
                )
                .child(
                    el("div")
                        .class("footer__column")
                        .child(el("h4").text(ctx.t("blocks.navigation")))
                        .child(el("ul").children(links.into_iter().map(|link| el("li").child(link)))),
                )
                .child(
                    el("div")
                        .class("footer__column")
                        .child(el("h4").text(ctx.t("blocks.socials")))
                        .child(el("ul").children(
                            SOCIALS.iter().map(|name| {
                                el("li")
                                    .class("social")
                                    .child(el("span").class("icon").class("icon--letter").text(&name[..1]))
                                    .child(el("span").text(*name))
                            }),
                        )),
                ),
        )
        .child(
            el("div")
                .class("footer__bottom")
                .child(el("span").text(ctx.t("footer.copyright")))
                .child(el("span").text(ctx.t("footer.legal"))),
        )
}

/// Two-digit ordinal label: `01`, `02`, ...
fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

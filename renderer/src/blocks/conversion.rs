use landing::block::props::{ApplyFormProps, FaqProps, FooterProps, LinkColumn};
use landing::document::{Element, Node, el};
use landing::tenant::Tenant;

use super::{heading, image, section};
use crate::context::RenderContext;

const PLAN_ICONS: [&str; 4] = ["grid", "bag", "diamond", "home"];

pub(super) fn pricing(anchor: &str, props: &FaqProps) -> Node {
    let plans = props.items.iter().enumerate().map(|(index, plan)| {
        let icon = PLAN_ICONS[index % PLAN_ICONS.len()];
        let price = el("div")
            .class("plan__price")
            .child_opt(plan.price.as_deref().map(|p| el("span").class("plan__amount").text(p)))
            .child_opt(
                plan.billing
                    .as_deref()
                    .map(|b| el("span").class("plan__billing").text(format!("/{}", b))),
            );
        let features = el("ul").class("plan__features").children(plan.features.iter().map(|feature| {
            el("li")
                .child(el("span").class("check").text("✓"))
                .child(el("span").text(feature))
        }));
        el("article")
            .class("plan")
            .child(
                el("div")
                    .class("plan__head")
                    .child(el("span").class("plan__icon").class(format!("plan__icon--{}", icon)))
                    .child_opt(plan.title.as_deref().map(|t| el("h3").text(t))),
            )
            .child(price)
            .child(features)
            .child_opt(
                plan.cta
                    .as_deref()
                    .map(|label| el("button").attr("type", "button").class("button").text(label)),
            )
    });
    section(anchor, "faq")
        .class("pricing")
        .child(heading(props.eyebrow.as_deref(), props.title.as_deref(), None))
        .child(el("div").class("plans").children(plans))
        .into()
}

pub(super) fn apply_form(
    ctx: &RenderContext<'_>,
    tenant: &Tenant,
    anchor: &str,
    props: &ApplyFormProps,
) -> Node {
    let title = props
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| ctx.t("blocks.apply_title"));
    let email_label = props
        .fields
        .as_ref()
        .and_then(|fields| fields.email.as_deref())
        .unwrap_or_else(|| ctx.t("blocks.email_label"));
    let submit = props
        .submit_label
        .as_deref()
        .unwrap_or_else(|| ctx.t("blocks.apply_submit"));

    let form = el("form")
        .class("apply-form")
        .attr("method", "post")
        .child(hidden("tenantId", &tenant.id))
        .child(hidden("slug", ctx.slug))
        .child(
            el("label")
                .class("field")
                .child(el("span").text(email_label))
                .child(el("input").attr("type", "email").attr("name", "email").attr("required", "")),
        )
        .child(
            el("label")
                .class("field")
                .child(el("span").text(ctx.t("blocks.apply_message_label")))
                .child(
                    el("textarea")
                        .attr("name", "message")
                        .attr("rows", "4")
                        .attr("placeholder", ctx.t("blocks.apply_message_placeholder")),
                ),
        )
        .child(el("button").attr("type", "submit").class("button").class("button--solid").text(submit));

    section(anchor, "apply-form")
        .child(
            el("div")
                .class("apply__intro")
                .child_opt(props.eyebrow.as_deref().map(|e| el("p").class("eyebrow").text(e)))
                .child(accented_title(title))
                .child_opt(props.description.as_deref().map(|d| el("p").class("block__description").text(d))),
        )
        .child(form)
        .into()
}

/// `<h2>` with the final word highlighted, when there is more than one word.
fn accented_title(title: &str) -> Element {
    let heading = el("h2").class("block__title");
    match title.rsplit_once(' ') {
        Some((lead, last)) if !lead.is_empty() => heading
            .text(format!("{} ", lead))
            .child(el("span").class("accent").text(last)),
        _ => heading.text(title),
    }
}

fn hidden(name: &str, value: &str) -> Element {
    el("input")
        .attr("type", "hidden")
        .attr("name", name.to_string())
        .attr("value", value)
}

pub(super) fn footer(
    ctx: &RenderContext<'_>,
    tenant: Option<&Tenant>,
    anchor: &str,
    props: &FooterProps,
) -> Node {
    let brand_name = tenant
        .map(|t| t.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ctx.t("blocks.default_brand"));
    let brand = el("div")
        .class("footer__brand")
        .child_opt(image(tenant.and_then(Tenant::logo_url), Some(brand_name)).map(|img| img.class("logo")))
        .child(el("span").text(brand_name));

    let newsletter = el("div")
        .class("footer__newsletter")
        .child_opt(props.newsletter_title.as_deref().map(|t| el("h3").text(t)))
        .child_opt(props.newsletter_body.as_deref().map(|b| el("p").text(b)))
        .child(
            el("form")
                .class("subscribe")
                .child(
                    el("input")
                        .attr("type", "email")
                        .attr("placeholder", ctx.t("blocks.email_label")),
                )
                .child(el("button").attr("type", "submit").class("button").text(ctx.t("blocks.subscribe"))),
        );

    let navigation = props.columns.first().map(|column| {
        link_column(column, ctx.t("blocks.navigation"), |link| {
            el("a").attr("href", "#").text(link).into()
        })
    });
    let socials = props.socials.as_ref().map(|column| {
        link_column(column, ctx.t("blocks.socials"), |name| {
            el("span")
                .class("social")
                .child(social_icon(name))
                .child(el("span").text(name))
                .into()
        })
    });

    let bottom = (props.note.is_some() || props.legal.is_some()).then(|| {
        el("div")
            .class("footer__bottom")
            .child_opt(props.note.as_deref().map(|n| el("span").text(n)))
            .child_opt(props.legal.as_deref().map(|l| el("span").text(l)))
    });

    el("footer")
        .id(anchor)
        .class("block")
        .class("block--footer")
        .child(
            el("div")
                .class("footer__top")
                .child(brand)
                .child(newsletter)
                .child(el("div").class("footer__columns").child_opt(navigation).child_opt(socials)),
        )
        .child_opt(bottom)
        .into()
}

fn link_column(column: &LinkColumn, default_title: &str, item: impl Fn(&str) -> Node) -> Element {
    let title = column
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(default_title);
    el("div")
        .class("footer__column")
        .child(el("h4").text(title))
        .child(
            el("ul").children(
                column
                    .links
                    .iter()
                    .map(|link| el("li").child(item(link.as_str()))),
            ),
        )
}

fn social_icon(name: &str) -> Element {
    let lower = name.to_lowercase();
    let icon = ["facebook", "twitter", "instagram", "linkedin", "youtube"]
        .into_iter()
        .find(|network| lower.contains(network))
        .or_else(|| (lower == "x").then_some("twitter"));
    match icon {
        Some(network) => el("span").class("icon").class(format!("icon--{}", network)),
        None => el("span")
            .class("icon")
            .class("icon--letter")
            .text(name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()),
    }
}

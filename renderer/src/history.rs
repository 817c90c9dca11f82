//! Change history of a landing page, as recorded by the audit service.

use chrono::DateTime;
use landing::audit::{AuditEvent, Change};
use landing::document::{Element, Node, el};
use serde_json::Value;

use crate::context::RenderContext;

/// Changes shown per event; the rest are left out.
pub const MAX_CHANGES: usize = 6;

pub fn render_history(ctx: &RenderContext<'_>, events: &[AuditEvent]) -> Node {
    let header = el("header")
        .class("history__header")
        .child(el("p").class("eyebrow").text(ctx.t("history.label")))
        .child(el("h1").text(ctx.t("history.title")))
        .child(el("p").text(ctx.t("history.subtitle")));

    let body = if events.is_empty() {
        el("p").class("history__empty").text(ctx.t("history.empty"))
    } else {
        el("div")
            .class("history__list")
            .children(events.iter().map(|event| event_card(ctx, event)))
    };

    el("section").class("history").child(header).child(body).into()
}

fn event_card(ctx: &RenderContext<'_>, event: &AuditEvent) -> Element {
    let changes = (!event.changes.is_empty()).then(|| {
        el("ul")
            .class("history__changes")
            .children(event.changes.iter().take(MAX_CHANGES).map(change_row))
    });
    el("article")
        .class("history__event")
        .child(
            el("div")
                .class("history__meta")
                .child(el("span").class("history__action").text(&event.action))
                .child(
                    el("time")
                        .attr("datetime", event.created_at.as_str())
                        .text(format_timestamp(&event.created_at)),
                ),
        )
        .child(
            el("p")
                .class("history__actor")
                .text(event.actor_email().unwrap_or_else(|| ctx.t("history.system"))),
        )
        .child_opt(changes)
}

fn change_row(change: &Change) -> Element {
    let diff = (change.before.is_some() || change.after.is_some()).then(|| {
        el("span").class("history__diff").text(format!(
            "{} → {}",
            compact(change.before.as_ref()),
            compact(change.after.as_ref())
        ))
    });
    el("li")
        .child(el("span").class("history__field").text(&change.label))
        .child_opt(diff)
}

/// Compact JSON for one side of a change; empty when the side is missing.
fn compact(value: Option<&Value>) -> String {
    value.map(Value::to_string).unwrap_or_default()
}

/// `2024-03-05T14:07:00Z` becomes `2024-03-05 14:07 UTC`; anything that is
/// not RFC 3339 is shown as sent.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.naive_utc().format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

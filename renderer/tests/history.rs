use landing::Language;
use landing::audit::AuditEvent;
use landing::parser::Parser;
use renderer::history::{MAX_CHANGES, format_timestamp};
use renderer::{Catalog, LinkConfig, RenderContext, render_history};

fn events(source: &str) -> Vec<AuditEvent> {
    Parser::new(source.to_string(), 0).parse_audit().unwrap()
}

fn render(language: Language, events: &[AuditEvent]) -> String {
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog).with_language(language);
    render_history(&ctx, events).to_string()
}

#[test]
fn empty_history_shows_the_localized_message() {
    assert!(render(Language::En, &[]).contains("No history yet."));
    let ru = render(Language::Ru, &[]);
    assert!(ru.contains("История"));
    assert!(ru.contains("Истории пока нет."));
}

#[test]
fn timestamps_are_shown_in_utc() {
    assert_eq!(format_timestamp("2024-03-05T14:07:30Z"), "2024-03-05 14:07 UTC");
    assert_eq!(format_timestamp("2024-03-05T16:07:30+02:00"), "2024-03-05 14:07 UTC");
    assert_eq!(format_timestamp("yesterday"), "yesterday");
}

#[test]
fn events_show_actor_and_changes() {
    let list = events(
        r#"[
            {"_id": "e1", "action": "landing.publish", "createdAt": "2024-03-05T14:07:00Z",
             "actor": {"email": "ops@acme.test"},
             "changes": [{"label": "headline", "before": "Old", "after": "New"},
                         {"label": "bullets", "after": ["a", 1]},
                         {"label": "touched"}]},
            {"_id": "e2", "action": "landing.draft", "createdAt": "not a date"}
        ]"#,
    );
    let html = render(Language::En, &list);
    assert!(html.contains("landing.publish"));
    assert!(html.contains("2024-03-05 14:07 UTC"));
    assert!(html.contains("ops@acme.test"));
    assert!(html.contains("&quot;Old&quot; → &quot;New&quot;"));
    assert!(html.contains(" → [&quot;a&quot;,1]"));
    assert!(html.contains(">not a date</time>"));
    // No actor: the system label.
    assert!(html.contains(">system</p>"));
    // A change with neither side shows its label only.
    assert!(html.contains("<li><span class=\"history__field\">touched</span></li>"));
}

#[test]
fn only_the_first_changes_are_listed() {
    let changes: Vec<_> = (0..MAX_CHANGES + 2)
        .map(|i| format!(r#"{{"label": "field{}", "after": {}}}"#, i, i))
        .collect();
    let source = format!(
        r#"[{{"_id": "e1", "action": "save", "createdAt": "2024-01-01T00:00:00Z", "changes": [{}]}}]"#,
        changes.join(",")
    );
    let html = render(Language::En, &events(&source));
    assert_eq!(html.matches("history__field").count(), MAX_CHANGES);
    assert!(html.contains("field5"));
    assert!(!html.contains("field6"));
}

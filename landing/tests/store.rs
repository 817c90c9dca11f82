use std::fs;

use landing::audit::AuditEvent;
use landing::block::Block;
use landing::page::{Layout, PageContent};
use landing::parser::LoadError;
use landing::store::{ContentSink, ContentSource, FsStore, StoreError};
use landing::tenant::Tenant;
use landing::{LandingData, Language};

fn landing_with(id: &str) -> LandingData {
    LandingData {
        blocks: vec![Block::new(id, "hero").with_prop("headline", "Hi")],
        ..LandingData::default()
    }
}

#[test]
fn saved_drafts_are_read_back_per_language() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut store = FsStore::new(dir.path());

    store
        .save_landing_draft("home", Language::Ru, &landing_with("ru-hero"))
        .unwrap();
    assert!(dir.path().join("landing/home.ru.json").is_file());

    let loaded = store.draft_landing("home", Language::Ru).unwrap();
    assert_eq!(loaded, landing_with("ru-hero"));
}

#[test]
fn draft_falls_back_to_unlocalized_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::create_dir_all(dir.path().join("landing")).unwrap();
    fs::write(
        dir.path().join("landing/home.json"),
        r#"{"blocks": [{"id": "base", "type": "footer"}]}"#,
    )
    .unwrap();

    let store = FsStore::new(dir.path());
    let loaded = store.draft_landing("home", Language::Tj).unwrap();
    assert_eq!(loaded.blocks[0].id, "base");
}

#[test]
fn page_and_tenant_round_trip() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut store = FsStore::new(dir.path());

    let page = PageContent::new(Layout::Team, "Teams");
    store.save_page_content("team-training", &page).unwrap();
    assert_eq!(store.page_content("team-training").unwrap(), page);

    let tenant = Tenant::new("t1", "acme", "Acme");
    store.update_tenant(&tenant).unwrap();
    let raw = fs::read_to_string(dir.path().join("tenant.json")).unwrap();
    assert!(raw.contains("\"_id\": \"t1\""));
    assert_eq!(store.tenant().unwrap(), tenant);
}

#[test]
fn missing_audit_log_is_empty_history() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = FsStore::new(dir.path());
    assert!(store.audit_events("home").unwrap().is_empty());

    fs::create_dir_all(dir.path().join("audit")).unwrap();
    fs::write(
        dir.path().join("audit/home.json"),
        r#"[{"_id": "e1", "action": "publish", "createdAt": "2026-01-02T10:00:00Z",
             "changes": [{"label": "title", "before": "a", "after": "b"}]}]"#,
    )
    .unwrap();
    let events: Vec<AuditEvent> = store.audit_events("home").unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].actor_email(), None);
    assert_eq!(events[0].changes[0].after, Some(serde_json::json!("b")));
}

#[test]
fn missing_documents_are_not_found() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = FsStore::new(dir.path());
    assert!(matches!(store.tenant(), Err(StoreError::NotFound(_))));
    assert!(matches!(
        store.page_content("blog"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn slugs_cannot_escape_the_root() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut store = FsStore::new(dir.path());
    for slug in ["../etc", "a/b", "", "home.json"] {
        assert!(matches!(
            store.page_content(slug),
            Err(StoreError::InvalidSlug(_))
        ));
        assert!(matches!(
            store.save_page_content(slug, &PageContent::default()),
            Err(StoreError::InvalidSlug(_))
        ));
    }
}

#[test]
fn corrupt_documents_report_parse_errors() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::create_dir_all(dir.path().join("pages")).unwrap();
    fs::write(dir.path().join("pages/blog.json"), "{\"layout\": }").unwrap();

    let store = FsStore::new(dir.path());
    match store.page_content("blog") {
        Err(StoreError::Load(LoadError::Parse { text, error, .. })) => {
            assert_eq!(text, "{\"layout\": }");
            assert!(error.span.is_some());
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

use landing::block::Block;
use landing::page::{Card, Layout, PageContent};
use landing::store::{ContentSink, ContentSource, FsStore};
use landing::tenant::Tenant;
use landing::{LandingData, Language};
use renderer::{Catalog, LinkConfig, RenderContext, render_history, render_landing, render_page};
use serde_json::json;

#[test]
fn saved_content_renders_from_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsStore::new(dir.path());

    store.update_tenant(&Tenant::new("t1", "acme", "Acme Academy")).unwrap();
    let draft = LandingData {
        theme: Default::default(),
        blocks: vec![
            Block::new("h", "hero")
                .with_prop("headline", "Ship it")
                .with_prop("primaryCta", json!({"label": "Start", "href": "/start"})),
            Block::new("q", "faq"),
            Block::new("a", "apply-form"),
        ],
    };
    store.save_landing_draft("home", Language::Ru, &draft).unwrap();
    let mut page = PageContent::new(Layout::Blog, "Journal");
    page.cards = vec![Card::new("A", "b"), Card::new("C", "d")];
    store.save_page_content("blog", &page).unwrap();

    let tenant = store.tenant().unwrap();
    let links = LinkConfig::new(Some("https://learn.acme.test".into()));
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog)
        .with_language(Language::Ru)
        .with_slug("home");

    let landing = store.draft_landing("home", Language::Ru).unwrap();
    let node = render_landing(&ctx, Some(&tenant), &landing);
    let sections: Vec<_> = node
        .find_by_tag("section")
        .into_iter()
        .filter_map(|s| s.get_attr("id"))
        .collect();
    assert_eq!(sections, ["hero", "contact"]);
    assert!(node.to_string().contains(r#"href="/acme/start""#));

    let blog = store.page_content("blog").unwrap();
    let node = render_page(&ctx, &tenant, None, &blog);
    assert_eq!(node.find_by_class("post").len(), 2);

    let audit = store.audit_events("home").unwrap();
    assert!(render_history(&ctx, &audit).to_string().contains("Истории пока нет."));
}

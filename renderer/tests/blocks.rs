use landing::LandingData;
use landing::block::Block;
use landing::document::Node;
use landing::parser::Parser;
use landing::tenant::{Asset, Tenant};
use renderer::{Catalog, LinkConfig, RenderContext, render_block, render_blocks, render_landing};
use serde_json::json;

fn acme() -> Tenant {
    Tenant::new("t1", "acme", "Acme Academy")
}

fn render(tenant: Option<&Tenant>, blocks: &[Block]) -> Vec<Node> {
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog).with_slug("spring");
    render_blocks(&ctx, tenant, blocks)
}

fn render_one(tenant: Option<&Tenant>, block: Block) -> Node {
    let mut nodes = render(tenant, &[block]);
    assert_eq!(nodes.len(), 1, "expected one fragment");
    nodes.remove(0)
}

fn root_id(node: &Node) -> Option<&str> {
    node.as_element().and_then(|e| e.get_attr("id"))
}

#[test]
fn non_pricing_faq_renders_nothing() {
    let faq = Block::new("f1", "faq").with_prop("variant", "accordion");
    assert!(render(Some(&acme()), &[faq]).is_empty());
    let bare = Block::new("f2", "faq");
    assert!(render(Some(&acme()), &[bare]).is_empty());
}

#[test]
fn apply_form_needs_a_tenant() {
    let form = Block::new("a1", "apply-form");
    assert!(render(None, &[form.clone()]).is_empty());
    assert_eq!(render(Some(&acme()), &[form]).len(), 1);
}

#[test]
fn unknown_blocks_are_skipped_in_order() {
    let blocks = [
        Block::new("h", "hero").with_prop("headline", "Hi"),
        Block::new("v", "video"),
        Block::new("g", "gallery"),
    ];
    let nodes = render(Some(&acme()), &blocks);
    let ids: Vec<_> = nodes.iter().filter_map(root_id).collect();
    assert_eq!(ids, ["hero", "gallery"]);
}

#[test]
fn fragment_roots_carry_the_resolved_anchor() {
    let blocks = [
        Block::new("h", "hero"),
        Block::new("f", "feature-grid").with_prop("anchor", "why-us"),
        Block::new("p", "paths"),
        Block::new("l", "logos"),
        Block::new("t", "testimonials"),
        Block::new("q", "faq").with_prop("variant", "pricing"),
        Block::new("a", "apply-form"),
        Block::new("ft", "footer"),
        Block::new("c", "custom"),
    ];
    let nodes = render(Some(&acme()), &blocks);
    let ids: Vec<_> = nodes.iter().filter_map(root_id).collect();
    assert_eq!(
        ids,
        ["hero", "why-us", "programs", "logos", "outcomes", "faq", "contact", "footer", "section"]
    );
}

#[test]
fn hero_omits_missing_fields() {
    let node = render_one(Some(&acme()), Block::new("h", "hero").with_prop("headline", "Design"));
    assert!(node.find_by_class("eyebrow").is_empty());
    assert!(node.find_by_tag("img").is_empty());
    assert!(node.find_by_class("hero__bullets").is_empty());
    assert_eq!(node.find_by_tag("h1")[0].text_content(), "Design");
}

#[test]
fn hero_buttons_follow_variant_and_tenant() {
    let block = Block::new("h", "hero")
        .with_prop("eyebrow", "New cohort")
        .with_prop("headlineAccent", "faster")
        .with_prop("primaryCta", json!({"label": "Apply", "href": "/apply", "variant": "outline"}))
        .with_prop("secondaryCta", json!({"label": "Log in", "href": "/login"}))
        .with_prop("bullets", json!(["Live critiques", "Mentors"]))
        .with_prop("image", "https://cdn.test/hero.png");
    let node = render_one(Some(&acme()), block);

    let primary = node.find_by_class("button--outline");
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0].get_attr("href"), Some("/acme/apply"));
    let secondary = node.find_by_class("button--ghost");
    assert_eq!(secondary[0].get_attr("href"), Some("/portal/login"));
    assert_eq!(node.find_by_class("accent")[0].text_content(), "faster");
    assert_eq!(node.find_by_tag("li").len(), 2);
    assert_eq!(node.find_by_tag("img")[0].get_attr("src"), Some("https://cdn.test/hero.png"));
}

#[test]
fn paths_fall_back_to_the_block_cta() {
    let block = Block::new("p", "paths")
        .with_prop("cta", json!({"label": "All programs", "href": "/programs"}))
        .with_prop(
            "items",
            json!([
                {"title": "UX", "href": "/ux"},
                {"title": "Motion"},
            ]),
        );
    let node = render_one(Some(&acme()), block);
    let links: Vec<_> = node
        .find_by_class("path-card__link")
        .into_iter()
        .filter_map(|a| a.get_attr("href"))
        .collect();
    assert_eq!(links, ["/acme/ux", "/acme/programs"]);
    assert!(node.to_string().contains("Explore"));
    assert_eq!(node.find_by_class("block__cta").len(), 1);
}

#[test]
fn logos_variant_picks_the_layout() {
    let logos = json!([{"name": "Figma", "url": "https://cdn.test/figma.svg"}]);
    let brands = render_one(
        None,
        Block::new("l", "logos")
            .with_prop("variant", "brands")
            .with_prop("logos", logos.clone()),
    );
    assert_eq!(brands.find_by_class("brand").len(), 1);
    assert!(brands.find_by_tag("img").is_empty());

    let tools = render_one(None, Block::new("l", "logos").with_prop("logos", logos));
    assert_eq!(tools.find_by_class("tool").len(), 1);
    assert_eq!(tools.find_by_tag("img").len(), 1);
}

#[test]
fn gallery_offsets_the_second_card() {
    let block = Block::new("g", "gallery").with_prop(
        "images",
        json!([{"url": "a.png"}, {"url": "b.png"}, {"url": "c.png"}]),
    );
    let node = render_one(None, block);
    let items = node.find_by_class("gallery__item");
    assert_eq!(items.len(), 3);
    let offset: Vec<_> = items
        .iter()
        .map(|item| item.has_class("gallery__item--offset"))
        .collect();
    assert_eq!(offset, [false, true, false]);
}

#[test]
fn testimonials_repeat_for_the_marquee() {
    let block = Block::new("t", "testimonials")
        .with_prop("items", json!([{"name": "Dana"}, {"name": "Lee", "role": "Designer"}]));
    let node = render_one(None, block);
    assert_eq!(node.find_by_class("testimonial").len(), 4);
    assert!(node.text_content().ends_with("→Become a student"));
}

#[test]
fn pricing_plans_cycle_icons() {
    let plans: Vec<_> = (0..5)
        .map(|i| json!({"title": format!("Plan {}", i), "price": "$10", "billing": "month", "features": ["A", "B"], "cta": "Buy"}))
        .collect();
    let block = Block::new("q", "faq")
        .with_prop("variant", "pricing")
        .with_prop("items", plans);
    let node = render_one(None, block);
    assert_eq!(node.find_by_class("plan").len(), 5);
    assert_eq!(node.find_by_class("plan__icon--grid").len(), 2);
    assert_eq!(node.find_by_class("plan__icon--home").len(), 1);
    assert_eq!(node.find_by_class("plan__billing")[0].text_content(), "/month");
    assert_eq!(node.find_by_class("check").len(), 10);
}

#[test]
fn apply_form_carries_tenant_and_slug() {
    let node = render_one(Some(&acme()), Block::new("a", "apply-form"));
    let hidden: Vec<_> = node
        .find_by_tag("input")
        .into_iter()
        .filter(|input| input.get_attr("type") == Some("hidden"))
        .map(|input| (input.get_attr("name"), input.get_attr("value")))
        .collect();
    assert_eq!(
        hidden,
        [(Some("tenantId"), Some("t1")), (Some("slug"), Some("spring"))]
    );
    // Default title, last word accented.
    assert_eq!(node.find_by_tag("h2")[0].text_content(), "Not sure where to start?");
    assert_eq!(node.find_by_class("accent")[0].text_content(), "start?");
    let html = node.to_string();
    assert!(html.contains("Email address"));
    assert!(html.contains(">Send</button>"));
}

#[test]
fn apply_form_single_word_title_has_no_accent() {
    let block = Block::new("a", "apply-form")
        .with_prop("title", "Apply")
        .with_prop("submitLabel", "Go")
        .with_prop("fields", json!({"email": "Work email"}));
    let node = render_one(Some(&acme()), block);
    assert!(node.find_by_class("accent").is_empty());
    let html = node.to_string();
    assert!(html.contains("Work email"));
    assert!(html.contains(">Go</button>"));
}

#[test]
fn footer_uses_tenant_branding_and_social_icons() {
    let mut tenant = acme();
    tenant.logo = Some(Asset {
        url: Some("https://cdn.test/logo.png".to_string()),
    });
    let block = Block::new("ft", "footer")
        .with_prop(
            "columns",
            json!([{"links": ["Home", "Blog"]}, {"title": "Ignored", "links": ["x"]}]),
        )
        .with_prop("socials", json!({"links": ["Facebook", "X", "Dribbble"]}))
        .with_prop("legal", "Terms");
    let node = render_one(Some(&tenant), block);

    assert_eq!(node.as_element().map(|e| e.tag), Some("footer"));
    assert!(node.find_by_class("footer__brand")[0].text_content().contains("Acme Academy"));
    assert_eq!(node.find_by_class("logo")[0].get_attr("src"), Some("https://cdn.test/logo.png"));

    let columns = node.find_by_class("footer__column");
    assert_eq!(columns.len(), 2);
    assert!(columns[0].text_content().starts_with("Navigation"));
    assert!(columns[1].text_content().starts_with("Socials"));
    assert!(!node.to_string().contains("Ignored"));

    assert_eq!(node.find_by_class("icon--facebook").len(), 1);
    assert_eq!(node.find_by_class("icon--twitter").len(), 1);
    assert_eq!(node.find_by_class("icon--letter")[0].text_content(), "D");
}

#[test]
fn footer_without_tenant_uses_default_brand() {
    let node = render_one(None, Block::new("ft", "footer"));
    assert_eq!(node.find_by_class("footer__brand")[0].text_content(), "Brooklyn LMS");
    assert!(node.find_by_class("footer__bottom").is_empty());
}

#[test]
fn custom_cta_needs_label_and_href() {
    let half = Block::new("c", "custom").with_prop("ctaLabel", "Read");
    assert!(render_one(None, half).find_by_class("custom__cta").is_empty());

    let full = Block::new("c", "custom")
        .with_prop("ctaLabel", "Read")
        .with_prop("ctaHref", "/story");
    let node = render_one(Some(&acme()), full);
    assert_eq!(node.find_by_class("custom__cta")[0].get_attr("href"), Some("/acme/story"));
}

#[test]
fn custom_layout_orders_media_and_text() {
    let order = |layout: Option<&str>| {
        let mut block = Block::new("c", "custom").with_prop("image", "x.png");
        if let Some(layout) = layout {
            block = block.with_prop("layout", layout);
        }
        let node = render_one(None, block);
        let root = node.as_element().unwrap().clone();
        root.children
            .iter()
            .filter_map(|child| child.as_element())
            .filter_map(|child| child.get_attr("class").map(str::to_string))
            .collect::<Vec<_>>()
    };
    assert_eq!(order(None), ["custom__text", "custom__media"]);
    assert_eq!(order(Some("image-left")), ["custom__media", "custom__text"]);
    assert_eq!(order(Some("text-only")), ["custom__text"]);
}

#[test]
fn malformed_fields_do_not_drop_the_block() {
    let block = Block::new("f", "feature-grid")
        .with_prop("title", "Why")
        .with_prop("items", "not a list");
    let node = render_one(None, block);
    assert!(node.find_by_class("feature").is_empty());
    assert_eq!(node.find_by_class("block__title")[0].text_content(), "Why");
}

#[test]
fn single_block_entry_point_matches_the_list() {
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog);
    let block = Block::new("g", "gallery");
    assert_eq!(
        render_block(&ctx, None, &block),
        render_blocks(&ctx, None, std::slice::from_ref(&block)).pop()
    );
    assert_eq!(render_block(&ctx, None, &Block::new("v", "video")), None);
}

#[test]
fn landing_root_carries_language_and_theme() {
    let data: LandingData = Parser::new(
        r##"{
            "theme": {"primary": "#ff5500", "fontDisplay": "Inter", "spacing": "compact"},
            "blocks": [{"id": "h", "type": "hero", "props": {"headline": "<b>Hi</b>"}}]
        }"##
        .to_string(),
        0,
    )
    .parse_landing()
    .unwrap();
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog).with_language(landing::Language::Ru);
    let html = render_landing(&ctx, Some(&acme()), &data).to_string();

    assert!(html.starts_with(
        r#"<main class="landing" lang="ru" style="--color-primary:#ff5500;--font-display:Inter;--spacing:compact;">"#
    ));
    assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
    assert!(html.ends_with("</main>"));
}

#[test]
fn landing_without_theme_has_no_style() {
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog);
    let node = render_landing(&ctx, None, &LandingData::default());
    assert_eq!(node.to_string(), r#"<main class="landing" lang="en"></main>"#);
}

#[test]
fn null_props_block_is_skipped_alone() {
    let data: LandingData = Parser::new(
        r#"{"blocks": [
            {"id": "h", "type": "hero", "props": {"headline": "Hi"}},
            {"id": "f", "type": "faq", "props": null}
        ]}"#
        .to_string(),
        0,
    )
    .parse_landing()
    .unwrap();
    let nodes = render(Some(&acme()), &data.blocks);
    assert_eq!(nodes.len(), 1);
    assert_eq!(root_id(&nodes[0]), Some("hero"));
}

#[test]
fn theme_values_cannot_inject_declarations() {
    let data: LandingData = Parser::new(
        r##"{"theme": {
            "primary": "red;background:url(//evil.test/x.png)",
            "secondary": "#00aa00",
            "background": "URL(//evil.test)",
            "text": "}body{color:red",
            "fontDisplay": "'Playfair Display', serif"
        }}"##
        .to_string(),
        0,
    )
    .parse_landing()
    .unwrap();
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog);
    let node = render_landing(&ctx, None, &data);
    assert_eq!(
        node.as_element().and_then(|e| e.get_attr("style")),
        Some("--color-secondary:#00aa00;--font-display:'Playfair Display', serif;")
    );
}

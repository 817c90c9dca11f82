use landing::document::Node;
use landing::page::{Announcement, Card, Layout, Link, NavCta, NavProps, PageContent, Section};
use landing::tenant::Tenant;
use renderer::{Catalog, LinkConfig, RenderContext, render_page};

fn acme() -> Tenant {
    Tenant::new("t1", "acme", "Acme Academy")
}

fn render(nav: Option<&NavProps>, page: &PageContent) -> Node {
    let links = LinkConfig::default();
    let catalog = Catalog::builtin().unwrap();
    let ctx = RenderContext::new(&links, &catalog);
    render_page(&ctx, &acme(), nav, page)
}

fn section(heading: &str) -> Section {
    Section {
        heading: heading.to_string(),
        body: format!("{} body", heading),
        image: None,
    }
}

fn hrefs(node: &Node, class: &str) -> Vec<String> {
    node.find_by_class(class)
        .into_iter()
        .flat_map(|column| {
            Node::from(column.clone())
                .find_by_tag("a")
                .into_iter()
                .filter_map(|a| a.get_attr("href").map(str::to_string))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn blog_numbers_its_posts() {
    let mut page = PageContent::new(Layout::Blog, "Journal");
    page.cards = vec![Card::new("A", "b")];
    let node = render(None, &page);

    let posts = node.find_by_class("post");
    assert_eq!(posts.len(), 1);
    let number = Node::from(posts[0].clone()).find_by_class("post__number")[0].text_content();
    assert_eq!(number, "01");
    assert_eq!(node.find_by_class("posts__count")[0].text_content(), "1 posts");
    // No hero image: the placeholder stands in.
    assert!(node.to_string().contains("Add a featured image"));
}

#[test]
fn standard_without_sections_is_hero_only() {
    let page = PageContent::new(Layout::Standard, "Programs");
    let node = render(None, &page);
    assert_eq!(node.find_by_class("page-hero").len(), 1);
    assert!(node.find_by_class("page-section").is_empty());
    assert!(node.to_string().contains("Upload a hero image"));
}

#[test]
fn standard_summarises_three_sections_and_alternates() {
    let mut page = PageContent::new(Layout::Standard, "Programs");
    page.sections = ["One", "Two", "Three", "Four"].map(section).to_vec();
    let node = render(None, &page);

    let summary: Vec<_> = node
        .find_by_class("structure__item")
        .into_iter()
        .map(|item| item.text_content())
        .collect();
    assert_eq!(summary, ["01OneOne body", "02TwoTwo body", "03ThreeThree body"]);

    let reversed: Vec<_> = node
        .find_by_class("page-section")
        .into_iter()
        .filter(|s| !s.has_class("structure"))
        .map(|s| s.has_class("page-section--reversed"))
        .collect();
    assert_eq!(reversed, [false, true, false, true]);
}

#[test]
fn team_falls_back_to_the_hero_image() {
    let mut page = PageContent::new(Layout::Team, "Team");
    page.bullets = vec!["Mentors".into(), "Reviews".into()];
    page.hero_image = Some("https://cdn.test/team.jpg".into());
    let node = render(None, &page);

    assert!(node.find_by_class("team").is_empty());
    let images = node.find_by_tag("img");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].get_attr("src"), Some("https://cdn.test/team.jpg"));
    let ordinals: Vec<_> = node
        .find_by_class("ordinal")
        .into_iter()
        .map(|o| o.text_content())
        .collect();
    assert_eq!(ordinals, ["01", "02"]);

    page.hero_image = Some(String::new());
    let node = render(None, &page);
    assert!(node.find_by_tag("img").is_empty());
}

#[test]
fn team_cards_become_profiles() {
    let mut page = PageContent::new(Layout::Team, "Team");
    page.cards = vec![Card::new("Dana", "Mentor"), Card::new("Lee", "")];
    let node = render(None, &page);
    assert_eq!(node.find_by_class("profile").len(), 2);
    assert_eq!(node.find_by_class("profile__role").len(), 1);
    assert_eq!(node.find_by_class("placeholder").len(), 2);
}

#[test]
fn courses_show_featured_filters_and_catalog() {
    let mut page = PageContent::new(Layout::Courses, "Courses");
    page.sections = vec![section("Motion")];
    let mut card = Card::new("UX Animation", "Learn motion");
    card.tag = Some("New".into());
    card.meta = vec!["6 weeks".into(), "Beginner".into()];
    page.cards = vec![card, Card::new("Branding", "Logos")];
    page.cta = Some(Link::new("Enroll", "/apply"));
    let node = render(None, &page);

    assert_eq!(node.find_by_class("featured__label")[0].text_content(), "Featured 01");
    let chips: Vec<_> = node
        .find_by_class("chip")
        .into_iter()
        .map(|c| c.text_content())
        .collect();
    assert_eq!(chips, ["Format", "Tools"]);
    assert_eq!(node.find_by_class("filters__count")[0].text_content(), "2 Results");
    assert_eq!(node.find_by_class("dot").len(), 7);
    assert_eq!(node.find_by_class("dot--active").len(), 1);

    let labels: Vec<_> = node
        .find_by_class("course__label")
        .into_iter()
        .map(|l| l.text_content())
        .collect();
    assert_eq!(labels, ["Course 01", "Course 02"]);
    assert_eq!(node.find_by_class("tag").len(), 1);
    assert_eq!(node.find_by_class("course__meta").len(), 1);

    let spotlight = node.find_by_class("spotlight")[0].clone();
    let cta = Node::from(spotlight).find_by_tag("a")[0].get_attr("href").map(str::to_string);
    assert_eq!(cta.as_deref(), Some("/acme/apply"));
}

#[test]
fn courses_filters_come_from_bullets() {
    let mut page = PageContent::new(Layout::Courses, "Courses");
    page.bullets = vec!["Design".into()];
    let node = render(None, &page);
    let chips: Vec<_> = node
        .find_by_class("chip")
        .into_iter()
        .map(|c| c.text_content())
        .collect();
    assert_eq!(chips, ["Design"]);
    assert!(node.find_by_class("courses").is_empty());
    assert!(node.find_by_class("featured-list").is_empty());
}

#[test]
fn footer_defaults_to_the_standard_links() {
    let node = render(None, &PageContent::new(Layout::Blog, "Blog"));
    let footer = node.find_by_class("page-footer");
    assert_eq!(footer.len(), 1);
    assert_eq!(
        hrefs(&node, "page-footer"),
        [
            "/acme",
            "/acme/all-access",
            "/acme/community",
            "/acme/about-us",
            "/acme/blog",
            "/acme/home#contact",
        ]
    );
    assert!(footer[0].text_content().contains("Contact Us"));
    assert!(node.find_by_class("nav").is_empty());
}

#[test]
fn nav_bar_and_footer_follow_the_descriptor() {
    let nav = NavProps {
        brand: None,
        links: vec![Link::new("Pricing", "/pricing"), Link::new("Docs", "https://docs.test")],
        cta: Some(NavCta {
            label: "Sign in".into(),
            href: "/login".into(),
            variant: Some("outline".into()),
        }),
        secondary_cta: None,
        announcement: Some(Announcement {
            text: "Spring cohort".into(),
            cta: "Join".into(),
            href: "/#contact".into(),
        }),
    };
    let node = render(Some(&nav), &PageContent::new(Layout::Standard, "Home"));

    assert_eq!(node.find_by_class("nav__brand")[0].text_content(), "Acme Academy");
    assert_eq!(node.find_by_class("nav__brand")[0].get_attr("href"), Some("/acme"));
    assert_eq!(node.find_by_class("button--outline")[0].get_attr("href"), Some("/portal/login"));
    assert_eq!(
        hrefs(&node, "announcement"),
        ["/acme/home#contact"]
    );
    assert_eq!(hrefs(&node, "nav__links"), ["/acme/pricing", "https://docs.test"]);
    assert_eq!(
        hrefs(&node, "page-footer"),
        ["/acme/pricing", "https://docs.test"]
    );
}

#[test]
fn every_layout_renders_once_with_a_footer() {
    for layout in Layout::ALL {
        let node = render(None, &PageContent::new(layout, "T"));
        let root = node.as_element().unwrap();
        assert!(root.has_class(&format!("page--{}", layout)));
        assert_eq!(node.find_by_class("page-footer").len(), 1);
        assert_eq!(node.find_by_tag("h1").len(), 1, "{}", layout);
    }
}
